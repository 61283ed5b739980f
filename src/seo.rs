//! Head metadata derivation. Articles can override their SEO fields through
//! the `meta` object; everything else falls back to the document's own
//! title, excerpt, and featured image.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::models::News;
use crate::render::{html_attr_escape, html_escape};

#[derive(Debug, Clone)]
pub struct PageMeta {
    pub title: String,
    pub description: Option<String>,
    pub keywords: Option<String>,
    pub og_image: Option<String>,
    pub published: Option<DateTime<Utc>>,
    pub author: Option<String>,
}

impl PageMeta {
    pub fn site(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: Some(description.into()),
            keywords: None,
            og_image: None,
            published: None,
            author: None,
        }
    }

    pub fn for_news(news: &News) -> Self {
        let meta = news.meta.as_ref();
        let title = meta
            .and_then(|m| m.title.clone())
            .unwrap_or_else(|| news.title.clone());
        let description = meta
            .and_then(|m| m.description.clone())
            .or_else(|| news.excerpt.clone());
        let og_image = meta
            .and_then(|m| m.og_image.as_ref())
            .and_then(|image| image.url())
            .or_else(|| news.featured_image_url())
            .map(str::to_string);

        Self {
            title,
            description,
            keywords: meta.and_then(|m| m.keywords.clone()),
            og_image,
            published: Some(news.published_date),
            author: news.author.clone(),
        }
    }

    /// The `<title>` plus description/keywords, Open Graph, and Twitter
    /// card tags for this page.
    pub fn head_html(&self) -> String {
        let mut head = String::new();
        head.push_str(&format!("<title>{}</title>", html_escape(&self.title)));
        head.push_str(&format!(
            r#"<meta property="og:title" content="{}">"#,
            html_attr_escape(&self.title)
        ));
        if let Some(description) = &self.description {
            head.push_str(&format!(
                r#"<meta name="description" content="{}">"#,
                html_attr_escape(description)
            ));
            head.push_str(&format!(
                r#"<meta property="og:description" content="{}">"#,
                html_attr_escape(description)
            ));
        }
        if let Some(keywords) = &self.keywords {
            head.push_str(&format!(
                r#"<meta name="keywords" content="{}">"#,
                html_attr_escape(keywords)
            ));
        }

        let og_type = if self.published.is_some() {
            "article"
        } else {
            "website"
        };
        head.push_str(&format!(r#"<meta property="og:type" content="{og_type}">"#));

        if let Some(published) = &self.published {
            head.push_str(&format!(
                r#"<meta property="article:published_time" content="{}">"#,
                published.to_rfc3339_opts(SecondsFormat::Secs, true)
            ));
        }
        if let Some(author) = &self.author {
            head.push_str(&format!(
                r#"<meta property="article:author" content="{}">"#,
                html_attr_escape(author)
            ));
        }

        if let Some(image) = &self.og_image {
            head.push_str(&format!(
                r#"<meta property="og:image" content="{}">"#,
                html_attr_escape(image)
            ));
            head.push_str(r#"<meta name="twitter:card" content="summary_large_image">"#);
            head.push_str(&format!(
                r#"<meta name="twitter:image" content="{}">"#,
                html_attr_escape(image)
            ));
        } else {
            head.push_str(r#"<meta name="twitter:card" content="summary">"#);
        }
        head.push_str(&format!(
            r#"<meta name="twitter:title" content="{}">"#,
            html_attr_escape(&self.title)
        ));
        if let Some(description) = &self.description {
            head.push_str(&format!(
                r#"<meta name="twitter:description" content="{}">"#,
                html_attr_escape(description)
            ));
        }

        head
    }
}
