use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use chrono::{DateTime, Utc};
use tracing::error;

use crate::{
    error::ClientError,
    models::{Color, News},
    render::{html_attr_escape, html_escape, render_blocks},
    seo::PageMeta,
    state::AppState,
};

/// An upstream fetch failure surfacing from a handler. Not recovered
/// locally; the visitor gets a generic error page.
pub struct PageError(ClientError);

impl From<ClientError> for PageError {
    fn from(err: ClientError) -> Self {
        Self(err)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        error!("Upstream fetch failed: {}", self.0);
        let meta = PageMeta::site("Something went wrong", "The news service is temporarily unavailable.");
        let body = r#"<main class="error-page"><h1>Something went wrong</h1><p>The news service is temporarily unavailable. Please try again later.</p></main>"#;
        (StatusCode::BAD_GATEWAY, Html(page_shell(&meta, body))).into_response()
    }
}

/// Fixed en-US date rendering from the UTC timestamp, e.g. "June 1, 2025".
/// Formatting stays in UTC so the day never shifts with the server's zone.
pub(crate) fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Representative category for a summary card: first expertise if any,
/// else first industry, else none.
pub(crate) fn primary_category(news: &News) -> Option<(&str, Color)> {
    news.expertises
        .first()
        .map(|e| (e.name.as_str(), e.color))
        .or_else(|| news.industries.first().map(|i| (i.name.as_str(), i.color)))
}

fn page_shell(meta: &PageMeta, body: &str) -> String {
    format!(
        concat!(
            "<!doctype html><html lang=\"en\"><head>",
            "<meta charset=\"utf-8\">",
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">",
            "{head}</head><body>{body}</body></html>"
        ),
        head = meta.head_html(),
        body = body
    )
}

fn category_chip(name: &str, color: Color) -> String {
    format!(
        r#"<span class="news-category" style="background-color: {}">{}</span>"#,
        color.hex(),
        html_escape(name)
    )
}

pub async fn landing() -> Html<String> {
    let meta = PageMeta::site("Newsroom", "A news site backed by a hosted content studio");
    let body = concat!(
        r#"<main class="landing">"#,
        "<h1>Newsroom</h1>",
        "<p>News and updates, fresh from the studio.</p>",
        r#"<nav><a href="/news">View News</a> <a href="/studio">Manage Content</a></nav>"#,
        "</main>"
    );
    Html(page_shell(&meta, body))
}

pub async fn news_list(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let news = state.source.published_news().await?;

    let mut body = String::new();
    body.push_str(r#"<div class="news-container"><header class="news-header">"#);
    body.push_str(r#"<a class="back-link" href="/">&larr; Back to Home</a>"#);
    body.push_str("<h1>Latest News</h1><p>Explore our recent articles and updates</p></header>");

    if news.is_empty() {
        body.push_str(concat!(
            r#"<div class="news-empty-state">"#,
            "<p>No published news yet.</p>",
            r#"<p class="news-empty-hint">Check back soon for updates!</p>"#,
            "</div>"
        ));
    } else {
        body.push_str(r#"<div class="news-grid">"#);
        for item in &news {
            body.push_str(&news_card(item));
        }
        body.push_str("</div>");
    }
    body.push_str("</div>");

    let meta = PageMeta::site("Latest News", "Explore our recent articles and updates");
    Ok(Html(page_shell(&meta, &body)))
}

fn news_card(news: &News) -> String {
    let mut card = format!(
        r#"<a class="news-card" href="/news/{}">"#,
        html_attr_escape(&urlencoding::encode(&news.slug.current))
    );

    if let Some(image) = &news.featured_image {
        if let Some(asset) = &image.asset {
            let alt = image.alt.as_deref().unwrap_or(&news.title);
            card.push_str(&format!(
                r#"<div class="news-card-image"><img src="{}" alt="{}"></div>"#,
                html_attr_escape(&asset.sized_url(800, 450)),
                html_attr_escape(alt)
            ));
        }
    }

    card.push_str(r#"<div class="news-card-content">"#);
    if let Some((name, color)) = primary_category(news) {
        card.push_str(&category_chip(name, color));
    }
    card.push_str(&format!("<h2>{}</h2>", html_escape(&news.title)));
    if let Some(excerpt) = &news.excerpt {
        card.push_str(&format!(
            r#"<p class="news-card-excerpt">{}</p>"#,
            html_escape(excerpt)
        ));
    }
    card.push_str(&format!(
        r#"<div class="news-card-meta"><span class="news-card-date">{}</span>"#,
        format_date(&news.published_date)
    ));
    if let Some(minutes) = news.reading_time {
        card.push_str(&format!(
            r#"<span class="news-card-reading-time">&bull; {minutes} min read</span>"#
        ));
    }
    card.push_str("</div>");
    if let Some(author) = &news.author {
        card.push_str(&format!(
            r#"<p class="news-card-author">By {}</p>"#,
            html_escape(author)
        ));
    }
    card.push_str("</div></a>");
    card
}

pub async fn news_detail(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Response, PageError> {
    match state.source.news_by_slug(&slug).await? {
        Some(news) => Ok(Html(detail_page(&news)).into_response()),
        None => Ok(not_found_page()),
    }
}

fn detail_page(news: &News) -> String {
    let mut body = String::new();
    body.push_str(r#"<div class="news-detail-container">"#);
    body.push_str(r#"<a class="news-detail-back" href="/news">&larr; Back to All News</a>"#);
    body.push_str("<article>");

    if let Some(image) = &news.featured_image {
        if let Some(asset) = &image.asset {
            let alt = image.alt.as_deref().unwrap_or(&news.title);
            body.push_str(&format!(
                r#"<div class="news-detail-image"><img src="{}" alt="{}"></div>"#,
                html_attr_escape(&asset.sized_url(1200, 630)),
                html_attr_escape(alt)
            ));
        }
    }

    body.push_str(r#"<div class="news-detail-wrapper">"#);

    if !news.expertises.is_empty() || !news.industries.is_empty() {
        body.push_str(r#"<div class="news-detail-categories">"#);
        for expertise in &news.expertises {
            body.push_str(&category_chip(&expertise.name, expertise.color));
        }
        for industry in &news.industries {
            body.push_str(&category_chip(&industry.name, industry.color));
        }
        body.push_str("</div>");
    }

    body.push_str(&format!("<h1>{}</h1>", html_escape(&news.title)));
    if let Some(excerpt) = &news.excerpt {
        body.push_str(&format!(
            r#"<p class="news-detail-excerpt">{}</p>"#,
            html_escape(excerpt)
        ));
    }

    body.push_str(r#"<div class="news-detail-meta">"#);
    if let Some(author) = &news.author {
        body.push_str(&format!("<span>By {}</span> ", html_escape(author)));
    }
    body.push_str(&format!("<span>{}</span>", format_date(&news.published_date)));
    if let Some(minutes) = news.reading_time {
        body.push_str(&format!(" <span>{minutes} min read</span>"));
    }
    body.push_str("</div>");

    body.push_str(&format!(
        r#"<div class="news-detail-content">{}</div>"#,
        render_blocks(news.content.as_deref().unwrap_or_default())
    ));

    if !news.tags.is_empty() {
        body.push_str(r#"<section class="news-detail-tags"><h3>Tags</h3><div>"#);
        for tag in &news.tags {
            body.push_str(&format!(
                r#"<span class="news-tag">#{}</span>"#,
                html_escape(&tag.name)
            ));
        }
        body.push_str("</div></section>");
    }

    body.push_str("</div></article></div>");

    page_shell(&PageMeta::for_news(news), &body)
}

fn not_found_page() -> Response {
    let meta = PageMeta::site(
        "News Not Found",
        "The article you're looking for doesn't exist or has been removed.",
    );
    let body = concat!(
        r#"<main class="not-found">"#,
        "<h1>404</h1>",
        "<h2>News Article Not Found</h2>",
        "<p>The article you're looking for doesn't exist or has been removed.</p>",
        r#"<a href="/news">&larr; Back to All News</a>"#,
        "</main>"
    );
    (StatusCode::NOT_FOUND, Html(page_shell(&meta, body))).into_response()
}

/// Fallback for unknown paths; same terminal view as an unmatched slug.
pub async fn not_found() -> Response {
    not_found_page()
}

pub async fn studio_redirect(State(state): State<AppState>) -> Redirect {
    Redirect::temporary(&state.studio_url)
}
