use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::{ContentBlock, Expertise, Image, Industry, Slug, Tag};
use crate::serde_utils::{from_str_or_default, vec_dropping_nulls};

/// Editorial lifecycle state. Only `Published` documents are visible
/// through the public queries.
#[derive(
    Clone, Copy, Debug, Default, Serialize, Deserialize, EnumString, Display, PartialEq, Eq,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum NewsStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

/// Per-document SEO overrides. Every field is optional; the page falls back
/// to the document's own title/excerpt/featured image.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SeoMeta {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub keywords: Option<String>,
    #[serde(default, rename = "ogImage")]
    pub og_image: Option<Image>,
}

/// A news article as returned by the list and detail projections. The list
/// projection omits `content` and `meta`; both stay `None` there.
///
/// Taxonomy references are weak links dereferenced at query time; entries
/// whose target no longer exists are dropped during decoding.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct News {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    pub slug: Slug,
    pub published_date: DateTime<Utc>,
    #[serde(default)]
    pub reading_time: Option<u32>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default, deserialize_with = "from_str_or_default")]
    pub status: NewsStatus,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub featured_image: Option<Image>,
    #[serde(default)]
    pub content: Option<Vec<ContentBlock>>,
    #[serde(default, deserialize_with = "vec_dropping_nulls")]
    pub industries: Vec<Industry>,
    #[serde(default, deserialize_with = "vec_dropping_nulls")]
    pub expertises: Vec<Expertise>,
    #[serde(default, deserialize_with = "vec_dropping_nulls")]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub meta: Option<SeoMeta>,
}

impl News {
    pub fn featured_image_url(&self) -> Option<&str> {
        self.featured_image.as_ref().and_then(|image| image.url())
    }
}
