use serde::{Deserialize, Serialize};

/// URL slug object as stored on documents (`slug.current`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Slug {
    pub current: String,
}

impl std::fmt::Display for Slug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.current)
    }
}

/// Resolved image asset reference. The asset is dereferenced at query time;
/// a dangling reference comes back as `null` and the whole asset is absent.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ImageAsset {
    #[serde(rename = "_id")]
    pub id: String,
    pub url: String,
}

impl ImageAsset {
    /// Asset URL with width/height and a cover-fit crop applied by the
    /// asset pipeline.
    pub fn sized_url(&self, width: u32, height: u32) -> String {
        let sep = if self.url.contains('?') { '&' } else { '?' };
        format!("{}{}w={}&h={}&fit=crop", self.url, sep, width, height)
    }
}

/// An image with alt text and an optional caption. Used both as a document
/// field (featured image, social preview) and as an embedded content block.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Image {
    #[serde(default)]
    pub asset: Option<ImageAsset>,
    #[serde(default)]
    pub alt: Option<String>,
    #[serde(default)]
    pub caption: Option<String>,
}

impl Image {
    pub fn url(&self) -> Option<&str> {
        self.asset.as_ref().map(|a| a.url.as_str())
    }
}
