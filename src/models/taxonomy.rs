use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::Slug;
use crate::serde_utils::from_str_or_default;

/// Color theme assigned to industries and expertises. Unrecognized or
/// absent values resolve to `Blue`.
#[derive(
    Clone, Copy, Debug, Default, Serialize, Deserialize, EnumString, Display, PartialEq, Eq, Hash,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Color {
    #[default]
    Blue,
    Purple,
    Green,
    Orange,
    Red,
    Pink,
    Teal,
    Gray,
}

impl Color {
    /// Hex value of the palette entry, as rendered in category chips.
    pub fn hex(&self) -> &'static str {
        match self {
            Color::Blue => "#667eea",
            Color::Purple => "#764ba2",
            Color::Green => "#10b981",
            Color::Orange => "#f59e0b",
            Color::Red => "#ef4444",
            Color::Pink => "#ec4899",
            Color::Teal => "#14b8a6",
            Color::Gray => "#6b7280",
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Industry {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub slug: Slug,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "from_str_or_default")]
    pub color: Color,
}

/// Parent industry as projected on an expertise (`industry->{_id, name, slug}`).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IndustryRef {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub slug: Slug,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Expertise {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub slug: Slug,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "from_str_or_default")]
    pub color: Color,
    #[serde(default)]
    pub industry: Option<IndustryRef>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Tag {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub slug: Slug,
    #[serde(default)]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_falls_back_to_blue() {
        let industry: Industry = serde_json::from_str(
            r#"{"_id": "a", "name": "Fintech", "slug": {"current": "fintech"}, "color": "chartreuse"}"#,
        )
        .unwrap();
        assert_eq!(industry.color, Color::Blue);
        assert_eq!(industry.color.hex(), "#667eea");

        let industry: Industry = serde_json::from_str(
            r#"{"_id": "a", "name": "Fintech", "slug": {"current": "fintech"}, "color": null}"#,
        )
        .unwrap();
        assert_eq!(industry.color, Color::Blue);

        let industry: Industry = serde_json::from_str(
            r#"{"_id": "a", "name": "Fintech", "slug": {"current": "fintech"}}"#,
        )
        .unwrap();
        assert_eq!(industry.color, Color::Blue);
    }

    #[test]
    fn recognized_colors_parse() {
        let expertise: Expertise = serde_json::from_str(
            r#"{
                "_id": "e1",
                "name": "Cloud Computing",
                "slug": {"current": "cloud-computing"},
                "color": "teal",
                "industry": {"_id": "i1", "name": "Technology", "slug": {"current": "technology"}}
            }"#,
        )
        .unwrap();
        assert_eq!(expertise.color, Color::Teal);
        assert_eq!(expertise.color.hex(), "#14b8a6");
        assert_eq!(expertise.industry.unwrap().slug.current, "technology");
    }

    #[test]
    fn expertise_tolerates_missing_parent() {
        let expertise: Expertise = serde_json::from_str(
            r#"{"_id": "e1", "name": "AI", "slug": {"current": "ai"}, "industry": null}"#,
        )
        .unwrap();
        assert!(expertise.industry.is_none());
    }
}
