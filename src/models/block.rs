use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::Image;
use crate::serde_utils::{from_str_or_default, opt_from_str, string_or_empty};

/// One unit of rich-text content. The document body is an ordered sequence
/// of these, discriminated by `_type`. Anything the renderer does not
/// understand decodes to `Unknown` and renders as nothing.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "_type", rename_all = "lowercase")]
pub enum ContentBlock {
    Block(TextBlock),
    Image(Image),
    #[serde(other)]
    Unknown,
}

impl ContentBlock {
    /// List membership of this block, if any. Only text blocks carry one.
    pub fn list_item(&self) -> Option<ListKind> {
        match self {
            ContentBlock::Block(block) => block.list_item,
            _ => None,
        }
    }
}

/// A paragraph, heading, or quote: a style tag plus an ordered run of
/// inline spans. `mark_defs` hold the link annotations the spans refer to
/// by key.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextBlock {
    #[serde(default, deserialize_with = "from_str_or_default")]
    pub style: BlockStyle,
    #[serde(default, deserialize_with = "opt_from_str")]
    pub list_item: Option<ListKind>,
    #[serde(default)]
    pub level: Option<u32>,
    #[serde(default)]
    pub children: Vec<Span>,
    #[serde(default)]
    pub mark_defs: Vec<MarkDef>,
}

/// An inline run of text with decorator marks and/or annotation keys.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Span {
    #[serde(default, deserialize_with = "string_or_empty")]
    pub text: String,
    #[serde(default)]
    pub marks: Vec<String>,
}

/// Annotation definition referenced from span marks by `_key`. Only `link`
/// annotations are understood.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MarkDef {
    #[serde(rename = "_key")]
    pub key: String,
    #[serde(rename = "_type")]
    pub kind: String,
    #[serde(default)]
    pub href: Option<String>,
}

/// Block style tag. Unrecognized styles render as `Normal`.
#[derive(
    Clone, Copy, Debug, Default, Serialize, Deserialize, EnumString, Display, PartialEq, Eq,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum BlockStyle {
    #[default]
    Normal,
    H1,
    H2,
    H3,
    H4,
    Blockquote,
}

#[derive(
    Clone, Copy, Debug, Serialize, Deserialize, EnumString, Display, PartialEq, Eq, Hash,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ListKind {
    Bullet,
    Number,
}

/// Inline decorator marks in their deterministic nesting order.
#[derive(Clone, Copy, Debug, EnumString, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum Decorator {
    Strong,
    Em,
    Code,
    Underline,
    #[strum(serialize = "strike-through")]
    StrikeThrough,
}

impl Decorator {
    /// Nesting order, outermost first.
    pub const ORDER: [Decorator; 5] = [
        Decorator::Strong,
        Decorator::Em,
        Decorator::Code,
        Decorator::Underline,
        Decorator::StrikeThrough,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            Decorator::Strong => "strong",
            Decorator::Em => "em",
            Decorator::Code => "code",
            Decorator::Underline => "u",
            Decorator::StrikeThrough => "s",
        }
    }
}
