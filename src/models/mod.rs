mod block;
mod image;
mod news;
mod taxonomy;

pub use block::{BlockStyle, ContentBlock, Decorator, ListKind, MarkDef, Span, TextBlock};
pub use image::{Image, ImageAsset, Slug};
pub use news::{News, NewsStatus, SeoMeta};
pub use taxonomy::{Color, Expertise, Industry, IndustryRef, Tag};
