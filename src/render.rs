//! Renders a block-content sequence to HTML. The input comes from a remote
//! dataset the renderer cannot control, so every malformed or unknown node
//! degrades to an omission. This function never fails.

use itertools::Itertools;

use crate::models::{BlockStyle, ContentBlock, Decorator, Image, ListKind, MarkDef, Span, TextBlock};

pub(crate) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

pub(crate) fn html_attr_escape(s: &str) -> String {
    html_escape(s).replace('"', "&quot;")
}

/// Renders blocks in order. Contiguous runs sharing a list tag become one
/// list; a change of list kind or any non-list block closes the run.
pub fn render_blocks(blocks: &[ContentBlock]) -> String {
    let mut out = String::new();
    for (kind, group) in &blocks.iter().group_by(|block| block.list_item()) {
        match kind {
            Some(kind) => {
                let tag = match kind {
                    ListKind::Bullet => "ul",
                    ListKind::Number => "ol",
                };
                out.push_str(&format!("<{tag}>"));
                for block in group {
                    if let ContentBlock::Block(block) = block {
                        out.push_str("<li>");
                        push_spans(&mut out, block);
                        out.push_str("</li>");
                    }
                }
                out.push_str(&format!("</{tag}>"));
            }
            None => {
                for block in group {
                    match block {
                        ContentBlock::Block(block) => push_text_block(&mut out, block),
                        ContentBlock::Image(image) => push_image(&mut out, image),
                        ContentBlock::Unknown => {}
                    }
                }
            }
        }
    }
    out
}

fn push_text_block(out: &mut String, block: &TextBlock) {
    let tag = match block.style {
        BlockStyle::Normal => "p",
        BlockStyle::H1 => "h1",
        BlockStyle::H2 => "h2",
        BlockStyle::H3 => "h3",
        BlockStyle::H4 => "h4",
        BlockStyle::Blockquote => "blockquote",
    };
    out.push_str(&format!("<{tag}>"));
    push_spans(out, block);
    out.push_str(&format!("</{tag}>"));
}

fn push_spans(out: &mut String, block: &TextBlock) {
    for span in &block.children {
        out.push_str(&render_span(span, &block.mark_defs));
    }
}

fn render_span(span: &Span, mark_defs: &[MarkDef]) -> String {
    let mut html = html_escape(&span.text);

    // Decorators nest in a fixed order regardless of mark order on the span.
    for decorator in Decorator::ORDER.iter().rev() {
        let decorated = span
            .marks
            .iter()
            .any(|mark| mark.parse::<Decorator>().ok() == Some(*decorator));
        if decorated {
            let tag = decorator.tag();
            html = format!("<{tag}>{html}</{tag}>");
        }
    }

    // A link annotation wraps outside the decorators. Off-site targets open
    // in their own browsing context with no referrer or opener handle.
    if let Some(href) = link_target(span, mark_defs) {
        let href_attr = html_attr_escape(href);
        if href.starts_with('/') {
            html = format!(r#"<a href="{href_attr}">{html}</a>"#);
        } else {
            html = format!(
                r#"<a href="{href_attr}" target="_blank" rel="noopener noreferrer">{html}</a>"#
            );
        }
    }

    html
}

fn link_target<'a>(span: &Span, mark_defs: &'a [MarkDef]) -> Option<&'a str> {
    span.marks.iter().find_map(|mark| {
        mark_defs
            .iter()
            .find(|def| def.key == *mark && def.kind == "link")
            .and_then(|def| def.href.as_deref())
    })
}

// An embedded image with no resolvable asset renders as nothing at all.
fn push_image(out: &mut String, image: &Image) {
    let Some(asset) = &image.asset else { return };
    let src = asset.sized_url(800, 450);
    let alt = image.alt.as_deref().unwrap_or(" ");
    out.push_str("<figure>");
    out.push_str(&format!(
        r#"<img src="{}" alt="{}">"#,
        html_attr_escape(&src),
        html_attr_escape(alt)
    ));
    if let Some(caption) = &image.caption {
        out.push_str(&format!("<figcaption>{}</figcaption>", html_escape(caption)));
    }
    out.push_str("</figure>");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blocks(value: serde_json::Value) -> Vec<ContentBlock> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn plain_paragraph_round_trips() {
        let content = blocks(serde_json::json!([
            {
                "_type": "block",
                "style": "normal",
                "children": [{"_type": "span", "text": "Hello", "marks": []}],
                "markDefs": []
            }
        ]));
        assert_eq!(render_blocks(&content), "<p>Hello</p>");
    }

    #[test]
    fn heading_and_quote_styles_map() {
        let content = blocks(serde_json::json!([
            {
                "_type": "block",
                "style": "h3",
                "children": [{"_type": "span", "text": "Section", "marks": []}],
                "markDefs": []
            },
            {
                "_type": "block",
                "style": "blockquote",
                "children": [{"_type": "span", "text": "Quoted", "marks": []}],
                "markDefs": []
            }
        ]));
        assert_eq!(
            render_blocks(&content),
            "<h3>Section</h3><blockquote>Quoted</blockquote>"
        );
    }

    #[test]
    fn unrecognized_style_renders_as_paragraph() {
        let content = blocks(serde_json::json!([
            {
                "_type": "block",
                "style": "h9",
                "children": [{"_type": "span", "text": "odd", "marks": []}],
                "markDefs": []
            }
        ]));
        assert_eq!(render_blocks(&content), "<p>odd</p>");
    }

    #[test]
    fn decorators_nest_deterministically() {
        let content = blocks(serde_json::json!([
            {
                "_type": "block",
                "style": "normal",
                "children": [
                    {"_type": "span", "text": "x", "marks": ["em", "strong"]}
                ],
                "markDefs": []
            }
        ]));
        // order on the span does not matter
        assert_eq!(render_blocks(&content), "<p><strong><em>x</em></strong></p>");
    }

    #[test]
    fn strike_through_and_code_marks_render() {
        let content = blocks(serde_json::json!([
            {
                "_type": "block",
                "style": "normal",
                "children": [
                    {"_type": "span", "text": "gone", "marks": ["strike-through"]},
                    {"_type": "span", "text": "let x;", "marks": ["code"]}
                ],
                "markDefs": []
            }
        ]));
        assert_eq!(
            render_blocks(&content),
            "<p><s>gone</s><code>let x;</code></p>"
        );
    }

    #[test]
    fn external_link_gets_safe_navigation_attributes() {
        let content = blocks(serde_json::json!([
            {
                "_type": "block",
                "style": "normal",
                "children": [
                    {"_type": "span", "text": "docs", "marks": ["k1"]}
                ],
                "markDefs": [
                    {"_key": "k1", "_type": "link", "href": "https://example.com"}
                ]
            }
        ]));
        assert_eq!(
            render_blocks(&content),
            r#"<p><a href="https://example.com" target="_blank" rel="noopener noreferrer">docs</a></p>"#
        );
    }

    #[test]
    fn internal_link_stays_plain() {
        let content = blocks(serde_json::json!([
            {
                "_type": "block",
                "style": "normal",
                "children": [
                    {"_type": "span", "text": "about us", "marks": ["k1"]}
                ],
                "markDefs": [
                    {"_key": "k1", "_type": "link", "href": "/about"}
                ]
            }
        ]));
        let html = render_blocks(&content);
        assert_eq!(html, r#"<p><a href="/about">about us</a></p>"#);
        assert!(!html.contains("target="));
        assert!(!html.contains("rel="));
    }

    #[test]
    fn link_wraps_outside_decorators() {
        let content = blocks(serde_json::json!([
            {
                "_type": "block",
                "style": "normal",
                "children": [
                    {"_type": "span", "text": "bold link", "marks": ["strong", "k1"]}
                ],
                "markDefs": [
                    {"_key": "k1", "_type": "link", "href": "/pricing"}
                ]
            }
        ]));
        assert_eq!(
            render_blocks(&content),
            r#"<p><a href="/pricing"><strong>bold link</strong></a></p>"#
        );
    }

    #[test]
    fn image_without_asset_renders_nothing() {
        let content = blocks(serde_json::json!([
            {
                "_type": "block",
                "style": "normal",
                "children": [{"_type": "span", "text": "before", "marks": []}],
                "markDefs": []
            },
            {"_type": "image", "asset": null, "alt": "lost"},
            {
                "_type": "block",
                "style": "normal",
                "children": [{"_type": "span", "text": "after", "marks": []}],
                "markDefs": []
            }
        ]));
        assert_eq!(render_blocks(&content), "<p>before</p><p>after</p>");
    }

    #[test]
    fn image_renders_with_alt_fallback_and_caption() {
        let content = blocks(serde_json::json!([
            {
                "_type": "image",
                "asset": {"_id": "image-1", "url": "https://cdn.example.net/pic.jpg"},
                "caption": "A chart"
            }
        ]));
        assert_eq!(
            render_blocks(&content),
            "<figure><img src=\"https://cdn.example.net/pic.jpg?w=800&amp;h=450&amp;fit=crop\" alt=\" \"><figcaption>A chart</figcaption></figure>"
        );
    }

    #[test]
    fn consecutive_bullets_become_one_list() {
        let content = blocks(serde_json::json!([
            {
                "_type": "block",
                "style": "normal",
                "listItem": "bullet",
                "children": [{"_type": "span", "text": "one", "marks": []}],
                "markDefs": []
            },
            {
                "_type": "block",
                "style": "normal",
                "listItem": "bullet",
                "children": [{"_type": "span", "text": "two", "marks": []}],
                "markDefs": []
            }
        ]));
        assert_eq!(render_blocks(&content), "<ul><li>one</li><li>two</li></ul>");
    }

    #[test]
    fn list_kind_change_closes_the_list() {
        let content = blocks(serde_json::json!([
            {
                "_type": "block",
                "style": "normal",
                "listItem": "bullet",
                "children": [{"_type": "span", "text": "a", "marks": []}],
                "markDefs": []
            },
            {
                "_type": "block",
                "style": "normal",
                "listItem": "number",
                "children": [{"_type": "span", "text": "b", "marks": []}],
                "markDefs": []
            }
        ]));
        assert_eq!(
            render_blocks(&content),
            "<ul><li>a</li></ul><ol><li>b</li></ol>"
        );
    }

    #[test]
    fn plain_block_splits_two_lists() {
        let content = blocks(serde_json::json!([
            {
                "_type": "block",
                "style": "normal",
                "listItem": "bullet",
                "children": [{"_type": "span", "text": "a", "marks": []}],
                "markDefs": []
            },
            {
                "_type": "block",
                "style": "normal",
                "children": [{"_type": "span", "text": "break", "marks": []}],
                "markDefs": []
            },
            {
                "_type": "block",
                "style": "normal",
                "listItem": "bullet",
                "children": [{"_type": "span", "text": "b", "marks": []}],
                "markDefs": []
            }
        ]));
        assert_eq!(
            render_blocks(&content),
            "<ul><li>a</li></ul><p>break</p><ul><li>b</li></ul>"
        );
    }

    #[test]
    fn unknown_blocks_are_skipped() {
        let content = blocks(serde_json::json!([
            {"_type": "videoEmbed", "url": "https://example.com/v.mp4"},
            {
                "_type": "block",
                "style": "normal",
                "children": [{"_type": "span", "text": "kept", "marks": []}],
                "markDefs": []
            }
        ]));
        assert_eq!(render_blocks(&content), "<p>kept</p>");
    }

    #[test]
    fn text_is_escaped() {
        let content = blocks(serde_json::json!([
            {
                "_type": "block",
                "style": "normal",
                "children": [{"_type": "span", "text": "a < b & c", "marks": []}],
                "markDefs": []
            }
        ]));
        assert_eq!(render_blocks(&content), "<p>a &lt; b &amp; c</p>");
    }

    #[test]
    fn empty_sequence_renders_empty() {
        assert_eq!(render_blocks(&[]), "");
    }
}
