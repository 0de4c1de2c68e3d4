//! HTML format implementation using tree-sitter-html.
//!
//! The syntax tree is walked once and mirrored into a [`Document`]: elements keep their tag and
//! attributes, character data becomes text nodes with entities decoded, and comments, doctypes
//! and stray end tags are dropped.

use crate::dom::{Document, NodeId};
use crate::formats::Format;

/// Tree-sitter grammar and document builder for HTML pages.
pub struct HtmlFormat;

impl Format for HtmlFormat {
    fn file_extension(&self) -> &'static str {
        "html"
    }

    fn language(&self) -> tree_sitter::Language {
        tree_sitter_html::LANGUAGE.into()
    }

    fn build_document(&self, root: tree_sitter::Node<'_>, source: &[u8]) -> Document {
        let mut doc = Document::new();
        let top = doc.root();
        convert(root, source, &mut doc, top);
        doc
    }
}

fn node_text<'s>(node: tree_sitter::Node<'_>, source: &'s [u8]) -> &'s str {
    node.utf8_text(source).unwrap_or_default()
}

fn convert(node: tree_sitter::Node<'_>, source: &[u8], doc: &mut Document, parent: NodeId) {
    match node.kind() {
        "element" | "script_element" | "style_element" => {
            let mut cursor = node.walk();
            let mut element = None;
            for child in node.children(&mut cursor) {
                match child.kind() {
                    "start_tag" | "self_closing_tag" => {
                        let el = open_tag(child, source, doc);
                        doc.append_child(parent, el);
                        element = Some(el);
                    }
                    "end_tag" => {}
                    _ => convert(child, source, doc, element.unwrap_or(parent)),
                }
            }
        }
        "text" | "entity" => {
            let text = decode_entities(node_text(node, source));
            if !text.trim().is_empty() {
                let t = doc.create_text(&text);
                doc.append_child(parent, t);
            }
        }
        "raw_text" => {
            let t = doc.create_text(node_text(node, source));
            doc.append_child(parent, t);
        }
        "doctype" | "comment" | "erroneous_end_tag" => {}
        _ => {
            let mut cursor = node.walk();
            for child in node.children(&mut cursor) {
                convert(child, source, doc, parent);
            }
        }
    }
}

fn open_tag(tag: tree_sitter::Node<'_>, source: &[u8], doc: &mut Document) -> NodeId {
    let mut cursor = tag.walk();
    let mut element = None;
    for child in tag.children(&mut cursor) {
        match child.kind() {
            "tag_name" => element = Some(doc.create_element(node_text(child, source))),
            "attribute" => {
                if let Some(el) = element {
                    let (name, value) = attribute(child, source);
                    doc.set_attribute(el, &name, &value);
                }
            }
            _ => {}
        }
    }
    element.unwrap_or_else(|| doc.create_element("unknown"))
}

fn attribute(attr: tree_sitter::Node<'_>, source: &[u8]) -> (String, String) {
    let mut name = String::new();
    let mut value = String::new();
    let mut cursor = attr.walk();
    for child in attr.children(&mut cursor) {
        match child.kind() {
            "attribute_name" => name = node_text(child, source).to_string(),
            "attribute_value" => value = decode_entities(node_text(child, source)),
            "quoted_attribute_value" => {
                let mut inner = child.walk();
                value = child
                    .children(&mut inner)
                    .find(|n| n.kind() == "attribute_value")
                    .map(|n| decode_entities(node_text(n, source)))
                    .unwrap_or_default();
            }
            _ => {}
        }
    }
    (name, value)
}

/// Decodes the character references that commonly appear in hand-written pages.
///
/// Unknown named references are left as written.
#[must_use]
pub fn decode_entities(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        let Some(semi) = tail.find(';').filter(|i| *i <= 10) else {
            out.push('&');
            rest = &tail[1..];
            continue;
        };
        let name = &tail[1..semi];
        let decoded = match name {
            "amp" => Some('&'),
            "lt" => Some('<'),
            "gt" => Some('>'),
            "quot" => Some('"'),
            "apos" => Some('\''),
            "nbsp" => Some('\u{a0}'),
            "copy" => Some('\u{a9}'),
            _ => name
                .strip_prefix("#x")
                .or_else(|| name.strip_prefix("#X"))
                .and_then(|hex| u32::from_str_radix(hex, 16).ok())
                .or_else(|| name.strip_prefix('#').and_then(|dec| dec.parse().ok()))
                .and_then(char::from_u32),
        };
        if let Some(c) = decoded {
            out.push(c);
            rest = &tail[semi + 1..];
        } else {
            out.push('&');
            rest = &tail[1..];
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
#[path = "../tests/html.rs"]
mod tests;
