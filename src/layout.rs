//! Block layout of a document into terminal rows.
//!
//! Every block element stacks its children vertically; text and inline elements flow into
//! word-wrapped lines inside the nearest block. Headings and paragraphs are followed by a blank
//! row. The result is both the list of rows to draw and, for every laid-out element, the range
//! of rows it occupies.

use crate::dom::{Document, NodeId, NodeKind};
use std::collections::HashMap;
use std::ops::Range;

/// Elements that take no space at all.
pub const HIDDEN_TAGS: &[&str] = &[
    "head", "link", "meta", "noscript", "script", "style", "template", "title",
];
/// Elements drawn outside the page flow (the menu gets its own pane).
pub const OUT_OF_FLOW_TAGS: &[&str] = &["nav"];
/// Elements whose content flows into the surrounding line.
pub const INLINE_TAGS: &[&str] = &[
    "a", "abbr", "b", "cite", "code", "em", "i", "kbd", "label", "mark", "q", "s", "small",
    "span", "strong", "sub", "sup", "time", "u",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// How a row should be drawn.
pub enum LineKind {
    /// Heading text of the given level (1-6).
    Heading(u8),
    /// Body text.
    Text,
    /// Spacing row.
    Blank,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// One terminal row of the laid-out page.
pub struct LayoutLine {
    /// Row content, at most the layout width in characters.
    pub text: String,
    /// Drawing style.
    pub kind: LineKind,
    /// Block element the row belongs to.
    pub block: NodeId,
}

#[derive(Clone, Debug)]
/// Rows and element boxes for a document at a given width.
pub struct Layout {
    lines: Vec<LayoutLine>,
    boxes: HashMap<NodeId, Range<usize>>,
    width: usize,
    generation: u64,
}

fn heading_level(tag: &str) -> Option<u8> {
    match tag {
        "h1" => Some(1),
        "h2" => Some(2),
        "h3" => Some(3),
        "h4" => Some(4),
        "h5" => Some(5),
        "h6" => Some(6),
        _ => None,
    }
}

/// Greedy word wrap; words longer than `width` are split.
#[must_use]
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if current_len > 0 {
                rows.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = word.split_off(width);
            rows.push(word.into_iter().collect());
            word = rest;
        }
        if word.is_empty() {
            continue;
        }
        let needed = if current_len == 0 {
            word.len()
        } else {
            current_len + 1 + word.len()
        };
        if needed > width {
            rows.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.extend(word.iter());
        current_len += word.len();
    }
    if current_len > 0 {
        rows.push(current);
    }
    rows
}

struct Builder<'a> {
    doc: &'a Document,
    width: usize,
    lines: Vec<LayoutLine>,
    boxes: HashMap<NodeId, Range<usize>>,
}

impl Builder<'_> {
    fn flush(&mut self, run: &mut String, block: NodeId, kind: LineKind) {
        for text in wrap(run, self.width) {
            self.lines.push(LayoutLine { text, kind, block });
        }
        run.clear();
    }

    fn block(&mut self, node: NodeId) {
        let doc = self.doc;
        let start = self.lines.len();
        let tag = doc.tag_name(node).unwrap_or_default();
        let kind = heading_level(tag).map_or(LineKind::Text, LineKind::Heading);
        let mut run = String::new();

        for &child in doc.children(node) {
            match doc.kind(child) {
                NodeKind::Text(text) => {
                    run.push(' ');
                    run.push_str(text);
                }
                NodeKind::Element(el) => {
                    let tag = el.tag.as_str();
                    if HIDDEN_TAGS.contains(&tag) || OUT_OF_FLOW_TAGS.contains(&tag) {
                        continue;
                    }
                    if tag == "br" {
                        self.flush(&mut run, node, kind);
                    } else if INLINE_TAGS.contains(&tag) {
                        let row = self.lines.len();
                        self.boxes.insert(child, row..row + 1);
                        run.push(' ');
                        run.push_str(&doc.text_content(child));
                    } else {
                        self.flush(&mut run, node, kind);
                        self.block(child);
                    }
                }
                NodeKind::Root => {}
            }
        }
        self.flush(&mut run, node, kind);

        if self.lines.len() > start && (kind != LineKind::Text || tag == "p") {
            self.lines.push(LayoutLine {
                text: String::new(),
                kind: LineKind::Blank,
                block: node,
            });
        }
        self.boxes.insert(node, start..self.lines.len());
    }
}

impl Layout {
    #[must_use]
    /// Lays out `doc` for a viewport `width` characters wide.
    pub fn compute(doc: &Document, width: usize) -> Self {
        let mut builder = Builder {
            doc,
            width,
            lines: Vec::new(),
            boxes: HashMap::new(),
        };
        builder.block(doc.root());
        Self {
            lines: builder.lines,
            boxes: builder.boxes,
            width,
            generation: doc.generation(),
        }
    }

    #[must_use]
    /// Whether this layout still describes `doc` at `width`.
    pub fn is_current(&self, doc: &Document, width: usize) -> bool {
        self.width == width && self.generation == doc.generation()
    }

    #[must_use]
    /// All rows, top to bottom.
    pub fn lines(&self) -> &[LayoutLine] {
        &self.lines
    }

    #[must_use]
    /// Total height in rows.
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    /// Rows occupied by an element, `None` if it was not laid out.
    pub fn rows_of(&self, node: NodeId) -> Option<Range<usize>> {
        self.boxes.get(&node).cloned()
    }
}

#[cfg(test)]
#[path = "tests/layout.rs"]
mod tests;
