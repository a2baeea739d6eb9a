//! The rendering surface: a results pane, a detail pane and the search trigger.
//!
//! The page holds [`Block`]s; turning them into HTML or terminal text is left
//! to the adapters at the bottom of this file.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::view::Block;

/// Enabled state of the search trigger.
///
/// Clones share the same state, so a pending search can hand the trigger
/// back even when nobody finishes it.
#[derive(Debug, Clone)]
pub struct Trigger(Arc<AtomicBool>);

impl Default for Trigger {
    fn default() -> Self {
        Trigger(Arc::new(AtomicBool::new(true)))
    }
}

impl Trigger {
    pub fn is_enabled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.0.store(enabled, Ordering::SeqCst);
    }
}

#[derive(Debug, Default)]
pub struct Page {
    results: Vec<Block>,
    detail: Vec<Block>,
    trigger: Trigger,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn results(&self) -> &[Block] {
        &self.results
    }

    pub fn detail(&self) -> &[Block] {
        &self.detail
    }

    pub fn trigger_enabled(&self) -> bool {
        self.trigger.is_enabled()
    }

    pub fn set_trigger_enabled(&mut self, enabled: bool) {
        self.trigger.set_enabled(enabled);
    }

    pub fn trigger(&self) -> &Trigger {
        &self.trigger
    }

    pub fn replace_results(&mut self, blocks: Vec<Block>) {
        self.results = blocks;
    }

    pub fn append_result(&mut self, block: Block) {
        self.results.push(block);
    }

    pub fn replace_detail(&mut self, blocks: Vec<Block>) {
        self.detail = blocks;
    }

    pub fn clear_detail(&mut self) {
        self.detail.clear();
    }

    /// Selectable items in the results pane as `(id, label)`, in display order
    pub fn items(&self) -> impl Iterator<Item = (&str, &str)> {
        self.results.iter().filter_map(|block| match block {
            Block::Item { id, label } => Some((id.as_str(), label.as_str())),
            _ => None,
        })
    }

    /// Id of the `position`-th item, counting from 1 as the text adapter does
    pub fn item_id(&self, position: usize) -> Option<&str> {
        position
            .checked_sub(1)
            .and_then(|index| self.items().nth(index))
            .map(|(id, _)| id)
    }

    pub fn results_html(&self) -> String {
        blocks_to_html(&self.results)
    }

    pub fn detail_html(&self) -> String {
        blocks_to_html(&self.detail)
    }
}

fn blocks_to_html(blocks: &[Block]) -> String {
    let mut html = String::new();
    for block in blocks {
        match block {
            Block::Paragraph(text) => {
                html.push_str(&format!("<p>{}</p>", encode_text(text)));
            }
            Block::Heading(text) => {
                html.push_str(&format!("<h2>{}</h2>", encode_text(text)));
            }
            Block::Item { id, label } => {
                html.push_str(&format!(
                    "<button class=\"recipe-list-item\" id=\"{}\">{}</button>",
                    encode_double_quoted_attribute(id),
                    encode_text(label)
                ));
            }
            Block::LineBreak => html.push_str("<br>"),
        }
    }
    html
}

/// Terminal rendering. Items are numbered so they can be picked by position.
impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut position = 0;
        for block in &self.results {
            match block {
                Block::Item { label, .. } => {
                    position += 1;
                    write!(f, "  [{}] {}", position, label)?;
                }
                Block::LineBreak => writeln!(f)?,
                Block::Paragraph(text) | Block::Heading(text) => writeln!(f, "{}", text)?,
            }
        }

        if !self.detail.is_empty() {
            writeln!(f)?;
        }
        for block in &self.detail {
            match block {
                Block::Heading(text) => {
                    writeln!(f, "{}", text)?;
                    writeln!(f, "{}", "=".repeat(text.chars().count()))?;
                }
                Block::Paragraph(text) => writeln!(f, "{}", text)?,
                Block::Item { label, .. } => writeln!(f, "{}", label)?,
                Block::LineBreak => writeln!(f)?,
            }
        }
        Ok(())
    }
}
