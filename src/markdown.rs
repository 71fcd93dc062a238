//! Markdown rendering onto an egui `Ui`.
//!
//! Cards keep their raw Markdown text, heading markers included; this
//! is the presentation layer that turns that text into styled widgets.
//! Block events from `pulldown-cmark` are collected into plain-text
//! blocks and emitted as labels — headings large, code monospaced,
//! list items bulleted. Embedded images are not rendered.

use egui::{RichText, Ui};
use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};

const BODY_SIZE: f32 = 18.0;
const HEADING_SIZE: f32 = 26.0;
const SUB_HEADING_SIZE: f32 = 21.0;

#[derive(Clone, Copy)]
enum BlockKind {
    Paragraph,
    Heading(HeadingLevel),
    Bullet,
    Code,
}

/// Renders `text` into the current layout, one widget per block.
pub fn render(ui: &mut Ui, text: &str) {
    let mut buffer = String::new();
    let mut kind = BlockKind::Paragraph;
    let mut in_item = false;

    for event in Parser::new_ext(text, Options::empty()) {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                kind = BlockKind::Heading(level);
            }
            Event::Start(Tag::CodeBlock(_)) => {
                kind = BlockKind::Code;
            }
            Event::Start(Tag::Item) => {
                in_item = true;
                kind = BlockKind::Bullet;
            }
            Event::Start(Tag::Paragraph) => {
                // Paragraphs inside a list item stay part of the bullet.
                if !in_item {
                    kind = BlockKind::Paragraph;
                }
            }
            Event::End(TagEnd::Heading(_))
            | Event::End(TagEnd::CodeBlock)
            | Event::End(TagEnd::Paragraph) => {
                flush(ui, kind, &mut buffer);
            }
            Event::End(TagEnd::Item) => {
                flush(ui, kind, &mut buffer);
                in_item = false;
            }
            Event::Text(chunk) | Event::Code(chunk) => buffer.push_str(&chunk),
            Event::SoftBreak => buffer.push(' '),
            Event::HardBreak => buffer.push('\n'),
            Event::Rule => {
                ui.separator();
            }
            _ => {}
        }
    }

    // Loose text without a closing block event.
    flush(ui, kind, &mut buffer);
}

fn flush(ui: &mut Ui, kind: BlockKind, buffer: &mut String) {
    if buffer.trim().is_empty() {
        buffer.clear();
        return;
    }
    let text = std::mem::take(buffer);

    match kind {
        BlockKind::Heading(level) => {
            let size = match level {
                HeadingLevel::H1 | HeadingLevel::H2 => HEADING_SIZE,
                _ => SUB_HEADING_SIZE,
            };
            ui.label(RichText::new(text).size(size).strong());
        }
        BlockKind::Code => {
            ui.label(RichText::new(text).monospace().size(BODY_SIZE));
        }
        BlockKind::Bullet => {
            ui.label(RichText::new(format!("• {text}")).size(BODY_SIZE));
        }
        BlockKind::Paragraph => {
            ui.label(RichText::new(text).size(BODY_SIZE));
        }
    }
    ui.add_space(4.0);
}
