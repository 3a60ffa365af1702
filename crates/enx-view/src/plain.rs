//! Plain-text presenter.
//!
//! Renders a [`Document`] into aligned monospace text. Column math uses
//! display width, not char count, so wide scripts and Arabic content
//! line up. RTL documents are right-aligned within the target width; a
//! richer presenter would also reorder bidirectional runs, which is out
//! of scope here.

use enx_i18n::TextDirection;
use unicode_width::UnicodeWidthStr;

use crate::document::{BlockNode, Document, Span};

/// Default render width when the caller has no better idea.
pub const DEFAULT_WIDTH: usize = 80;

/// Render a document to plain text at the given width.
#[must_use]
pub fn render_plain(doc: &Document, width: usize) -> String {
    let width = width.max(20);
    let mut out = Vec::new();
    for block in &doc.blocks {
        render_block(block, width, &mut out);
        out.push(String::new());
    }
    // Drop the trailing blank separator.
    if out.last().is_some_and(String::is_empty) {
        out.pop();
    }

    let aligned: Vec<String> = out
        .into_iter()
        .map(|line| align(line, doc.dir, width))
        .collect();
    let mut text = aligned.join("\n");
    text.push('\n');
    text
}

fn align(line: String, dir: TextDirection, width: usize) -> String {
    match dir {
        TextDirection::Ltr => line,
        TextDirection::Rtl => {
            let w = line.width();
            if w >= width {
                line
            } else {
                format!("{}{}", " ".repeat(width - w), line)
            }
        }
    }
}

fn render_block(block: &BlockNode, width: usize, out: &mut Vec<String>) {
    match block {
        BlockNode::Heading { level, text } => {
            out.push(text.clone());
            let rule = match level {
                1 => Some('='),
                2 => Some('-'),
                _ => None,
            };
            if let Some(ch) = rule {
                out.push(ch.to_string().repeat(text.width().min(width)));
            }
        }
        BlockNode::Paragraph(spans) => {
            out.push(join_spans(spans));
        }
        BlockNode::Bullets(items) => {
            for item in items {
                out.push(format!("  * {item}"));
            }
        }
        BlockNode::KeyValues(rows) => {
            let label_width = rows.iter().map(|(k, _)| k.width()).max().unwrap_or(0);
            for (k, v) in rows {
                out.push(format!("  {}{}  {v}", k, pad(k, label_width)));
            }
        }
        BlockNode::Table { headers, rows } => {
            let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
            for row in rows {
                for (i, cell) in row.iter().enumerate() {
                    if i >= widths.len() {
                        widths.push(cell.width());
                    } else if cell.width() > widths[i] {
                        widths[i] = cell.width();
                    }
                }
            }
            out.push(format_row(headers, &widths));
            out.push(
                widths
                    .iter()
                    .map(|w| "-".repeat(*w))
                    .collect::<Vec<_>>()
                    .join("  "),
            );
            for row in rows {
                out.push(format_row(row, &widths));
            }
        }
        BlockNode::Meter {
            label,
            percent,
            annotation,
        } => {
            let bar_width = 20usize;
            let filled = (usize::from(*percent) * bar_width) / 100;
            let bar: String = "#".repeat(filled) + &"-".repeat(bar_width - filled);
            let suffix = annotation
                .as_ref()
                .map(|a| format!("  {a}"))
                .unwrap_or_default();
            out.push(format!("  {label}: [{bar}] {percent:>3}%{suffix}"));
        }
        BlockNode::TabStrip { labels, active } => {
            let rendered: Vec<String> = labels
                .iter()
                .enumerate()
                .map(|(i, label)| {
                    if i == *active {
                        format!("[{label}]")
                    } else {
                        format!(" {label} ")
                    }
                })
                .collect();
            out.push(rendered.join(" | "));
        }
        BlockNode::ChatLog(lines) => {
            for line in lines {
                let stamp = line
                    .stamp
                    .as_ref()
                    .map(|s| format!(" ({s})"))
                    .unwrap_or_default();
                let marker = if line.inbound { "<" } else { ">" };
                out.push(format!("  {marker} {}{stamp}: {}", line.author, line.body));
            }
        }
        BlockNode::Divider => {
            out.push("-".repeat(width.min(40)));
        }
    }
}

fn join_spans(spans: &[Span]) -> String {
    spans.iter().map(|s| s.text.as_str()).collect()
}

fn pad(text: &str, target: usize) -> String {
    " ".repeat(target.saturating_sub(text.width()))
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .enumerate()
        .map(|(i, cell)| {
            let target = widths.get(i).copied().unwrap_or(0);
            format!("{cell}{}", pad(cell, target))
        })
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}
