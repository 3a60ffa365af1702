//! Block and span types that make up a rendered page.

use bitflags::bitflags;
use enx_i18n::TextDirection;

bitflags! {
    /// Presentation hints for a [`Span`]. Presenters may ignore any of
    /// these; they never carry meaning beyond emphasis.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct SpanFlags: u8 {
        const BOLD     = 0b0001;
        const EMPHASIS = 0b0010;
        const MUTED    = 0b0100;
        const ACCENT   = 0b1000;
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for SpanFlags {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.bits())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for SpanFlags {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bits = u8::deserialize(deserializer)?;
        Ok(Self::from_bits_truncate(bits))
    }
}

/// A run of text with uniform presentation flags.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    pub text: String,
    pub flags: SpanFlags,
}

impl Span {
    /// Plain span with no flags.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            flags: SpanFlags::empty(),
        }
    }

    /// Bold span.
    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            flags: SpanFlags::BOLD,
        }
    }

    /// Muted span.
    pub fn muted(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            flags: SpanFlags::MUTED,
        }
    }

    /// Accent span.
    pub fn accent(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            flags: SpanFlags::ACCENT,
        }
    }
}

impl From<&str> for Span {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Span {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

/// One message row in a chat log block.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChatLine {
    /// Display name of the sender.
    pub author: String,
    /// Message body.
    pub body: String,
    /// Optional minute stamp (seed transcript only).
    pub stamp: Option<String>,
    /// True for assistant messages (presented on the opposite side).
    pub inbound: bool,
}

/// A block-level element of a document.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BlockNode {
    /// Section heading; level 1 is the page headline.
    Heading { level: u8, text: String },
    /// A paragraph of spans.
    Paragraph(Vec<Span>),
    /// An unordered list.
    Bullets(Vec<String>),
    /// Aligned label/value rows.
    KeyValues(Vec<(String, String)>),
    /// A table with a header row.
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    /// A labeled progress meter with an optional trailing annotation
    /// (tier label, trend, ...).
    Meter {
        label: String,
        percent: u8,
        annotation: Option<String>,
    },
    /// A tab strip with one active tab.
    TabStrip { labels: Vec<String>, active: usize },
    /// A chat transcript.
    ChatLog(Vec<ChatLine>),
    /// A horizontal rule.
    Divider,
}

/// A fully rendered page: ordered blocks plus the text direction of the
/// locale that produced it. Every locale-bearing container inherits
/// `dir`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Document {
    pub dir: TextDirection,
    pub blocks: Vec<BlockNode>,
}

impl Document {
    /// Empty document with the given direction.
    #[must_use]
    pub fn new(dir: TextDirection) -> Self {
        Self {
            dir,
            blocks: Vec::new(),
        }
    }

    pub fn heading(&mut self, level: u8, text: impl Into<String>) -> &mut Self {
        self.blocks.push(BlockNode::Heading {
            level,
            text: text.into(),
        });
        self
    }

    pub fn para(&mut self, spans: impl IntoIterator<Item = Span>) -> &mut Self {
        self.blocks
            .push(BlockNode::Paragraph(spans.into_iter().collect()));
        self
    }

    /// Single plain-text paragraph.
    pub fn text(&mut self, text: impl Into<String>) -> &mut Self {
        self.para([Span::new(text)])
    }

    pub fn bullets<S: Into<String>>(&mut self, items: impl IntoIterator<Item = S>) -> &mut Self {
        self.blocks
            .push(BlockNode::Bullets(items.into_iter().map(Into::into).collect()));
        self
    }

    pub fn key_values<K, V>(&mut self, rows: impl IntoIterator<Item = (K, V)>) -> &mut Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.blocks.push(BlockNode::KeyValues(
            rows.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        ));
        self
    }

    pub fn table<S: Into<String>>(
        &mut self,
        headers: impl IntoIterator<Item = S>,
        rows: Vec<Vec<String>>,
    ) -> &mut Self {
        self.blocks.push(BlockNode::Table {
            headers: headers.into_iter().map(Into::into).collect(),
            rows,
        });
        self
    }

    pub fn meter(
        &mut self,
        label: impl Into<String>,
        percent: u8,
        annotation: Option<String>,
    ) -> &mut Self {
        self.blocks.push(BlockNode::Meter {
            label: label.into(),
            percent: percent.min(100),
            annotation,
        });
        self
    }

    pub fn tabs<S: Into<String>>(
        &mut self,
        labels: impl IntoIterator<Item = S>,
        active: usize,
    ) -> &mut Self {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        let active = if labels.is_empty() {
            0
        } else {
            active.min(labels.len() - 1)
        };
        self.blocks.push(BlockNode::TabStrip { labels, active });
        self
    }

    pub fn chat(&mut self, lines: Vec<ChatLine>) -> &mut Self {
        self.blocks.push(BlockNode::ChatLog(lines));
        self
    }

    pub fn divider(&mut self) -> &mut Self {
        self.blocks.push(BlockNode::Divider);
        self
    }

    /// Append another document's blocks (directions must already agree).
    pub fn extend(&mut self, other: Document) -> &mut Self {
        self.blocks.extend(other.blocks);
        self
    }

    /// Concatenated text of every block, for content assertions.
    #[must_use]
    pub fn flat_text(&self) -> String {
        let mut out = String::new();
        for block in &self.blocks {
            match block {
                BlockNode::Heading { text, .. } => out.push_str(text),
                BlockNode::Paragraph(spans) => {
                    for span in spans {
                        out.push_str(&span.text);
                    }
                }
                BlockNode::Bullets(items) => {
                    for item in items {
                        out.push_str(item);
                        out.push('\n');
                    }
                }
                BlockNode::KeyValues(rows) => {
                    for (k, v) in rows {
                        out.push_str(k);
                        out.push(' ');
                        out.push_str(v);
                        out.push('\n');
                    }
                }
                BlockNode::Table { headers, rows } => {
                    for cell in headers.iter().chain(rows.iter().flatten()) {
                        out.push_str(cell);
                        out.push(' ');
                    }
                }
                BlockNode::Meter {
                    label, annotation, ..
                } => {
                    out.push_str(label);
                    if let Some(a) = annotation {
                        out.push(' ');
                        out.push_str(a);
                    }
                }
                BlockNode::TabStrip { labels, .. } => {
                    for label in labels {
                        out.push_str(label);
                        out.push(' ');
                    }
                }
                BlockNode::ChatLog(lines) => {
                    for line in lines {
                        out.push_str(&line.author);
                        out.push(' ');
                        out.push_str(&line.body);
                        out.push('\n');
                    }
                }
                BlockNode::Divider => {}
            }
            out.push('\n');
        }
        out
    }
}
