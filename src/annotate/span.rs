use serde::{Deserialize, Serialize};

/// A half-open `[start, end)` interval in code-point offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Record)]
pub struct TextRange {
    pub start: u64,
    pub end: u64,
}

impl TextRange {
    #[must_use]
    pub const fn contains(&self, pos: u64) -> bool {
        pos >= self.start && pos < self.end
    }

    #[must_use]
    pub const fn intersects(&self, other: Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    #[must_use]
    pub const fn len(&self) -> u64 {
        self.end - self.start
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Tag for a run of annotated text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, uniffi::Enum)]
pub enum SpanKind {
    Plain,
    Emphasized,
}

/// A maximal tagged run of the source text. Offsets are code points,
/// `end` exclusive; `text` is the literal substring of the source in
/// that range, original casing retained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, uniffi::Record)]
pub struct Span {
    pub kind: SpanKind,
    pub start: u64,
    pub end: u64,
    pub text: String,
}

impl Span {
    #[must_use]
    pub const fn plain(start: u64, end: u64, text: String) -> Self {
        Self {
            kind: SpanKind::Plain,
            start,
            end,
            text,
        }
    }

    #[must_use]
    pub const fn emphasized(start: u64, end: u64, text: String) -> Self {
        Self {
            kind: SpanKind::Emphasized,
            start,
            end,
            text,
        }
    }

    #[must_use]
    pub const fn range(&self) -> TextRange {
        TextRange {
            start: self.start,
            end: self.end,
        }
    }
}

macro_rules! impl_kind_helpers {
    ($($variant:ident),*) => {
        $(
            impl Span {
                paste::paste! {
                    #[must_use]
                    pub const fn [<is_ $variant:snake>](&self) -> bool {
                        matches!(self.kind, SpanKind::$variant)
                    }
                }
            }
        )*
    };
}

impl_kind_helpers!(Plain, Emphasized);
