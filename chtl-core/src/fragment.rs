//! Typed, offset-addressed slices of source text
//!
//! A [`Fragment`] tells the dispatcher which compiler a region of the source is
//! destined for. Fragments borrow from the source and are never mutated.

use std::fmt;
use std::ops::Range;

/// Which compiler a fragment is routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FragmentKind {
    /// Element/attribute/text markup (always the whole source)
    Structural,
    /// CHTL JS: script with `->` and `{{selector}}` sugar
    ScriptDialect,
    /// Plain CSS
    Style,
    /// Plain JavaScript
    Script,
}

impl fmt::Display for FragmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FragmentKind::Structural => "structural",
            FragmentKind::ScriptDialect => "script-dialect",
            FragmentKind::Style => "style",
            FragmentKind::Script => "script",
        };
        f.write_str(name)
    }
}

/// Declared kind of an `[Origin] @Kind { ... }` block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OriginKind {
    Html,
    Style,
    JavaScript,
}

impl OriginKind {
    /// Recognize the identifier that follows `@` in an origin declaration
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "Html" => Some(OriginKind::Html),
            "Style" => Some(OriginKind::Style),
            "JavaScript" => Some(OriginKind::JavaScript),
            _ => None,
        }
    }
}

impl fmt::Display for OriginKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OriginKind::Html => "html",
            OriginKind::Style => "style",
            OriginKind::JavaScript => "javascript",
        };
        f.write_str(name)
    }
}

/// A region of the source destined for one compiler
///
/// `range` is half-open and addresses the original source; `content` is the
/// text at that range. Fragments are emitted per kind, not in document order,
/// so use `range` when the true position matters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment<'src> {
    pub kind: FragmentKind,
    pub range: Range<usize>,
    pub content: &'src str,
    /// Set for fragments extracted from `[Origin]` blocks
    pub origin: Option<OriginKind>,
}

impl<'src> Fragment<'src> {
    /// Slice `range` out of `source` as a fragment of the given kind
    ///
    /// `range` must lie on char boundaries; the scanner only produces ranges
    /// delimited by ASCII braces.
    pub fn new(kind: FragmentKind, source: &'src str, range: Range<usize>) -> Self {
        let content = &source[range.clone()];
        Self {
            kind,
            range,
            content,
            origin: None,
        }
    }

    pub fn with_origin(mut self, origin: OriginKind) -> Self {
        self.origin = Some(origin);
        self
    }

    pub fn start(&self) -> usize {
        self.range.start
    }

    pub fn end(&self) -> usize {
        self.range.end
    }
}
