//! Cursor walk over the structural grammar
//!
//! One pass, recursive descent, no token stream. Each construct is recognized
//! from the bytes at the cursor; anything unrecognized is skipped and reported,
//! and the walk carries on. An opener whose closer never comes swallows the
//! rest of the input, which is what a missing brace means.

use super::{render_element, Attribute};
use crate::diagnostic::{DiagnosticKind, Diagnostics};
use crate::escape::escape_html;
use crate::fragment::OriginKind;
use crate::syntax::{
    identifier_end, is_ident_start, match_brace, origin_header, skip_whitespace, ORIGIN_MARKER,
};
use log::trace;

/// Deepest element nesting the walk descends into
pub(super) const MAX_DEPTH: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    Document,
    Element,
}

pub(super) struct MarkupParser<'a, 'd> {
    text: &'a str,
    bytes: &'a [u8],
    pos: usize,
    diagnostics: &'d mut Diagnostics,
    /// Elements currently open around the cursor
    depth: usize,
    /// End of the most recent skipped run, so adjacent skips fold into one report
    last_skip_end: Option<usize>,
}

impl<'a, 'd> MarkupParser<'a, 'd> {
    pub(super) fn new(text: &'a str, diagnostics: &'d mut Diagnostics) -> Self {
        Self {
            text,
            bytes: text.as_bytes(),
            pos: 0,
            diagnostics,
            depth: 0,
            last_skip_end: None,
        }
    }

    pub(super) fn parse_document(mut self) -> String {
        let mut out = String::new();
        let mut attributes = Vec::new();
        self.parse_content(Scope::Document, &mut out, &mut attributes);
        out
    }

    /// Parse items until the scope's closing brace or end of input
    ///
    /// Returns whether the closing brace was found.
    fn parse_content(
        &mut self,
        scope: Scope,
        out: &mut String,
        attributes: &mut Vec<Attribute>,
    ) -> bool {
        loop {
            self.pos = skip_whitespace(self.bytes, self.pos);
            let Some(&byte) = self.bytes.get(self.pos) else {
                return false;
            };
            match byte {
                b'}' if scope == Scope::Element => {
                    self.pos += 1;
                    return true;
                }
                b'/' if self.peek(1) == Some(b'/') => self.skip_line_comment(),
                b'/' if self.peek(1) == Some(b'*') => self.skip_block_comment(),
                b'-' if self.peek(1) == Some(b'-') => self.generator_comment(out),
                b'[' if self.text[self.pos..].starts_with(ORIGIN_MARKER) => {
                    self.parse_origin(out)
                }
                b if is_ident_start(b) => self.parse_identifier_item(scope, out, attributes),
                _ => {
                    let start = self.pos;
                    self.pos += self.char_len();
                    self.skipped(start);
                }
            }
        }
    }

    /// An identifier opens an element, a text/style/script block or an attribute
    fn parse_identifier_item(
        &mut self,
        scope: Scope,
        out: &mut String,
        attributes: &mut Vec<Attribute>,
    ) {
        let text = self.text;
        let start = self.pos;
        let name_end = identifier_end(self.bytes, start);
        let name = &text[start..name_end];
        let next = skip_whitespace(self.bytes, name_end);

        match self.bytes.get(next) {
            Some(b'{') => {
                self.pos = next;
                match name {
                    "text" => self.parse_text_block(start, out),
                    "style" | "script" => self.discard_local_block(start, name),
                    _ => self.parse_element(start, name, out),
                }
            }
            Some(b':' | b'=') => {
                self.pos = next + 1;
                let value = self.parse_value();
                match scope {
                    Scope::Element => attributes.push(Attribute {
                        name: name.to_string(),
                        value,
                    }),
                    Scope::Document => self.diagnostics.warn(
                        DiagnosticKind::StructuralSkip,
                        start,
                        format!("attribute `{name}` outside of an element was dropped"),
                    ),
                }
            }
            _ => {
                self.pos = name_end;
                self.skipped(start);
            }
        }
    }

    /// `name { ... }` with the cursor on the opening brace
    fn parse_element(&mut self, start: usize, name: &str, out: &mut String) {
        if self.depth == MAX_DEPTH {
            self.skip_too_deep(start, name);
            return;
        }
        self.pos += 1;
        let mut attributes = Vec::new();
        let mut content = String::new();
        self.depth += 1;
        let closed = self.parse_content(Scope::Element, &mut content, &mut attributes);
        self.depth -= 1;
        if !closed {
            self.diagnostics.error(
                DiagnosticKind::UnterminatedBlock,
                start,
                format!("element `{name}` has no closing brace"),
            );
        }
        render_element(name, &attributes, &content, out);
    }

    /// Drop an element nested past [`MAX_DEPTH`], cursor on its opening brace
    fn skip_too_deep(&mut self, start: usize, name: &str) {
        match match_brace(self.bytes, self.pos) {
            Some(close) => {
                self.diagnostics.warn(
                    DiagnosticKind::StructuralSkip,
                    start,
                    format!("element `{name}` nests deeper than {MAX_DEPTH} levels; skipped"),
                );
                self.pos = close + 1;
            }
            None => {
                self.diagnostics.error(
                    DiagnosticKind::UnterminatedBlock,
                    start,
                    format!("element `{name}` has no closing brace"),
                );
                self.pos = self.bytes.len();
            }
        }
    }

    /// `text { ... }` with the cursor on the opening brace
    fn parse_text_block(&mut self, start: usize, out: &mut String) {
        let text = self.text;
        let open = self.pos;
        let body = match match_brace(self.bytes, open) {
            Some(close) => {
                self.pos = close + 1;
                &text[open + 1..close]
            }
            None => {
                self.diagnostics.error(
                    DiagnosticKind::UnterminatedBlock,
                    start,
                    "`text` block has no closing brace",
                );
                self.pos = self.bytes.len();
                &text[open + 1..]
            }
        };
        out.push_str(&escape_html(strip_quotes(body.trim())));
    }

    /// Local `style`/`script` bodies are compiled from their own fragments
    fn discard_local_block(&mut self, start: usize, name: &str) {
        match match_brace(self.bytes, self.pos) {
            Some(close) => {
                trace!("hoisting local `{name}` block at byte {start}");
                self.pos = close + 1;
            }
            None => {
                self.diagnostics.error(
                    DiagnosticKind::UnterminatedBlock,
                    start,
                    format!("local `{name}` block has no closing brace"),
                );
                self.pos = self.bytes.len();
            }
        }
    }

    /// `[Origin] @Kind { ... }` with the cursor on the marker
    fn parse_origin(&mut self, out: &mut String) {
        let text = self.text;
        let marker = self.pos;
        let after = marker + ORIGIN_MARKER.len();
        let Some(header) = origin_header(text, after) else {
            self.pos = after;
            self.skipped(marker);
            return;
        };
        let Some(close) = match_brace(self.bytes, header.open) else {
            self.diagnostics.error(
                DiagnosticKind::UnterminatedBlock,
                marker,
                format!("`[Origin] @{}` block has no closing brace", header.keyword),
            );
            self.pos = self.bytes.len();
            return;
        };

        match OriginKind::from_keyword(header.keyword) {
            Some(OriginKind::Html) => out.push_str(&text[header.open + 1..close]),
            // extracted by the scanner's origin pass
            Some(OriginKind::Style | OriginKind::JavaScript) => {}
            None => self.diagnostics.warn(
                DiagnosticKind::UnknownOriginKind,
                header.at,
                format!("unknown origin kind `@{}`; block discarded", header.keyword),
            ),
        }
        self.pos = close + 1;
    }

    /// Attribute value after the `:` or `=`, consuming an optional `;`
    fn parse_value(&mut self) -> String {
        self.skip_inline_space();
        let value = match self.bytes.get(self.pos) {
            Some(&quote) if quote == b'"' || quote == b'\'' => self.quoted_value(quote),
            _ => self.bare_value(),
        };
        self.skip_inline_space();
        if self.bytes.get(self.pos) == Some(&b';') {
            self.pos += 1;
        }
        value
    }

    fn quoted_value(&mut self, quote: u8) -> String {
        let body_start = self.pos + 1;
        let found = self.bytes[body_start..]
            .iter()
            .position(|&b| b == quote || b == b'\n')
            .map(|i| body_start + i);
        match found {
            Some(end) if self.bytes[end] == quote => {
                self.pos = end + 1;
                self.text[body_start..end].to_string()
            }
            _ => {
                let end = found.unwrap_or(self.bytes.len());
                self.diagnostics.warn(
                    DiagnosticKind::StructuralSkip,
                    self.pos,
                    "unterminated string literal; value runs to end of line",
                );
                self.pos = end;
                self.text[body_start..end].trim_end().to_string()
            }
        }
    }

    /// Unquoted literal up to `;`, newline or `}`
    fn bare_value(&mut self) -> String {
        let start = self.pos;
        let end = self.bytes[start..]
            .iter()
            .position(|&b| matches!(b, b';' | b'\n' | b'}'))
            .map_or(self.bytes.len(), |i| start + i);
        self.pos = end;
        self.text[start..end].trim().to_string()
    }

    fn skip_line_comment(&mut self) {
        self.pos = self.line_end(self.pos);
    }

    fn skip_block_comment(&mut self) {
        match self.text[self.pos + 2..].find("*/") {
            Some(i) => self.pos += 2 + i + 2,
            None => {
                self.diagnostics.error(
                    DiagnosticKind::UnterminatedBlock,
                    self.pos,
                    "block comment has no closing `*/`",
                );
                self.pos = self.bytes.len();
            }
        }
    }

    /// `-- note` becomes `<!-- note -->` in the output
    fn generator_comment(&mut self, out: &mut String) {
        let body_start = self.pos + 2;
        let end = self.line_end(body_start);
        out.push_str("<!-- ");
        out.push_str(self.text[body_start..end].trim());
        out.push_str(" -->");
        self.pos = end;
    }

    /// Record that `[start, pos)` was skipped
    fn skipped(&mut self, start: usize) {
        let folds = self
            .last_skip_end
            .is_some_and(|end| end <= start && self.text[end..start].trim().is_empty());
        if !folds {
            let preview: String = self.text[start..self.pos].chars().take(24).collect();
            self.diagnostics.warn(
                DiagnosticKind::StructuralSkip,
                start,
                format!("skipped unrecognized input `{preview}`"),
            );
        }
        self.last_skip_end = Some(self.pos);
    }

    fn skip_inline_space(&mut self) {
        while matches!(self.bytes.get(self.pos), Some(b' ' | b'\t')) {
            self.pos += 1;
        }
    }

    fn line_end(&self, from: usize) -> usize {
        self.bytes[from..]
            .iter()
            .position(|&b| b == b'\n')
            .map_or(self.bytes.len(), |i| from + i)
    }

    fn peek(&self, ahead: usize) -> Option<u8> {
        self.bytes.get(self.pos + ahead).copied()
    }

    fn char_len(&self) -> usize {
        self.text[self.pos..]
            .chars()
            .next()
            .map_or(1, char::len_utf8)
    }
}

/// Strip one matching pair of surrounding quotes
fn strip_quotes(text: &str) -> &str {
    let bytes = text.as_bytes();
    match (bytes.first(), bytes.last()) {
        (Some(&first), Some(&last))
            if bytes.len() >= 2 && first == last && (first == b'"' || first == b'\'') =>
        {
            &text[1..text.len() - 1]
        }
        _ => text,
    }
}
