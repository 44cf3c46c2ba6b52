//! Lexical helpers shared by the scanner and the structural compiler
//!
//! Both walk the same raw text independently, so the rules for identifiers,
//! brace balancing and `[Origin]` headers live here once. Everything works on
//! bytes: every delimiter is ASCII, and UTF-8 continuation bytes never collide
//! with ASCII, so byte positions returned here are always char boundaries.

pub(crate) const ORIGIN_MARKER: &str = "[Origin]";

pub(crate) fn is_ident_start(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_'
}

pub(crate) fn is_ident_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_' || byte == b'-'
}

/// Whether the structural walk reads an identifier starting at `pos`
///
/// The walk skips leading digits and dashes of a word one byte at a time and
/// starts the identifier at the first byte that can begin one. So `1style` and
/// `-style` start an identifier at the `s`, while `mystyle` and `_style` do not.
pub(crate) fn starts_identifier(bytes: &[u8], pos: usize) -> bool {
    if !bytes.get(pos).copied().is_some_and(is_ident_start) {
        return false;
    }
    !bytes[..pos]
        .iter()
        .rev()
        .take_while(|&&b| is_ident_byte(b))
        .any(|&b| is_ident_start(b))
}

/// Position of the first non-whitespace byte at or after `pos`
pub(crate) fn skip_whitespace(bytes: &[u8], mut pos: usize) -> usize {
    while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
        pos += 1;
    }
    pos
}

/// End of the identifier starting at `pos` (equal to `pos` if there is none)
pub(crate) fn identifier_end(bytes: &[u8], pos: usize) -> usize {
    if pos >= bytes.len() || !is_ident_start(bytes[pos]) {
        return pos;
    }
    let mut end = pos + 1;
    while end < bytes.len() && is_ident_byte(bytes[end]) {
        end += 1;
    }
    end
}

/// Find the `}` that closes the `{` at `open`
///
/// A plain depth counter: braces inside quoted strings or comments are counted
/// like any other brace.
pub(crate) fn match_brace(bytes: &[u8], open: usize) -> Option<usize> {
    debug_assert_eq!(bytes.get(open), Some(&b'{'));
    let mut depth = 0usize;
    for (offset, &byte) in bytes[open..].iter().enumerate() {
        match byte {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(open + offset);
                }
            }
            _ => {}
        }
    }
    None
}

/// `@Kind {` following an `[Origin]` marker
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct OriginHeader<'a> {
    pub keyword: &'a str,
    /// Position of the `@`
    pub at: usize,
    /// Position of the opening brace
    pub open: usize,
}

/// Parse the `@Kind {` part of an origin declaration
///
/// `pos` points just past the `[Origin]` marker.
pub(crate) fn origin_header(text: &str, pos: usize) -> Option<OriginHeader<'_>> {
    let bytes = text.as_bytes();
    let at = skip_whitespace(bytes, pos);
    if bytes.get(at) != Some(&b'@') {
        return None;
    }
    let keyword_end = identifier_end(bytes, at + 1);
    if keyword_end == at + 1 {
        return None;
    }
    let open = skip_whitespace(bytes, keyword_end);
    if bytes.get(open) != Some(&b'{') {
        return None;
    }
    Some(OriginHeader {
        keyword: &text[at + 1..keyword_end],
        at,
        open,
    })
}
