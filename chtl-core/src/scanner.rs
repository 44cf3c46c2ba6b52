//! Fragment scanner
//!
//! Partitions a CHTL source into the fragments the dispatcher routes to
//! compilers. The scanner makes three independent passes over the same text:
//!
//!     1. the whole source as one Structural fragment,
//!     2. local `style { }` and `script { }` blocks, at any nesting depth,
//!     3. `[Origin] @Style { }` and `[Origin] @JavaScript { }` blocks.
//!
//! Emission order follows the passes, not the document: all local blocks come
//! before all origin blocks. Consumers that need the document position must use
//! the fragment range.
//!
//! The local blocks stay inside the Structural fragment as well. The structural
//! compiler skips over them, and their compiled output is hoisted into the
//! document's top-level style and script regions by the merger.
//!
//! Brace balancing is a plain depth counter (see [`crate::syntax::match_brace`]).
//! When an opener has no closer the attempt is abandoned and scanning resumes
//! one byte later; reporting the defect is left to the structural compiler,
//! which meets the same opener.

use crate::fragment::{Fragment, FragmentKind, OriginKind};
use crate::syntax::{
    match_brace, origin_header, skip_whitespace, starts_identifier, ORIGIN_MARKER,
};
use log::debug;

/// Local block keywords and the fragment kind their body becomes
const LOCAL_BLOCKS: &[(&str, FragmentKind)] = &[
    ("style", FragmentKind::Style),
    ("script", FragmentKind::ScriptDialect),
];

/// Partition `source` into fragments
pub fn scan(source: &str) -> Vec<Fragment<'_>> {
    let mut fragments = vec![Fragment::new(
        FragmentKind::Structural,
        source,
        0..source.len(),
    )];
    scan_local_blocks(source, &mut fragments);
    scan_origin_blocks(source, &mut fragments);
    debug!(
        "scanned {} bytes into {} fragment(s)",
        source.len(),
        fragments.len()
    );
    fragments
}

fn scan_local_blocks<'src>(source: &'src str, fragments: &mut Vec<Fragment<'src>>) {
    let bytes = source.as_bytes();
    let mut pos = 0;
    while pos < bytes.len() {
        let Some((keyword, kind)) = local_keyword_at(bytes, pos) else {
            pos += 1;
            continue;
        };
        let open = skip_whitespace(bytes, pos + keyword.len());
        if bytes.get(open) != Some(&b'{') {
            pos += keyword.len();
            continue;
        }
        match match_brace(bytes, open) {
            Some(close) => {
                fragments.push(Fragment::new(kind, source, open + 1..close));
                pos = close + 1;
            }
            None => {
                debug!("abandoning unterminated `{keyword}` block at byte {pos}");
                pos += 1;
            }
        }
    }
}

/// The local block keyword starting at `pos`, if the structural walk would
/// read it as an identifier there
fn local_keyword_at(bytes: &[u8], pos: usize) -> Option<(&'static str, FragmentKind)> {
    LOCAL_BLOCKS
        .iter()
        .copied()
        .find(|(keyword, _)| bytes[pos..].starts_with(keyword.as_bytes()))
        .filter(|_| starts_identifier(bytes, pos))
}

fn scan_origin_blocks<'src>(source: &'src str, fragments: &mut Vec<Fragment<'src>>) {
    let bytes = source.as_bytes();
    let mut pos = 0;
    while let Some(found) = source[pos..].find(ORIGIN_MARKER) {
        let marker = pos + found;
        let Some(header) = origin_header(source, marker + ORIGIN_MARKER.len()) else {
            pos = marker + 1;
            continue;
        };
        let Some(close) = match_brace(bytes, header.open) else {
            debug!("abandoning unterminated origin block at byte {marker}");
            pos = marker + 1;
            continue;
        };

        let body = header.open + 1..close;
        match OriginKind::from_keyword(header.keyword) {
            Some(OriginKind::Style) => fragments.push(
                Fragment::new(FragmentKind::Style, source, body).with_origin(OriginKind::Style),
            ),
            Some(OriginKind::JavaScript) => fragments.push(
                Fragment::new(FragmentKind::Script, source, body)
                    .with_origin(OriginKind::JavaScript),
            ),
            // Html is lowered inline by the structural compiler
            Some(OriginKind::Html) => {}
            None => debug!(
                "skipping origin block of unknown kind `{}` at byte {marker}",
                header.keyword
            ),
        }
        pos = close + 1;
    }
}
