//! Malformed input still compiles, with diagnostics

use crate::common::{body, compile_doc};
use chtl_core::{DiagnosticKind, Severity};

#[test]
fn unmatched_brace_in_style_skips_only_that_block() {
    let source = "div { text { \"ok\" } }\nstyle { .a { color: red; }\nscript { {{#b}}->focus() }";
    let document = compile_doc(source);

    assert_eq!(body(&document.html), "<div>ok</div>");
    assert!(document.css.is_empty());
    assert!(!document.html.contains("<style>"));
    assert!(document.js.contains("__CHTL__sel(\"#b\").focus()"));

    assert_eq!(document.diagnostics.len(), 1);
    let diagnostic = &document.diagnostics[0];
    assert_eq!(diagnostic.kind, DiagnosticKind::UnterminatedBlock);
    assert_eq!(diagnostic.severity, Severity::Error);
    assert_eq!(diagnostic.offset, 22);
}

#[test]
fn unrecognized_input_is_reported_with_offset() {
    let document = compile_doc("div { ??? text { \"x\" } }");
    assert_eq!(body(&document.html), "<div>x</div>");
    assert_eq!(document.warnings().count(), 1);
    assert_eq!(document.diagnostics[0].kind, DiagnosticKind::StructuralSkip);
    assert_eq!(document.diagnostics[0].offset, 6);
    assert!(!document.has_errors());
}

#[test]
fn unknown_origin_kind_is_dropped_with_warning() {
    let document = compile_doc("[Origin] @Svelte { <x/> }\np { }");
    assert_eq!(body(&document.html), "<p></p>");
    assert!(!document.html.contains("<x/>"));
    assert_eq!(document.diagnostics.len(), 1);
    assert_eq!(
        document.diagnostics[0].kind,
        DiagnosticKind::UnknownOriginKind
    );
}

#[test]
fn unterminated_selector_does_not_affect_markup() {
    let document = compile_doc("p { text { a } }\nscript { {{.open->x } } }");
    assert_eq!(body(&document.html), "<p>a</p>");
    assert_eq!(document.js, " {{.open.x } } ");
    assert_eq!(document.diagnostics.len(), 1);
    assert_eq!(document.diagnostics[0].severity, Severity::Warning);
    // offset of `{{` in the whole source
    assert_eq!(document.diagnostics[0].offset, 26);
}

#[test]
fn unclosed_element_renders_what_was_parsed() {
    let document = compile_doc("main { section { text { \"partial\" }");
    assert_eq!(
        body(&document.html),
        "<main><section>partial</section></main>"
    );
    assert_eq!(document.errors().count(), 2);
}

#[test]
fn empty_source_is_an_empty_scaffold() {
    let document = compile_doc("");
    assert_eq!(
        document.html,
        "<!DOCTYPE html>\n<html>\n<head>\n</head>\n<body>\n</body>\n</html>\n"
    );
    assert!(document.diagnostics.is_empty());
}

#[test]
fn very_deep_nesting_degrades_instead_of_aborting() {
    let source = "a{".repeat(20_000) + &"}".repeat(20_000);
    let document = compile_doc(&source);

    assert!(body(&document.html).starts_with("<a><a>"));
    assert!(!document.has_errors());
    assert_eq!(document.warnings().count(), 1);
    assert_eq!(document.diagnostics[0].kind, DiagnosticKind::StructuralSkip);
}

#[test]
fn very_deep_unclosed_nesting_degrades_instead_of_aborting() {
    let document = compile_doc(&"a{".repeat(200_000));
    assert!(document.has_errors());
    assert!(document
        .diagnostics
        .iter()
        .all(|d| d.kind == DiagnosticKind::UnterminatedBlock));
}

#[test]
fn local_block_after_stray_digit_is_still_hoisted() {
    let document = compile_doc("div { 1style { .a { color: red; } } }");
    assert_eq!(body(&document.html), "<div></div>");
    assert_eq!(document.css, " .a { color: red; } ");
    assert_eq!(document.diagnostics.len(), 1);
    assert_eq!(document.diagnostics[0].kind, DiagnosticKind::StructuralSkip);
    assert_eq!(document.diagnostics[0].offset, 6);
}

#[test]
fn local_block_after_stray_dash_is_still_hoisted() {
    let document = compile_doc("div { -style { .b { } } -script { go(); } }");
    assert_eq!(body(&document.html), "<div></div>");
    assert_eq!(document.css, " .b { } ");
    assert_eq!(document.js, " go(); ");
}
