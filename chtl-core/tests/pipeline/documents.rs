//! Whole-document output of the pipeline

use crate::common::{block, body, compile_doc};
use chtl_core::{compile_with_options, CompileOptions};
use insta::assert_snapshot;

#[test]
fn markup_only_source_gets_a_scaffold() {
    let document = compile_doc(r#"div { id: "x"; text { "Hi" } }"#);

    assert_eq!(
        document.html,
        "<!DOCTYPE html>\n<html>\n<head>\n</head>\n<body>\n<div id=\"x\">Hi</div>\n</body>\n</html>\n"
    );
    assert!(document.css.is_empty());
    assert!(document.js.is_empty());
    assert!(document.diagnostics.is_empty());
}

#[test]
fn nested_page_structure() {
    let source = r#"
        section {
            header { class: top; h1 { text { "Welcome" } } }
            main {
                p { class = "lead"; text { "Fish & Chips" } }
                img { src: "/logo.png"; alt: "Logo"; }
            }
        }
    "#;
    let document = compile_doc(source);
    assert_snapshot!(
        body(&document.html),
        @r#"<section><header class="top"><h1>Welcome</h1></header><main><p class="lead">Fish &amp; Chips</p><img src="/logo.png" alt="Logo" /></main></section>"#
    );
}

#[test]
fn attribute_forms_are_equivalent() {
    let colon = compile_doc("div { k : v; }");
    let equals = compile_doc("div { k = v; }");
    assert_eq!(colon.html, equals.html);
    assert_eq!(body(&colon.html), r#"<div k="v"></div>"#);
}

#[test]
fn inline_style_attribute_is_raw() {
    let document = compile_doc("div { style: color:red; }");
    assert_snapshot!(body(&document.html), @r#"<div style="color:red"></div>"#);
    assert!(block(&document.html, "style").is_none());
}

#[test]
fn origin_html_is_emitted_unescaped() {
    let document = compile_doc("[Origin] @Html { <b>raw</b> }");
    assert!(document.html.contains("<b>raw</b>"));
    assert!(!document.html.contains("&lt;b&gt;"));
}

#[test]
fn complete_document_is_not_rewrapped() {
    let source = r#"
        html {
            head { title { text { "Page" } } }
            body { div { id: app; } }
        }
        script { {{#app}}->focus(); }
    "#;
    let document = compile_doc(source);

    assert!(document.html.starts_with("<html><head><title>Page</title></head>"));
    assert_eq!(document.html.matches("<html").count(), 1);
    assert!(!document.html.contains("<!DOCTYPE"));
    assert!(document.html.ends_with("</script>"));
    assert!(document.html.contains("__CHTL__sel(\"#app\").focus();"));
}

#[test]
fn raw_doctype_from_origin_counts_as_complete() {
    let source = "[Origin] @Html {<!DOCTYPE html><html><body></body></html>}\n\
                  [Origin] @Style { body { margin: 0; } }";
    let document = compile_doc(source);
    assert_eq!(
        document.html,
        "<!DOCTYPE html><html><body></body></html>\n<style>\n body { margin: 0; } \n</style>"
    );
}

#[test]
fn scaffold_honors_title_and_lang() {
    let options = CompileOptions::default()
        .with_title("Demo")
        .with_lang("fr");
    let document = compile_with_options("p { }", &options);
    assert!(document
        .html
        .starts_with("<!DOCTYPE html>\n<html lang=\"fr\">\n<head>\n<title>Demo</title>\n"));
    assert_eq!(body(&document.html), "<p></p>");
}

#[test]
fn generator_comments_reach_the_output() {
    let document = compile_doc("div {\n    -- main container\n    text { hi }\n}");
    assert_snapshot!(body(&document.html), @"<div><!-- main container -->hi</div>");
}
