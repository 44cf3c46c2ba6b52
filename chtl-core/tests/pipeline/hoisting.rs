//! Local and origin style/script blocks end up in the top-level blocks

use crate::common::{block, body, compile_doc};
use chtl_core::compilers::script::RUNTIME_PRELUDE;
use chtl_core::{compile_with_options, CompileOptions};

#[test]
fn sibling_styles_at_different_depths_are_joined() {
    let source = r#"
        div {
            style { .a { color: red; } }
            section {
                p { style { .b { color: blue; } } }
            }
        }
    "#;
    let document = compile_doc(source);

    assert_eq!(
        document.css,
        " .a { color: red; } \n .b { color: blue; } "
    );
    assert_eq!(block(&document.html, "style"), Some(document.css.as_str()));
    assert_eq!(document.html.matches("<style>").count(), 1);
    assert_eq!(body(&document.html), "<div><section><p></p></section></div>");

    // hoisted into the head, ahead of the body
    let style_at = document.html.find("<style>").unwrap();
    let body_at = document.html.find("<body>").unwrap();
    assert!(style_at < body_at);
}

#[test]
fn local_script_is_lowered_with_prelude() {
    let document = compile_doc("button { script{ {{#app}}->click() } }");

    assert!(document.js.starts_with(RUNTIME_PRELUDE));
    assert_eq!(
        document.js,
        format!("{RUNTIME_PRELUDE} __CHTL__sel(\"#app\").click() ")
    );
    assert_eq!(body(&document.html), "<button></button>");

    // script block comes after the markup
    let markup_at = document.html.find("<button>").unwrap();
    let script_at = document.html.find("<script>").unwrap();
    assert!(markup_at < script_at);
}

#[test]
fn prelude_can_be_switched_off() {
    let options = CompileOptions::default().without_prelude();
    let document = compile_with_options("script { {{.x}}->show(); }", &options);
    assert_eq!(document.js, " __CHTL__sel(\".x\").show(); ");
}

#[test]
fn origin_blocks_follow_local_blocks() {
    let source = r#"
        [Origin] @Style { html { font-size: 16px; } }
        div { style { .late { } } }
        [Origin] @JavaScript { window.ready = true; }
        p { script { go(); } }
    "#;
    let document = compile_doc(source);

    assert_eq!(
        document.css,
        " .late { } \n html { font-size: 16px; } "
    );
    assert_eq!(document.js, " go(); \n window.ready = true; ");
}

#[test]
fn origin_javascript_is_not_lowered() {
    let document = compile_doc("[Origin] @JavaScript { a->b; {{.x}} }");
    assert_eq!(document.js, " a->b; {{.x}} ");
    assert!(!document.js.contains(RUNTIME_PRELUDE));
}

#[test]
fn style_text_is_passed_through_untouched() {
    let source = "style {\n  a > b { content: \"<&>\"; }\n}";
    let document = compile_doc(source);
    assert_eq!(document.css, "\n  a > b { content: \"<&>\"; }\n");
}
