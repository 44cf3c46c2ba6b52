//! Property tests: the pipeline accepts any input.

use chtl_core::{compile, scan, FragmentKind};
use proptest::prelude::*;

/// Strings dense in the characters the grammar cares about
fn chtl_like() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just("{".to_string()),
            Just("}".to_string()),
            Just("{{".to_string()),
            Just("}}".to_string()),
            Just("style".to_string()),
            Just("script".to_string()),
            Just("text".to_string()),
            Just("[Origin]".to_string()),
            Just("@Html".to_string()),
            Just("@Style".to_string()),
            Just("@JavaScript".to_string()),
            Just("->".to_string()),
            Just("--".to_string()),
            Just("/*".to_string()),
            Just("//".to_string()),
            "[a-z:;=\"' \n]{1,4}",
            "\\PC{1,2}",
        ],
        0..48,
    )
    .prop_map(|parts| parts.concat())
}

fn is_balanced(text: &str) -> bool {
    let mut depth = 0i64;
    for byte in text.bytes() {
        match byte {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth < 0 {
                    return false;
                }
            }
            _ => {}
        }
    }
    depth == 0
}

proptest! {
    #[test]
    fn compile_never_panics_on_arbitrary_text(source in "\\PC{0,200}") {
        let _ = compile(&source);
    }

    #[test]
    fn compile_never_panics_on_chtl_like_text(source in chtl_like()) {
        let document = compile(&source);
        prop_assert!(!document.html.is_empty());
    }

    #[test]
    fn extracted_fragments_are_balanced_slices(source in chtl_like()) {
        let fragments = scan(&source);
        prop_assert_eq!(fragments[0].kind, FragmentKind::Structural);
        prop_assert_eq!(fragments[0].content, source.as_str());
        for fragment in &fragments[1..] {
            prop_assert!(fragment.kind != FragmentKind::Structural);
            prop_assert_eq!(&source[fragment.range.clone()], fragment.content);
            prop_assert!(is_balanced(fragment.content));
        }
    }

    #[test]
    fn diagnostics_point_into_the_source(source in chtl_like()) {
        let document = compile(&source);
        for diagnostic in &document.diagnostics {
            prop_assert!(diagnostic.offset <= source.len());
        }
    }
}
