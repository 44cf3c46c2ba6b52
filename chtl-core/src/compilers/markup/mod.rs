//! Structural compiler (CHTL markup → HTML)
//!
//! Lowers the element/attribute/text grammar of the Structural fragment into
//! HTML text. The walk lives in [`parser`]; this module renders elements.
//!
//! # Grammar
//!
//! ```text
//! Document  := (OriginHtml | Text | Comment | LocalBlock | Element)*
//! Element   := Identifier '{' (Attribute | Text | OriginHtml | Comment | Element | LocalBlock)* '}'
//! Attribute := Identifier (':' | '=') Value ';'?
//! Value     := QuotedString | literal up to ';', newline or '}'
//! Text      := 'text' '{' ... '}'
//! LocalBlock:= ('style' | 'script') '{' ... '}'
//! OriginHtml:= '[Origin]' '@Html' '{' ... '}'
//! Comment   := '//' line | '/*' ... '*/' | '--' line
//! ```
//!
//! # Mapping
//!
//! | CHTL                          | HTML                                   |
//! |-------------------------------|----------------------------------------|
//! | `div { ... }`                 | `<div>...</div>`                       |
//! | `img { src: a.png; }`         | `<img src="a.png" />` (void elements)  |
//! | `id: "x";` / `id = x;`        | `id="x"` (value escaped)               |
//! | `style: color:red;`           | `style="color:red"` (never escaped)    |
//! | `text { "A & B" }`            | `A &amp; B`                            |
//! | `[Origin] @Html { <b>x</b> }` | `<b>x</b>` verbatim                    |
//! | `-- note`                     | `<!-- note -->`                        |
//! | `// note`, `/* note */`       | nothing                                |
//! | `style { }`, `script { }`     | nothing here, hoisted by the merger    |
//!
//! Attributes render in source order in the opening tag, even when they are
//! written after child content.
//!
//! # Recovery
//!
//! Nothing aborts. Unrecognized input is skipped with a `StructuralSkip`
//! warning, an unknown `[Origin]` kind is discarded with an `UnknownOriginKind`
//! warning, and a block with no closing brace runs to the end of the input with
//! an `UnterminatedBlock` error. Elements nested more than [`parser::MAX_DEPTH`]
//! levels deep are skipped whole with a `StructuralSkip` warning.

mod parser;

use crate::compiler::FragmentCompiler;
use crate::diagnostic::Diagnostics;
use crate::escape::escape_html;
use crate::fragment::Fragment;
use crate::options::CompileOptions;
use crate::unit::CompilationUnit;
use parser::MarkupParser;

/// Elements that never have a closing tag
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Compiler for Structural fragments
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkupCompiler;

impl FragmentCompiler for MarkupCompiler {
    fn name(&self) -> &str {
        "markup"
    }

    fn description(&self) -> &str {
        "CHTL element/attribute/text markup to HTML"
    }

    fn compile(&self, fragment: &Fragment<'_>, _options: &CompileOptions) -> CompilationUnit {
        let mut diagnostics = Diagnostics::new(fragment.start());
        let markup = MarkupParser::new(fragment.content, &mut diagnostics).parse_document();
        CompilationUnit::new(fragment.kind)
            .with_markup(markup)
            .with_diagnostics(diagnostics)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Attribute {
    name: String,
    value: String,
}

fn render_element(tag: &str, attributes: &[Attribute], content: &str, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    for attribute in attributes {
        out.push(' ');
        out.push_str(&attribute.name);
        out.push_str("=\"");
        // inline CSS is written as-is
        if attribute.name == "style" {
            out.push_str(&attribute.value);
        } else {
            out.push_str(&escape_html(&attribute.value));
        }
        out.push('"');
    }

    if content.is_empty() && VOID_ELEMENTS.contains(&tag) {
        out.push_str(" />");
        return;
    }

    out.push('>');
    out.push_str(content);
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
