//! Script-dialect compiler (CHTL JS → JavaScript)
//!
//! A text rewrite, not a parse:
//!
//!     1. every `->` becomes `.`
//!     2. every `{{ selector }}` becomes `__CHTL__sel("selector")`
//!     3. if any selector was lowered, the runtime prelude defining
//!        `__CHTL__sel` is prepended
//!
//! Neither step knows about string literals or comments, so `"a->b"` becomes
//! `"a.b"` and a `{{x}}` inside a comment is lowered too. An unterminated `{{`
//! is copied through to the end of the input and reported.

use crate::compiler::FragmentCompiler;
use crate::diagnostic::{DiagnosticKind, Diagnostics};
use crate::fragment::Fragment;
use crate::options::CompileOptions;
use crate::unit::CompilationUnit;

/// Global helper every lowered selector calls
pub const SELECTOR_HELPER: &str = "__CHTL__sel";

/// Defines [`SELECTOR_HELPER`]; a selector the DOM rejects yields `null`
pub const RUNTIME_PRELUDE: &str = "(function(){window.__CHTL__sel=function(selector){try{return document.querySelector(selector);}catch(e){return null;}};})();\n";

const SELECTOR_OPEN: &str = "{{";
const SELECTOR_CLOSE: &str = "}}";

/// Compiler for ScriptDialect fragments
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptDialectCompiler;

impl FragmentCompiler for ScriptDialectCompiler {
    fn name(&self) -> &str {
        "chtl-js"
    }

    fn description(&self) -> &str {
        "CHTL JS selector and arrow sugar to plain JavaScript"
    }

    fn compile(&self, fragment: &Fragment<'_>, options: &CompileOptions) -> CompilationUnit {
        let mut diagnostics = Diagnostics::new(fragment.start());
        let lowered = lower(fragment.content, &mut diagnostics);

        let script = if lowered.selectors > 0 && options.runtime_prelude {
            let mut script = String::with_capacity(RUNTIME_PRELUDE.len() + lowered.text.len());
            script.push_str(RUNTIME_PRELUDE);
            script.push_str(&lowered.text);
            script
        } else {
            lowered.text
        };

        CompilationUnit::new(fragment.kind)
            .with_script(script)
            .with_diagnostics(diagnostics)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lowered {
    pub text: String,
    /// Number of `{{ }}` spans rewritten into helper calls
    pub selectors: usize,
}

/// Apply the arrow and selector rewrites, without the prelude
///
/// The input is split at selector delimiters and the arrow rewrite is applied
/// per piece, which gives the same text as rewriting arrows over the whole input
/// first (no `->` can straddle a `{{` or `}}`) while keeping diagnostic offsets
/// relative to the original text.
pub fn lower(source: &str, diagnostics: &mut Diagnostics) -> Lowered {
    let mut text = String::with_capacity(source.len());
    let mut selectors = 0;
    let mut pos = 0;

    while let Some(found) = source[pos..].find(SELECTOR_OPEN) {
        let open = pos + found;
        text.push_str(&rewrite_arrows(&source[pos..open]));

        let inner_start = open + SELECTOR_OPEN.len();
        let Some(len) = source[inner_start..].find(SELECTOR_CLOSE) else {
            diagnostics.warn(
                DiagnosticKind::UnterminatedBlock,
                open,
                "enhanced selector `{{` has no closing `}}`; copied verbatim",
            );
            pos = open;
            break;
        };

        let selector = rewrite_arrows(&source[inner_start..inner_start + len]);
        text.push_str(SELECTOR_HELPER);
        text.push_str("(\"");
        text.push_str(&escape_js_string(selector.trim()));
        text.push_str("\")");
        selectors += 1;
        pos = inner_start + len + SELECTOR_CLOSE.len();
    }

    text.push_str(&rewrite_arrows(&source[pos..]));
    Lowered { text, selectors }
}

fn rewrite_arrows(text: &str) -> String {
    text.replace("->", ".")
}

fn escape_js_string(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}
