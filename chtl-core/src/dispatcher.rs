//! Fragment dispatch
//!
//! Routes every fragment to exactly one compiler by its kind and collects the
//! resulting units in fragment order. The routing is an exhaustive match, so a
//! new [`FragmentKind`] does not compile until it is routed somewhere.

use crate::compiler::FragmentCompiler;
use crate::compilers::{MarkupCompiler, PassthroughCompiler, ScriptDialectCompiler};
use crate::fragment::{Fragment, FragmentKind};
use crate::options::CompileOptions;
use crate::unit::{CompilationBundle, CompilationUnit};
use log::debug;

/// Routes fragments to compilers
///
/// # Examples
///
/// ```ignore
/// let dispatcher = Dispatcher::new(&options);
/// let bundle = dispatcher.dispatch(&scan(source));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Dispatcher<'o> {
    options: &'o CompileOptions,
}

impl<'o> Dispatcher<'o> {
    pub fn new(options: &'o CompileOptions) -> Self {
        Self { options }
    }

    /// The compiler responsible for a fragment kind
    pub fn compiler_for(kind: FragmentKind) -> &'static dyn FragmentCompiler {
        match kind {
            FragmentKind::Structural => &MarkupCompiler,
            FragmentKind::ScriptDialect => &ScriptDialectCompiler,
            FragmentKind::Style => &PassthroughCompiler::STYLE,
            FragmentKind::Script => &PassthroughCompiler::SCRIPT,
        }
    }

    /// Compile one fragment into a unit tagged with its index
    pub fn compile_fragment(&self, index: usize, fragment: &Fragment<'_>) -> CompilationUnit {
        let compiler = Self::compiler_for(fragment.kind);
        debug!(
            "compiling {} fragment #{index} [{}..{}) with `{}`",
            fragment.kind,
            fragment.start(),
            fragment.end(),
            compiler.name()
        );
        let mut unit = compiler.compile(fragment, self.options);
        unit.fragment_index = index;
        unit
    }

    /// Compile all fragments, preserving their order
    pub fn dispatch(&self, fragments: &[Fragment<'_>]) -> CompilationBundle {
        fragments
            .iter()
            .enumerate()
            .map(|(index, fragment)| self.compile_fragment(index, fragment))
            .collect()
    }
}

/// Dispatch with the given options
pub fn dispatch(fragments: &[Fragment<'_>], options: &CompileOptions) -> CompilationBundle {
    Dispatcher::new(options).dispatch(fragments)
}
