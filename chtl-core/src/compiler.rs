//! Fragment compiler trait
//!
//! Every sub-compiler turns one [`Fragment`] into one [`CompilationUnit`]. The
//! trait gives them a uniform shape; routing itself is an exhaustive match on
//! [`FragmentKind`](crate::fragment::FragmentKind) in the dispatcher, so there is
//! no open registry to look compilers up in.
//!
//! Compilers hold no state between calls. Anything configurable arrives through
//! [`CompileOptions`].
//!
//! # Examples
//!
//! ```ignore
//! struct Upper;
//!
//! impl FragmentCompiler for Upper {
//!     fn name(&self) -> &str {
//!         "upper"
//!     }
//!
//!     fn compile(&self, fragment: &Fragment<'_>, _options: &CompileOptions) -> CompilationUnit {
//!         CompilationUnit::new(fragment.kind).with_markup(fragment.content.to_uppercase())
//!     }
//! }
//! ```

use crate::fragment::Fragment;
use crate::options::CompileOptions;
use crate::unit::CompilationUnit;

pub trait FragmentCompiler: Send + Sync {
    /// Short name used in logs (e.g., "markup", "chtl-js")
    fn name(&self) -> &str;

    /// Optional description of this compiler
    fn description(&self) -> &str {
        ""
    }

    /// Compile one fragment
    ///
    /// Never fails: defects are reported as diagnostics on the returned unit.
    fn compile(&self, fragment: &Fragment<'_>, options: &CompileOptions) -> CompilationUnit;
}
