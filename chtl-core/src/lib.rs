//! Compilation pipeline for CHTL documents
//!
//!     This crate lowers CHTL, a nested markup dialect with embedded style and script blocks,
//!     into a single HTML document with its CSS and JS embedded.
//!
//!     This is a pure lib: it powers the chtl cli but is shell agnostic. No code here reads
//!     files, prints, or looks at env vars. Input is a string, output is a [`CompiledDocument`].
//!
//! Architecture
//!
//!     source ─► scanner ─► fragments ─► dispatcher ─► bundle of units ─► merger ─► document
//!
//!     The source is not parsed once into a tree. Instead the scanner cuts it into typed
//!     fragments by balancing braces, and each fragment is compiled independently by the
//!     compiler for its kind. The merger then reassembles the pieces.
//!
//!     The file structure :
//!     .
//!     ├── lib.rs
//!     ├── diagnostic.rs           # Ordered diagnostic channel
//!     ├── fragment.rs             # Fragment, FragmentKind, OriginKind
//!     ├── syntax.rs               # Brace balancing and shared lexical rules
//!     ├── scanner.rs              # source → fragments
//!     ├── compiler.rs             # FragmentCompiler trait
//!     ├── compilers
//!     │   ├── markup              # Structural fragments → HTML
//!     │   ├── script.rs           # CHTL JS → JS
//!     │   └── passthrough.rs      # CSS and JS as-is
//!     ├── dispatcher.rs           # fragments → bundle
//!     ├── unit.rs                 # CompilationUnit, CompilationBundle
//!     ├── merger.rs               # bundle → document
//!     ├── escape.rs
//!     └── options.rs
//!
//! Hoisting
//!
//!     Local `style { }` and `script { }` blocks can sit at any depth inside elements. They are
//!     handled twice, by two independent passes over the same text:
//!
//!     - the structural compiler sees them inside the whole-source fragment and skips them,
//!     - the scanner extracts them as their own fragments.
//!
//!     Their compiled output therefore ends up only in the document's single top-level
//!     `<style>` and `<script>` blocks, never at the place they were written. Origin blocks
//!     follow the same split: `[Origin] @Html` is copied inline by the structural compiler, while
//!     `[Origin] @Style` and `[Origin] @JavaScript` come from the scanner.
//!
//! Fragment order
//!
//!     Fragments are emitted per pass: the structural fragment, then local blocks in source
//!     order, then origin blocks in source order. This is not document order; fragment ranges
//!     carry the true position.
//!
//! Error Handling
//!
//!     Compilation never fails. Unrecognized input is skipped, unterminated blocks run to the end
//!     of the input, and every such decision is recorded as a [`Diagnostic`] with a byte offset
//!     into the original source. A malformed fragment only affects its own unit, so unrelated
//!     fragments always compile.
//!
//! Known Limitations
//!
//!     Brace balancing does not know about string literals or comments, and the CHTL JS
//!     rewrites apply inside strings and comments as well. Both are inherited behavior.
//!
//! Testing
//!     tests
//!     ├── lib.rs
//!     ├── common
//!     │   └── mod.rs
//!     ├── pipeline
//!     │   ├── documents.rs
//!     │   ├── hoisting.rs
//!     │   └── recovery.rs
//!     └── properties
//!         └── mod.rs
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to include
//!     these in the mod.

pub mod compiler;
pub mod compilers;
pub mod diagnostic;
pub mod dispatcher;
pub mod escape;
pub mod fragment;
pub mod merger;
pub mod options;
pub mod scanner;
pub mod unit;

mod syntax;

pub use compiler::FragmentCompiler;
pub use diagnostic::{Diagnostic, DiagnosticKind, Severity};
pub use dispatcher::{dispatch, Dispatcher};
pub use fragment::{Fragment, FragmentKind, OriginKind};
pub use merger::{merge, merge_with_options, CompiledDocument};
pub use options::CompileOptions;
pub use scanner::scan;
pub use unit::{CompilationBundle, CompilationUnit};

/// Compile a CHTL source with default options
pub fn compile(source: &str) -> CompiledDocument {
    compile_with_options(source, &CompileOptions::default())
}

/// Compile a CHTL source: scan, dispatch, merge
pub fn compile_with_options(source: &str, options: &CompileOptions) -> CompiledDocument {
    let fragments = scan(source);
    let bundle = dispatch(&fragments, options);
    let document = merge_with_options(bundle, options);
    log::debug!(
        "compiled {} bytes: {} fragment(s), {} diagnostic(s)",
        source.len(),
        fragments.len(),
        document.diagnostics.len()
    );
    document
}
