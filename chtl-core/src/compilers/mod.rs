//! Sub-compilers, one per fragment kind
//!
//!     | Fragment kind  | Compiler                        | Buffer  |
//!     |----------------|---------------------------------|---------|
//!     | Structural     | [`markup::MarkupCompiler`]      | markup  |
//!     | ScriptDialect  | [`script::ScriptDialectCompiler`] | script |
//!     | Style          | [`PassthroughCompiler::style`]  | style   |
//!     | Script         | [`PassthroughCompiler::script`] | script  |

pub mod markup;
pub mod passthrough;
pub mod script;

pub use markup::MarkupCompiler;
pub use passthrough::PassthroughCompiler;
pub use script::ScriptDialectCompiler;
