//! Passthrough compilers for plain CSS and JavaScript
//!
//! Both copy the fragment byte for byte into the matching buffer. They exist so
//! real CSS/JS processing (minification, scoping, validation) has a place to go
//! without touching the dispatcher.

use crate::compiler::FragmentCompiler;
use crate::fragment::Fragment;
use crate::options::CompileOptions;
use crate::unit::CompilationUnit;

/// Which buffer a passthrough compiler writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Style,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassthroughCompiler {
    target: Target,
}

impl PassthroughCompiler {
    pub const STYLE: Self = Self {
        target: Target::Style,
    };

    pub const SCRIPT: Self = Self {
        target: Target::Script,
    };

    pub fn style() -> Self {
        Self::STYLE
    }

    pub fn script() -> Self {
        Self::SCRIPT
    }
}

impl FragmentCompiler for PassthroughCompiler {
    fn name(&self) -> &str {
        match self.target {
            Target::Style => "css",
            Target::Script => "js",
        }
    }

    fn description(&self) -> &str {
        "Identity transform"
    }

    fn compile(&self, fragment: &Fragment<'_>, _options: &CompileOptions) -> CompilationUnit {
        let unit = CompilationUnit::new(fragment.kind);
        let content = fragment.content.to_string();
        match self.target {
            Target::Style => unit.with_style(content),
            Target::Script => unit.with_script(content),
        }
    }
}
