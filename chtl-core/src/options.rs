//! Options threaded through the compilation pipeline

/// Knobs for one compile call
///
/// The defaults reproduce the plain pipeline: runtime prelude on, bare
/// `<html>` scaffold without title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileOptions {
    /// Prepend the `__CHTL__sel` helper to lowered CHTL JS that uses selectors
    pub runtime_prelude: bool,
    /// `<title>` for a synthesized document scaffold
    pub title: Option<String>,
    /// `lang` attribute for a synthesized `<html>` element
    pub lang: Option<String>,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            runtime_prelude: true,
            title: None,
            lang: None,
        }
    }
}

impl CompileOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn without_prelude(mut self) -> Self {
        self.runtime_prelude = false;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }
}
