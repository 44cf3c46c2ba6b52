//! Compilation units and the bundle they are collected in

use crate::diagnostic::{Diagnostic, Diagnostics, Severity};
use crate::fragment::FragmentKind;

/// Output of compiling one fragment
///
/// Each compiler fills only the buffer it is responsible for; the others stay
/// empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilationUnit {
    /// Kind of the fragment this unit was compiled from
    pub kind: FragmentKind,
    /// Position of that fragment in scanner emission order
    pub fragment_index: usize,
    pub markup: String,
    pub style: String,
    pub script: String,
    diagnostics: Vec<Diagnostic>,
}

impl CompilationUnit {
    pub fn new(kind: FragmentKind) -> Self {
        Self {
            kind,
            fragment_index: 0,
            markup: String::new(),
            style: String::new(),
            script: String::new(),
            diagnostics: Vec::new(),
        }
    }

    pub fn with_markup(mut self, markup: String) -> Self {
        self.markup = markup;
        self
    }

    pub fn with_style(mut self, style: String) -> Self {
        self.style = style;
        self
    }

    pub fn with_script(mut self, script: String) -> Self {
        self.script = script;
        self
    }

    pub fn with_diagnostics(mut self, diagnostics: Diagnostics) -> Self {
        self.diagnostics.extend(diagnostics.into_vec());
        self
    }

    /// All diagnostics in the order they were reported
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
    }

    pub(crate) fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }
}

/// Units in dispatch order
///
/// Dispatch order is scanner emission order, which is not document order: the
/// structural unit comes first, then local blocks, then origin blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompilationBundle {
    units: Vec<CompilationUnit>,
}

impl CompilationBundle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, unit: CompilationUnit) {
        self.units.push(unit);
    }

    pub fn units(&self) -> &[CompilationUnit] {
        &self.units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CompilationUnit> {
        self.units.iter()
    }
}

impl IntoIterator for CompilationBundle {
    type Item = CompilationUnit;
    type IntoIter = std::vec::IntoIter<CompilationUnit>;

    fn into_iter(self) -> Self::IntoIter {
        self.units.into_iter()
    }
}

impl FromIterator<CompilationUnit> for CompilationBundle {
    fn from_iter<I: IntoIterator<Item = CompilationUnit>>(iter: I) -> Self {
        Self {
            units: iter.into_iter().collect(),
        }
    }
}
