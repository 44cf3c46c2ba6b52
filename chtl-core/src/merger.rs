//! Merging compilation units into the final document
//!
//! Markup is concatenated in bundle order. Style and script buffers are
//! flattened: every non-empty contribution, whatever depth or pass it came
//! from, is joined with a newline into one CSS blob and one JS blob that land in
//! a single top-level `<style>` and `<script>` block.
//!
//! Assembly depends on what the markup already is:
//!
//! - If it contains `<html` or a doctype, it is taken as a complete document.
//!   The style and script blocks are appended after it as-is; no attempt is made
//!   to place them inside an existing head or body.
//! - Otherwise a scaffold is synthesized around it: doctype, `<html>`, a head
//!   holding the style block and a body holding the markup then the script block.

use crate::diagnostic::{Diagnostic, Severity};
use crate::escape::escape_html;
use crate::options::CompileOptions;
use crate::unit::CompilationBundle;
use log::debug;

const DOCTYPE: &str = "<!DOCTYPE html>";

/// The merged result of one compile call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledDocument {
    /// Final document text
    pub html: String,
    /// All style contributions joined
    pub css: String,
    /// All script contributions joined
    pub js: String,
    /// Diagnostics of every unit, in bundle order
    pub diagnostics: Vec<Diagnostic>,
}

impl CompiledDocument {
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

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }
}

/// Merge with default options
pub fn merge(bundle: CompilationBundle) -> CompiledDocument {
    merge_with_options(bundle, &CompileOptions::default())
}

/// Merge, using `options` for the synthesized scaffold
pub fn merge_with_options(bundle: CompilationBundle, options: &CompileOptions) -> CompiledDocument {
    let mut markup = String::new();
    let mut styles = Vec::new();
    let mut scripts = Vec::new();
    let mut diagnostics = Vec::new();

    for mut unit in bundle {
        diagnostics.extend(unit.take_diagnostics());
        markup.push_str(&unit.markup);
        if !unit.style.is_empty() {
            styles.push(unit.style);
        }
        if !unit.script.is_empty() {
            scripts.push(unit.script);
        }
    }

    let css = styles.join("\n");
    let js = scripts.join("\n");

    let html = if is_complete_document(&markup) {
        debug!("markup is a complete document; appending hoisted blocks");
        append_hoisted(markup, &css, &js)
    } else {
        debug!("synthesizing document scaffold");
        scaffold(&markup, &css, &js, options)
    };

    CompiledDocument {
        html,
        css,
        js,
        diagnostics,
    }
}

/// Whether the markup already carries its own root element or doctype
pub fn is_complete_document(markup: &str) -> bool {
    let lowered = markup.to_ascii_lowercase();
    lowered.contains("<html") || lowered.contains("<!doctype")
}

fn append_hoisted(mut document: String, css: &str, js: &str) -> String {
    if !css.is_empty() {
        document.push('\n');
        push_block(&mut document, "style", css);
    }
    if !js.is_empty() {
        document.push('\n');
        push_block(&mut document, "script", js);
    }
    document.truncate(document.trim_end().len());
    document
}

fn scaffold(markup: &str, css: &str, js: &str, options: &CompileOptions) -> String {
    let mut document = String::with_capacity(markup.len() + css.len() + js.len() + 128);
    document.push_str(DOCTYPE);
    document.push('\n');
    match &options.lang {
        Some(lang) => {
            document.push_str("<html lang=\"");
            document.push_str(&escape_html(lang));
            document.push_str("\">\n");
        }
        None => document.push_str("<html>\n"),
    }

    document.push_str("<head>\n");
    if let Some(title) = &options.title {
        document.push_str("<title>");
        document.push_str(&escape_html(title));
        document.push_str("</title>\n");
    }
    if !css.is_empty() {
        push_block(&mut document, "style", css);
        document.push('\n');
    }
    document.push_str("</head>\n");

    document.push_str("<body>\n");
    if !markup.is_empty() {
        document.push_str(markup);
        document.push('\n');
    }
    if !js.is_empty() {
        push_block(&mut document, "script", js);
        document.push('\n');
    }
    document.push_str("</body>\n");
    document.push_str("</html>\n");
    document
}

fn push_block(document: &mut String, tag: &str, body: &str) {
    document.push('<');
    document.push_str(tag);
    document.push_str(">\n");
    document.push_str(body);
    document.push_str("\n</");
    document.push_str(tag);
    document.push('>');
}
