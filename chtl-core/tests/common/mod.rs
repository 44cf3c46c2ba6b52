//! Helpers shared by the pipeline tests.

use chtl_core::{compile, CompiledDocument};

pub fn compile_doc(source: &str) -> CompiledDocument {
    compile(source)
}

/// Markup between `<body>` and the script block (or `</body>`) of a scaffold
pub fn body(html: &str) -> &str {
    let start = html
        .find("<body>\n")
        .map(|i| i + "<body>\n".len())
        .expect("document has a body");
    let rest = &html[start..];
    let end = rest
        .find("<script>")
        .or_else(|| rest.find("</body>"))
        .expect("body is closed");
    rest[..end].trim_end()
}

/// Contents of the first `<tag>` block
pub fn block<'a>(html: &'a str, tag: &str) -> Option<&'a str> {
    let open = format!("<{tag}>\n");
    let close = format!("\n</{tag}>");
    let start = html.find(&open)? + open.len();
    let len = html[start..].find(&close)?;
    Some(&html[start..start + len])
}
