use handlebars::Handlebars;

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::{ExportError, Result};

pub fn write_string_to_file(filename: &str, content: &str) -> Result<()> {
    write_bytes_to_file(filename, content.as_bytes())
}

pub fn write_bytes_to_file(filename: &str, content: &[u8]) -> Result<()> {
    let path = Path::new(filename);
    let io_err = |source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
    }
    let mut file = File::create(path).map_err(io_err)?;
    file.write_all(content).map_err(io_err)?;
    Ok(())
}

/// Escape a value for interpolation into a generated string literal. Quotes,
/// backslashes and control characters must not break the emitted source.
pub fn escape_code_literal(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{{{:04x}}}", c as u32)),
            c => out.push(c),
        }
    }
    out
}

pub fn get_handlebars() -> Handlebars<'static> {
    let mut handlebars = Handlebars::new();

    // The emitted artifacts are source code, not HTML.
    handlebars.register_escape_fn(escape_code_literal);

    handlebars
}
