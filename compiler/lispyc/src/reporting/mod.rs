//! Rendering of parse errors.
//!
//! ```text
//! <stdin>:1:7: error: unclosed delimiter '{'
//! (head {1 2
//!       ^
//! ```

use std::fmt::Write as _;

use lispy_parse::ParseError;

/// Render `err` against `source` as a one-line header, the offending source
/// line, and a caret underline.
pub fn render_parse_error(source_name: &str, source: &str, err: &ParseError) -> String {
    let span = err.span();
    let (line, col) = span.line_col(source);
    let mut out = format!("{source_name}:{line}:{col}: error: {err}");

    let text = source.lines().nth(line.saturating_sub(1)).unwrap_or("");
    let available = text.chars().count().saturating_sub(col.saturating_sub(1));
    let width = span_width(source, err).min(available).max(1);

    let _ = write!(
        out,
        "\n{text}\n{:pad$}{}",
        "",
        "^".repeat(width),
        pad = col.saturating_sub(1)
    );
    out
}

fn span_width(source: &str, err: &ParseError) -> usize {
    source
        .get(err.span().to_range())
        .map_or(0, |text| text.chars().count())
}

#[cfg(test)]
mod tests;
