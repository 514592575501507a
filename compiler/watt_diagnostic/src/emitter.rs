//! Terminal rendering of diagnostics with source snippets.

use ariadne::{Color, Config, Label, Report, ReportKind, Source};

use crate::Diagnostic;

/// Render a diagnostic against the source it was produced from.
///
/// Falls back to the one-line form if the report cannot be written.
pub fn render(source: &str, diagnostic: &Diagnostic, color: bool) -> String {
    let len = source.len();
    let range = diagnostic.location.range();
    let start = range.start.min(len);
    let end = range.end.clamp(start, len);

    let mut out = Vec::new();
    let written = Report::build(ReportKind::Error, (), start)
        .with_code(diagnostic.code)
        .with_message(&diagnostic.message)
        .with_config(Config::default().with_color(color))
        .with_label(
            Label::new(start..end)
                .with_message(&diagnostic.message)
                .with_color(Color::Red),
        )
        .finish()
        .write(Source::from(source), &mut out);

    match written {
        Ok(()) => String::from_utf8_lossy(&out).into_owned(),
        Err(_) => diagnostic.to_string(),
    }
}

#[cfg(test)]
mod tests;
