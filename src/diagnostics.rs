//! Diagnostic formatting for terminal output.

use std::io;
use std::ops::Range;

use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use shade_core::{Diagnostic, DiagnosticSeverity};

/// Normalize a span to ensure end > start (required by ariadne).
pub fn normalize_span(start: usize, end: usize) -> (usize, usize) {
    (start, end.max(start + 1))
}

fn build_report<'a>(diag: &Diagnostic, file_path: &'a str) -> Report<'a, (&'a str, Range<usize>)> {
    let (start, end) = normalize_span(diag.offset, diag.offset);
    let (kind, color) = match diag.severity {
        DiagnosticSeverity::Error => (ReportKind::Error, Color::Red),
    };
    Report::build(kind, (file_path, start..end))
        .with_config(Config::default().with_color(false))
        .with_message(&diag.message)
        .with_label(
            Label::new((file_path, start..end))
                .with_message(&diag.message)
                .with_color(color),
        )
        .finish()
}

/// Write one diagnostic against `source`, without terminal colors.
pub fn write_diagnostic(
    diag: &Diagnostic,
    source: &str,
    file_path: &str,
    out: &mut impl io::Write,
) -> io::Result<()> {
    build_report(diag, file_path).write((file_path, Source::from(source)), out)
}

/// Render every diagnostic into one string, in report order.
pub fn render_diagnostics(diagnostics: &[Diagnostic], source: &str, file_path: &str) -> String {
    let mut out = Vec::new();
    for diag in diagnostics {
        // Writing into a Vec cannot fail.
        let _ = write_diagnostic(diag, source, file_path, &mut out);
    }
    String::from_utf8_lossy(&out).into_owned()
}
