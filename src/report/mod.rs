pub mod json;
pub mod text;

use std::io::Write;

use crate::model::scores::ScoreResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Score shown with exactly one decimal, as on the result line.
pub fn format_score(v: f64) -> String {
    format!("{:.1}", v)
}

pub fn write_report<W: Write>(
    out: &mut W,
    result: &ScoreResult,
    format: ReportFormat,
    color: bool,
) -> Result<(), ReportError> {
    let rendered = match format {
        ReportFormat::Text => text::render_report_text(result, color),
        ReportFormat::Json => json::render_report_json(result)?,
    };
    out.write_all(rendered.as_bytes())?;
    if !rendered.ends_with('\n') {
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
