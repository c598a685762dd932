use super::*;
use crate::model::bands::QualityBand;
use crate::model::language::TargetLanguage;

fn sample_result() -> ScoreResult {
    ScoreResult {
        overlap_score: 57.1,
        bleu_score: 20.0,
        combined_score: 29.6,
        category: QualityBand::GistClearSignificantErrors,
        label: "Gist clear but significant errors",
        color_tag: "yellow",
        language: TargetLanguage::French,
        reference_text: "Le chat est assis.".to_string(),
        reference_tokens: 5,
        candidate_tokens: 4,
    }
}

#[test]
fn test_format_score_one_decimal() {
    assert_eq!(format_score(100.0), "100.0");
    assert_eq!(format_score(0.0), "0.0");
    assert_eq!(format_score(57.1), "57.1");
}

#[test]
fn test_text_report_layout() {
    let text = text::render_report_text(&sample_result(), false);
    assert_eq!(
        text,
        "BLEU: 20.0/100 | ROUGE-1: 57.1/100\n\
         Combined Score: 29.6/100 - Gist clear but significant errors\n\
         \n\
         Reference Translation (French):\n\
         Le chat est assis.\n"
    );
}

#[test]
fn test_text_report_color_wraps_headline_only() {
    let text = text::render_report_text(&sample_result(), true);
    let lines: Vec<&str> = text.lines().collect();
    assert!(!lines[0].contains('\x1b'));
    assert!(lines[1].starts_with("\x1b[33m"));
    assert!(lines[1].ends_with("\x1b[0m"));
}

#[test]
fn test_json_report_fields() {
    let json = json::render_report_json(&sample_result()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["combined_score"], 29.6);
    assert_eq!(value["category"], "gist_clear_significant_errors");
    assert_eq!(value["label"], "Gist clear but significant errors");
    assert_eq!(value["color_tag"], "yellow");
    assert_eq!(value["language"], "French");
    assert_eq!(value["reference_text"], "Le chat est assis.");
}

#[test]
fn test_write_report_appends_newline() {
    let mut buf = Vec::new();
    write_report(&mut buf, &sample_result(), ReportFormat::Json, false).unwrap();
    let out = String::from_utf8(buf).unwrap();
    assert!(out.starts_with('{'));
    assert!(out.ends_with("}\n"));
}
