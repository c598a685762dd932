use crate::model::scores::ScoreResult;
use crate::report::format_score;

pub fn render_report_text(result: &ScoreResult, color: bool) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "BLEU: {}/100 | ROUGE-1: {}/100\n",
        format_score(result.bleu_score),
        format_score(result.overlap_score)
    ));

    let headline = format!(
        "Combined Score: {}/100 - {}",
        format_score(result.combined_score),
        result.label
    );
    if color {
        out.push_str(&paint(&headline, result.color_tag));
    } else {
        out.push_str(&headline);
    }
    out.push_str("\n\n");

    out.push_str(&format!("Reference Translation ({}):\n", result.language));
    out.push_str(&result.reference_text);
    out.push('\n');

    out
}

fn paint(text: &str, color_tag: &str) -> String {
    format!("\x1b[{}m{}\x1b[0m", ansi_code(color_tag), text)
}

fn ansi_code(color_tag: &str) -> &'static str {
    match color_tag {
        "red" => "31",
        "orange" => "38;5;208",
        "yellow" => "33",
        "light-green" => "92",
        "green" => "32",
        "dark-green" => "38;5;22",
        "blue" => "34",
        _ => "0",
    }
}
