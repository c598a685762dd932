use crate::model::scores::ScoreResult;

pub fn render_report_json(result: &ScoreResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(result)
}
