use serde::Serialize;

use crate::model::thresholds::BandThresholds;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityBand {
    AlmostUseless,
    HardToGetGist,
    GistClearSignificantErrors,
    UnderstandableToGood,
    QualityTranslation,
    HighQualityFluent,
    HighestQuality,
}

impl QualityBand {
    pub fn label(self) -> &'static str {
        match self {
            QualityBand::AlmostUseless => "Almost useless",
            QualityBand::HardToGetGist => "Hard to get the gist",
            QualityBand::GistClearSignificantErrors => "Gist clear but significant errors",
            QualityBand::UnderstandableToGood => "Understandable to good",
            QualityBand::QualityTranslation => "Quality translation",
            QualityBand::HighQualityFluent => "High quality and fluent",
            QualityBand::HighestQuality => "Highest quality",
        }
    }

    pub fn color_tag(self) -> &'static str {
        match self {
            QualityBand::AlmostUseless => "red",
            QualityBand::HardToGetGist => "orange",
            QualityBand::GistClearSignificantErrors => "yellow",
            QualityBand::UnderstandableToGood => "light-green",
            QualityBand::QualityTranslation => "green",
            QualityBand::HighQualityFluent => "dark-green",
            QualityBand::HighestQuality => "blue",
        }
    }
}

/// Maps a combined score onto its band. Total over `f64`: NaN and anything
/// below the first breakpoint land in the lowest band.
pub fn categorize(score: f64) -> QualityBand {
    categorize_with(score, &BandThresholds::default_v1())
}

pub fn categorize_with(score: f64, t: &BandThresholds) -> QualityBand {
    if score >= t.highest_quality {
        QualityBand::HighestQuality
    } else if score >= t.high_quality {
        QualityBand::HighQualityFluent
    } else if score >= t.quality {
        QualityBand::QualityTranslation
    } else if score >= t.understandable {
        QualityBand::UnderstandableToGood
    } else if score >= t.gist_clear {
        QualityBand::GistClearSignificantErrors
    } else if score >= t.hard_to_get_gist {
        QualityBand::HardToGetGist
    } else {
        QualityBand::AlmostUseless
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/bands.rs"]
mod tests;
