pub mod bands;
pub mod language;
pub mod scores;
pub mod thresholds;
