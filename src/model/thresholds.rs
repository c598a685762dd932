/// Lower bounds (inclusive) of every band above the lowest one, on the 0-100
/// combined scale.
#[derive(Debug, Clone)]
pub struct BandThresholds {
    pub hard_to_get_gist: f64,
    pub gist_clear: f64,
    pub understandable: f64,
    pub quality: f64,
    pub high_quality: f64,
    pub highest_quality: f64,
}

impl BandThresholds {
    pub const fn default_v1() -> Self {
        Self {
            hard_to_get_gist: 10.0,
            gist_clear: 20.0,
            understandable: 30.0,
            quality: 40.0,
            high_quality: 50.0,
            highest_quality: 60.0,
        }
    }
}

impl Default for BandThresholds {
    fn default() -> Self {
        Self::default_v1()
    }
}
