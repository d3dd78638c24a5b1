use serde::{Deserialize, Serialize};

/// Default value for the RRF `k` constant.
///
/// The original paper uses k=60 for best results:
/// https://plg.uwaterloo.ca/~gvcormac/cormacksigir09-rrf.pdf
pub const DEFAULT_K: f64 = 60.0;

/// Tuning parameters for reciprocal rank fusion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FusionConfig {
    /// Damping constant added to each rank before taking the reciprocal.
    /// Larger values flatten the influence differential between rank 1 and
    /// the tail of a ranking. Must be finite and positive; other values fall
    /// back to [`DEFAULT_K`] during fusion.
    pub k: f64,
}

impl Default for FusionConfig {
    fn default() -> Self {
        Self { k: DEFAULT_K }
    }
}

impl FusionConfig {
    pub fn new(k: f64) -> Self {
        Self { k }
    }

    /// Load config from the environment, keeping defaults for anything
    /// unset or unparseable.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("RANK_FUSION_K") {
            if let Ok(v) = val.parse::<f64>() {
                if v.is_finite() && v > 0.0 {
                    config.k = v;
                }
            }
        }

        config
    }

    /// The `k` actually used during fusion. Non-finite or non-positive
    /// values would make the reciprocal blow up, so they fall back to
    /// [`DEFAULT_K`] instead.
    pub fn effective_k(&self) -> f64 {
        if self.k.is_finite() && self.k > 0.0 {
            self.k
        } else {
            DEFAULT_K
        }
    }
}
