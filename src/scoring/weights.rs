//! Weight sets for the pillar and dimension models.
//!
//! Weights are normalized to sum to 1.0 before use. A set whose weights sum
//! to zero (or contains negative or non-finite values) falls back to the
//! defaults.

use serde::{Deserialize, Serialize};

/// Pillar weights for the legacy model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PillarWeights {
    pub technical: f64,
    pub content: f64,
    pub ai_readiness: f64,
    pub performance: f64,
}

pub const DEFAULT_PILLAR_WEIGHTS: PillarWeights = PillarWeights {
    technical: 0.25,
    content: 0.30,
    ai_readiness: 0.30,
    performance: 0.15,
};

impl Default for PillarWeights {
    fn default() -> Self {
        DEFAULT_PILLAR_WEIGHTS
    }
}

impl PillarWeights {
    fn as_array(&self) -> [f64; 4] {
        [self.technical, self.content, self.ai_readiness, self.performance]
    }

    fn from_array(w: [f64; 4]) -> Self {
        Self {
            technical: w[0],
            content: w[1],
            ai_readiness: w[2],
            performance: w[3],
        }
    }

    pub fn normalized(&self) -> Self {
        match normalize(self.as_array()) {
            Some(w) => Self::from_array(w),
            None => Self::from_array(
                normalize(DEFAULT_PILLAR_WEIGHTS.as_array()).unwrap_or(DEFAULT_PILLAR_WEIGHTS.as_array()),
            ),
        }
    }

    /// Weighted sum of pillar scores, rounded and clamped to 0-100.
    pub fn combine(&self, technical: i32, content: i32, ai_readiness: i32, performance: i32) -> i32 {
        let w = self.normalized();
        weighted_score(&[
            (w.technical, technical),
            (w.content, content),
            (w.ai_readiness, ai_readiness),
            (w.performance, performance),
        ])
    }
}

/// Dimension weights for the v2 model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DimensionWeights {
    pub llms_txt: f64,
    pub robots_crawlability: f64,
    pub sitemap: f64,
    pub schema_markup: f64,
    pub meta_tags: f64,
    pub bot_access: f64,
    pub content_citeability: f64,
}

pub const DEFAULT_DIMENSION_WEIGHTS: DimensionWeights = DimensionWeights {
    llms_txt: 0.05,
    robots_crawlability: 0.17,
    sitemap: 0.03,
    schema_markup: 0.06,
    meta_tags: 0.09,
    bot_access: 0.08,
    content_citeability: 0.52,
};

impl Default for DimensionWeights {
    fn default() -> Self {
        DEFAULT_DIMENSION_WEIGHTS
    }
}

impl DimensionWeights {
    fn as_array(&self) -> [f64; 7] {
        [
            self.llms_txt,
            self.robots_crawlability,
            self.sitemap,
            self.schema_markup,
            self.meta_tags,
            self.bot_access,
            self.content_citeability,
        ]
    }

    fn from_array(w: [f64; 7]) -> Self {
        Self {
            llms_txt: w[0],
            robots_crawlability: w[1],
            sitemap: w[2],
            schema_markup: w[3],
            meta_tags: w[4],
            bot_access: w[5],
            content_citeability: w[6],
        }
    }

    pub fn normalized(&self) -> Self {
        match normalize(self.as_array()) {
            Some(w) => Self::from_array(w),
            None => Self::from_array(
                normalize(DEFAULT_DIMENSION_WEIGHTS.as_array())
                    .unwrap_or(DEFAULT_DIMENSION_WEIGHTS.as_array()),
            ),
        }
    }
}

/// Scale `weights` to sum to 1.0; `None` if they cannot be.
fn normalize<const N: usize>(weights: [f64; N]) -> Option<[f64; N]> {
    if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
        return None;
    }
    let sum: f64 = weights.iter().sum();
    if sum <= 0.0 {
        return None;
    }
    Some(weights.map(|w| w / sum))
}

/// Round a weighted sum of integer scores into 0-100.
pub fn weighted_score(parts: &[(f64, i32)]) -> i32 {
    let total: f64 = parts.iter().map(|(w, s)| w * f64::from(*s)).sum();
    (total.round() as i32).clamp(0, 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_sum_to_one() {
        let p = DEFAULT_PILLAR_WEIGHTS.normalized();
        let sum = p.technical + p.content + p.ai_readiness + p.performance;
        assert!((sum - 1.0).abs() < 1e-9);

        let d = DEFAULT_DIMENSION_WEIGHTS.normalized();
        let sum: f64 = d.as_array().iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_custom_weights_are_scaled() {
        let w = PillarWeights {
            technical: 2.0,
            content: 2.0,
            ai_readiness: 0.0,
            performance: 0.0,
        }
        .normalized();
        assert!((w.technical - 0.5).abs() < 1e-9);
        assert!((w.content - 0.5).abs() < 1e-9);
        assert_eq!(w.combine(80, 60, 0, 0), 70);
    }

    #[test]
    fn test_zero_weights_fall_back_to_defaults() {
        let zero = PillarWeights {
            technical: 0.0,
            content: 0.0,
            ai_readiness: 0.0,
            performance: 0.0,
        };
        let w = zero.normalized();
        assert!((w.content - 0.30).abs() < 1e-9);

        let zero_dims = DimensionWeights::from_array([0.0; 7]);
        assert!((zero_dims.normalized().content_citeability - 0.52).abs() < 1e-9);
    }

    #[test]
    fn test_negative_weights_fall_back() {
        let w = PillarWeights {
            technical: -1.0,
            ..DEFAULT_PILLAR_WEIGHTS
        }
        .normalized();
        assert!((w.technical - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_combine_defaults() {
        assert_eq!(DEFAULT_PILLAR_WEIGHTS.combine(100, 100, 100, 100), 100);
        assert_eq!(DEFAULT_PILLAR_WEIGHTS.combine(100, 100, 40, 100), 82);
        assert_eq!(DEFAULT_PILLAR_WEIGHTS.combine(0, 0, 0, 0), 0);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let w: PillarWeights = serde_yaml::from_str("content: 0.5").unwrap();
        assert_eq!(w.content, 0.5);
        assert_eq!(w.technical, 0.25);
    }
}
