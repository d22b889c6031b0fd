use navicue_core::config::ThresholdsConfig;
use navicue_core::ArousalState;

/// Cut-offs that turn a 0-10 resistance score into an arousal state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArousalThresholds {
    pub amber: f32,
    pub red: f32,
}

impl Default for ArousalThresholds {
    fn default() -> Self {
        Self::from_config(&ThresholdsConfig::default())
    }
}

impl ArousalThresholds {
    pub fn from_config(config: &ThresholdsConfig) -> Self {
        Self {
            amber: config.arousal_amber_threshold,
            red: config.arousal_red_threshold,
        }
    }

    /// `>= red` → red, `>= amber` → amber, otherwise green.
    /// A non-finite score is treated as red.
    pub fn classify(&self, resistance: f32) -> ArousalState {
        if !resistance.is_finite() {
            tracing::warn!(target: "navicue::arousal", "Non-finite resistance score, treating as red");
            return ArousalState::Red;
        }
        if resistance >= self.red {
            ArousalState::Red
        } else if resistance >= self.amber {
            ArousalState::Amber
        } else {
            ArousalState::Green
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cutoffs() {
        let t = ArousalThresholds::default();
        assert_eq!(t.classify(0.0), ArousalState::Green);
        assert_eq!(t.classify(5.9), ArousalState::Green);
        assert_eq!(t.classify(6.0), ArousalState::Amber);
        assert_eq!(t.classify(7.5), ArousalState::Amber);
        assert_eq!(t.classify(8.0), ArousalState::Red);
        assert_eq!(t.classify(10.0), ArousalState::Red);
    }

    #[test]
    fn test_non_finite_is_red() {
        let t = ArousalThresholds::default();
        assert_eq!(t.classify(f32::NAN), ArousalState::Red);
        assert_eq!(t.classify(f32::INFINITY), ArousalState::Red);
    }

    #[test]
    fn test_from_config() {
        let t = ArousalThresholds::from_config(&ThresholdsConfig {
            arousal_amber_threshold: 3.0,
            arousal_red_threshold: 5.0,
        });
        assert_eq!(t.classify(4.0), ArousalState::Amber);
        assert_eq!(t.classify(5.0), ArousalState::Red);
    }
}
