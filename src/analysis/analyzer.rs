//! The combined preference analyzer.

use tracing::debug;

use crate::analysis::context::analyze_context;
use crate::analysis::dimensions::analyze_dimensions;
use crate::analysis::emotions::analyze_emotions;
use crate::analysis::energies::analyze_energies;
use crate::analysis::types::{
    AnalysisResult, ColorPreferences, ContextAnalysis, DimensionAnalysis, EmotionAnalysis,
    EnergyAnalysis,
};

/// Runs the four scoring analyses over (already normalized) color
/// preferences.
///
/// Pure and stateless aside from the fixed reference tables; every method is
/// a deterministic function of its input. Tolerates un-normalized input
/// defensively: unrecognized color words simply match no table and score
/// zero everywhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorAnalyzer;

impl ColorAnalyzer {
    /// Create a new analyzer.
    pub fn new() -> Self {
        Self
    }

    /// Run all four analyses and combine them into one result.
    ///
    /// The contextual analysis is included only when the input carries at
    /// least one context field; otherwise the result omits it entirely.
    pub fn analyze(&self, prefs: &ColorPreferences) -> AnalysisResult {
        debug!(?prefs, "running color-preference analysis");

        AnalysisResult {
            jung_color_energies: self.jung_energies(prefs),
            personality_dimensions: self.personality_dimensions(prefs),
            emotional_tendencies: self.emotional_tendencies(prefs),
            contextual_analysis: if prefs.has_contextual_data() {
                Some(self.contextual_preferences(prefs))
            } else {
                None
            },
            processed_data: prefs.clone(),
        }
    }

    /// Jung color-energy affinity.
    pub fn jung_energies(&self, prefs: &ColorPreferences) -> EnergyAnalysis {
        analyze_energies(prefs)
    }

    /// Bipolar personality dimensions.
    pub fn personality_dimensions(&self, prefs: &ColorPreferences) -> DimensionAnalysis {
        analyze_dimensions(prefs)
    }

    /// Emotion associations and patterns.
    pub fn emotional_tendencies(&self, prefs: &ColorPreferences) -> EmotionAnalysis {
        analyze_emotions(prefs)
    }

    /// Cross-context consistency.
    pub fn contextual_preferences(&self, prefs: &ColorPreferences) -> ContextAnalysis {
        analyze_context(prefs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::reference::ColorEnergy;

    #[test]
    fn test_empty_input_yields_neutral_defaults_without_context() {
        let result = ColorAnalyzer::new().analyze(&ColorPreferences::default());

        for share in result.jung_color_energies.energy_distribution.values() {
            assert_eq!(*share, 25.0);
        }
        assert!(result.contextual_analysis.is_none());

        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("contextual_analysis").is_none());
    }

    #[test]
    fn test_context_fields_enable_contextual_analysis() {
        let prefs = ColorPreferences {
            primary_color: Some("blue".to_string()),
            work_color: Some("blue".to_string()),
            ..Default::default()
        };
        let result = ColorAnalyzer::new().analyze(&prefs);

        let context = result.contextual_analysis.expect("context was present");
        assert_eq!(context.consistency_score, 1.0);
        assert_eq!(result.jung_color_energies.primary_energy, ColorEnergy::CoolBlue);
    }
}
