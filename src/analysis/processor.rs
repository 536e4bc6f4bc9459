//! Field-wise normalization of raw preference input, and the
//! normalize-then-score pipeline.

use tracing::debug;

use crate::analysis::analyzer::ColorAnalyzer;
use crate::analysis::normalizer::{is_processed, normalize};
use crate::analysis::types::{AnalysisResult, ColorPreferences, ColorRanking};

/// Normalizes raw color-preference input and feeds it to the analyzer.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorDataProcessor {
    analyzer: ColorAnalyzer,
}

impl ColorDataProcessor {
    /// Create a new processor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize every color field of the raw input. Rankings are resolved
    /// to list form with each entry normalized; field presence is preserved
    /// so that context gating still sees which fields were supplied.
    pub fn process(&self, raw: &ColorPreferences) -> ColorPreferences {
        ColorPreferences {
            primary_color: raw.primary_color.as_deref().map(normalize),
            secondary_color: raw.secondary_color.as_deref().map(normalize),
            color_ranking: raw.color_ranking.as_ref().map(|ranking| {
                ColorRanking::List(ranking.resolve().iter().map(|c| normalize(c)).collect())
            }),
            work_color: raw.work_color.as_deref().map(normalize),
            relaxation_color: raw.relaxation_color.as_deref().map(normalize),
            social_color: raw.social_color.as_deref().map(normalize),
            creative_color: raw.creative_color.as_deref().map(normalize),
            stress_color: raw.stress_color.as_deref().map(normalize),
        }
    }

    /// Normalize (unless the input already consists of recognized tokens)
    /// and analyze, echoing the processed input in the result.
    pub fn analyze(&self, prefs: &ColorPreferences) -> AnalysisResult {
        let processed = if is_processed(prefs) {
            prefs.clone()
        } else {
            debug!("input not yet normalized, processing first");
            self.process(prefs)
        };
        self.analyzer.analyze(&processed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_process_normalizes_every_field() {
        let raw = ColorPreferences {
            primary_color: Some("Navy Blue".to_string()),
            secondary_color: Some("Forest Green".to_string()),
            color_ranking: Some(ColorRanking::Csv("Crimson, Gold, turquoise".to_string())),
            work_color: Some("  TEAL ".to_string()),
            stress_color: Some("".to_string()),
            ..Default::default()
        };
        let processed = ColorDataProcessor::new().process(&raw);

        assert_eq!(processed.primary_color.as_deref(), Some("blue"));
        assert_eq!(processed.secondary_color.as_deref(), Some("green"));
        assert_eq!(
            processed.color_ranking,
            Some(ColorRanking::List(vec![
                "red".to_string(),
                "yellow".to_string(),
                "turquoise".to_string(),
            ]))
        );
        assert_eq!(processed.work_color.as_deref(), Some("blue"));
        // Presence survives normalization even for empty values.
        assert_eq!(processed.stress_color.as_deref(), Some(""));
        assert!(processed.relaxation_color.is_none());
    }

    #[test]
    fn test_processing_is_idempotent() {
        let raw = ColorPreferences {
            primary_color: Some("Navy Blue".to_string()),
            color_ranking: Some(ColorRanking::Csv("Crimson, Gold".to_string())),
            ..Default::default()
        };
        let processor = ColorDataProcessor::new();
        let once = processor.process(&raw);
        assert_eq!(processor.process(&once), once);
        assert!(crate::analysis::normalizer::is_processed(&once));
    }

    #[test]
    fn test_analyze_normalizes_raw_input() {
        let raw = ColorPreferences {
            primary_color: Some("Navy Blue".to_string()),
            secondary_color: Some("Emerald".to_string()),
            ..Default::default()
        };
        let result = ColorDataProcessor::new().analyze(&raw);

        assert_eq!(result.processed_data.primary_color.as_deref(), Some("blue"));
        assert_eq!(
            result.jung_color_energies.primary_energy,
            crate::analysis::reference::ColorEnergy::CoolBlue
        );
    }

    #[test]
    fn test_analyze_skips_reprocessing_recognized_input() {
        // "navy" is a recognized synonym, so the predicate reports processed
        // and the token flows through to scoring as-is; it is still a Cool
        // Blue member.
        let prefs = ColorPreferences {
            primary_color: Some("navy".to_string()),
            ..Default::default()
        };
        let result = ColorDataProcessor::new().analyze(&prefs);

        assert_eq!(result.processed_data.primary_color.as_deref(), Some("navy"));
        assert_eq!(
            result.jung_color_energies.primary_energy,
            crate::analysis::reference::ColorEnergy::CoolBlue
        );
    }
}
