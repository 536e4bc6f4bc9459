//! Input and output data types for the scoring pipeline.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::analysis::reference::{ColorEnergy, Dimension};

/// An ordered color ranking, accepted either as a list of strings or as a
/// comma-separated string. Both shapes lower to the same ordered sequence
/// before any scoring logic runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorRanking {
    /// An ordered list of color strings.
    List(Vec<String>),
    /// A comma-separated string of colors, most preferred first.
    Csv(String),
}

impl ColorRanking {
    /// Resolve to an ordered list of trimmed, lower-cased entries. Empty
    /// entries are kept: they occupy a rank slot but match nothing.
    pub fn resolve(&self) -> Vec<String> {
        match self {
            ColorRanking::List(colors) => colors
                .iter()
                .map(|c| c.trim().to_lowercase())
                .collect(),
            ColorRanking::Csv(csv) => csv
                .split(',')
                .map(|c| c.trim().to_lowercase())
                .collect(),
        }
    }
}

/// Raw color-preference input.
///
/// Every field is optional and every lookup downstream degrades gracefully,
/// so any combination of fields is a valid request. Presence of any of the
/// five context fields (even with an empty value) is what enables the
/// contextual-consistency analysis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorPreferences {
    /// Favorite color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    /// Second-favorite color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<String>,
    /// Ordered ranking, most preferred first. Takes precedence over the
    /// primary/secondary pair for energy and dimension scoring.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_ranking: Option<ColorRanking>,
    /// Preferred color in a work environment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_color: Option<String>,
    /// Preferred color in a relaxation space.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relaxation_color: Option<String>,
    /// Preferred color in social settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_color: Option<String>,
    /// Preferred color for creative activities.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creative_color: Option<String>,
    /// Preferred color in stressful situations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stress_color: Option<String>,
}

impl ColorPreferences {
    /// Primary color folded to lowercase, or empty.
    pub(crate) fn primary(&self) -> String {
        fold(&self.primary_color)
    }

    /// Secondary color folded to lowercase, or empty.
    pub(crate) fn secondary(&self) -> String {
        fold(&self.secondary_color)
    }

    /// The explicit ranking resolved to an ordered list, or empty when no
    /// ranking was supplied.
    pub(crate) fn ranking_list(&self) -> Vec<String> {
        self.color_ranking
            .as_ref()
            .map(|r| r.resolve())
            .unwrap_or_default()
    }

    /// The ranked color list driving dimension and emotion scoring: the
    /// explicit ranking when present, otherwise primary then secondary with
    /// empty values omitted.
    pub(crate) fn ranked_colors(&self) -> Vec<String> {
        let ranking = self.ranking_list();
        if !ranking.is_empty() {
            return ranking;
        }
        [self.primary(), self.secondary()]
            .into_iter()
            .filter(|c| !c.is_empty())
            .collect()
    }

    /// Whether any of the five context fields is present.
    pub(crate) fn has_contextual_data(&self) -> bool {
        self.work_color.is_some()
            || self.relaxation_color.is_some()
            || self.social_color.is_some()
            || self.creative_color.is_some()
            || self.stress_color.is_some()
    }

    /// The five context colors folded to lowercase, in the fixed order
    /// work, relaxation, social, creative, stress. Absent fields fold to
    /// empty strings.
    pub(crate) fn context_colors(&self) -> [String; 5] {
        [
            fold(&self.work_color),
            fold(&self.relaxation_color),
            fold(&self.social_color),
            fold(&self.creative_color),
            fold(&self.stress_color),
        ]
    }
}

fn fold(field: &Option<String>) -> String {
    field
        .as_deref()
        .map(|s| s.trim().to_lowercase())
        .unwrap_or_default()
}

/// Jung color-energy analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyAnalysis {
    /// Highest-scoring energy (ties break in declaration order).
    pub primary_energy: ColorEnergy,
    /// Second-highest-scoring energy.
    pub secondary_energy: ColorEnergy,
    /// Each energy's share of the total score as a percentage. Sums to 100
    /// up to rounding, or is an even 25/25/25/25 split when nothing scored.
    pub energy_distribution: BTreeMap<ColorEnergy, f64>,
    /// Fixed trait tags of the primary energy, verbatim.
    pub primary_traits: Vec<String>,
    /// Fixed trait tags of the secondary energy, verbatim.
    pub secondary_traits: Vec<String>,
}

/// Bipolar personality-dimension analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionAnalysis {
    /// Per-axis value in [-100, +100]; negative leans toward the first pole,
    /// exactly 0 when no ranked color matched either pole.
    pub dimension_scores: BTreeMap<Dimension, f64>,
    /// Fixed pole labels for every axis whose value left the [-20, +20] band.
    pub dominant_traits: Vec<String>,
}

/// Emotion-association analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionAnalysis {
    /// Emotion tags of the primary color (empty when it has no entry).
    pub primary_emotions: Vec<String>,
    /// Emotion tags of the secondary color.
    pub secondary_emotions: Vec<String>,
    /// The five highest-weighted emotion tags, descending; ties keep
    /// first-seen accumulation order.
    pub top_emotions: Vec<String>,
    /// Derived pattern phrases; the positive/negative balance phrase always
    /// fires, the pair-based phrases fire conditionally.
    pub emotional_patterns: Vec<String>,
}

/// Cross-context consistency analysis. Only produced when at least one
/// context field was present on the input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextAnalysis {
    /// Uniformity of context colors in [0, 1]; 1 when all given contexts
    /// share one color (or at most one context was given).
    pub consistency_score: f64,
    /// "high consistency across contexts" above 0.7, "strong contextual
    /// adaptation" below 0.3, nothing in between.
    pub contextual_patterns: Vec<String>,
    /// Fixed phrases keyed by the work color's energy.
    pub work_insights: Vec<String>,
    /// Fixed phrases keyed by the relaxation color's energy.
    pub relaxation_insights: Vec<String>,
    /// Fixed phrases keyed by the social color's energy.
    pub social_insights: Vec<String>,
}

/// Combined result of all scoring analyses for one request. Created fresh
/// per call and never mutated after return.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Jung color-energy affinity.
    pub jung_color_energies: EnergyAnalysis,
    /// Bipolar personality dimensions.
    pub personality_dimensions: DimensionAnalysis,
    /// Emotion associations and patterns.
    pub emotional_tendencies: EmotionAnalysis,
    /// Present only when the input carried context fields; absent otherwise
    /// (not zero-filled).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contextual_analysis: Option<ContextAnalysis>,
    /// The normalized input the scores were computed from.
    pub processed_data: ColorPreferences,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_ranking_resolves_from_both_shapes() {
        let list = ColorRanking::List(vec!["Blue".to_string(), " Green ".to_string()]);
        let csv = ColorRanking::Csv("Blue,  Green".to_string());
        assert_eq!(list.resolve(), vec!["blue", "green"]);
        assert_eq!(csv.resolve(), list.resolve());
    }

    #[test]
    fn test_ranking_deserializes_untagged() {
        let from_list: ColorPreferences =
            serde_json::from_str(r#"{"color_ranking": ["red", "blue"]}"#).unwrap();
        let from_csv: ColorPreferences =
            serde_json::from_str(r#"{"color_ranking": "red, blue"}"#).unwrap();
        assert_eq!(
            from_list.color_ranking.unwrap().resolve(),
            from_csv.color_ranking.unwrap().resolve()
        );
    }

    #[test]
    fn test_ranked_colors_fall_back_to_primary_secondary() {
        let prefs = ColorPreferences {
            primary_color: Some("Blue".to_string()),
            secondary_color: Some("".to_string()),
            ..Default::default()
        };
        assert_eq!(prefs.ranked_colors(), vec!["blue"]);
    }

    #[test]
    fn test_contextual_presence_includes_empty_values() {
        let prefs = ColorPreferences {
            work_color: Some(String::new()),
            ..Default::default()
        };
        assert!(prefs.has_contextual_data());
        assert!(!ColorPreferences::default().has_contextual_data());
    }

    #[test]
    fn test_absent_fields_are_skipped_in_json() {
        let json = serde_json::to_string(&ColorPreferences {
            primary_color: Some("blue".to_string()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(json, r#"{"primary_color":"blue"}"#);
    }
}
