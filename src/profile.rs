//! Assembly of the complete psychological profile from scoring results and
//! narrative sections.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use crate::analysis::reference::{ColorEnergy, Dimension};
use crate::analysis::types::AnalysisResult;
use crate::error::ProfileError;
use crate::llm::framework::LlmFramework;
use crate::llm::response::Recommendations;

/// Energy section of a complete profile: the quantified distribution plus
/// its narrative description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyProfileSection {
    pub primary_energy: ColorEnergy,
    pub secondary_energy: ColorEnergy,
    pub energy_distribution: BTreeMap<ColorEnergy, f64>,
    pub description: String,
}

/// Dimension section of a complete profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionProfileSection {
    pub dimension_scores: BTreeMap<Dimension, f64>,
    pub dominant_traits: Vec<String>,
    pub description: String,
}

/// Emotional-landscape section of a complete profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionProfileSection {
    pub top_emotions: Vec<String>,
    pub emotional_patterns: Vec<String>,
    pub description: String,
}

/// The complete psychological profile handed back to callers: quantified
/// scores interleaved with the narrative sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompleteProfile {
    pub personality_overview: String,
    pub jung_color_energies: EnergyProfileSection,
    pub personality_dimensions: DimensionProfileSection,
    pub emotional_landscape: EmotionProfileSection,
    pub environmental_preferences: String,
    pub growth_opportunities: String,
    pub practical_applications: String,
    pub recommendations: Recommendations,
    /// The full narrative text the sections were cut from.
    pub full_profile: String,
}

/// Generates complete profiles by pairing an [`AnalysisResult`] with the
/// narrative stage.
#[derive(Debug, Default)]
pub struct ProfileGenerator {
    framework: LlmFramework,
}

impl ProfileGenerator {
    /// Generator backed by the default (simulated) narrative framework.
    pub fn new() -> Self {
        Self::default()
    }

    /// Generator backed by a caller-supplied framework.
    pub fn with_framework(framework: LlmFramework) -> Self {
        Self { framework }
    }

    /// Build the complete profile for an analysis result.
    pub fn generate_profile(
        &self,
        analysis: &AnalysisResult,
    ) -> Result<CompleteProfile, ProfileError> {
        debug!("generating complete profile");

        let profile_data = Self::profile_data(analysis);
        let narrative = self.framework.generate_comprehensive_profile(&profile_data)?;

        let summary = Self::profile_summary(analysis);
        let recommendations = self.framework.generate_recommendations(&summary)?;

        let energies = &analysis.jung_color_energies;
        let dimensions = &analysis.personality_dimensions;
        let emotions = &analysis.emotional_tendencies;

        Ok(CompleteProfile {
            personality_overview: narrative.personality_overview,
            jung_color_energies: EnergyProfileSection {
                primary_energy: energies.primary_energy,
                secondary_energy: energies.secondary_energy,
                energy_distribution: energies.energy_distribution.clone(),
                description: narrative.jung_energy.full_description,
            },
            personality_dimensions: DimensionProfileSection {
                dimension_scores: dimensions.dimension_scores.clone(),
                dominant_traits: dimensions.dominant_traits.clone(),
                description: narrative.interpersonal_dynamics,
            },
            emotional_landscape: EmotionProfileSection {
                top_emotions: emotions.top_emotions.clone(),
                emotional_patterns: emotions.emotional_patterns.clone(),
                description: narrative.emotional_landscape,
            },
            environmental_preferences: narrative.environmental_preferences,
            growth_opportunities: narrative.growth_opportunities,
            practical_applications: narrative.practical_applications,
            recommendations,
            full_profile: narrative.full_profile,
        })
    }

    /// Flatten an analysis result into the key/value view the comprehensive
    /// prompt renders.
    fn profile_data(analysis: &AnalysisResult) -> serde_json::Map<String, serde_json::Value> {
        let energies = &analysis.jung_color_energies;
        let dimensions = &analysis.personality_dimensions;
        let emotions = &analysis.emotional_tendencies;

        let mut data = serde_json::Map::new();
        data.insert("primary_energy".to_string(), json!(energies.primary_energy));
        data.insert(
            "secondary_energy".to_string(),
            json!(energies.secondary_energy),
        );
        data.insert(
            "energy_distribution".to_string(),
            json!(energies.energy_distribution),
        );
        data.insert("primary_traits".to_string(), json!(energies.primary_traits));
        data.insert(
            "secondary_traits".to_string(),
            json!(energies.secondary_traits),
        );
        data.insert(
            "dimension_scores".to_string(),
            json!(dimensions.dimension_scores),
        );
        data.insert(
            "dominant_traits".to_string(),
            json!(dimensions.dominant_traits),
        );
        data.insert(
            "primary_emotions".to_string(),
            json!(emotions.primary_emotions),
        );
        data.insert(
            "secondary_emotions".to_string(),
            json!(emotions.secondary_emotions),
        );
        data.insert("top_emotions".to_string(), json!(emotions.top_emotions));
        data.insert(
            "emotional_patterns".to_string(),
            json!(emotions.emotional_patterns),
        );
        data.insert(
            "color_preferences".to_string(),
            json!(analysis.processed_data),
        );

        if let Some(context) = &analysis.contextual_analysis {
            data.insert(
                "consistency_score".to_string(),
                json!(context.consistency_score),
            );
            data.insert(
                "contextual_patterns".to_string(),
                json!(context.contextual_patterns),
            );
            data.insert("work_insights".to_string(), json!(context.work_insights));
            data.insert(
                "relaxation_insights".to_string(),
                json!(context.relaxation_insights),
            );
            data.insert(
                "social_insights".to_string(),
                json!(context.social_insights),
            );
        }
        data
    }

    /// One-paragraph summary that seeds the recommendations prompt.
    fn profile_summary(analysis: &AnalysisResult) -> String {
        let energies = &analysis.jung_color_energies;
        let mut summary = format!(
            "Individual with primary {} energy and secondary {} energy. ",
            energies.primary_energy, energies.secondary_energy
        );

        let traits = &analysis.personality_dimensions.dominant_traits;
        if !traits.is_empty() {
            summary.push_str(&format!(
                "Demonstrates traits of being {}. ",
                join_natural(traits)
            ));
        }

        let patterns = &analysis.emotional_tendencies.emotional_patterns;
        if !patterns.is_empty() {
            summary.push_str(&format!("Shows {}. ", join_natural(patterns)));
        }

        if let Some(context) = &analysis.contextual_analysis {
            if let Some(first) = context.work_insights.first() {
                summary.push_str(&format!("In work environments, {}. ", first));
            }
        }
        summary
    }
}

/// "a", "a and b", or "a, b and c".
fn join_natural(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [head @ .., last] => format!("{} and {}", head.join(", "), last),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::processor::ColorDataProcessor;
    use crate::analysis::types::{ColorPreferences, ColorRanking};

    fn sample_analysis() -> AnalysisResult {
        ColorDataProcessor::new().analyze(&ColorPreferences {
            color_ranking: Some(ColorRanking::Csv("blue, green, purple".to_string())),
            work_color: Some("blue".to_string()),
            relaxation_color: Some("green".to_string()),
            ..Default::default()
        })
    }

    #[test]
    fn test_generate_profile_populates_sections() {
        let profile = ProfileGenerator::new()
            .generate_profile(&sample_analysis())
            .unwrap();

        assert!(!profile.personality_overview.is_empty());
        assert_eq!(
            profile.jung_color_energies.primary_energy,
            ColorEnergy::CoolBlue
        );
        assert!(!profile.jung_color_energies.description.is_empty());
        assert!(!profile.recommendations.environment.colors.is_empty());
        assert!(profile.full_profile.contains("## 1. Personality Overview"));
    }

    #[test]
    fn test_profile_summary_names_energies_and_insights() {
        let summary = ProfileGenerator::profile_summary(&sample_analysis());

        assert!(summary.starts_with(
            "Individual with primary Cool Blue energy and secondary Earth Green energy."
        ));
        assert!(summary.contains("In work environments, analytical work approach."));
    }

    #[test]
    fn test_join_natural() {
        let one = vec!["introverted".to_string()];
        let three = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        assert_eq!(join_natural(&one), "introverted");
        assert_eq!(join_natural(&three), "a, b and c");
        assert_eq!(join_natural(&[]), "");
    }
}
