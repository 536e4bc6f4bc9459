//! Generate-and-parse pairing of a narrative backend with the response
//! segmentation.

use crate::analysis::types::ColorPreferences;
use crate::error::ProfileError;
use crate::llm::client::{LlmClient, SimulatedLlm};
use crate::llm::prompts;
use crate::llm::response::{
    parse_comprehensive_profile, parse_jung_energy_analysis, parse_preference_analysis,
    parse_recommendations, JungEnergyNarrative, PreferenceNarrative, ProfileNarrative,
    Recommendations,
};

/// Front door of the narrative stage: builds prompts, invokes the backend,
/// and segments the responses into structured narratives.
pub struct LlmFramework {
    client: Box<dyn LlmClient>,
}

impl Default for LlmFramework {
    fn default() -> Self {
        Self::new()
    }
}

impl LlmFramework {
    /// Framework backed by the simulated client.
    pub fn new() -> Self {
        Self {
            client: Box::new(SimulatedLlm),
        }
    }

    /// Framework backed by a caller-supplied client.
    pub fn with_client(client: Box<dyn LlmClient>) -> Self {
        Self { client }
    }

    /// The system prompt framing every request.
    pub fn system_prompt(&self) -> &'static str {
        prompts::SYSTEM_PROMPT
    }

    /// Free-form analysis of the given preferences.
    pub fn analyze_color_preferences(
        &self,
        prefs: &ColorPreferences,
    ) -> Result<PreferenceNarrative, ProfileError> {
        let raw = self
            .client
            .generate(&prompts::color_preference_prompt(prefs))?;
        Ok(parse_preference_analysis(&raw))
    }

    /// Jung color-energy narrative from an ordered ranking.
    pub fn analyze_jung_color_energy(
        &self,
        color_ranking: &[String],
    ) -> Result<JungEnergyNarrative, ProfileError> {
        let raw = self
            .client
            .generate(&prompts::jung_energy_prompt(color_ranking))?;
        Ok(parse_jung_energy_analysis(&raw))
    }

    /// Comprehensive profile narrative from the flat profile-data map.
    pub fn generate_comprehensive_profile(
        &self,
        profile_data: &serde_json::Map<String, serde_json::Value>,
    ) -> Result<ProfileNarrative, ProfileError> {
        let raw = self
            .client
            .generate(&prompts::comprehensive_profile_prompt(profile_data))?;
        Ok(parse_comprehensive_profile(&raw))
    }

    /// Personalized recommendations from a profile summary.
    pub fn generate_recommendations(
        &self,
        profile_summary: &str,
    ) -> Result<Recommendations, ProfileError> {
        let raw = self
            .client
            .generate(&prompts::recommendations_prompt(profile_summary))?;
        Ok(parse_recommendations(&raw))
    }
}

impl std::fmt::Debug for LlmFramework {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmFramework").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jung_energy_round_trip() {
        let framework = LlmFramework::new();
        let narrative = framework
            .analyze_jung_color_energy(&["blue".to_string(), "green".to_string()])
            .unwrap();

        assert_eq!(narrative.primary_energy, "Cool Blue");
        assert_eq!(narrative.secondary_energy, "Earth Green");
        assert!(!narrative.work_preferences.is_empty());
    }

    #[test]
    fn test_preference_analysis_round_trip() {
        let framework = LlmFramework::new();
        let prefs = ColorPreferences {
            primary_color: Some("blue".to_string()),
            ..Default::default()
        };
        let narrative = framework.analyze_color_preferences(&prefs).unwrap();

        assert!(narrative
            .strengths
            .contains(&"Thorough analysis and attention to detail".to_string()));
        assert!(narrative.full_analysis.contains("psychological analysis"));
    }

    #[test]
    fn test_failing_client_propagates() {
        struct FailingClient;
        impl LlmClient for FailingClient {
            fn generate(&self, _prompt: &str) -> Result<String, ProfileError> {
                Err(ProfileError::Backend {
                    message: "unreachable".to_string(),
                })
            }
        }

        let framework = LlmFramework::with_client(Box::new(FailingClient));
        let err = framework.generate_recommendations("summary").unwrap_err();
        assert!(matches!(err, ProfileError::Backend { .. }));
    }
}
