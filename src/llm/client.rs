//! Narrative backend seam.
//!
//! The scoring pipeline hands its structured result to an external narrative
//! generator. The transport to a real language-model service is out of
//! scope; [`SimulatedLlm`] stands in for it with canned responses so the
//! rest of the pipeline can run end to end.

use tracing::trace;

use crate::error::ProfileError;

/// A backend that turns a prompt into narrative text.
pub trait LlmClient: Send + Sync {
    /// Generate a response for the given prompt.
    fn generate(&self, prompt: &str) -> Result<String, ProfileError>;
}

const JUNG_ENERGY_RESPONSE: &str = include_str!("responses/jung_energy.md");
const COMPREHENSIVE_PROFILE_RESPONSE: &str = include_str!("responses/comprehensive_profile.md");
const RECOMMENDATIONS_RESPONSE: &str = include_str!("responses/recommendations.md");
const PREFERENCE_ANALYSIS_RESPONSE: &str = include_str!("responses/preference_analysis.md");

/// Development stand-in for a real narrative backend.
///
/// Selects one of four embedded responses by marker substrings that are
/// unique to the corresponding prompt template, falling back to the generic
/// preference analysis.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedLlm;

impl LlmClient for SimulatedLlm {
    fn generate(&self, prompt: &str) -> Result<String, ProfileError> {
        trace!(prompt_len = prompt.len(), "simulating narrative response");

        let response = if prompt.contains("Four Color Energy distribution") {
            JUNG_ENERGY_RESPONSE
        } else if prompt.contains("comprehensive psychological profile") {
            COMPREHENSIVE_PROFILE_RESPONSE
        } else if prompt.contains("specific recommendations") {
            RECOMMENDATIONS_RESPONSE
        } else {
            PREFERENCE_ANALYSIS_RESPONSE
        };
        Ok(response.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::prompts;

    #[test]
    fn test_prompt_templates_route_to_their_responses() {
        let client = SimulatedLlm;

        let jung = client
            .generate(&prompts::jung_energy_prompt(&["blue".to_string()]))
            .unwrap();
        assert!(jung.contains("Primary Color Energy: Cool Blue"));

        let profile = client
            .generate(&prompts::comprehensive_profile_prompt(
                &serde_json::Map::new(),
            ))
            .unwrap();
        assert!(profile.contains("## 1. Personality Overview"));

        let recs = client
            .generate(&prompts::recommendations_prompt("summary"))
            .unwrap();
        assert!(recs.contains("## 1. Optimal Work Environment"));

        let generic = client.generate("hello").unwrap();
        assert!(generic.contains("Potential strengths include:"));
    }
}
