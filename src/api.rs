//! Outward-facing convenience API sequencing normalization, scoring, and
//! profile generation.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::processor::ColorDataProcessor;
use crate::analysis::types::{
    AnalysisResult, ColorPreferences, ContextAnalysis, DimensionAnalysis, EmotionAnalysis,
    EnergyAnalysis,
};
use crate::error::ProfileError;
use crate::llm::response::Recommendations;
use crate::profile::{CompleteProfile, ProfileGenerator};

/// Full response of [`PsychoColorApi::analyze_color_preferences`]: the
/// quantified analysis plus the generated profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorProfileResponse {
    pub analysis_results: AnalysisResult,
    pub profile: CompleteProfile,
}

/// Main entry point of the system.
#[derive(Debug, Default)]
pub struct PsychoColorApi {
    processor: ColorDataProcessor,
    generator: ProfileGenerator,
}

impl PsychoColorApi {
    /// API backed by the default (simulated) narrative stage.
    pub fn new() -> Self {
        Self::default()
    }

    /// API with a caller-supplied profile generator (e.g. one wired to a
    /// real narrative backend).
    pub fn with_generator(generator: ProfileGenerator) -> Self {
        Self {
            processor: ColorDataProcessor::new(),
            generator,
        }
    }

    /// Analyze raw preferences and generate the complete profile.
    pub fn analyze_color_preferences(
        &self,
        raw: &ColorPreferences,
    ) -> Result<ColorProfileResponse, ProfileError> {
        debug!("full color-preference analysis requested");
        let analysis_results = self.processor.analyze(raw);
        let profile = self.generator.generate_profile(&analysis_results)?;
        Ok(ColorProfileResponse {
            analysis_results,
            profile,
        })
    }

    /// Jung color-energy analysis only.
    pub fn jung_color_energies(&self, raw: &ColorPreferences) -> EnergyAnalysis {
        self.processor.analyze(raw).jung_color_energies
    }

    /// Personality-dimension analysis only.
    pub fn personality_dimensions(&self, raw: &ColorPreferences) -> DimensionAnalysis {
        self.processor.analyze(raw).personality_dimensions
    }

    /// Emotional-tendency analysis only.
    pub fn emotional_tendencies(&self, raw: &ColorPreferences) -> EmotionAnalysis {
        self.processor.analyze(raw).emotional_tendencies
    }

    /// Contextual analysis, when the input carries context fields.
    pub fn contextual_analysis(&self, raw: &ColorPreferences) -> Option<ContextAnalysis> {
        self.processor.analyze(raw).contextual_analysis
    }

    /// Personalized recommendations only.
    pub fn recommendations(&self, raw: &ColorPreferences) -> Result<Recommendations, ProfileError> {
        let analysis = self.processor.analyze(raw);
        Ok(self.generator.generate_profile(&analysis)?.recommendations)
    }
}
