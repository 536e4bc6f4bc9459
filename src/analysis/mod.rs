//! Color-preference scoring: normalization plus the four analyses
//! (energy affinity, personality dimensions, emotion ranking, contextual
//! consistency).

pub mod analyzer;
pub mod context;
pub mod dimensions;
pub mod emotions;
pub mod energies;
pub mod normalizer;
pub mod processor;
pub mod reference;
pub mod types;

pub use analyzer::ColorAnalyzer;
pub use normalizer::{is_processed, normalize};
pub use processor::ColorDataProcessor;
pub use reference::{CanonicalColor, ColorEnergy, Dimension};
pub use types::{
    AnalysisResult, ColorPreferences, ColorRanking, ContextAnalysis, DimensionAnalysis,
    EmotionAnalysis, EnergyAnalysis,
};
