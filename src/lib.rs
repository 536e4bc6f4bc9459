//! # psycho-color
//!
//! Color-preference scoring and profile pipeline. Converts free-text color
//! preferences into canonical color tokens, scores them across four
//! independent frameworks (Jung color-energy affinity, bipolar personality
//! dimensions, emotion-association ranking, cross-context consistency), and
//! hands the quantified result to a narrative-generation stage.
//!
//! The scoring core is pure and stateless aside from fixed reference tables:
//! every operation is a deterministic function of its input, with no I/O and
//! no shared mutable state. It is total over its input domain — malformed or
//! missing fields degrade to neutral defaults, never errors.
//!
//! ```
//! use psycho_color::{ColorPreferences, PsychoColorApi};
//!
//! let api = PsychoColorApi::new();
//! let energies = api.jung_color_energies(&ColorPreferences {
//!     primary_color: Some("Navy Blue".to_string()),
//!     secondary_color: Some("Forest Green".to_string()),
//!     ..Default::default()
//! });
//! assert_eq!(energies.primary_energy.name(), "Cool Blue");
//! ```

pub mod analysis;
pub mod api;
pub mod error;
pub mod llm;
pub mod profile;

pub use analysis::{
    is_processed, normalize, AnalysisResult, CanonicalColor, ColorAnalyzer, ColorDataProcessor,
    ColorEnergy, ColorPreferences, ColorRanking, ContextAnalysis, Dimension, DimensionAnalysis,
    EmotionAnalysis, EnergyAnalysis,
};
pub use api::{ColorProfileResponse, PsychoColorApi};
pub use error::ProfileError;
pub use llm::{LlmClient, LlmFramework, SimulatedLlm};
pub use profile::{CompleteProfile, ProfileGenerator};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
