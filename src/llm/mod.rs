//! The narrative-generation stage: prompt construction, a backend seam with
//! a simulated client, and marker-based response segmentation.
//!
//! This layer is an external collaborator of the scoring core; nothing here
//! feeds back into the numeric scores.

pub mod client;
pub mod framework;
pub mod prompts;
pub mod response;

pub use client::{LlmClient, SimulatedLlm};
pub use framework::LlmFramework;
pub use response::{
    JungEnergyNarrative, PreferenceNarrative, ProfileNarrative, Recommendations,
};
