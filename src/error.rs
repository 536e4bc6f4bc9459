//! Error types for the narrative-generation stage.
//!
//! The scoring core is total over its input domain and never constructs an
//! error; only the narrative backend seam carries a `Result`. Response
//! segmentation is forgiving (missing markers yield empty sections) and
//! never fails on its own.

use thiserror::Error;

/// Errors from profile generation.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// The narrative backend failed to produce a response.
    #[error("narrative backend error: {message}")]
    Backend { message: String },
}
