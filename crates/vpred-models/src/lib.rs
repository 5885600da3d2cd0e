//! Shared models for the viral predictor.
//!
//! This crate provides:
//! - The typed prediction form and its field catalogue
//! - Numeric coercion of raw form input into wire numbers
//! - Serde types for the prediction endpoint's request and response
//! - The verdict badge shown for a prediction result

pub mod error;
pub mod field;
pub mod form;
pub mod number;
pub mod request;
pub mod verdict;

// Re-export common types
pub use error::{ModelError, ModelResult};
pub use field::{FieldKind, FieldSpec, FormField};
pub use form::VideoForm;
pub use number::{NumericPolicy, WireNumber};
pub use request::{PredictionRequest, PredictionResponse};
pub use verdict::Verdict;
