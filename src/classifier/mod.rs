//! Client for the hosted emote classification model.
//!
//! The model is reached through a single `POST` carrying `{"data": [text]}` and an
//! `access-token` cookie. Its answer is a ranked list of raw labels with confidences.

pub mod client;
pub mod error;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod model;


pub use client::{ClassifierBackend, HttpClassifier, HttpClassifierConfig};
pub use error::ClassifierError;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockClassifier;
pub use model::{ClassifyRequest, ClassifyResponse, Confidence, Prediction};
