use serde::{Deserialize, Serialize};

/// Body sent to the classification service.
#[derive(Debug, Clone, Serialize)]
pub struct ClassifyRequest<'a> {
    pub data: [&'a str; 1],
}

impl<'a> ClassifyRequest<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { data: [text] }
    }
}

/// Body returned by the classification service.
#[derive(Debug, Clone, Deserialize)]
pub struct ClassifyResponse {
    pub data: Vec<Prediction>,

    /// Model-side processing time in seconds, when reported.
    #[serde(default)]
    pub duration: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Prediction {
    /// Top-ranked label. Repeated as the first entry of `confidences`.
    #[serde(default)]
    pub label: Option<String>,

    pub confidences: Vec<Confidence>,
}

/// One ranked candidate: a raw label and the model's confidence in it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Confidence {
    pub label: String,
    pub confidence: f64,
}

impl Confidence {
    pub fn new(label: impl Into<String>, confidence: f64) -> Self {
        Self {
            label: label.into(),
            confidence,
        }
    }
}

impl ClassifyResponse {
    /// Takes the confidences of the first prediction, preserving rank order.
    pub fn into_confidences(self) -> Option<Vec<Confidence>> {
        self.data.into_iter().next().map(|p| p.confidences)
    }
}
