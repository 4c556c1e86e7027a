use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;

use super::client::ClassifierBackend;
use super::error::ClassifierError;
use super::model::Confidence;

/// In-memory [`ClassifierBackend`] returning a canned answer.
#[derive(Debug)]
pub struct MockClassifier {
    outcome: MockOutcome,
    calls: AtomicUsize,
    texts: Mutex<Vec<String>>,
}

#[derive(Debug, Clone)]
enum MockOutcome {
    Confidences(Vec<Confidence>),
    Status(u16),
    Malformed,
}

impl MockClassifier {
    /// Answers every query with `confidences`.
    pub fn with_confidences(confidences: Vec<Confidence>) -> Self {
        Self::from_outcome(MockOutcome::Confidences(confidences))
    }

    /// Answers every query with the given labels, confidence descending from 1.0.
    pub fn with_labels(labels: &[&str]) -> Self {
        let confidences = labels
            .iter()
            .enumerate()
            .map(|(i, label)| Confidence::new(*label, 1.0 - i as f64 * 0.1))
            .collect();
        Self::with_confidences(confidences)
    }

    /// Fails every query as if the service returned `status`.
    pub fn failing(status: u16) -> Self {
        Self::from_outcome(MockOutcome::Status(status))
    }

    /// Fails every query as if the body could not be decoded.
    pub fn malformed() -> Self {
        Self::from_outcome(MockOutcome::Malformed)
    }

    fn from_outcome(outcome: MockOutcome) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
            texts: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn texts(&self) -> Vec<String> {
        self.texts.lock().clone()
    }
}

impl ClassifierBackend for MockClassifier {
    async fn classify(&self, text: &str) -> Result<Vec<Confidence>, ClassifierError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.texts.lock().push(text.to_string());

        match &self.outcome {
            MockOutcome::Confidences(confidences) => Ok(confidences.clone()),
            MockOutcome::Status(status) => Err(ClassifierError::Status { status: *status }),
            MockOutcome::Malformed => Err(ClassifierError::Decode {
                message: "mock malformed body".to_string(),
            }),
        }
    }
}
