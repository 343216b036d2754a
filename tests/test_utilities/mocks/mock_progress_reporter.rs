use sbom_compare::prelude::*;
use std::sync::{Arc, Mutex};

/// What the tool told the user, by channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportedEvent {
    Message(String),
    Progress {
        current: usize,
        total: usize,
        document: Option<String>,
    },
    Error(String),
    Completion(String),
}

/// Mock ProgressReporter that records every event in order
#[derive(Default, Clone)]
pub struct MockProgressReporter {
    events: Arc<Mutex<Vec<ReportedEvent>>>,
}

impl MockProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ReportedEvent> {
        self.events.lock().unwrap().clone()
    }

    /// `(current, total)` pairs of the fetch counter, in report order
    pub fn progress(&self) -> Vec<(usize, usize)> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                ReportedEvent::Progress { current, total, .. } => Some((current, total)),
                _ => None,
            })
            .collect()
    }

    /// Documents named by progress events, in completion order
    pub fn progressed_documents(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                ReportedEvent::Progress { document, .. } => document,
                _ => None,
            })
            .collect()
    }

    pub fn errors(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                ReportedEvent::Error(message) => Some(message),
                _ => None,
            })
            .collect()
    }

    pub fn completions(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                ReportedEvent::Completion(message) => Some(message),
                _ => None,
            })
            .collect()
    }

    fn push(&self, event: ReportedEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.push(ReportedEvent::Message(message.to_string()));
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        self.push(ReportedEvent::Progress {
            current,
            total,
            document: message.map(String::from),
        });
    }

    fn report_error(&self, message: &str) {
        self.push(ReportedEvent::Error(message.to_string()));
    }

    fn report_completion(&self, message: &str) {
        self.push(ReportedEvent::Completion(message.to_string()));
    }
}
