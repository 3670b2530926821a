use crate::domain::shared::notice::{Notice, NoticeSink};
use std::sync::Mutex;

/// Keeps every notice in memory, in delivery order.
#[derive(Debug, Default)]
pub struct RecordingNoticeSink {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNoticeSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .map(|n| (*n).clone())
            .unwrap_or_else(|poisoned| (*poisoned.into_inner()).clone())
    }
}

impl NoticeSink for RecordingNoticeSink {
    fn notify(&self, notice: Notice) {
        tracing::debug!(%notice, "recorded notice");
        match self.notices.lock() {
            Ok(mut notices) => notices.push(notice),
            Err(poisoned) => poisoned.into_inner().push(notice),
        }
    }
}
