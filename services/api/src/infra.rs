use metrics_exporter_prometheus::PrometheusHandle;
use report_comments::config::AppConfig;
use report_comments::error::AppError;
use report_comments::workflows::batch::{BatchLimits, CommentEntry};
use report_comments::workflows::comments::{
    CommentAssembler, PhraseBank, RandomSource, SeededRandom, ThreadRandom,
};
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, PoisonError};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Comments generated during the current service session, in generation order.
#[derive(Default, Clone)]
pub(crate) struct InMemoryCommentSession {
    entries: Arc<Mutex<Vec<CommentEntry>>>,
}

impl InMemoryCommentSession {
    pub(crate) fn append(&self, entries: impl IntoIterator<Item = CommentEntry>) {
        let mut guard = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        guard.extend(entries);
    }

    pub(crate) fn entries(&self) -> Vec<CommentEntry> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Empties the session and reports how many entries were dropped.
    pub(crate) fn clear(&self) -> usize {
        let mut guard = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        let cleared = guard.len();
        guard.clear();
        cleared
    }
}

/// Everything the comment endpoints share: the assembler over the loaded bank, batch limits and
/// the session store.
#[derive(Clone)]
pub(crate) struct CommentService {
    pub(crate) assembler: CommentAssembler,
    pub(crate) limits: BatchLimits,
    pub(crate) session: InMemoryCommentSession,
}

impl CommentService {
    pub(crate) fn new(assembler: CommentAssembler, limits: BatchLimits) -> Self {
        Self {
            assembler,
            limits,
            session: InMemoryCommentSession::default(),
        }
    }

    /// Service over the built-in catalog with the configured budget and limits.
    pub(crate) fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        let bank = Arc::new(PhraseBank::standard()?);
        let assembler = CommentAssembler::with_budget(bank, config.generation.target_chars);
        Ok(Self::new(assembler, config.batch.limits()))
    }
}

/// Seeded when a seed is supplied, otherwise thread-local randomness.
pub(crate) fn random_source(seed: Option<u64>) -> Box<dyn RandomSource + Send> {
    match seed {
        Some(seed) => Box::new(SeededRandom::new(seed)),
        None => Box::new(ThreadRandom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str) -> CommentEntry {
        CommentEntry {
            student_name: name.to_string(),
            subject: "English".to_string(),
            year: 5,
            comment: format!("This term, {name} worked hard."),
            char_count: 0,
            generated_at: chrono::NaiveDate::from_ymd_opt(2025, 9, 1)
                .and_then(|date| date.and_hms_opt(12, 0, 0))
                .expect("valid timestamp"),
        }
    }

    #[test]
    fn session_keeps_insertion_order_and_clears() {
        let session = InMemoryCommentSession::default();
        session.append([entry("Aseel")]);
        session.append([entry("Omar"), entry("Lina")]);

        let names: Vec<_> = session
            .entries()
            .into_iter()
            .map(|entry| entry.student_name)
            .collect();
        assert_eq!(names, vec!["Aseel", "Omar", "Lina"]);

        assert_eq!(session.clear(), 3);
        assert!(session.entries().is_empty());
    }

    #[test]
    fn seeded_sources_repeat() {
        let mut first = random_source(Some(5));
        let mut second = random_source(Some(5));
        let left: Vec<_> = (0..8).map(|_| first.pick_index(10)).collect();
        let right: Vec<_> = (0..8).map(|_| second.pick_index(10)).collect();
        assert_eq!(left, right);
    }
}
