use hps::quiz::{
    Answer, Gender, RepositoryError, ResultRepository, SessionId, StoredResult,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Session results kept in memory, oldest session evicted once `capacity` is reached.
#[derive(Clone)]
pub(crate) struct InMemoryResultRepository {
    inner: Arc<Mutex<ResultSlots>>,
    capacity: usize,
}

#[derive(Default)]
struct ResultSlots {
    records: HashMap<SessionId, StoredResult>,
    arrival: VecDeque<SessionId>,
}

impl InMemoryResultRepository {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ResultSlots::default())),
            capacity: capacity.max(1),
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.inner
            .lock()
            .expect("repository mutex poisoned")
            .records
            .len()
    }
}

impl ResultRepository for InMemoryResultRepository {
    fn save(&self, record: StoredResult) -> Result<(), RepositoryError> {
        let mut guard = self
            .inner
            .lock()
            .map_err(|_| RepositoryError::Unavailable("result store lock poisoned".to_string()))?;
        let slots = &mut *guard;

        let session_id = record.session_id.clone();
        if slots.records.insert(session_id.clone(), record).is_some() {
            slots.arrival.retain(|existing| existing != &session_id);
        }
        slots.arrival.push_back(session_id);

        while slots.records.len() > self.capacity {
            match slots.arrival.pop_front() {
                Some(oldest) => {
                    slots.records.remove(&oldest);
                }
                None => break,
            }
        }
        Ok(())
    }

    fn fetch(&self, session_id: &SessionId) -> Result<Option<StoredResult>, RepositoryError> {
        let guard = self
            .inner
            .lock()
            .map_err(|_| RepositoryError::Unavailable("result store lock poisoned".to_string()))?;
        Ok(guard.records.get(session_id).cloned())
    }
}

/// Parses `QUESTION:OPTION` pairs such as `3:1`.
pub(crate) fn parse_answer(raw: &str) -> Result<Answer, String> {
    let (question, option) = raw
        .trim()
        .split_once(':')
        .ok_or_else(|| format!("answer '{raw}' must look like QUESTION:OPTION"))?;
    let question = question
        .trim()
        .parse::<u32>()
        .map_err(|err| format!("invalid question id in '{raw}' ({err})"))?;
    let option = option
        .trim()
        .parse::<u32>()
        .map_err(|err| format!("invalid option index in '{raw}' ({err})"))?;
    Ok(Answer::new(question, i64::from(option)))
}

pub(crate) fn parse_gender(raw: &str) -> Result<Gender, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "male" | "m" => Ok(Gender::Male),
        "female" | "f" => Ok(Gender::Female),
        "other" | "o" => Ok(Gender::Other),
        other => Err(format!(
            "unknown gender '{other}' (expected male, female or other)"
        )),
    }
}
