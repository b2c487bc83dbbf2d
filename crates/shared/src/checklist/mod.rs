//! Onboarding checklist state.
//!
//! Tracks which fixed tasks are completed and which one is expanded. The
//! completed set is written back to storage on every change; the expanded
//! task only lives for the session.

mod storage;
mod tasks;

use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::warn;

pub use storage::{MemoryStorage, Storage};
pub use tasks::{find, is_known, Task, TaskId, TASKS};

pub const STORAGE_KEY: &str = "citykey-completed-tasks";

pub struct Checklist {
    storage: Arc<dyn Storage>,
    completed: BTreeSet<TaskId>,
    expanded: Option<TaskId>,
}

impl Checklist {
    /// Restore the completed set from storage. Missing or unreadable data
    /// starts an empty checklist.
    pub fn load(storage: Arc<dyn Storage>) -> Self {
        let completed = match storage.get(STORAGE_KEY) {
            Ok(Some(raw)) => match decode(&raw) {
                Ok(ids) => ids,
                Err(e) => {
                    warn!(error = %e, "Failed to parse completed tasks, starting empty");
                    BTreeSet::new()
                }
            },
            Ok(None) => BTreeSet::new(),
            Err(e) => {
                warn!(error = %e, "Failed to read completed tasks, starting empty");
                BTreeSet::new()
            }
        };

        Self {
            storage,
            completed,
            expanded: None,
        }
    }

    /// Flip a task's completion. Returns whether the task is now completed.
    pub fn toggle_complete(&mut self, id: TaskId) -> bool {
        if !self.completed.remove(&id) {
            if !is_known(id) {
                warn!(task_id = id, "Ignoring completion toggle for unknown task");
                return false;
            }
            self.completed.insert(id);
        }
        self.persist();
        self.completed.contains(&id)
    }

    /// Expand a task, collapsing any other. Toggling the expanded task collapses it.
    pub fn toggle_expand(&mut self, id: TaskId) {
        self.expanded = if self.expanded == Some(id) { None } else { Some(id) };
    }

    /// Clear every completion.
    pub fn reset(&mut self) {
        self.completed.clear();
        self.persist();
    }

    pub fn is_completed(&self, id: TaskId) -> bool {
        self.completed.contains(&id)
    }

    pub fn is_expanded(&self, id: TaskId) -> bool {
        self.expanded == Some(id)
    }

    pub fn expanded(&self) -> Option<TaskId> {
        self.expanded
    }

    /// Completed ids as stored, including any no longer in the task set.
    pub fn completed_ids(&self) -> &BTreeSet<TaskId> {
        &self.completed
    }

    /// Completed tasks that belong to the current task set.
    pub fn completed_count(&self) -> usize {
        self.completed.iter().filter(|id| is_known(**id)).count()
    }

    pub fn total(&self) -> usize {
        TASKS.len()
    }

    pub fn progress(&self) -> f64 {
        self.completed_count() as f64 / self.total() as f64
    }

    pub fn progress_percent(&self) -> u32 {
        (self.progress() * 100.0).round() as u32
    }

    fn persist(&self) {
        let result = encode(&self.completed)
            .and_then(|raw| self.storage.set(STORAGE_KEY, &raw));
        if let Err(e) = result {
            warn!(error = %e, "Failed to persist completed tasks");
        }
    }
}

pub fn encode(ids: &BTreeSet<TaskId>) -> anyhow::Result<String> {
    Ok(serde_json::to_string(ids)?)
}

pub fn decode(raw: &str) -> anyhow::Result<BTreeSet<TaskId>> {
    let ids: Vec<TaskId> = serde_json::from_str(raw)?;
    Ok(ids.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty() -> (Arc<MemoryStorage>, Checklist) {
        let storage = Arc::new(MemoryStorage::new());
        let checklist = Checklist::load(storage.clone());
        (storage, checklist)
    }

    #[test]
    fn toggle_complete_twice_restores_state() {
        let (_, mut checklist) = empty();
        checklist.toggle_complete(2);
        let before = checklist.completed_ids().clone();

        assert!(checklist.toggle_complete(4));
        assert!(!checklist.toggle_complete(4));
        assert_eq!(checklist.completed_ids(), &before);
    }

    #[test]
    fn every_toggle_is_persisted() {
        let (storage, mut checklist) = empty();
        checklist.toggle_complete(3);
        checklist.toggle_complete(1);
        assert_eq!(storage.get(STORAGE_KEY).unwrap().as_deref(), Some("[1,3]"));

        checklist.toggle_complete(3);
        assert_eq!(storage.get(STORAGE_KEY).unwrap().as_deref(), Some("[1]"));
    }

    #[test]
    fn unknown_task_is_not_added() {
        let (storage, mut checklist) = empty();
        assert!(!checklist.toggle_complete(42));
        assert!(checklist.completed_ids().is_empty());
        assert_eq!(storage.get(STORAGE_KEY).unwrap(), None);
    }

    #[test]
    fn expanding_another_task_collapses_the_first() {
        let (_, mut checklist) = empty();
        checklist.toggle_expand(1);
        checklist.toggle_expand(5);
        assert_eq!(checklist.expanded(), Some(5));
        assert!(!checklist.is_expanded(1));

        checklist.toggle_expand(5);
        assert_eq!(checklist.expanded(), None);
    }

    #[test]
    fn expansion_is_not_persisted() {
        let (storage, mut checklist) = empty();
        checklist.toggle_expand(2);
        assert_eq!(storage.get(STORAGE_KEY).unwrap(), None);
        assert_eq!(Checklist::load(storage).expanded(), None);
    }

    #[test]
    fn progress_spans_zero_to_one() {
        let (_, mut checklist) = empty();
        assert_eq!(checklist.progress(), 0.0);

        let mut last = 0.0;
        for task in &TASKS {
            checklist.toggle_complete(task.id);
            assert!(checklist.progress() > last);
            last = checklist.progress();
        }
        assert_eq!(checklist.progress(), 1.0);
        assert_eq!(checklist.progress_percent(), 100);
    }

    #[test]
    fn progress_percent_is_rounded() {
        let (_, mut checklist) = empty();
        checklist.toggle_complete(1);
        assert_eq!(checklist.progress_percent(), 17);
        checklist.toggle_complete(2);
        assert_eq!(checklist.progress_percent(), 33);
    }

    #[test]
    fn restores_from_storage() {
        let storage = Arc::new(MemoryStorage::with_entry(STORAGE_KEY, "[6, 2]"));
        let checklist = Checklist::load(storage);
        assert!(checklist.is_completed(2));
        assert!(checklist.is_completed(6));
        assert_eq!(checklist.completed_count(), 2);
    }

    #[test]
    fn corrupt_storage_starts_empty() {
        for raw in ["{not json", "\"text\"", "[1, -4]", "null"] {
            let storage = Arc::new(MemoryStorage::with_entry(STORAGE_KEY, raw));
            let checklist = Checklist::load(storage);
            assert!(checklist.completed_ids().is_empty(), "input {raw}");
        }
    }

    #[test]
    fn stale_ids_are_kept_but_not_counted() {
        let storage = Arc::new(MemoryStorage::with_entry(STORAGE_KEY, "[1, 99]"));
        let mut checklist = Checklist::load(storage.clone());
        assert_eq!(checklist.completed_count(), 1);
        assert!(checklist.progress() < 1.0);

        checklist.toggle_complete(2);
        assert_eq!(storage.get(STORAGE_KEY).unwrap().as_deref(), Some("[1,2,99]"));
    }

    #[test]
    fn reset_clears_and_persists() {
        let (storage, mut checklist) = empty();
        checklist.toggle_complete(1);
        checklist.reset();
        assert_eq!(checklist.completed_count(), 0);
        assert_eq!(storage.get(STORAGE_KEY).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn encoding_round_trips() {
        let ids: BTreeSet<TaskId> = [5, 1, 3].into_iter().collect();
        assert_eq!(decode(&encode(&ids).unwrap()).unwrap(), ids);
    }
}
