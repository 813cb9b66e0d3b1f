//! In-memory task store
//!
//! [`TaskStore`] owns the canonical task list, the active [`Filter`], and the
//! text of the task being typed. Every operation is synchronous and
//! deterministic; the filtered view is recomputed on each read.
//!
//! The store has no internal locking. It is meant to be owned by a single
//! front end (CLI script, TUI loop) and mutated through `&mut self`.

use serde::Serialize;

use super::id::TaskId;
use super::task::{Filter, Task};

/// Task totals by completion state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TaskCounts {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}

/// Owns the task list, the active filter and the pending input text
#[derive(Debug, Clone)]
pub struct TaskStore {
    tasks: Vec<Task>,
    filter: Filter,
    pending: String,
    next_id: TaskId,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            filter: Filter::default(),
            pending: String::new(),
            next_id: TaskId::new(1),
        }
    }
}

impl TaskStore {
    /// Creates a store seeded with the given texts
    ///
    /// Seed entries get ids `1..=n` in order and start not done. Seed text is
    /// taken as given.
    pub fn initialize<I, S>(seed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut store = Self::default();
        for text in seed {
            let id = store.issue_id();
            store.tasks.push(Task::new(id, text));
        }
        store
    }

    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    fn issue_id(&mut self) -> TaskId {
        let id = self.next_id;
        self.next_id = id.next();
        id
    }

    /// All tasks, in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Looks up a task by id
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Flips `done` on the task with the given id
    ///
    /// An unknown id leaves the list unchanged.
    pub fn toggle(&mut self, id: TaskId) -> &[Task] {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.toggle();
        }
        &self.tasks
    }

    /// Sets `done` on every task
    pub fn set_all_done(&mut self, value: bool) -> &[Task] {
        for task in &mut self.tasks {
            task.done = value;
        }
        &self.tasks
    }

    /// Appends a new task if `text` is not blank
    ///
    /// The stored text is trimmed. On success the pending input text is
    /// cleared and `true` is returned; blank input changes nothing and
    /// returns `false`.
    pub fn add(&mut self, text: &str) -> (&[Task], bool) {
        let text = text.trim();
        if text.is_empty() {
            return (&self.tasks, false);
        }

        let id = self.issue_id();
        self.tasks.push(Task::new(id, text));
        self.pending.clear();
        (&self.tasks, true)
    }

    /// The text typed for the next task
    pub fn pending(&self) -> &str {
        &self.pending
    }

    /// Replaces the pending input text
    pub fn set_pending(&mut self, text: impl Into<String>) {
        self.pending = text.into();
    }

    /// Adds a task from the pending input text
    pub fn commit_pending(&mut self) -> bool {
        let text = self.pending.clone();
        let (_, added) = self.add(&text);
        added
    }

    /// The active filter
    pub fn filter(&self) -> Filter {
        self.filter
    }

    /// Replaces the active filter
    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    /// Tasks matching the active filter, in insertion order
    pub fn visible_tasks(&self) -> impl Iterator<Item = &Task> + '_ {
        let filter = self.filter;
        self.tasks.iter().filter(move |t| filter.matches(t))
    }

    /// Returns true if there is at least one task and all are done
    pub fn all_done(&self) -> bool {
        !self.tasks.is_empty() && self.tasks.iter().all(|t| t.done)
    }

    /// Counts tasks by completion state
    pub fn counts(&self) -> TaskCounts {
        let completed = self.tasks.iter().filter(|t| t.done).count();
        TaskCounts {
            total: self.tasks.len(),
            completed,
            pending: self.tasks.len() - completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn seeded() -> TaskStore {
        TaskStore::initialize(["Victor", "Garcia", "Baez", "VictorGarciaBaez"])
    }

    fn ids(tasks: &[Task]) -> Vec<u64> {
        tasks.iter().map(|t| t.id.value()).collect()
    }

    #[test]
    fn initialize_assigns_sequential_ids() {
        let store = seeded();

        assert_eq!(ids(store.tasks()), vec![1, 2, 3, 4]);
        assert!(store.tasks().iter().all(|t| !t.done));
        assert_eq!(store.filter(), Filter::All);
        assert_eq!(store.pending(), "");
    }

    #[test]
    fn initialize_empty_seed() {
        let store = TaskStore::initialize(Vec::<String>::new());
        assert!(store.is_empty());
    }

    #[test]
    fn toggle_flips_only_matching_task() {
        let mut store = seeded();

        store.toggle(TaskId::new(2));

        let done: Vec<bool> = store.tasks().iter().map(|t| t.done).collect();
        assert_eq!(done, vec![false, true, false, false]);
    }

    #[test]
    fn toggle_unknown_id_is_noop() {
        let mut store = seeded();
        let before = store.tasks().to_vec();

        let after = store.toggle(TaskId::new(99));

        assert_eq!(after, before.as_slice());
    }

    #[test]
    fn set_all_done_preserves_order_and_ids() {
        let mut store = seeded();
        store.toggle(TaskId::new(3));

        let tasks = store.set_all_done(true);
        assert_eq!(ids(tasks), vec![1, 2, 3, 4]);
        assert!(tasks.iter().all(|t| t.done));

        let tasks = store.set_all_done(false);
        assert!(tasks.iter().all(|t| !t.done));
    }

    #[test]
    fn set_all_done_on_empty_store() {
        let mut store = TaskStore::new();
        assert!(store.set_all_done(true).is_empty());
        assert!(!store.all_done());
    }

    #[test]
    fn add_appends_trimmed_task_and_clears_pending() {
        let mut store = seeded();
        store.set_pending("  Pedro ");

        let (tasks, added) = store.add("  Pedro ");

        assert!(added);
        let last = tasks.last().unwrap();
        assert_eq!(last.id, TaskId::new(5));
        assert_eq!(last.text, "Pedro");
        assert!(!last.done);
        assert_eq!(store.pending(), "");
    }

    #[test]
    fn add_rejects_blank_input() {
        let mut store = seeded();
        store.set_pending("   ");

        let (tasks, added) = store.add("   ");

        assert!(!added);
        assert_eq!(tasks.len(), 4);
        // Pending text is left as typed
        assert_eq!(store.pending(), "   ");
    }

    #[test]
    fn add_rejects_empty_and_whitespace_variants() {
        let mut store = TaskStore::new();
        for blank in ["", " ", "\t", "\n  \t"] {
            let (_, added) = store.add(blank);
            assert!(!added, "{:?} should be rejected", blank);
        }
        assert!(store.is_empty());
    }

    #[test]
    fn add_ids_keep_growing_past_existing_ids() {
        let mut store = TaskStore::initialize(["a", "b"]);
        store.add("c");
        store.add("d");

        assert_eq!(ids(store.tasks()), vec![1, 2, 3, 4]);
    }

    #[test]
    fn commit_pending_adds_and_clears() {
        let mut store = seeded();
        store.set_pending("Pedro");

        assert!(store.commit_pending());
        assert_eq!(store.tasks().last().unwrap().text, "Pedro");
        assert_eq!(store.pending(), "");

        // Nothing left to commit
        assert!(!store.commit_pending());
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn visible_tasks_follow_filter() {
        let mut store = seeded();
        store.toggle(TaskId::new(2));
        store.toggle(TaskId::new(4));

        assert_eq!(store.visible_tasks().count(), 4);

        store.set_filter(Filter::Completed);
        let completed: Vec<u64> = store.visible_tasks().map(|t| t.id.value()).collect();
        assert_eq!(completed, vec![2, 4]);

        store.set_filter(Filter::Pending);
        let pending: Vec<u64> = store.visible_tasks().map(|t| t.id.value()).collect();
        assert_eq!(pending, vec![1, 3]);
    }

    #[test]
    fn visible_tasks_reflect_later_mutations() {
        let mut store = seeded();
        store.set_filter(Filter::Completed);
        assert_eq!(store.visible_tasks().count(), 0);

        store.toggle(TaskId::new(1));
        assert_eq!(store.visible_tasks().count(), 1);

        store.set_all_done(true);
        assert_eq!(store.visible_tasks().count(), 4);
    }

    #[test]
    fn all_done_is_false_for_empty_store() {
        assert!(!TaskStore::new().all_done());
    }

    #[test]
    fn all_done_tracks_every_task() {
        let mut store = seeded();
        assert!(!store.all_done());

        store.set_all_done(true);
        assert!(store.all_done());

        store.toggle(TaskId::new(1));
        assert!(!store.all_done());

        store.set_all_done(false);
        assert!(!store.all_done());
    }

    #[test]
    fn counts_split_by_state() {
        let mut store = seeded();
        store.toggle(TaskId::new(1));

        assert_eq!(
            store.counts(),
            TaskCounts {
                total: 4,
                completed: 1,
                pending: 3
            }
        );
    }

    #[test]
    fn get_finds_task_by_id() {
        let store = seeded();
        assert_eq!(store.get(TaskId::new(3)).unwrap().text, "Baez");
        assert!(store.get(TaskId::new(5)).is_none());
    }

    #[test]
    fn full_scenario() {
        let mut store = seeded();

        store.toggle(TaskId::new(2));
        store.set_filter(Filter::Completed);
        let visible: Vec<Task> = store.visible_tasks().cloned().collect();
        assert_eq!(
            visible,
            vec![Task {
                id: TaskId::new(2),
                text: "Garcia".to_string(),
                done: true,
            }]
        );

        store.set_pending("Pedro");
        let (_, added) = store.add("Pedro");
        assert!(added);
        assert_eq!(
            store.get(TaskId::new(5)),
            Some(&Task::new(TaskId::new(5), "Pedro"))
        );
        assert_eq!(store.pending(), "");

        let long = store.get(TaskId::new(4)).unwrap();
        assert_eq!(long.short_text(), "VictorGarc...");
    }

    fn any_filter() -> impl Strategy<Value = Filter> {
        prop_oneof![
            Just(Filter::All),
            Just(Filter::Completed),
            Just(Filter::Pending),
        ]
    }

    proptest! {
        #[test]
        fn ids_stay_unique(texts in prop::collection::vec(".{0,12}", 0..40)) {
            let mut store = seeded();
            for text in &texts {
                store.add(text);
            }

            let unique: HashSet<TaskId> = store.tasks().iter().map(|t| t.id).collect();
            prop_assert_eq!(unique.len(), store.len());
        }

        #[test]
        fn toggle_twice_restores(done in prop::collection::vec(any::<bool>(), 1..20), pick in any::<prop::sample::Index>()) {
            let mut store = TaskStore::initialize(done.iter().map(|_| "task"));
            for (task_id, flag) in (1..).map(TaskId::new).zip(&done) {
                if *flag {
                    store.toggle(task_id);
                }
            }
            let before = store.tasks().to_vec();
            let target = before[pick.index(before.len())].id;

            store.toggle(target);
            store.toggle(target);

            prop_assert_eq!(store.tasks(), before.as_slice());
        }

        #[test]
        fn filters_partition_the_list(done in prop::collection::vec(any::<bool>(), 0..20), filter in any_filter()) {
            let mut store = TaskStore::initialize(done.iter().map(|_| "task"));
            for (task_id, flag) in (1..).map(TaskId::new).zip(&done) {
                if *flag {
                    store.toggle(task_id);
                }
            }

            store.set_filter(filter);
            prop_assert!(store.visible_tasks().all(|t| filter.matches(t)));

            store.set_filter(Filter::Completed);
            let completed: HashSet<TaskId> = store.visible_tasks().map(|t| t.id).collect();
            store.set_filter(Filter::Pending);
            let pending: HashSet<TaskId> = store.visible_tasks().map(|t| t.id).collect();
            store.set_filter(Filter::All);
            let all: HashSet<TaskId> = store.visible_tasks().map(|t| t.id).collect();

            prop_assert!(completed.is_disjoint(&pending));
            let union: HashSet<TaskId> = completed.union(&pending).copied().collect();
            prop_assert_eq!(union, all);
            prop_assert_eq!(store.visible_tasks().count(), store.len());
        }

        #[test]
        fn set_all_done_agrees_with_all_done(n in 1usize..20, value in any::<bool>()) {
            let mut store = TaskStore::initialize((0..n).map(|i| format!("task {}", i)));
            store.set_all_done(value);
            prop_assert_eq!(store.all_done(), value);
        }
    }
}
