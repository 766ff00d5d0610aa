//! # Task Entries
//!
//! The one entity of the app and the ordered collection that owns it.
//!
//! ```text
//! TaskList
//! └── entries: Vec<Task>       // insertion order, never sorted
//!     ├── id: TaskId           // uuid v4, never displayed
//!     ├── text: String         // trimmed, never empty
//!     └── completed: bool      // false at creation
//! ```
//!
//! Every operation either changes exactly what it names or does nothing.
//! There is no error type: callers learn about no-ops from the return value.

use std::fmt;

use uuid::Uuid;

/// Shown in place of the list when there are no entries.
pub const EMPTY_MESSAGE: &str = "할 일이 없습니다. 새로운 할 일을 추가하세요!";

/// Opaque identifier of a task entry. Used for lookup and equality only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Generate a fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single to-do item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    text: String,
    pub completed: bool,
}

impl Task {
    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Read-only projection of the collection for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListView<'a> {
    /// No entries; carries the message to show instead.
    Empty(&'static str),
    /// Every entry in insertion order.
    Entries(&'a [Task]),
}

/// Ordered collection of tasks.
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    entries: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new task with the trimmed `text`.
    ///
    /// Returns `None` (and changes nothing) when `text` is empty or
    /// whitespace-only.
    pub fn add(&mut self, text: &str) -> Option<TaskId> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let mut id = TaskId::new();
        while self.get(id).is_some() {
            id = TaskId::new();
        }

        self.entries.push(Task {
            id,
            text: text.to_string(),
            completed: false,
        });
        Some(id)
    }

    /// Flip `completed` on the task with `id`. Returns `false` if no task matched.
    pub fn toggle(&mut self, id: TaskId) -> bool {
        match self.entries.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                true
            }
            None => false,
        }
    }

    /// Remove the task with `id`. Returns `false` if no task matched.
    pub fn delete(&mut self, id: TaskId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|task| task.id != id);
        self.entries.len() != before
    }

    pub fn render(&self) -> ListView<'_> {
        if self.entries.is_empty() {
            ListView::Empty(EMPTY_MESSAGE)
        } else {
            ListView::Entries(&self.entries)
        }
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.entries.iter().find(|task| task.id == id)
    }

    pub fn position(&self, id: TaskId) -> Option<usize> {
        self.entries.iter().position(|task| task.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[Task] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.entries.iter().filter(|task| task.completed).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(list: &TaskList) -> Vec<&str> {
        list.iter().map(Task::text).collect()
    }

    #[test]
    fn add_trims_and_appends_incomplete_task() {
        let mut list = TaskList::new();
        let id = list.add("  Buy milk \n").expect("non-empty text is added");

        assert_eq!(list.len(), 1);
        let task = list.get(id).unwrap();
        assert_eq!(task.text(), "Buy milk");
        assert!(!task.completed);
    }

    #[test]
    fn add_ignores_empty_and_whitespace_text() {
        let mut list = TaskList::new();
        assert_eq!(list.add(""), None);
        assert_eq!(list.add("   "), None);
        assert_eq!(list.add("\t\n "), None);
        assert!(list.is_empty());
    }

    #[test]
    fn add_preserves_insertion_order() {
        let mut list = TaskList::new();
        list.add("A");
        list.add("B");
        list.add("C");
        assert_eq!(texts(&list), ["A", "B", "C"]);
    }

    #[test]
    fn consecutive_ids_differ() {
        let mut list = TaskList::new();
        let a = list.add("same").unwrap();
        let b = list.add("same").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn toggle_flips_only_the_matching_task() {
        let mut list = TaskList::new();
        let a = list.add("A").unwrap();
        let b = list.add("B").unwrap();

        assert!(list.toggle(b));
        assert!(!list.get(a).unwrap().completed);
        assert!(list.get(b).unwrap().completed);

        assert!(list.toggle(b));
        assert!(!list.get(b).unwrap().completed);
    }

    #[test]
    fn toggle_unknown_id_is_noop() {
        let mut list = TaskList::new();
        list.add("A");
        let before = list.clone();

        assert!(!list.toggle(TaskId::new()));
        assert_eq!(list.as_slice(), before.as_slice());
    }

    #[test]
    fn delete_keeps_relative_order() {
        let mut list = TaskList::new();
        list.add("A");
        let b = list.add("B").unwrap();
        list.add("C");

        assert!(list.delete(b));
        assert_eq!(texts(&list), ["A", "C"]);
        assert_eq!(list.get(b), None);
    }

    #[test]
    fn delete_unknown_id_is_noop() {
        let mut list = TaskList::new();
        list.add("A");
        assert!(!list.delete(TaskId::new()));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn render_empty_list_shows_message() {
        let list = TaskList::new();
        assert_eq!(list.render(), ListView::Empty(EMPTY_MESSAGE));
    }

    #[test]
    fn render_projects_entries_in_order() {
        let mut list = TaskList::new();
        list.add("A");
        list.add("B");
        match list.render() {
            ListView::Entries(entries) => {
                let texts: Vec<_> = entries.iter().map(Task::text).collect();
                assert_eq!(texts, ["A", "B"]);
            }
            ListView::Empty(_) => panic!("expected entries"),
        }
    }

    #[test]
    fn completed_count_tracks_toggles() {
        let mut list = TaskList::new();
        let a = list.add("A").unwrap();
        list.add("B");
        assert_eq!(list.completed_count(), 0);
        list.toggle(a);
        assert_eq!(list.completed_count(), 1);
    }
}
