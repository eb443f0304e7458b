//! Ordered task collection and its mutations.

use chrono::{NaiveDate, Utc};

use super::task::Task;

#[derive(Debug, Default)]
pub struct TaskList {
    pub tasks: Vec<Task>,
}

impl TaskList {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Append a new task. The title is trimmed; an empty or whitespace-only
    /// title is rejected. Returns the created task.
    pub fn add(&mut self, title: &str, due_date: Option<NaiveDate>) -> Option<&Task> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }
        let task = Task {
            id: self.allocate_id(),
            title: title.to_string(),
            due_date,
            completed: false,
        };
        self.tasks.push(task);
        self.tasks.last()
    }

    /// Creation-time id in epoch milliseconds, bumped past the current
    /// maximum when two adds land in the same millisecond.
    fn allocate_id(&self) -> String {
        let mut id = Utc::now().timestamp_millis();
        let max = self
            .tasks
            .iter()
            .filter_map(|t| t.id.parse::<i64>().ok())
            .max();
        if let Some(max) = max {
            if id <= max {
                id = max + 1;
            }
        }
        id.to_string()
    }

    /// Flip the completion flag on the matching task. Returns whether the
    /// collection changed (an unknown id is a no-op).
    pub fn toggle_completion(&mut self, id: &str) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                true
            }
            None => false,
        }
    }

    /// Remove the matching task, keeping the order of the rest. Returns
    /// whether the collection changed.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_trims_title() {
        let mut list = TaskList::default();
        let task = list.add("  Buy milk  ", None).unwrap();
        assert_eq!(task.title, "Buy milk");
        assert!(!task.completed);
        assert_eq!(task.due_date, None);
    }

    #[test]
    fn test_add_rejects_blank_titles() {
        let mut list = TaskList::default();
        assert!(list.add("", None).is_none());
        assert!(list.add("   ", None).is_none());
        assert!(list.is_empty());
    }

    #[test]
    fn test_ids_are_unique_and_increasing() {
        let mut list = TaskList::default();
        for i in 0..5 {
            list.add(&format!("task {}", i), None);
        }
        let ids: Vec<i64> = list.tasks.iter().map(|t| t.id.parse().unwrap()).collect();
        for pair in ids.windows(2) {
            assert!(pair[0] < pair[1], "ids not increasing: {:?}", ids);
        }
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let mut list = TaskList::default();
        list.add("a", None);
        let before = list.tasks.clone();
        assert!(!list.toggle_completion("nope"));
        assert_eq!(list.tasks, before);
    }

    #[test]
    fn test_toggle_flips_in_place() {
        let mut list = TaskList::default();
        let id = list.add("a", None).unwrap().id.clone();
        assert!(list.toggle_completion(&id));
        assert!(list.tasks[0].completed);
        assert!(list.toggle_completion(&id));
        assert!(!list.tasks[0].completed);
    }

    #[test]
    fn test_delete_preserves_order_of_rest() {
        let mut list = TaskList::default();
        list.add("a", None);
        let id = list.add("b", None).unwrap().id.clone();
        list.add("c", None);
        assert!(list.delete(&id));
        let titles: Vec<&str> = list.tasks.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["a", "c"]);
        assert!(!list.delete(&id));
        assert_eq!(list.len(), 2);
    }
}
