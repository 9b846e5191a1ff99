//! Task List View-Model
//!
//! Pure derivation of the render-ready task list: the filtered, ordered
//! subset of the cached tasks plus summary counts over the whole set.

use crate::domain::Task;

/// Which tasks are visible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum TaskFilter {
    #[default]
    All,
    Pending,
    Completed,
}

impl TaskFilter {
    pub const ALL: [TaskFilter; 3] = [TaskFilter::All, TaskFilter::Pending, TaskFilter::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskFilter::All => "all",
            TaskFilter::Pending => "pending",
            TaskFilter::Completed => "completed",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "pending" => TaskFilter::Pending,
            "completed" => TaskFilter::Completed,
            _ => TaskFilter::All,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaskFilter::All => "All Tasks",
            TaskFilter::Pending => "Pending",
            TaskFilter::Completed => "Completed",
        }
    }

    pub fn matches(&self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Pending => !task.completed,
            TaskFilter::Completed => task.completed,
        }
    }

    /// Heading and hint shown when nothing passes the filter
    pub fn empty_state(&self) -> (String, String) {
        match self {
            TaskFilter::All => (
                "No tasks yet".to_string(),
                "Create your first task to get started!".to_string(),
            ),
            other => (
                format!("No {} tasks", other.as_str()),
                format!("You don't have any {} tasks.", other.as_str()),
            ),
        }
    }
}

/// How visible tasks are ordered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum SortKey {
    #[default]
    Newest,
    Oldest,
    /// Pending first, then completed; newest first within each group
    Status,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Newest, SortKey::Oldest, SortKey::Status];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::Oldest => "oldest",
            SortKey::Status => "status",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "oldest" => SortKey::Oldest,
            "status" => SortKey::Status,
            _ => SortKey::Newest,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Newest => "Newest First",
            SortKey::Oldest => "Oldest First",
            SortKey::Status => "By Status",
        }
    }
}

/// Counts over the full task set, independent of the active filter.
///
/// Invariant: `total == completed + pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}

impl TaskStats {
    pub fn of(tasks: &[Task]) -> Self {
        let total = tasks.len();
        let completed = tasks.iter().filter(|t| t.completed).count();
        Self {
            total,
            completed,
            pending: total - completed,
        }
    }
}

/// Render-ready list state
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TaskView {
    pub visible: Vec<Task>,
    pub stats: TaskStats,
}

impl TaskView {
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }
}

/// Keep the tasks matching `filter`, preserving input order
pub fn filter_tasks(tasks: &[Task], filter: TaskFilter) -> Vec<Task> {
    tasks.iter().filter(|t| filter.matches(t)).cloned().collect()
}

/// Order tasks in place. `sort_by` is stable, so equal keys keep input order.
pub fn sort_tasks(tasks: &mut [Task], key: SortKey) {
    match key {
        SortKey::Newest => tasks.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortKey::Oldest => tasks.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        SortKey::Status => tasks.sort_by(|a, b| {
            a.completed
                .cmp(&b.completed)
                .then_with(|| b.created_at.cmp(&a.created_at))
        }),
    }
}

/// Map (tasks, filter, sort key) to the visible ordered list and stats.
///
/// Stats are computed over `tasks`, never over the filtered view.
pub fn derive_view(tasks: &[Task], filter: TaskFilter, sort: SortKey) -> TaskView {
    let mut visible = filter_tasks(tasks, filter);
    sort_tasks(&mut visible, sort);
    TaskView {
        visible,
        stats: TaskStats::of(tasks),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::task_at;
    use std::collections::HashSet;

    fn ids(view: &TaskView) -> Vec<u32> {
        view.visible.iter().map(|t| t.id).collect()
    }

    fn sample() -> Vec<Task> {
        vec![
            task_at(1, false, 100),
            task_at(2, true, 400),
            task_at(3, false, 300),
            task_at(4, true, 200),
            task_at(5, false, 300),
        ]
    }

    #[test]
    fn test_two_task_scenario_all_newest() {
        let tasks = vec![task_at(1, false, 10), task_at(2, true, 20)];
        let view = derive_view(&tasks, TaskFilter::All, SortKey::Newest);
        assert_eq!(ids(&view), vec![2, 1]);
        assert_eq!(view.stats, TaskStats { total: 2, completed: 1, pending: 1 });
    }

    #[test]
    fn test_two_task_scenario_completed_filter_keeps_stats() {
        let tasks = vec![task_at(1, false, 10), task_at(2, true, 20)];
        let view = derive_view(&tasks, TaskFilter::Completed, SortKey::Newest);
        assert_eq!(ids(&view), vec![2]);
        assert_eq!(view.stats, TaskStats { total: 2, completed: 1, pending: 1 });
    }

    #[test]
    fn test_filter_membership_is_exact() {
        let tasks = sample();
        for filter in TaskFilter::ALL {
            let view = derive_view(&tasks, filter, SortKey::Newest);
            let expected: HashSet<u32> = tasks.iter().filter(|t| filter.matches(t)).map(|t| t.id).collect();
            let got: HashSet<u32> = view.visible.iter().map(|t| t.id).collect();
            assert_eq!(got, expected, "filter {:?}", filter);
            assert_eq!(got.len(), view.visible.len(), "duplicate ids under {:?}", filter);
        }
    }

    #[test]
    fn test_newest_and_oldest_ordering() {
        let tasks = sample();
        let newest = derive_view(&tasks, TaskFilter::All, SortKey::Newest);
        assert!(newest.visible.windows(2).all(|w| w[0].created_at >= w[1].created_at));
        let oldest = derive_view(&tasks, TaskFilter::All, SortKey::Oldest);
        assert!(oldest.visible.windows(2).all(|w| w[0].created_at <= w[1].created_at));
    }

    #[test]
    fn test_ties_keep_input_order() {
        // 3 and 5 share a timestamp
        let tasks = sample();
        assert_eq!(ids(&derive_view(&tasks, TaskFilter::All, SortKey::Newest)), vec![2, 3, 5, 4, 1]);
        assert_eq!(ids(&derive_view(&tasks, TaskFilter::All, SortKey::Oldest)), vec![1, 4, 3, 5, 2]);
    }

    #[test]
    fn test_status_ordering() {
        let view = derive_view(&sample(), TaskFilter::All, SortKey::Status);
        assert_eq!(ids(&view), vec![3, 5, 1, 2, 4]);

        let first_done = view.visible.iter().position(|t| t.completed).unwrap();
        assert!(view.visible[..first_done].iter().all(|t| !t.completed));
        assert!(view.visible[first_done..].iter().all(|t| t.completed));
    }

    #[test]
    fn test_stats_independent_of_filter() {
        let tasks = sample();
        for filter in TaskFilter::ALL {
            for sort in SortKey::ALL {
                let stats = derive_view(&tasks, filter, sort).stats;
                assert_eq!(stats.total, tasks.len());
                assert_eq!(stats.total, stats.completed + stats.pending);
                assert_eq!(stats.completed, 2);
            }
        }
    }

    #[test]
    fn test_empty_input() {
        let view = derive_view(&[], TaskFilter::Pending, SortKey::Status);
        assert!(view.is_empty());
        assert_eq!(view.stats, TaskStats::default());
    }

    #[test]
    fn test_option_values() {
        assert_eq!(TaskFilter::from_str("completed"), TaskFilter::Completed);
        assert_eq!(TaskFilter::from_str("???"), TaskFilter::All);
        assert_eq!(SortKey::from_str("status"), SortKey::Status);
        assert_eq!(SortKey::from_str(""), SortKey::Newest);
        assert_eq!(TaskFilter::Pending.empty_state().0, "No pending tasks");
        assert_eq!(TaskFilter::All.empty_state().0, "No tasks yet");
    }
}
