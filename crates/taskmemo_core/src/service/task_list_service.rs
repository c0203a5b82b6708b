//! Task list use-case service.
//!
//! # Responsibility
//! - Hold the in-memory, presentation-ready view of all tasks.
//! - Mediate every mutation through the repository and re-read the full set
//!   after each successful write (no fine-grained diffing).
//! - Track the most recent operation failure for display.
//!
//! # Invariants
//! - `tasks` is only ever replaced wholesale from a successful fetch.
//! - Exactly one pending error at a time; a new failure overwrites it and
//!   every successful operation clears it.
//! - Titles are trimmed and non-empty before they reach the repository.

use crate::model::task::{Task, TaskId};
use crate::repo::task_repo::{RepoError, TaskRepository};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Failure surfaced to the presentation layer.
///
/// `Display` yields the short user-facing message; the underlying repository
/// error stays reachable through `Error::source` for diagnostics.
#[derive(Debug)]
pub enum TaskListError {
    /// Draft or replacement title was empty after trimming.
    EmptyTitle,
    /// The full task set could not be re-read.
    LoadFailed(RepoError),
    /// A new task could not be persisted.
    AddFailed(RepoError),
    /// An edit to an existing task could not be persisted.
    UpdateFailed(RepoError),
    /// A deletion could not be completed.
    DeleteFailed(RepoError),
}

impl Display for TaskListError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "task title cannot be empty"),
            Self::LoadFailed(_) => write!(f, "failed to load tasks"),
            Self::AddFailed(_) => write!(f, "failed to add task"),
            Self::UpdateFailed(_) => write!(f, "failed to update task"),
            Self::DeleteFailed(_) => write!(f, "failed to delete task"),
        }
    }
}

impl Error for TaskListError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::EmptyTitle => None,
            Self::LoadFailed(err)
            | Self::AddFailed(err)
            | Self::UpdateFailed(err)
            | Self::DeleteFailed(err) => Some(err),
        }
    }
}

/// Presentation-facing task list state over a repository implementation.
///
/// Construct once at process start with the repository it should own and
/// call [`refresh`](Self::refresh) to perform the initial load. All state is
/// mutated from a single caller; there is no internal locking.
pub struct TaskListService<R: TaskRepository> {
    repo: R,
    tasks: Vec<Task>,
    draft_title: String,
    last_error: Option<TaskListError>,
}

impl<R: TaskRepository> TaskListService<R> {
    /// Creates a service with an empty in-memory view.
    ///
    /// Does not touch the repository; callers issue the first `refresh`.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            tasks: Vec::new(),
            draft_title: String::new(),
            last_error: None,
        }
    }

    /// Re-reads the full task set from the repository.
    ///
    /// On success the in-memory set is replaced and any pending error is
    /// cleared; on failure the set is left untouched and a load failure is
    /// recorded.
    pub fn refresh(&mut self) {
        match self.reload_tasks() {
            Ok(()) => self.last_error = None,
            Err(err) => self.last_error = Some(TaskListError::LoadFailed(err)),
        }
    }

    /// Creates a task from the current draft title.
    ///
    /// The draft is trimmed first; a whitespace-only draft records a
    /// validation error without touching the repository. A persistence
    /// failure keeps the draft intact so the input is not lost.
    pub fn add_task(&mut self) {
        let title = self.draft_title.trim();
        if title.is_empty() {
            self.last_error = Some(TaskListError::EmptyTitle);
            return;
        }

        let task = Task::new(title);
        match self.repo.create_task(&task) {
            Ok(_) => {
                self.draft_title.clear();
                self.refresh();
            }
            Err(err) => self.last_error = Some(TaskListError::AddFailed(err)),
        }
    }

    /// Flips completion state of the given task.
    ///
    /// The flip is applied to the in-memory task before the write is
    /// confirmed, and is deliberately not rolled back when the write fails;
    /// the view converges with the store on the next successful refresh.
    pub fn toggle_completion(&mut self, id: TaskId) {
        self.apply_edit(id, Task::toggle_completion);
    }

    /// Replaces the title of the given task.
    ///
    /// Titles are trimmed and must stay non-empty, same as at creation.
    pub fn rename_task(&mut self, id: TaskId, title: &str) {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            self.last_error = Some(TaskListError::EmptyTitle);
            return;
        }
        let trimmed = trimmed.to_string();
        self.apply_edit(id, move |task| task.title = trimmed);
    }

    /// Replaces the memo of the given task. Memo text is free-form.
    pub fn update_memo(&mut self, id: TaskId, memo: impl Into<String>) {
        let memo = memo.into();
        self.apply_edit(id, move |task| task.memo = memo);
    }

    /// Deletes the tasks at the given positions in the sorted view.
    ///
    /// Deletions run sequentially; the first failure aborts the remainder,
    /// the in-memory set is resynchronized with whatever was actually
    /// persisted, and a delete failure is recorded. Positions outside the
    /// current view are skipped.
    pub fn delete_tasks(&mut self, positions: &[usize]) {
        let view = self.sorted_view();
        let ids: Vec<TaskId> = positions
            .iter()
            .filter_map(|&position| view.get(position).map(|task| task.uuid))
            .collect();

        let mut failure = None;
        for id in ids {
            if let Err(err) = self.repo.delete_task(id) {
                failure = Some(err);
                break;
            }
        }

        match failure {
            None => self.refresh(),
            Some(err) => {
                // Resync before recording the failure, otherwise a successful
                // reload would clear the error we are about to surface.
                let _ = self.reload_tasks();
                self.last_error = Some(TaskListError::DeleteFailed(err));
            }
        }
    }

    /// Presentation ordering: incomplete tasks first, then completed, each
    /// group newest creation time first.
    ///
    /// Pure derivation over the in-memory set, recomputed per call.
    pub fn sorted_view(&self) -> Vec<&Task> {
        let mut view: Vec<&Task> = self.tasks.iter().collect();
        view.sort_by(|a, b| {
            a.is_completed
                .cmp(&b.is_completed)
                .then(b.created_at.cmp(&a.created_at))
        });
        view
    }

    /// Number of tasks not yet completed.
    pub fn incomplete_count(&self) -> usize {
        self.tasks.iter().filter(|task| !task.is_completed).count()
    }

    /// The in-memory task set in store order (newest-first).
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Pending input for the next task.
    pub fn draft_title(&self) -> &str {
        &self.draft_title
    }

    /// Replaces the pending input for the next task.
    pub fn set_draft_title(&mut self, draft: impl Into<String>) {
        self.draft_title = draft.into();
    }

    /// The most recent operation failure, if any.
    pub fn last_error(&self) -> Option<&TaskListError> {
        self.last_error.as_ref()
    }

    /// Whether an error is pending display.
    pub fn has_error(&self) -> bool {
        self.last_error.is_some()
    }

    /// Clears the pending error. Called by the presentation layer after the
    /// message has been shown; the core never auto-clears on its own.
    pub fn clear_error(&mut self) {
        self.last_error = None;
    }

    /// Applies an in-memory edit, then persists the edited task.
    ///
    /// Edits are optimistic: the local mutation stays in place even when the
    /// write fails, so the view may diverge from the store until the next
    /// successful refresh.
    fn apply_edit(&mut self, id: TaskId, edit: impl FnOnce(&mut Task)) {
        let Some(index) = self.tasks.iter().position(|task| task.uuid == id) else {
            self.last_error = Some(TaskListError::UpdateFailed(RepoError::NotFound(id)));
            return;
        };

        edit(&mut self.tasks[index]);
        let snapshot = self.tasks[index].clone();
        match self.repo.update_task(&snapshot) {
            Ok(()) => self.refresh(),
            Err(err) => self.last_error = Some(TaskListError::UpdateFailed(err)),
        }
    }

    /// Replaces `tasks` from the repository, leaving error state alone.
    fn reload_tasks(&mut self) -> Result<(), RepoError> {
        self.tasks = self.repo.fetch_all()?;
        Ok(())
    }
}
