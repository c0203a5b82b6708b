//! Shared test doubles for controller-level tests.

use std::cell::RefCell;
use std::rc::Rc;
use taskmemo_core::db::DbError;
use taskmemo_core::{RepoError, RepoResult, Task, TaskId, TaskRepository};

/// In-memory repository with a failure switch, mirroring what the real
/// SQLite implementation would report on a failed commit.
///
/// Cloning shares state, so tests can keep a handle for seeding and
/// inspection after the service has taken ownership of its clone.
#[derive(Clone, Default)]
pub struct MockTaskRepository {
    state: Rc<RefCell<MockState>>,
}

#[derive(Default)]
struct MockState {
    tasks: Vec<Task>,
    fail_all: bool,
    deletes_until_failure: Option<usize>,
}

impl MockTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the stored task set.
    pub fn seed(&self, tasks: Vec<Task>) {
        self.state.borrow_mut().tasks = tasks;
    }

    /// Makes every operation fail until switched back off.
    pub fn set_fail_all(&self, fail: bool) {
        self.state.borrow_mut().fail_all = fail;
    }

    /// Lets the next `successes` deletions succeed, then fails the rest.
    pub fn fail_deletes_after(&self, successes: usize) {
        self.state.borrow_mut().deletes_until_failure = Some(successes);
    }

    /// Snapshot of the stored task set, in insertion order.
    pub fn stored(&self) -> Vec<Task> {
        self.state.borrow().tasks.clone()
    }

    fn storage_error() -> RepoError {
        RepoError::Db(DbError::Sqlite(rusqlite::Error::InvalidQuery))
    }
}

impl TaskRepository for MockTaskRepository {
    fn create_task(&self, task: &Task) -> RepoResult<TaskId> {
        let mut state = self.state.borrow_mut();
        if state.fail_all {
            return Err(Self::storage_error());
        }
        state.tasks.push(task.clone());
        Ok(task.uuid)
    }

    fn update_task(&self, task: &Task) -> RepoResult<()> {
        let mut state = self.state.borrow_mut();
        if state.fail_all {
            return Err(Self::storage_error());
        }
        let Some(stored) = state
            .tasks
            .iter_mut()
            .find(|stored| stored.uuid == task.uuid)
        else {
            return Err(RepoError::NotFound(task.uuid));
        };
        *stored = task.clone();
        Ok(())
    }

    fn delete_task(&self, id: TaskId) -> RepoResult<()> {
        let mut state = self.state.borrow_mut();
        if state.fail_all {
            return Err(Self::storage_error());
        }
        if let Some(remaining) = state.deletes_until_failure {
            if remaining == 0 {
                return Err(Self::storage_error());
            }
            state.deletes_until_failure = Some(remaining - 1);
        }
        let Some(position) = state.tasks.iter().position(|task| task.uuid == id) else {
            return Err(RepoError::NotFound(id));
        };
        state.tasks.remove(position);
        Ok(())
    }

    fn fetch_all(&self) -> RepoResult<Vec<Task>> {
        let state = self.state.borrow();
        if state.fail_all {
            return Err(Self::storage_error());
        }
        let mut tasks = state.tasks.clone();
        tasks.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(tasks)
    }
}
