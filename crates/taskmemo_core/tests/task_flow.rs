use taskmemo_core::db::{open_db, open_db_in_memory};
use taskmemo_core::{SqliteTaskRepository, Task, TaskListService, TaskRepository};
use uuid::Uuid;

#[test]
fn full_lifecycle_against_sqlite() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTaskRepository::try_new(&conn).unwrap();
    let mut service = TaskListService::new(repo);
    service.refresh();
    assert!(service.sorted_view().is_empty());

    service.set_draft_title("  Buy milk  ");
    service.add_task();
    assert!(!service.has_error());
    assert_eq!(service.draft_title(), "");
    assert_eq!(service.incomplete_count(), 1);
    assert_eq!(service.sorted_view()[0].title, "Buy milk");

    let id = service.sorted_view()[0].uuid;
    service.toggle_completion(id);
    assert!(!service.has_error());
    assert_eq!(service.incomplete_count(), 0);

    service.update_memo(id, "lactose-free");
    assert_eq!(service.sorted_view()[0].memo, "lactose-free");

    service.delete_tasks(&[0]);
    assert!(!service.has_error());
    assert!(service.sorted_view().is_empty());
}

#[test]
fn sorted_view_with_fixed_timestamps_against_sqlite() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTaskRepository::try_new(&conn).unwrap();

    repo.create_task(&Task::with_id(Uuid::from_u128(1), "A", 100)).unwrap();
    repo.create_task(&Task::with_id(Uuid::from_u128(2), "B", 200)).unwrap();
    repo.create_task(&Task::with_id(Uuid::from_u128(3), "C", 300)).unwrap();

    let mut service = TaskListService::new(repo);
    service.refresh();

    let titles: Vec<&str> = service
        .sorted_view()
        .into_iter()
        .map(|task| task.title.as_str())
        .collect();
    assert_eq!(titles, vec!["C", "B", "A"]);

    service.toggle_completion(Uuid::from_u128(1));
    service.toggle_completion(Uuid::from_u128(3));

    let titles: Vec<&str> = service
        .sorted_view()
        .into_iter()
        .map(|task| task.title.as_str())
        .collect();
    assert_eq!(titles, vec!["B", "C", "A"]);
}

#[test]
fn tasks_persist_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("taskmemo.db");

    {
        let conn = open_db(&path).unwrap();
        let repo = SqliteTaskRepository::try_new(&conn).unwrap();
        let mut service = TaskListService::new(repo);
        service.refresh();

        service.set_draft_title("water the plants");
        service.add_task();
        service.set_draft_title("file the report");
        service.add_task();
        assert!(!service.has_error());

        let id = service.sorted_view()[0].uuid;
        service.update_memo(id, "before friday");
        assert!(!service.has_error());
    }

    let conn = open_db(&path).unwrap();
    let repo = SqliteTaskRepository::try_new(&conn).unwrap();
    let tasks = repo.fetch_all().unwrap();

    assert_eq!(tasks.len(), 2);
    let titles: Vec<&str> = tasks.iter().map(|task| task.title.as_str()).collect();
    assert!(titles.contains(&"water the plants"));
    assert!(titles.contains(&"file the report"));
    assert!(tasks.iter().any(|task| task.memo == "before friday"));
}
