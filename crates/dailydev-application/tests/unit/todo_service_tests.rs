//! Todo use case tests

use crate::test_utils::todo_service;
use dailydev_application::TodoDraft;
use dailydev_domain::error::Error;
use dailydev_domain::value_objects::TodoDate;

fn draft(id: Option<&str>, todo: &str) -> TodoDraft {
    TodoDraft {
        id: id.map(str::to_string),
        todo: todo.to_string(),
        description: String::new(),
        is_checked: false,
    }
}

#[tokio::test]
async fn test_save_then_get_preserves_order() {
    let service = todo_service();
    let drafts = vec![draft(Some("3"), "C"), draft(Some("1"), "A"), draft(Some("2"), "B")];

    service
        .save_todos("u1", Some("2024-01-01"), drafts)
        .await
        .unwrap();
    let list = service.get_todos("u1", Some("2024-01-01")).await.unwrap();

    let ids: Vec<_> = list.todos.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["3", "1", "2"]);
    assert!(list.is_persisted());
}

#[tokio::test]
async fn test_buy_milk_flow() {
    let service = todo_service();
    service
        .save_todos(
            "u1",
            Some("2024-01-01"),
            vec![TodoDraft {
                id: Some("1".to_string()),
                todo: "Buy milk".to_string(),
                description: "2 liters".to_string(),
                is_checked: false,
            }],
        )
        .await
        .unwrap();

    service
        .mark_todo("u1", "2024-01-01", "1", true)
        .await
        .unwrap();
    let list = service.get_todos("u1", Some("2024-01-01")).await.unwrap();
    let milk = list.item("1").unwrap();
    assert_eq!(milk.todo, "Buy milk");
    assert_eq!(milk.description, "2 liters");
    assert!(milk.is_checked);

    service
        .delete_todo("u1", Some("2024-01-01"), "1")
        .await
        .unwrap();
    let list = service.get_todos("u1", Some("2024-01-01")).await.unwrap();
    assert!(list.todos.is_empty());
}

#[tokio::test]
async fn test_save_generates_missing_ids_and_defaults_date() {
    let service = todo_service();
    let date = service
        .save_todos("u1", None, vec![draft(None, "A"), draft(Some(""), "B")])
        .await
        .unwrap();

    assert_eq!(date, TodoDate::today());
    let list = service.get_todos("u1", None).await.unwrap();
    assert_eq!(list.todos.len(), 2);
    assert!(list.todos.iter().all(|t| !t.id.is_empty()));
    assert_ne!(list.todos[0].id, list.todos[1].id);
}

#[tokio::test]
async fn test_save_replaces_whole_list() {
    let service = todo_service();
    service
        .save_todos("u1", Some("2024-01-01"), vec![draft(Some("1"), "A"), draft(Some("2"), "B")])
        .await
        .unwrap();
    service
        .save_todos("u1", Some("2024-01-01"), vec![])
        .await
        .unwrap();

    let list = service.get_todos("u1", Some("2024-01-01")).await.unwrap();
    assert!(list.todos.is_empty());
    assert!(list.is_persisted());
}

#[tokio::test]
async fn test_duplicate_ids_rejected() {
    let service = todo_service();
    let err = service
        .save_todos("u1", Some("2024-01-01"), vec![draft(Some("1"), "A"), draft(Some("1"), "B")])
        .await
        .unwrap_err();

    assert!(matches!(err, Error::InvalidArgument { .. }));
    let list = service.get_todos("u1", Some("2024-01-01")).await.unwrap();
    assert!(!list.is_persisted());
}

#[tokio::test]
async fn test_get_missing_list_is_empty() {
    let service = todo_service();
    let list = service.get_todos("u1", Some("1999-12-31")).await.unwrap();

    assert!(list.todos.is_empty());
    assert!(!list.is_persisted());
    assert_eq!(list.date.as_str(), "1999-12-31");
}

#[tokio::test]
async fn test_lists_are_private_to_their_user() {
    let service = todo_service();
    service
        .save_todos("u1", Some("2024-01-01"), vec![draft(Some("1"), "A")])
        .await
        .unwrap();

    let other = service.get_todos("u2", Some("2024-01-01")).await.unwrap();
    assert!(other.todos.is_empty());

    let err = service
        .mark_todo("u2", "2024-01-01", "1", true)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NotFound { .. }));
}

#[tokio::test]
async fn test_mark_missing_or_unchanged_is_not_found() {
    let service = todo_service();
    service
        .save_todos("u1", Some("2024-01-01"), vec![draft(Some("1"), "A")])
        .await
        .unwrap();

    let missing = service
        .mark_todo("u1", "2024-01-01", "nope", true)
        .await
        .unwrap_err();
    assert!(matches!(missing, Error::NotFound { .. }));

    // Item is already unchecked
    let unchanged = service
        .mark_todo("u1", "2024-01-01", "1", false)
        .await
        .unwrap_err();
    assert!(matches!(unchanged, Error::NotFound { .. }));
}

#[tokio::test]
async fn test_mark_requires_date_and_id() {
    let service = todo_service();

    let no_date = service.mark_todo("u1", "", "1", true).await.unwrap_err();
    assert!(matches!(no_date, Error::InvalidArgument { .. }));

    let no_id = service
        .mark_todo("u1", "2024-01-01", " ", true)
        .await
        .unwrap_err();
    assert!(matches!(no_id, Error::InvalidArgument { .. }));
}

#[tokio::test]
async fn test_delete_removes_exactly_one_item() {
    let service = todo_service();
    service
        .save_todos(
            "u1",
            Some("2024-01-01"),
            vec![draft(Some("1"), "A"), draft(Some("2"), "B"), draft(Some("3"), "C")],
        )
        .await
        .unwrap();

    service
        .delete_todo("u1", Some("2024-01-01"), "2")
        .await
        .unwrap();

    let list = service.get_todos("u1", Some("2024-01-01")).await.unwrap();
    let ids: Vec<_> = list.todos.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["1", "3"]);

    let again = service
        .delete_todo("u1", Some("2024-01-01"), "2")
        .await
        .unwrap_err();
    assert!(matches!(again, Error::NotFound { .. }));
}

#[tokio::test]
async fn test_delete_requires_date() {
    let service = todo_service();
    service
        .save_todos("u1", None, vec![draft(Some("1"), "A")])
        .await
        .unwrap();

    let err = service.delete_todo("u1", None, "1").await.unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));

    // Nothing was removed from today's list
    let list = service.get_todos("u1", None).await.unwrap();
    assert_eq!(list.todos.len(), 1);
}

#[tokio::test]
async fn test_padded_client_id_can_be_marked_and_deleted() {
    let service = todo_service();
    service
        .save_todos("u1", Some("2024-01-01"), vec![draft(Some(" a "), "A")])
        .await
        .unwrap();

    let list = service.get_todos("u1", Some("2024-01-01")).await.unwrap();
    assert_eq!(list.todos[0].id, "a");

    service
        .mark_todo("u1", "2024-01-01", " a ", true)
        .await
        .unwrap();
    service
        .delete_todo("u1", Some("2024-01-01"), " a ")
        .await
        .unwrap();

    let list = service.get_todos("u1", Some("2024-01-01")).await.unwrap();
    assert!(list.todos.is_empty());
}
