use sea_orm::DatabaseConnection;
use testcontainers_modules::{postgres, testcontainers};
use todo_manager_server::todo::{TodoService, TodoServiceError};

mod common;

pub struct TestContext {
    #[allow(dead_code)] // container is kept to ensure it's not dropped
    pub container: testcontainers::ContainerAsync<postgres::Postgres>,
    pub db: DatabaseConnection,
}

async fn setup() -> anyhow::Result<TestContext> {
    // Allow multiple calls to init for tests.
    let _ = tracing_subscriber::fmt().try_init();
    let container = common::setup_container().await?;
    let db = common::setup_db(&container).await?;
    Ok(TestContext { db, container })
}

#[tokio::test]
async fn can_create_todo() {
    let state = setup().await.expect("Failed to setup test context");
    let todo_service = TodoService::new(&state.db);

    let created_todo = todo_service
        .create_todo("T".to_string(), Some("D".to_string()))
        .await
        .expect("Failed to create todo");

    assert_eq!(created_todo.title(), "T");
    assert_eq!(created_todo.description(), Some("D"));

    let todos = todo_service
        .get_all_todos()
        .await
        .expect("Failed to get all todos");
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0], created_todo);
}

#[tokio::test]
async fn can_create_todo_without_description() {
    let state = setup().await.expect("Failed to setup test context");
    let todo_service = TodoService::new(&state.db);

    let created_todo = todo_service
        .create_todo("No description".to_string(), None)
        .await
        .expect("Failed to create todo");

    assert_eq!(created_todo.title(), "No description");
    assert_eq!(created_todo.description(), None);
}

#[tokio::test]
async fn cannot_create_todo_with_empty_title() {
    let state = setup().await.expect("Failed to setup test context");
    let todo_service = TodoService::new(&state.db);

    // The description content makes no difference.
    let result = todo_service
        .create_todo(String::new(), Some("Has a description".to_string()))
        .await;
    assert!(matches!(result, Err(TodoServiceError::MissingTitle)));

    let result = todo_service.create_todo(String::new(), None).await;
    assert!(matches!(result, Err(TodoServiceError::MissingTitle)));

    let todos = todo_service
        .get_all_todos()
        .await
        .expect("Failed to get all todos");
    assert!(todos.is_empty());
}

#[tokio::test]
async fn can_update_todo() {
    let state = setup().await.expect("Failed to setup test context");
    let todo_service = TodoService::new(&state.db);

    let created_todo = todo_service
        .create_todo("Initial".to_string(), Some("Initial description".to_string()))
        .await
        .expect("Failed to create todo");

    let updated_todo = todo_service
        .update_todo(
            created_todo.id(),
            "T2".to_string(),
            Some("Updated description".to_string()),
        )
        .await
        .expect("Failed to update todo");

    // Only title and description change; id and created_date survive.
    assert_eq!(updated_todo.id(), created_todo.id());
    assert_eq!(updated_todo.title(), "T2");
    assert_eq!(updated_todo.description(), Some("Updated description"));
    assert_eq!(updated_todo.created_date(), created_todo.created_date());

    let todos = todo_service
        .get_all_todos()
        .await
        .expect("Failed to get all todos");
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0], updated_todo);
}

#[tokio::test]
async fn cannot_update_todo_with_empty_title() {
    let state = setup().await.expect("Failed to setup test context");
    let todo_service = TodoService::new(&state.db);

    let created_todo = todo_service
        .create_todo("Keep me".to_string(), None)
        .await
        .expect("Failed to create todo");

    let result = todo_service
        .update_todo(created_todo.id(), String::new(), None)
        .await;
    assert!(matches!(result, Err(TodoServiceError::MissingTitle)));

    let todos = todo_service
        .get_all_todos()
        .await
        .expect("Failed to get all todos");
    assert_eq!(todos[0].title(), "Keep me");
}

#[tokio::test]
async fn can_handle_update_when_todo_not_found() {
    let state = setup().await.expect("Failed to setup test context");
    let todo_service = TodoService::new(&state.db);

    let created_todo = todo_service
        .create_todo("Existing".to_string(), None)
        .await
        .expect("Failed to create todo");

    let non_existent_id = created_todo.id() + 1;
    let result = todo_service
        .update_todo(non_existent_id, "Valid title".to_string(), None)
        .await;
    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e.to_string(), format!("No Todo with Id {}.", non_existent_id));
    }
}

#[tokio::test]
async fn update_validates_title_before_existence() {
    let state = setup().await.expect("Failed to setup test context");
    let todo_service = TodoService::new(&state.db);

    // Empty title on a non-existent id reports the validation error.
    let result = todo_service.update_todo(99999, String::new(), None).await;
    assert!(matches!(result, Err(TodoServiceError::MissingTitle)));
}

#[tokio::test]
async fn can_delete_todo() {
    let state = setup().await.expect("Failed to setup test context");
    let todo_service = TodoService::new(&state.db);

    let created_todo = todo_service
        .create_todo("Delete me".to_string(), None)
        .await
        .expect("Failed to create todo");

    todo_service
        .delete_todo(created_todo.id())
        .await
        .expect("Failed to delete todo");

    let todos = todo_service
        .get_all_todos()
        .await
        .expect("Failed to get all todos");
    assert!(todos.is_empty());
}

#[tokio::test]
async fn can_handle_delete_when_todo_not_found() {
    let state = setup().await.expect("Failed to setup test context");
    let todo_service = TodoService::new(&state.db);

    let result = todo_service.delete_todo(99999).await;
    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e.to_string(), "No Todo with Id 99999.");
    }
}

#[tokio::test]
async fn can_handle_empty_todo_list() {
    let state = setup().await.expect("Failed to setup test context");
    let todo_service = TodoService::new(&state.db);

    let todos = todo_service
        .get_all_todos()
        .await
        .expect("Failed to get all todos");
    assert!(todos.is_empty());
}

#[tokio::test]
async fn seeded_todos_get_sequential_ids_and_survive_deletion() {
    let state = setup().await.expect("Failed to setup test context");
    let todo_service = TodoService::new(&state.db);

    let seed1 = todo_service
        .create_todo("Seed1".to_string(), Some("desc1".to_string()))
        .await
        .expect("Failed to create Seed1");
    let seed2 = todo_service
        .create_todo("Seed2".to_string(), Some("desc2".to_string()))
        .await
        .expect("Failed to create Seed2");

    assert_eq!(seed1.id(), 1);
    assert_eq!(seed2.id(), 2);

    let todos = todo_service
        .get_all_todos()
        .await
        .expect("Failed to get all todos");
    assert_eq!(todos.len(), 2);

    todo_service
        .delete_todo(seed1.id())
        .await
        .expect("Failed to delete Seed1");

    let todos = todo_service
        .get_all_todos()
        .await
        .expect("Failed to get all todos");
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0].id(), 2);
    assert_eq!(todos[0].title(), "Seed2");
}
