use crate::entities::*;
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::*;
use std::sync::Arc;

pub mod api;

pub use api::create_api_router;

#[derive(Debug, PartialEq, Clone, Eq)]
pub struct Todo {
    id: i32,
    title: String,
    description: Option<String>,
    created_date: DateTimeWithTimeZone,
}

impl Todo {
    pub fn new(
        id: i32,
        title: String,
        description: Option<String>,
        created_date: DateTimeWithTimeZone,
    ) -> Self {
        Self {
            id,
            title,
            description,
            created_date,
        }
    }

    /// Returns the ID of the todo item.
    pub fn id(&self) -> i32 {
        self.id
    }

    /// Returns the title of the todo item.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description of the todo item, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the creation timestamp assigned by the store.
    pub fn created_date(&self) -> DateTimeWithTimeZone {
        self.created_date
    }
}

impl From<todo_item::Model> for Todo {
    fn from(model: todo_item::Model) -> Self {
        Todo::new(model.id, model.title, model.description, model.created_date)
    }
}

/// Error type for TodoService operations.
#[derive(Debug, thiserror::Error)]
pub enum TodoServiceError {
    /// The submitted todo item has no title.
    #[error("Todo must have a title.")]
    MissingTitle,
    /// No todo item exists with the referenced ID.
    #[error("No Todo with Id {0}.")]
    TodoNotFound(i32),
    /// A write went through without affecting exactly one row.
    #[error("The Todo was not saved. Please contact support for assistance.")]
    SaveFailed,
    /// Represents a database error.
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

/// Shared state for todo handlers.
#[derive(Clone)]
pub struct TodoState {
    pub db: Arc<sea_orm::DatabaseConnection>,
}

pub struct TodoService<'a> {
    db: &'a sea_orm::DatabaseConnection,
}

impl TodoService<'_> {
    pub fn new(db: &sea_orm::DatabaseConnection) -> TodoService {
        TodoService { db }
    }

    /// Retrieves all todo items from the database.
    ///
    /// # Returns
    ///
    /// A `Result` containing a vector of `Todo` if successful, or an error otherwise.
    #[tracing::instrument(skip(self))]
    pub async fn get_all_todos(&self) -> Result<Vec<Todo>, TodoServiceError> {
        let todos = todo_item::Entity::find()
            .all(self.db)
            .await?
            .into_iter()
            .map(Todo::from)
            .collect();
        Ok(todos)
    }

    /// Creates a new todo item. The store assigns the ID and creation
    /// timestamp.
    ///
    /// # Arguments
    ///
    /// * `title` - The title of the todo item. Must not be empty.
    /// * `description` - An optional description.
    ///
    /// # Returns
    ///
    /// A `Result` containing the created `Todo` if successful, or an error otherwise.
    #[tracing::instrument(skip(self))]
    pub async fn create_todo(
        &self,
        title: String,
        description: Option<String>,
    ) -> Result<Todo, TodoServiceError> {
        validate_title(&title)?;

        let active_model = todo_item::ActiveModel {
            title: ActiveValue::Set(title),
            description: ActiveValue::Set(description),
            ..Default::default()
        };
        let created_model = active_model.insert(self.db).await?;
        Ok(Todo::from(created_model))
    }

    /// Edits a todo item by its ID. Only the title and description change;
    /// the ID and creation timestamp are immutable.
    ///
    /// Validation runs before the existence check, so an empty title is
    /// reported even when the ID does not exist.
    ///
    /// # Returns
    ///
    /// A `Result` containing the updated `Todo` if successful, or an error otherwise.
    #[tracing::instrument(skip(self))]
    pub async fn update_todo(
        &self,
        id: i32,
        title: String,
        description: Option<String>,
    ) -> Result<Todo, TodoServiceError> {
        validate_title(&title)?;

        let todo_to_update = todo_item::Entity::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(TodoServiceError::TodoNotFound(id))?;

        let mut active_model: todo_item::ActiveModel = todo_to_update.into();
        active_model.title = ActiveValue::Set(title);
        active_model.description = ActiveValue::Set(description);
        let updated_model = active_model.update(self.db).await?;

        Ok(Todo::from(updated_model))
    }

    /// Deletes a todo item by its ID.
    ///
    /// # Returns
    ///
    /// A `Result` containing `()` if the item was removed, or an error otherwise.
    #[tracing::instrument(skip(self))]
    pub async fn delete_todo(&self, id: i32) -> Result<(), TodoServiceError> {
        todo_item::Entity::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(TodoServiceError::TodoNotFound(id))?;

        let result = todo_item::Entity::delete_by_id(id).exec(self.db).await?;
        if result.rows_affected != 1 {
            return Err(TodoServiceError::SaveFailed);
        }
        Ok(())
    }
}

fn validate_title(title: &str) -> Result<(), TodoServiceError> {
    if title.is_empty() {
        return Err(TodoServiceError::MissingTitle);
    }
    Ok(())
}
