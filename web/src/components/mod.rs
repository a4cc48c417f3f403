mod add_todo_item_dialog;
mod edit_todo_item_dialog;
mod error_message;
mod loading_spinner;
mod todo_item_accordion;

pub use add_todo_item_dialog::AddTodoItemDialog;
pub use edit_todo_item_dialog::EditTodoItemDialog;
pub use error_message::ErrorMessage;
pub use loading_spinner::LoadingSpinner;
pub use todo_item_accordion::TodoItemAccordion;
