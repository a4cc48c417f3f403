use crate::api::{self, TodoItem};
use crate::components::{
    AddTodoItemDialog, EditTodoItemDialog, ErrorMessage, LoadingSpinner, TodoItemAccordion,
};
use dioxus::prelude::*;

/// The main view: the todo list plus the add/edit dialogs.
///
/// The list re-fetches after every successful create, update, or delete.
/// Items render in ascending creation-date order with timestamps converted
/// to local time.
#[component]
pub fn Todos() -> Element {
    let mut todo_items = use_signal(Vec::<TodoItem>::new);
    let mut loading = use_signal(|| true);
    let mut error_message = use_signal(|| None::<String>);
    let mut show_add_dialog = use_signal(|| false);
    let mut todo_item_to_edit = use_signal(|| None::<TodoItem>);

    let refresh = move || async move {
        match api::get_all_todo_items().await {
            Ok(mut items) => {
                api::sort_by_created_date(&mut items);
                todo_items.set(items);
                error_message.set(None);
            }
            Err(err) => error_message.set(Some(err.message)),
        }
        loading.set(false);
    };

    use_effect(move || {
        spawn(async move {
            refresh().await;
        });
    });

    let handle_delete_clicked = move |item: TodoItem| {
        spawn(async move {
            // Fire-and-forget from the row's perspective; a failure lands
            // in the list view's banner.
            match api::delete_todo_item(item.id).await {
                Ok(()) => refresh().await,
                Err(err) => error_message.set(Some(err.message)),
            }
        });
    };

    rsx! {
        header { class: "app-header",
            h1 { "Todo Manager" }
        }

        if let Some(message) = error_message() {
            ErrorMessage { message }
        } else if loading() {
            LoadingSpinner { message: "Loading todo items...".to_string() }
        } else {
            main { class: "todo-list",
                div { class: "todo-list-header",
                    h2 { "Todo Items" }
                    button {
                        class: "button-primary",
                        onclick: move |_| show_add_dialog.set(true),
                        "+"
                    }
                }

                for item in todo_items() {
                    TodoItemAccordion {
                        key: "{item.id}",
                        todo_item: item.clone(),
                        on_edit_clicked: move |todo_item| todo_item_to_edit.set(Some(todo_item)),
                        on_delete_clicked: handle_delete_clicked,
                    }
                }
            }

            AddTodoItemDialog {
                open: show_add_dialog(),
                on_added_todo_item: move |_| {
                    spawn(async move {
                        refresh().await;
                    });
                },
                on_close_requested: move |_| show_add_dialog.set(false),
            }

            if let Some(item) = todo_item_to_edit() {
                EditTodoItemDialog {
                    todo_item: item,
                    on_updated_todo_item: move |_| {
                        spawn(async move {
                            refresh().await;
                        });
                    },
                    on_close_requested: move |_| todo_item_to_edit.set(None),
                }
            }
        }
    }
}
