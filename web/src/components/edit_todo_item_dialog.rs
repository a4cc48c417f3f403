use crate::api::{self, TodoItem, UpdateTodoRequest};
use dioxus::prelude::*;

/// Modal dialog for editing an existing todo item. The parent mounts this
/// component only while an item is being edited, so the fields initialize
/// from the item on every open.
///
/// On a failed save the dialog stays open and shows the error inline.
#[component]
pub fn EditTodoItemDialog(
    todo_item: TodoItem,
    on_updated_todo_item: EventHandler<()>,
    on_close_requested: EventHandler<()>,
) -> Element {
    let todo_item_id = todo_item.id;
    let mut title = use_signal(|| todo_item.title.clone());
    let mut description = use_signal(|| todo_item.description.clone().unwrap_or_default());
    let mut error_message = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let handle_update_click = move |_| {
        spawn(async move {
            error_message.set(None);
            submitting.set(true);

            let description_value = description();
            let request = UpdateTodoRequest {
                id: todo_item_id,
                title: title(),
                description: if description_value.is_empty() {
                    None
                } else {
                    Some(description_value)
                },
            };

            match api::update_todo_item(&request).await {
                Ok(_) => {
                    on_updated_todo_item.call(());
                    on_close_requested.call(());
                }
                Err(err) => error_message.set(Some(err.message)),
            }

            submitting.set(false);
        });
    };

    rsx! {
        div { class: "dialog-overlay",
            div { class: "dialog",
                h2 { class: "dialog-title", "Update Todo" }

                if let Some(message) = error_message() {
                    div { class: "error-banner", "{message}" }
                }

                form {
                    onsubmit: move |evt| evt.prevent_default(),
                    div { class: "dialog-field",
                        label { "Title" }
                        input {
                            r#type: "text",
                            value: "{title}",
                            oninput: move |evt| title.set(evt.value()),
                        }
                    }
                    div { class: "dialog-field",
                        label { "Description" }
                        textarea {
                            rows: 4,
                            value: "{description}",
                            oninput: move |evt| description.set(evt.value()),
                        }
                    }
                }

                div { class: "dialog-actions",
                    button {
                        class: "button-secondary",
                        disabled: submitting(),
                        onclick: move |_| {
                            error_message.set(None);
                            on_close_requested.call(());
                        },
                        "Cancel"
                    }
                    button {
                        class: "button-primary",
                        disabled: submitting(),
                        onclick: handle_update_click,
                        "Update"
                    }
                }
            }
        }
    }
}
