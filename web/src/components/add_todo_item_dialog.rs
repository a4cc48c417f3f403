use crate::api::{self, CreateTodoRequest};
use dioxus::prelude::*;

/// Modal dialog for creating a new todo item.
///
/// On a failed save the dialog stays open and shows the error inline; it
/// only closes itself after a successful save or an explicit cancel.
#[component]
pub fn AddTodoItemDialog(
    open: bool,
    on_added_todo_item: EventHandler<()>,
    on_close_requested: EventHandler<()>,
) -> Element {
    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut error_message = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    if !open {
        return rsx! { div {} };
    }

    let mut clear_and_close = move || {
        error_message.set(None);
        title.set(String::new());
        description.set(String::new());
        on_close_requested.call(());
    };

    let handle_add_click = move |_| {
        spawn(async move {
            error_message.set(None);
            submitting.set(true);

            let description_value = description();
            let request = CreateTodoRequest {
                title: title(),
                description: if description_value.is_empty() {
                    None
                } else {
                    Some(description_value)
                },
            };

            match api::add_todo_item(&request).await {
                Ok(_) => {
                    title.set(String::new());
                    description.set(String::new());
                    on_added_todo_item.call(());
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
                h2 { class: "dialog-title", "Add Todo" }

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
                            autofocus: true,
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
                        onclick: move |_| clear_and_close(),
                        "Cancel"
                    }
                    button {
                        class: "button-primary",
                        disabled: submitting(),
                        onclick: handle_add_click,
                        "Add"
                    }
                }
            }
        }
    }
}
