use crate::api::TodoItem;
use chrono::Local;
use dioxus::prelude::*;

/// An expandable row for a single todo item. The row only expands when the
/// item has a non-empty description.
#[component]
pub fn TodoItemAccordion(
    todo_item: TodoItem,
    on_edit_clicked: EventHandler<TodoItem>,
    on_delete_clicked: EventHandler<TodoItem>,
) -> Element {
    let mut expanded = use_signal(|| false);

    let expandable = todo_item.has_description();
    let created_local = todo_item
        .created_date
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string();
    let description = todo_item.description.clone().unwrap_or_default();
    let edit_item = todo_item.clone();
    let delete_item = todo_item.clone();

    rsx! {
        div { class: "todo-item",
            div {
                class: if expandable { "todo-item-summary expandable" } else { "todo-item-summary" },
                onclick: move |_| {
                    if expandable {
                        let is_expanded = expanded();
                        expanded.set(!is_expanded);
                    }
                },
                div { class: "todo-item-heading",
                    span { class: "todo-item-title", "{todo_item.title}" }
                    span { class: "todo-item-created", "Created: {created_local}" }
                }
                div { class: "todo-item-actions",
                    button {
                        class: "button-secondary",
                        onclick: move |evt| {
                            evt.stop_propagation();
                            on_edit_clicked.call(edit_item.clone());
                        },
                        "Edit"
                    }
                    button {
                        class: "button-secondary",
                        onclick: move |evt| {
                            evt.stop_propagation();
                            on_delete_clicked.call(delete_item.clone());
                        },
                        "Delete"
                    }
                }
            }
            if expandable && expanded() {
                div { class: "todo-item-details", "{description}" }
            }
        }
    }
}
