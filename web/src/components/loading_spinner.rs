use dioxus::prelude::*;

/// A loading state component shown while the list is being fetched
#[component]
pub fn LoadingSpinner(message: String) -> Element {
    rsx! {
        div { class: "loading-spinner", "{message}" }
    }
}
