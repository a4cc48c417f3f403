use dioxus::prelude::*;

mod api;
mod components;
mod views;

use views::Todos;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        Todos {}
    }
}
