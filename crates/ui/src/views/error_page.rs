use dioxus::prelude::*;
use dioxus_router::Link;

use crate::routes::Route;

#[component]
pub fn ErrorPage(status: u16, message: String) -> Element {
    rsx! {
        div { class: "page error-page",
            h2 { class: "error-status", "{status}" }
            p { class: "error-message", "{message}" }
            Link { class: "error-home", to: Route::Home {}, "Back to lessons" }
        }
    }
}
