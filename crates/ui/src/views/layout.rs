use dioxus::prelude::*;
use dioxus_router::{Link, Outlet};
use tracing::error;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ErrorPage, ViewError, ViewState, view_state_from_resource};

/// Loads the lessons dataset once and gates every page on it.
#[component]
pub fn RootLayout() -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();

    let resource = use_resource(move || {
        let catalog = catalog.clone();
        async move {
            catalog.load().await.map(|_| ()).map_err(|err| {
                error!(error = %err, "failed to load lessons");
                ViewError::from(&err)
            })
        }
    });

    let state = view_state_from_resource(resource);

    rsx! {
        div { class: "app",
            header { class: "app-header",
                Link { class: "app-title", to: Route::Home {}, "Shum Lessons" }
            }
            main { class: "content",
                match state {
                    ViewState::Idle | ViewState::Loading => rsx! {
                        p { class: "loading", "Loading lessons..." }
                    },
                    ViewState::Ready(()) => rsx! {
                        Outlet::<Route> {}
                    },
                    ViewState::Error(err) => rsx! {
                        ErrorPage { status: err.status, message: err.message.clone() }
                    },
                }
            }
        }
    }
}
