use dioxus::prelude::*;
use dioxus_router::Router;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, use_ui_state_provider};

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    use_ui_state_provider(ctx.initial_session());

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        document::Title { "EduLearn" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| {
                    tracing::error!(?errors, "render failed");
                    rsx! {
                        div { class: "fatal",
                            h1 { "Something went wrong" }
                            p { "{ViewError::Unknown.message()}" }
                        }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
