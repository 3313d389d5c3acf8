use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::context::AppContext;
use crate::views::{
    AchievementBanner, AuthModals, CoursesView, HomeView, ModalKind, NotificationStack,
    ProgressView, UiState, actions,
};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/courses", CoursesView)] Courses {},
        #[route("/progress", ProgressView)] Progress {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Navbar {}
            main { class: "content",
                Outlet::<Route> {}
            }
            footer { class: "footer",
                p { "© EduLearn. Learn something new every day." }
            }
            AuthModals {}
            AchievementBanner {}
            NotificationStack {}
        }
    }
}

#[component]
pub fn Navbar() -> Element {
    let ctx = use_context::<AppContext>();
    let state = use_context::<UiState>();
    let mut nav_open = state.nav_open;
    let user_name = state
        .session
        .read()
        .current_user()
        .map(|user| user.name().to_owned());
    let menu_class = if nav_open() { "nav-menu active" } else { "nav-menu" };
    let burger_class = if nav_open() { "hamburger active" } else { "hamburger" };

    rsx! {
        nav { class: "navbar",
            div { class: "nav-container",
                Link { class: "nav-logo", to: Route::Home {}, "EduLearn" }
                ul { class: "{menu_class}", id: "navMenu",
                    li {
                        Link { class: "nav-link", to: Route::Home {}, onclick: move |_| nav_open.set(false), "Home" }
                    }
                    li {
                        Link { class: "nav-link", to: Route::Courses {}, onclick: move |_| nav_open.set(false), "Courses" }
                    }
                    li {
                        Link { class: "nav-link", to: Route::Progress {}, onclick: move |_| nav_open.set(false), "My Progress" }
                    }
                }
                div { class: "nav-auth",
                    match user_name {
                        Some(name) => rsx! {
                            div { class: "user-profile", id: "userProfile",
                                span { class: "user-name", id: "userName", "{name}" }
                                button {
                                    class: "btn btn-outline",
                                    id: "logoutBtn",
                                    onclick: move |_| {
                                        spawn(actions::logout(ctx.clone(), state));
                                    },
                                    "Logout"
                                }
                            }
                        },
                        None => rsx! {
                            button {
                                class: "btn btn-outline",
                                id: "loginBtn",
                                onclick: move |_| state.open_modal(ModalKind::Login),
                                "Login"
                            }
                            button {
                                class: "btn btn-primary",
                                id: "signupBtn",
                                onclick: move |_| state.open_modal(ModalKind::Signup),
                                "Sign Up"
                            }
                        },
                    }
                }
                button {
                    class: "{burger_class}",
                    id: "hamburger",
                    onclick: move |_| {
                        let open = nav_open();
                        nav_open.set(!open);
                    },
                    span { class: "bar" }
                    span { class: "bar" }
                    span { class: "bar" }
                }
            }
        }
    }
}
