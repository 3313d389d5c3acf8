use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::actions;
use crate::views::state::{ModalKind, UiState};

/// Renders whichever auth dialog is open.
#[component]
pub fn AuthModals() -> Element {
    let state = use_context::<UiState>();
    let open = *state.modal.read();

    match open {
        Some(ModalKind::Login) => rsx! { LoginModal {} },
        Some(ModalKind::Signup) => rsx! { SignupModal {} },
        None => rsx! {},
    }
}

#[component]
fn ModalFrame(id: &'static str, title: &'static str, children: Element) -> Element {
    let state = use_context::<UiState>();

    rsx! {
        div { class: "modal show", id: "{id}",
            onclick: move |_| state.close_modal(),
            div { class: "modal-content",
                onclick: move |evt| evt.stop_propagation(),
                span { class: "close", onclick: move |_| state.close_modal(), "×" }
                h2 { "{title}" }
                {children}
            }
        }
    }
}

#[component]
fn LoginModal() -> Element {
    let ctx = use_context::<AppContext>();
    let state = use_context::<UiState>();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);

    rsx! {
        ModalFrame { id: "loginModal", title: "Login",
            form { id: "loginForm",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    let ctx = ctx.clone();
                    let submitted_email = email();
                    let submitted_password = password();
                    spawn(async move {
                        if actions::login(ctx, state, submitted_email, submitted_password).await {
                            email.set(String::new());
                            password.set(String::new());
                        }
                    });
                },
                div { class: "form-group",
                    label { r#for: "loginEmail", "Email" }
                    input {
                        id: "loginEmail",
                        r#type: "email",
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                }
                div { class: "form-group",
                    label { r#for: "loginPassword", "Password" }
                    input {
                        id: "loginPassword",
                        r#type: "password",
                        value: "{password}",
                        oninput: move |evt| password.set(evt.value()),
                    }
                }
                button { class: "btn btn-primary btn-full", r#type: "submit", "Login" }
            }
            p { class: "modal-switch",
                "Don't have an account? "
                a {
                    href: "#",
                    id: "switchToSignup",
                    onclick: move |evt| {
                        evt.prevent_default();
                        state.open_modal(ModalKind::Signup);
                    },
                    "Sign up"
                }
            }
        }
    }
}

#[component]
fn SignupModal() -> Element {
    let ctx = use_context::<AppContext>();
    let state = use_context::<UiState>();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);

    rsx! {
        ModalFrame { id: "signupModal", title: "Sign Up",
            form { id: "signupForm",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    let ctx = ctx.clone();
                    let submitted = (name(), email(), password());
                    spawn(async move {
                        let (n, e, p) = submitted;
                        if actions::signup(ctx, state, n, e, p).await {
                            name.set(String::new());
                            email.set(String::new());
                            password.set(String::new());
                        }
                    });
                },
                div { class: "form-group",
                    label { r#for: "signupName", "Full Name" }
                    input {
                        id: "signupName",
                        r#type: "text",
                        value: "{name}",
                        oninput: move |evt| name.set(evt.value()),
                    }
                }
                div { class: "form-group",
                    label { r#for: "signupEmail", "Email" }
                    input {
                        id: "signupEmail",
                        r#type: "email",
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                }
                div { class: "form-group",
                    label { r#for: "signupPassword", "Password" }
                    input {
                        id: "signupPassword",
                        r#type: "password",
                        value: "{password}",
                        oninput: move |evt| password.set(evt.value()),
                    }
                }
                button { class: "btn btn-primary btn-full", r#type: "submit", "Sign Up" }
            }
            p { class: "modal-switch",
                "Already have an account? "
                a {
                    href: "#",
                    id: "switchToLogin",
                    onclick: move |evt| {
                        evt.prevent_default();
                        state.open_modal(ModalKind::Login);
                    },
                    "Login"
                }
            }
        }
    }
}
