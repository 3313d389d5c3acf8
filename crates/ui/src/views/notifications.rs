use dioxus::prelude::*;

use crate::views::state::UiState;

#[component]
pub fn NotificationStack() -> Element {
    let state = use_context::<UiState>();
    let toasts = state.notifications.read().toasts().to_vec();

    rsx! {
        div { class: "notification-stack",
            for toast in toasts {
                div { key: "{toast.id.value()}", class: "{toast.css_class()}", "{toast.message}" }
            }
        }
    }
}

#[component]
pub fn AchievementBanner() -> Element {
    let state = use_context::<UiState>();
    let mut notifications = state.notifications;
    let banner = notifications.read().achievement().cloned();

    match banner {
        Some(banner) => rsx! {
            div { class: "achievement-modal show", id: "achievementModal",
                div { class: "achievement-content",
                    div { class: "achievement-icon", "🏆" }
                    h2 { "Congratulations!" }
                    p { id: "achievementText", "{banner.text}" }
                    button {
                        class: "btn btn-primary",
                        id: "closeAchievement",
                        onclick: move |_| {
                            notifications.write().dismiss_achievement();
                        },
                        "Continue Learning"
                    }
                }
            }
        },
        None => rsx! {},
    }
}
