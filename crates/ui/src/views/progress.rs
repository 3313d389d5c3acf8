use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::course_card::CourseCard;
use crate::views::state::{ModalKind, UiState};
use crate::vm::{CourseCardVm, ProgressStatsVm, map_progress_page};

#[component]
pub fn ProgressView() -> Element {
    let ctx = use_context::<AppContext>();
    let state = use_context::<UiState>();
    let page = map_progress_page(&ctx.catalog(), &state.session.read());

    rsx! {
        section { class: "page progress-page",
            div { class: "container",
                h1 { class: "page-title", "My Progress" }
                match page {
                    None => rsx! {
                        div { class: "not-logged-in", id: "notLoggedIn",
                            p { "Please log in to view your progress." }
                            button {
                                class: "btn btn-primary",
                                id: "loginPrompt",
                                onclick: move |_| state.open_modal(ModalKind::Login),
                                "Login"
                            }
                        }
                    },
                    Some(page) => rsx! {
                        div { id: "progressContent",
                            p { class: "progress-welcome",
                                "Welcome, {page.user_name}. {page.signed_in_label}."
                            }
                            StatsGrid { stats: page.stats }
                            CourseGroup { title: "Completed Courses", id: "completedCourses", cards: page.completed }
                            CourseGroup { title: "In Progress", id: "enrolledCourses", cards: page.enrolled }
                            CourseGroup { title: "Available Courses", id: "availableCourses", cards: page.available }
                        }
                    },
                }
            }
        }
    }
}

#[component]
fn StatsGrid(stats: ProgressStatsVm) -> Element {
    rsx! {
        div { class: "stats-grid",
            div { class: "stat-card",
                span { class: "stat-number", id: "totalEnrolled", "{stats.total_enrolled}" }
                span { class: "stat-label", "Courses Enrolled" }
            }
            div { class: "stat-card",
                span { class: "stat-number", id: "totalCompleted", "{stats.total_completed}" }
                span { class: "stat-label", "Completed" }
            }
            div { class: "stat-card",
                span { class: "stat-number", id: "completionRate", "{stats.completion_rate}" }
                span { class: "stat-label", "Completion Rate" }
            }
            div { class: "stat-card",
                span { class: "stat-number", id: "totalHours", "{stats.total_hours}" }
                span { class: "stat-label", "Hours Learned" }
            }
        }
    }
}

#[component]
fn CourseGroup(title: &'static str, id: &'static str, cards: Vec<CourseCardVm>) -> Element {
    let count = cards.len();

    rsx! {
        div { class: "progress-section",
            h2 { "{title} " span { class: "group-count", "({count})" } }
            if cards.is_empty() {
                p { class: "empty-group", "No courses here yet." }
            } else {
                div { class: "courses-grid", id: "{id}",
                    for card in cards {
                        CourseCard { key: "{card.id}", card, detailed: false }
                    }
                }
            }
        }
    }
}
