use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::actions;
use crate::views::state::UiState;
use crate::vm::{CourseAction, CourseCardVm};

/// One course tile. `detailed` shows the full description, topics, and student count.
#[component]
pub fn CourseCard(card: CourseCardVm, detailed: bool) -> Element {
    let ctx = use_context::<AppContext>();
    let state = use_context::<UiState>();
    let course_id = card.id;
    let body = if detailed { &card.description } else { &card.excerpt };

    rsx! {
        div { class: "course-card", "data-course-id": "{course_id}",
            div { class: "course-image", "{card.placeholder}" }
            div { class: "course-content",
                h3 { class: "course-title", "{card.title}" }
                p { class: "course-description", "{body}" }
                div { class: "course-meta",
                    span { class: "course-duration", "{card.duration_label}" }
                    span { class: "course-level", "{card.level_label}" }
                    if detailed {
                        span { class: "course-students", "{card.students_label}" }
                    }
                }
                if detailed {
                    div { class: "course-topics",
                        for topic in card.topics.iter() {
                            span { class: "topic-tag", "{topic}" }
                        }
                    }
                }
                div { class: "course-footer",
                    span { class: "{card.status_class}", "{card.status_label}" }
                    match card.action {
                        CourseAction::Enroll => rsx! {
                            button {
                                class: "btn btn-primary",
                                onclick: move |_| {
                                    spawn(actions::enroll(ctx.clone(), state, course_id));
                                },
                                "Enroll Now"
                            }
                        },
                        CourseAction::Complete => rsx! {
                            button {
                                class: "btn btn-secondary",
                                onclick: move |_| {
                                    spawn(actions::complete(ctx.clone(), state, course_id));
                                },
                                "Mark as Complete"
                            }
                        },
                        CourseAction::Done => rsx! {
                            span { class: "completed-badge", "✓ Completed" }
                        },
                    }
                }
            }
        }
    }
}
