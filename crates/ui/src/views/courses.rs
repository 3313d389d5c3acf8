use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::course_card::CourseCard;
use crate::views::state::UiState;
use crate::vm::map_course_cards;

#[component]
pub fn CoursesView() -> Element {
    let ctx = use_context::<AppContext>();
    let state = use_context::<UiState>();
    let cards = map_course_cards(&ctx.catalog(), &state.session.read());

    rsx! {
        section { class: "page courses-page",
            div { class: "container",
                h1 { class: "page-title", "All Courses" }
                p { class: "page-subtitle", "Pick a course, enroll, and mark it complete when you are done." }
                div { class: "courses-grid", id: "allCourses",
                    for card in cards {
                        CourseCard { key: "{card.id}", card, detailed: true }
                    }
                }
            }
        }
    }
}
