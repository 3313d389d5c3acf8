use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::course_card::CourseCard;
use crate::views::state::UiState;
use crate::vm::map_course_cards;

const FEATURED_COURSES: usize = 3;

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let state = use_context::<UiState>();
    let catalog = ctx.catalog();
    let featured: Vec<_> = map_course_cards(&catalog, &state.session.read())
        .into_iter()
        .take(FEATURED_COURSES)
        .collect();

    rsx! {
        section { class: "hero",
            div { class: "hero-content",
                h1 { class: "hero-title", "Learn Without Limits" }
                p { class: "hero-subtitle",
                    "Build real skills in web development with hands-on courses, at your own pace."
                }
                Link { class: "btn btn-primary btn-large", to: Route::Courses {}, "Browse Courses" }
            }
        }

        section { class: "features",
            div { class: "container",
                h2 { class: "section-title", "Why EduLearn?" }
                div { class: "features-grid",
                    Feature { icon: "📚", title: "Expert Content", text: "Courses written by working developers." }
                    Feature { icon: "⏱", title: "Learn at Your Pace", text: "Start, stop, and pick up where you left off." }
                    Feature { icon: "📈", title: "Track Progress", text: "See what you have finished and what comes next." }
                }
            }
        }

        section { class: "featured-courses",
            div { class: "container",
                h2 { class: "section-title", "Featured Courses" }
                div { class: "courses-grid", id: "featuredCourses",
                    for card in featured {
                        CourseCard { key: "{card.id}", card, detailed: false }
                    }
                }
            }
        }
    }
}

#[component]
fn Feature(icon: &'static str, title: &'static str, text: &'static str) -> Element {
    rsx! {
        div { class: "feature-card",
            div { class: "feature-icon", "{icon}" }
            h3 { "{title}" }
            p { "{text}" }
        }
    }
}
