use edulearn_core::model::CourseId;

use super::test_harness::{ViewHarness, ViewKind, test_services};

async fn render(view: ViewKind, services: &services::AppServices) -> String {
    let mut harness = ViewHarness::new(view, services).await;
    harness.rebuild();
    harness.render()
}

#[tokio::test(flavor = "current_thread")]
async fn navbar_offers_login_when_anonymous() {
    let services = test_services().await;
    let html = render(ViewKind::Navbar, &services).await;
    assert!(html.contains("loginBtn"), "missing login button in {html}");
    assert!(html.contains("Sign Up"), "missing signup button in {html}");
    assert!(!html.contains("Logout"), "unexpected logout in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn navbar_shows_user_name_when_signed_in() {
    let services = test_services().await;
    services
        .sessions()
        .signup("Ann Lee", "ann@x.com", "pw")
        .await
        .expect("signup");

    let html = render(ViewKind::Navbar, &services).await;
    assert!(html.contains("Ann Lee"), "missing user name in {html}");
    assert!(html.contains("Logout"), "missing logout in {html}");
    assert!(!html.contains("loginBtn"), "unexpected login button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_features_first_three_courses() {
    let services = test_services().await;
    let html = render(ViewKind::Home, &services).await;
    assert!(html.contains("Featured Courses"), "missing section in {html}");
    assert!(html.contains("JavaScript Fundamentals"), "missing course in {html}");
    assert!(html.contains("HTML5 &amp; Web Structure") || html.contains("HTML5 & Web Structure"));
    assert!(!html.contains("React Fundamentals"), "too many featured in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn courses_view_reflects_progress() {
    let services = test_services().await;
    services.sessions().login("ann@x.com", "pw").await.expect("login");
    services
        .enrollment()
        .enroll(CourseId::new(2))
        .await
        .expect("enroll");
    services
        .enrollment()
        .complete(CourseId::new(1))
        .await
        .expect("complete");

    let html = render(ViewKind::Courses, &services).await;
    assert!(html.contains("Mark as Complete"), "missing complete action in {html}");
    assert!(html.contains("✓ Completed"), "missing completed badge in {html}");
    assert!(html.contains("Enroll Now"), "missing enroll action in {html}");
    assert!(html.contains("1234 students"), "missing student count in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn progress_view_prompts_anonymous_user() {
    let services = test_services().await;
    let html = render(ViewKind::Progress, &services).await;
    assert!(html.contains("Please log in"), "missing prompt in {html}");
    assert!(!html.contains("stats-grid"), "unexpected stats in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn progress_view_renders_stats_and_groups() {
    let services = test_services().await;
    services.sessions().login("ann@x.com", "pw").await.expect("login");
    for id in [1, 3] {
        services
            .enrollment()
            .complete(CourseId::new(id))
            .await
            .expect("complete");
    }
    services
        .enrollment()
        .enroll(CourseId::new(2))
        .await
        .expect("enroll");

    let html = render(ViewKind::Progress, &services).await;
    assert!(html.contains("67%"), "missing completion rate in {html}");
    assert!(html.contains(">12<"), "missing hours in {html}");
    assert!(html.contains("(2)"), "missing completed/available count in {html}");
    assert!(html.contains("(1)"), "missing in-progress count in {html}");
    assert!(html.contains("Nov 14, 2023"), "missing member date in {html}");
}
