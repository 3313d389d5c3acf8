use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use edulearn_core::model::{CourseId, CourseStatus};
use storage::{KeyValueStore, Storage, StorageError};

use super::ModalKind;
use super::test_harness::{
    ActionRequest, CallerMount, ViewHarness, ViewKind, services_over, test_services,
};
use crate::vm::{GENERIC_FAILURE, ToastKind, ToastPhase};

async fn mount(caller: CallerMount, services: &services::AppServices) -> ViewHarness {
    let mut harness = ViewHarness::new(ViewKind::Actions(caller), services).await;
    harness.rebuild();
    harness
}

fn login(email: &str) -> ActionRequest {
    ActionRequest::Login {
        email: email.to_string(),
        password: "pw".to_string(),
    }
}

/// Reads nothing back and rejects every write.
struct FailingWrites;

#[async_trait]
impl KeyValueStore for FailingWrites {
    async fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    async fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("quota exceeded".to_string()))
    }

    async fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("quota exceeded".to_string()))
    }
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn anonymous_enroll_asks_for_login() {
    let services = test_services().await;
    let mut harness = mount(CallerMount::Always, &services).await;

    harness.fire(ActionRequest::Enroll(CourseId::new(1))).await;

    assert_eq!(harness.modal(), Some(ModalKind::Login));
    assert!(harness.toasts().is_empty());
    assert!(services.sessions().snapshot().await.progress().is_empty());
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn anonymous_complete_asks_for_login() {
    let services = test_services().await;
    let mut harness = mount(CallerMount::Always, &services).await;

    harness.fire(ActionRequest::Complete(CourseId::new(1))).await;

    assert_eq!(harness.modal(), Some(ModalKind::Login));
    assert!(harness.achievement().is_none());
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn blank_login_keeps_form_open_without_notice() {
    let services = test_services().await;
    let mut harness = mount(CallerMount::Always, &services).await;
    harness.open_modal(ModalKind::Login).await;

    harness
        .fire(ActionRequest::Login {
            email: "   ".to_string(),
            password: "pw".to_string(),
        })
        .await;

    assert_eq!(harness.modal(), Some(ModalKind::Login));
    assert!(harness.toasts().is_empty());
    assert!(!harness.session().is_signed_in());
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn blank_signup_keeps_form_open_without_notice() {
    let services = test_services().await;
    let mut harness = mount(CallerMount::Always, &services).await;
    harness.open_modal(ModalKind::Signup).await;

    harness
        .fire(ActionRequest::Signup {
            name: String::new(),
            email: "ann@x.com".to_string(),
            password: "pw".to_string(),
        })
        .await;

    assert_eq!(harness.modal(), Some(ModalKind::Signup));
    assert!(harness.toasts().is_empty());
    assert!(!harness.session().is_signed_in());
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn storage_failure_shows_generic_error() {
    let storage = Storage {
        kv: Arc::new(FailingWrites),
    };
    let services = services_over(&storage).await;
    let mut harness = mount(CallerMount::Always, &services).await;
    harness.open_modal(ModalKind::Login).await;

    harness.fire(login("ann@x.com")).await;

    let toasts = harness.toasts();
    assert_eq!(toasts.len(), 1, "{toasts:?}");
    assert_eq!(toasts[0].0, GENERIC_FAILURE);
    assert_eq!(toasts[0].1, ToastKind::Error);
    assert_eq!(harness.modal(), Some(ModalKind::Login));
    // The in-memory sign-in stands; the view shows the service snapshot.
    assert!(harness.session().is_signed_in());

    harness.fire(ActionRequest::Enroll(CourseId::new(2))).await;

    let errors = harness
        .toasts()
        .into_iter()
        .filter(|(message, kind, _)| message == GENERIC_FAILURE && *kind == ToastKind::Error)
        .count();
    assert_eq!(errors, 2);
    assert_eq!(
        harness.session().status(CourseId::new(2)),
        CourseStatus::Enrolled
    );
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn enroll_and_complete_raise_notices() {
    let services = test_services().await;
    let mut harness = mount(CallerMount::Always, &services).await;
    harness.fire(login("ann@x.com")).await;

    harness.fire(ActionRequest::Enroll(CourseId::new(1))).await;
    assert!(
        harness
            .toasts()
            .iter()
            .any(|(message, kind, _)| message == "Successfully enrolled in course!"
                && *kind == ToastKind::Success)
    );

    harness.fire(ActionRequest::Complete(CourseId::new(1))).await;
    let banner = harness.achievement().expect("achievement shown");
    assert!(banner.text.contains("JavaScript Fundamentals"), "{}", banner.text);
    assert!(harness.render().contains("achievementModal"));
    assert_eq!(
        harness.session().status(CourseId::new(1)),
        CourseStatus::Completed
    );

    harness.run_for(Duration::from_secs(6)).await;

    assert!(harness.achievement().is_none());
    assert!(harness.toasts().is_empty());
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn toasts_expire_after_calling_form_unmounts() {
    let services = test_services().await;
    let mut harness = mount(CallerMount::WhileModalOpen, &services).await;
    harness.open_modal(ModalKind::Login).await;
    assert!(harness.render().contains("action-caller"));

    harness.fire(login("ann@x.com")).await;

    assert_eq!(harness.modal(), None);
    assert!(!harness.render().contains("action-caller"));
    let toasts = harness.toasts();
    assert_eq!(toasts.len(), 1, "{toasts:?}");
    assert_eq!(toasts[0].0, "Welcome back!");
    assert_eq!(toasts[0].2, ToastPhase::Visible);

    harness.run_for(Duration::from_millis(3100)).await;
    assert_eq!(harness.toasts()[0].2, ToastPhase::Fading);

    harness.run_for(Duration::from_secs(1)).await;
    assert!(harness.toasts().is_empty());
}
