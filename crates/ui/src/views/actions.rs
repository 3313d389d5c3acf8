//! Event wiring: UI actions → services → fresh snapshot → notifications.

use std::fmt::Display;

use dioxus::core::spawn_forever;
use dioxus::prelude::*;
use edulearn_core::model::CourseId;
use services::{AccountError, Clock, CompleteResult, EnrollResult};
use tracing::error;

use crate::context::AppContext;
use crate::views::state::{ModalKind, UiState};
use crate::vm::{GENERIC_FAILURE, TickCursor, ToastKind};

/// Stack a toast and make sure its timers run.
pub fn notify(state: UiState, clock: Clock, message: &str, kind: ToastKind) {
    let mut notifications = state.notifications;
    notifications.write().push(message, kind, clock.now());
    schedule_ticks(state, clock);
}

/// Top-level reporter: log, then show the generic failure toast. No retry.
pub fn report_failure(state: UiState, clock: Clock, err: &dyn Display) {
    error!(%err, "action failed");
    notify(state, clock, GENERIC_FAILURE, ToastKind::Error);
}

/// Sleep until the next notification deadline and advance, until nothing is pending.
///
/// The loop lives in the root scope: the component that started an action
/// (a modal, a course card) may unmount before its notices expire.
/// Several loops may run at once; `tick` is idempotent.
pub fn schedule_ticks(state: UiState, clock: Clock) {
    let mut notifications = state.notifications;
    spawn_forever(async move {
        let mut cursor = TickCursor::new(clock.now());
        loop {
            let next = notifications.peek().next_deadline();
            let Some(deadline) = next else {
                break;
            };
            tokio::time::sleep(cursor.wait_for(deadline, clock.now())).await;
            let at = cursor.reach(deadline, clock.now());
            notifications.write().tick(at);
        }
    });
}

async fn refresh_session(ctx: &AppContext, state: UiState) {
    state.replace_session(ctx.sessions().snapshot().await);
}

fn handle_account_result(
    state: UiState,
    clock: Clock,
    result: Result<(), AccountError>,
    success_message: &str,
    success_kind: ToastKind,
) -> bool {
    match result {
        Ok(()) => {
            notify(state, clock, success_message, success_kind);
            true
        }
        // Blank fields: silently ignored, the form stays open.
        Err(AccountError::Validation(_)) => false,
        Err(err) => {
            report_failure(state, clock, &err);
            false
        }
    }
}

/// Returns true when the user is now signed in.
pub async fn login(ctx: AppContext, state: UiState, email: String, password: String) -> bool {
    let result = ctx.sessions().login(&email, &password).await.map(|_| ());
    if matches!(result, Err(AccountError::Validation(_))) {
        return false;
    }
    refresh_session(&ctx, state).await;
    let signed_in = handle_account_result(
        state,
        ctx.clock(),
        result,
        "Welcome back!",
        ToastKind::Success,
    );
    if signed_in {
        state.close_modal();
    }
    signed_in
}

/// Returns true when the account was created.
pub async fn signup(
    ctx: AppContext,
    state: UiState,
    name: String,
    email: String,
    password: String,
) -> bool {
    let result = ctx
        .sessions()
        .signup(&name, &email, &password)
        .await
        .map(|_| ());
    if matches!(result, Err(AccountError::Validation(_))) {
        return false;
    }
    refresh_session(&ctx, state).await;
    let created = handle_account_result(
        state,
        ctx.clock(),
        result,
        "Account created successfully!",
        ToastKind::Success,
    );
    if created {
        state.close_modal();
    }
    created
}

pub async fn logout(ctx: AppContext, state: UiState) {
    let result = ctx.sessions().logout().await;
    refresh_session(&ctx, state).await;
    handle_account_result(
        state,
        ctx.clock(),
        result,
        "Logged out successfully!",
        ToastKind::Info,
    );
}

pub async fn enroll(ctx: AppContext, state: UiState, course_id: CourseId) {
    let clock = ctx.clock();
    match ctx.enrollment().enroll(course_id).await {
        Ok(EnrollResult::Applied { outcome, session }) => {
            state.replace_session(session);
            if outcome.changed() {
                notify(state, clock, "Successfully enrolled in course!", ToastKind::Success);
            }
        }
        Ok(EnrollResult::LoginRequired) => state.open_modal(ModalKind::Login),
        Ok(EnrollResult::UnknownCourse) => {}
        Err(err) => {
            refresh_session(&ctx, state).await;
            report_failure(state, clock, &err);
        }
    }
}

pub async fn complete(ctx: AppContext, state: UiState, course_id: CourseId) {
    let clock = ctx.clock();
    match ctx.enrollment().complete(course_id).await {
        Ok(CompleteResult::Completed { course, session }) => {
            state.replace_session(session);
            let mut notifications = state.notifications;
            notifications
                .write()
                .show_achievement(course.title(), clock.now());
            schedule_ticks(state, clock);
        }
        Ok(CompleteResult::AlreadyCompleted { session }) => state.replace_session(session),
        Ok(CompleteResult::LoginRequired) => state.open_modal(ModalKind::Login),
        Ok(CompleteResult::UnknownCourse) => {}
        Err(err) => {
            refresh_session(&ctx, state).await;
            report_failure(state, clock, &err);
        }
    }
}
