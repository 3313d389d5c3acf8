use dioxus::prelude::*;
use edulearn_core::model::Session;

use crate::vm::{GENERIC_FAILURE, NotificationCenter};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        GENERIC_FAILURE
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalKind {
    Login,
    Signup,
}

/// Reactive UI state shared by every page through context.
///
/// `session` is a read-only snapshot of the service state, replaced after
/// each action.
#[derive(Clone, Copy)]
pub struct UiState {
    pub session: Signal<Session>,
    pub modal: Signal<Option<ModalKind>>,
    pub notifications: Signal<NotificationCenter>,
    pub nav_open: Signal<bool>,
}

impl UiState {
    pub fn open_modal(mut self, kind: ModalKind) {
        self.modal.set(Some(kind));
    }

    pub fn close_modal(mut self) {
        self.modal.set(None);
    }

    pub fn replace_session(mut self, session: Session) {
        self.session.set(session);
    }
}

/// Create the shared state and provide it to descendants.
pub fn use_ui_state_provider(initial: Session) -> UiState {
    let session = use_signal(move || initial);
    let modal = use_signal(|| None::<ModalKind>);
    let notifications = use_signal(NotificationCenter::new);
    let nav_open = use_signal(|| false);
    use_context_provider(|| UiState {
        session,
        modal,
        notifications,
        nav_open,
    })
}
