use chrono::{DateTime, Duration, Utc};

/// How long a toast stays fully visible.
pub const TOAST_VISIBLE_MS: i64 = 3_000;
/// Length of the fade-out after a toast's visible period.
pub const TOAST_FADE_MS: i64 = 300;
/// How long an achievement banner stays up unless closed.
pub const ACHIEVEMENT_VISIBLE_MS: i64 = 5_000;

/// Generic text for failures the user cannot act on.
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
    Warning,
    Error,
}

impl ToastKind {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            ToastKind::Success => "notification notification-success",
            ToastKind::Info => "notification notification-info",
            ToastKind::Warning => "notification notification-warning",
            ToastKind::Error => "notification notification-error",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NoticeId(u64);

impl NoticeId {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// A pending deadline owned by a notice. Cancelled handles never fire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerHandle {
    due_at: DateTime<Utc>,
    cancelled: bool,
}

impl TimerHandle {
    #[must_use]
    pub fn new(due_at: DateTime<Utc>) -> Self {
        Self {
            due_at,
            cancelled: false,
        }
    }

    #[must_use]
    pub fn due_at(&self) -> DateTime<Utc> {
        self.due_at
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    #[must_use]
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        !self.cancelled && now >= self.due_at
    }

    pub fn cancel(&mut self) {
        self.cancelled = true;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastPhase {
    Visible,
    Fading,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: NoticeId,
    pub message: String,
    pub kind: ToastKind,
    pub phase: ToastPhase,
    pub timer: TimerHandle,
}

impl Toast {
    #[must_use]
    pub fn css_class(&self) -> String {
        match self.phase {
            ToastPhase::Visible => format!("{} show", self.kind.css_class()),
            ToastPhase::Fading => format!("{} hiding", self.kind.css_class()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Achievement {
    pub id: NoticeId,
    pub text: String,
    pub timer: TimerHandle,
}

/// Stacked toasts plus at most one achievement banner.
///
/// Nothing here sleeps: callers pass `now` in and call [`Self::tick`] when
/// [`Self::next_deadline`] has passed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotificationCenter {
    next_id: u64,
    toasts: Vec<Toast>,
    achievement: Option<Achievement>,
}

impl NotificationCenter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate_id(&mut self) -> NoticeId {
        self.next_id += 1;
        NoticeId(self.next_id)
    }

    /// Stack a toast; it fades after [`TOAST_VISIBLE_MS`].
    pub fn push(
        &mut self,
        message: impl Into<String>,
        kind: ToastKind,
        now: DateTime<Utc>,
    ) -> NoticeId {
        let id = self.allocate_id();
        self.toasts.push(Toast {
            id,
            message: message.into(),
            kind,
            phase: ToastPhase::Visible,
            timer: TimerHandle::new(now + Duration::milliseconds(TOAST_VISIBLE_MS)),
        });
        id
    }

    /// Show the completion banner for `course_title`, replacing any current one.
    pub fn show_achievement(&mut self, course_title: &str, now: DateTime<Utc>) -> NoticeId {
        if let Some(previous) = self.achievement.as_mut() {
            previous.timer.cancel();
        }
        let id = self.allocate_id();
        self.achievement = Some(Achievement {
            id,
            text: format!("You've successfully completed \"{course_title}\"!"),
            timer: TimerHandle::new(now + Duration::milliseconds(ACHIEVEMENT_VISIBLE_MS)),
        });
        id
    }

    /// Close the banner early. Returns false if none was showing.
    pub fn dismiss_achievement(&mut self) -> bool {
        match self.achievement.take() {
            Some(mut banner) => {
                banner.timer.cancel();
                true
            }
            None => false,
        }
    }

    /// Advance every notice whose deadline has passed.
    pub fn tick(&mut self, now: DateTime<Utc>) {
        self.toasts.retain_mut(|toast| {
            if !toast.timer.is_due(now) {
                return true;
            }
            match toast.phase {
                ToastPhase::Visible => {
                    toast.phase = ToastPhase::Fading;
                    toast.timer =
                        TimerHandle::new(toast.timer.due_at() + Duration::milliseconds(TOAST_FADE_MS));
                    true
                }
                ToastPhase::Fading => false,
            }
        });

        if self
            .achievement
            .as_ref()
            .is_some_and(|banner| banner.timer.is_due(now))
        {
            self.achievement = None;
        }
    }

    /// Earliest live deadline, if any notice is pending.
    #[must_use]
    pub fn next_deadline(&self) -> Option<DateTime<Utc>> {
        self.toasts
            .iter()
            .map(|toast| &toast.timer)
            .chain(self.achievement.as_ref().map(|banner| &banner.timer))
            .filter(|timer| !timer.is_cancelled())
            .map(TimerHandle::due_at)
            .min()
    }

    #[must_use]
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    #[must_use]
    pub fn achievement(&self) -> Option<&Achievement> {
        self.achievement.as_ref()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty() && self.achievement.is_none()
    }
}

/// Wall-clock position of a notification ticker that only moves forward.
///
/// The ticker sleeps on a monotonic timer. Once a wait for a deadline has
/// elapsed, that deadline counts as reached even if the wall clock has
/// stepped backwards in the meantime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickCursor {
    reached: DateTime<Utc>,
}

impl TickCursor {
    #[must_use]
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { reached: now }
    }

    /// How long to sleep before `deadline` is due.
    #[must_use]
    pub fn wait_for(&self, deadline: DateTime<Utc>, now: DateTime<Utc>) -> std::time::Duration {
        (deadline - now.max(self.reached))
            .to_std()
            .unwrap_or_default()
    }

    /// Record that the wait for `deadline` elapsed; returns the instant to tick at.
    pub fn reach(&mut self, deadline: DateTime<Utc>, now: DateTime<Utc>) -> DateTime<Utc> {
        self.reached = self.reached.max(deadline).max(now);
        self.reached
    }
}
