use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use edulearn_core::Catalog;
use edulearn_core::model::{CourseId, Session};
use edulearn_core::time::fixed_clock;
use services::{AppServices, Clock, EnrollmentService, SessionService};
use storage::Storage;

use crate::context::{AppContext, UiApp, build_app_context};
use crate::routes::Navbar;
use crate::views::actions;
use crate::views::{
    AchievementBanner, CoursesView, HomeView, ModalKind, NotificationStack, ProgressView, UiState,
    use_ui_state_provider,
};
use crate::vm::{Achievement, ToastKind, ToastPhase};

struct TestApp {
    services: AppServices,
    clock: Clock,
    initial_session: Session,
}

impl UiApp for TestApp {
    fn catalog(&self) -> Arc<Catalog> {
        self.services.catalog()
    }

    fn sessions(&self) -> Arc<SessionService> {
        self.services.sessions()
    }

    fn enrollment(&self) -> Arc<EnrollmentService> {
        self.services.enrollment()
    }

    fn clock(&self) -> Clock {
        self.clock
    }

    fn initial_session(&self) -> Session {
        self.initial_session.clone()
    }
}

/// When the component that fires actions is in the tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CallerMount {
    Always,
    /// Mounted only while an auth modal is open, like the login form.
    WhileModalOpen,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewKind {
    Navbar,
    Home,
    Courses,
    Progress,
    Actions(CallerMount),
}

#[derive(Clone, Debug)]
pub enum ActionRequest {
    Login { email: String, password: String },
    Signup { name: String, email: String, password: String },
    Logout,
    Enroll(CourseId),
    Complete(CourseId),
}

#[derive(Clone, Default)]
struct ActionHandles {
    state: Rc<RefCell<Option<UiState>>>,
    fire: Rc<RefCell<Option<Callback<ActionRequest>>>>,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    handles: ActionHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    use_context_provider(|| props.handles.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let ctx = use_context::<AppContext>();
    let view = use_context::<ViewKind>();
    let handles = use_context::<ActionHandles>();
    let state = use_ui_state_provider(ctx.initial_session());
    *handles.state.borrow_mut() = Some(state);

    match view {
        ViewKind::Navbar => rsx! { Navbar {} },
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Courses => rsx! { CoursesView {} },
        ViewKind::Progress => rsx! { ProgressView {} },
        ViewKind::Actions(mount) => {
            let caller_mounted = match mount {
                CallerMount::Always => true,
                CallerMount::WhileModalOpen => state.modal.read().is_some(),
            };
            rsx! {
                if caller_mounted {
                    ActionCaller {}
                }
                AchievementBanner {}
                NotificationStack {}
            }
        }
    }
}

/// Fires actions from its own scope, the way a form or a course card does.
#[component]
fn ActionCaller() -> Element {
    let ctx = use_context::<AppContext>();
    let state = use_context::<UiState>();
    let handles = use_context::<ActionHandles>();
    let fire = use_callback(move |request: ActionRequest| {
        let ctx = ctx.clone();
        spawn(async move {
            match request {
                ActionRequest::Login { email, password } => {
                    actions::login(ctx, state, email, password).await;
                }
                ActionRequest::Signup {
                    name,
                    email,
                    password,
                } => {
                    actions::signup(ctx, state, name, email, password).await;
                }
                ActionRequest::Logout => actions::logout(ctx, state).await,
                ActionRequest::Enroll(id) => actions::enroll(ctx, state, id).await,
                ActionRequest::Complete(id) => actions::complete(ctx, state, id).await,
            }
        });
    });
    *handles.fire.borrow_mut() = Some(fire);
    rsx! { div { class: "action-caller" } }
}

/// In-memory services over the built-in catalog with a fixed clock.
pub async fn test_services() -> AppServices {
    services_over(&Storage::in_memory()).await
}

pub async fn services_over(storage: &Storage) -> AppServices {
    AppServices::from_storage(storage, fixed_clock(), Catalog::builtin())
        .await
        .expect("build services")
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    handles: ActionHandles,
}

impl ViewHarness {
    /// Mounts `view` with the session `services` currently hold.
    pub async fn new(view: ViewKind, services: &AppServices) -> Self {
        let initial_session = services.sessions().snapshot().await;
        let app = Arc::new(TestApp {
            services: services.clone(),
            clock: fixed_clock(),
            initial_session,
        });
        let handles = ActionHandles::default();
        let dom = VirtualDom::new_with_props(
            ViewRouterHarness,
            ViewHarnessProps {
                app,
                view,
                handles: handles.clone(),
            },
        );
        Self { dom, handles }
    }

    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    fn state(&self) -> UiState {
        self.handles.state.borrow().expect("state registered")
    }

    /// Fire an action from the caller component, then let it finish.
    pub async fn fire(&mut self, request: ActionRequest) {
        let fire = self.handles.fire.borrow().expect("caller mounted");
        self.dom.in_runtime(|| fire.call(request));
        self.settle().await;
    }

    pub async fn open_modal(&mut self, kind: ModalKind) {
        let state = self.state();
        self.dom.in_runtime(|| state.open_modal(kind));
        self.settle().await;
    }

    /// Run pending work without letting notification deadlines pass.
    pub async fn settle(&mut self) {
        self.run_for(Duration::from_millis(1)).await;
    }

    /// Drive the DOM and its tasks while `duration` of tokio time passes.
    pub async fn run_for(&mut self, duration: Duration) {
        let until = tokio::time::Instant::now() + duration;
        while tokio::time::timeout_at(until, self.dom.wait_for_work())
            .await
            .is_ok()
        {
            self.dom.render_immediate(&mut NoOpMutations);
        }
        drive_dom(&mut self.dom);
    }

    pub fn modal(&self) -> Option<ModalKind> {
        let state = self.state();
        self.dom.in_runtime(|| *state.modal.peek())
    }

    pub fn toasts(&self) -> Vec<(String, ToastKind, ToastPhase)> {
        let state = self.state();
        self.dom.in_runtime(|| {
            state
                .notifications
                .peek()
                .toasts()
                .iter()
                .map(|toast| (toast.message.clone(), toast.kind, toast.phase))
                .collect()
        })
    }

    pub fn achievement(&self) -> Option<Achievement> {
        let state = self.state();
        self.dom
            .in_runtime(|| state.notifications.peek().achievement().cloned())
    }

    pub fn session(&self) -> Session {
        let state = self.state();
        self.dom.in_runtime(|| state.session.peek().clone())
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}
