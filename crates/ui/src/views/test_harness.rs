use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{
    AppServices, LearnerService, LessonService, LessonSessionService, ServicesConfig,
    SubscriptionService,
};
use signlearn_catalog::Catalog;
use signlearn_core::time::fixed_clock;

use crate::context::{AppState, UiApp, build_app_context, use_app_state_provider};
use crate::views::lesson::LessonTestHandles;
use crate::views::paywall::PaywallTestHandles;
use crate::views::{HomeView, LearnView, LessonView, PaywallView, ProfileView};

#[derive(Clone)]
pub struct TestApp {
    services: AppServices,
}

impl UiApp for TestApp {
    fn lessons(&self) -> Arc<LessonService> {
        self.services.lessons()
    }

    fn lesson_sessions(&self) -> Arc<LessonSessionService> {
        self.services.lesson_sessions()
    }

    fn subscription(&self) -> Arc<SubscriptionService> {
        self.services.subscription()
    }

    fn learner(&self) -> Arc<LearnerService> {
        self.services.learner()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Learn,
    Lesson(u64),
    Profile,
    Paywall,
}

/// What the paywall reported to its parent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaywallExit {
    Closed,
    Completed,
}

#[derive(Clone, Default)]
pub struct HarnessHandles {
    pub lesson: LessonTestHandles,
    pub paywall: PaywallTestHandles,
    app_state: Rc<RefCell<Option<AppState>>>,
    view: Rc<RefCell<Option<Signal<ViewKind>>>>,
    paywall_exits: Rc<RefCell<Vec<PaywallExit>>>,
}

impl HarnessHandles {
    pub fn app_state(&self) -> AppState {
        (*self.app_state.borrow()).expect("app state registered")
    }

    fn view(&self) -> Signal<ViewKind> {
        (*self.view.borrow()).expect("view registered")
    }

    pub fn paywall_exits(&self) -> Vec<PaywallExit> {
        self.paywall_exits.borrow().clone()
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    handles: HarnessHandles,
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
    let app_state = use_app_state_provider();
    *props.handles.app_state.borrow_mut() = Some(app_state);
    let initial = props.view;
    let view = use_signal(move || initial);
    *props.handles.view.borrow_mut() = Some(view);
    use_context_provider(|| view);
    use_context_provider(|| props.handles.clone());
    use_context_provider(|| props.handles.lesson.clone());
    use_context_provider(|| props.handles.paywall.clone());
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
    let view = use_context::<Signal<ViewKind>>();
    let handles = use_context::<HarnessHandles>();
    match view() {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Learn => rsx! { LearnView {} },
        ViewKind::Lesson(lesson_id) => rsx! { LessonView { lesson_id } },
        ViewKind::Profile => rsx! { ProfileView {} },
        ViewKind::Paywall => {
            let closed = Rc::clone(&handles.paywall_exits);
            let completed = Rc::clone(&handles.paywall_exits);
            rsx! {
                PaywallView {
                    on_close: move |()| closed.borrow_mut().push(PaywallExit::Closed),
                    on_complete: move |()| completed.borrow_mut().push(PaywallExit::Completed),
                }
            }
        }
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub app: Arc<TestApp>,
    pub handles: HarnessHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(Duration::from_millis(50), self.dom.wait_for_work()).await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Swap the mounted screen, as a tab switch would.
    pub async fn switch_to(&mut self, kind: ViewKind) {
        let mut view = self.handles.view();
        self.dom.in_runtime(|| view.set(kind));
        drive_dom(&mut self.dom);
        for _ in 0..3 {
            self.drive_async().await;
        }
    }

    /// Rebuild, then let resources resolve.
    pub async fn settle(&mut self) {
        self.rebuild();
        for _ in 0..3 {
            self.drive_async().await;
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    pub fn is_premium(&self) -> bool {
        self.app.services.subscription().is_premium()
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn test_config() -> ServicesConfig {
    ServicesConfig {
        clock: fixed_clock(),
        payment_delay: Duration::ZERO,
        premium: false,
    }
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    let catalog = Catalog::builtin().expect("builtin catalog");
    setup_view_harness_with_catalog(view, &catalog, test_config())
}

pub fn setup_view_harness_with_catalog(
    view: ViewKind,
    catalog: &Catalog,
    config: ServicesConfig,
) -> ViewHarness {
    let app = Arc::new(TestApp {
        services: AppServices::new(catalog, config),
    });
    let handles = HarnessHandles::default();
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app: Arc::clone(&app),
            view,
            handles: handles.clone(),
        },
    );
    ViewHarness { dom, app, handles }
}
