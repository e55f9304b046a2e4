use std::sync::Arc;

use dioxus::prelude::ReadableExt;

use services::{PaymentField, PaywallStep};
use signlearn_catalog::{Catalog, CatalogError, LessonRepository, PackageRepository};
use signlearn_core::model::{Lesson, LessonId, OptionId, PackageId, SubscriptionPackage};

use super::test_harness::{
    PaywallExit, ViewHarness, ViewKind, drive_dom, setup_view_harness,
    setup_view_harness_with_catalog, test_config,
};
use crate::vm::{LessonIntent, PaywallIntent};

fn lesson_intent(harness: &mut ViewHarness, intent: LessonIntent) {
    let dispatch = harness.handles.lesson.dispatch();
    harness.dom.in_runtime(|| dispatch.call(intent));
    drive_dom(&mut harness.dom);
}

fn paywall_intent(harness: &mut ViewHarness, intent: PaywallIntent) {
    let dispatch = harness.handles.paywall.dispatch();
    harness.dom.in_runtime(|| dispatch.call(intent));
    drive_dom(&mut harness.dom);
}

fn pick(harness: &mut ViewHarness, option: &str) {
    lesson_intent(
        harness,
        LessonIntent::Select(OptionId::new(option).expect("option id")),
    );
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_dashboard_and_lessons() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness.settle().await;
    let html = harness.render();
    for expected in [
        "Welcome back!",
        "12/20 XP",
        "#12",
        "Your Lessons",
        "ASL Alphabet",
        "Numbers 1-100",
        "Premium",
        "🔒",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_hides_locks_for_premium() {
    let catalog = Catalog::builtin().expect("catalog");
    let mut config = test_config();
    config.premium = true;
    let mut harness = setup_view_harness_with_catalog(ViewKind::Home, &catalog, config);
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Basic Greetings"), "missing lesson in {html}");
    assert!(!html.contains("🔒"), "unexpected lock in {html}");
}

struct FailingLessons;

#[async_trait::async_trait]
impl LessonRepository for FailingLessons {
    async fn list_lessons(&self) -> Result<Vec<Lesson>, CatalogError> {
        Err(CatalogError::Invalid("fail".to_string()))
    }

    async fn get_lesson(&self, _id: LessonId) -> Result<Lesson, CatalogError> {
        Err(CatalogError::Invalid("fail".to_string()))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_error_state() {
    let catalog = Catalog {
        lessons: Arc::new(FailingLessons),
        ..Catalog::builtin().expect("catalog")
    };
    let mut harness = setup_view_harness_with_catalog(ViewKind::Home, &catalog, test_config());
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Something went wrong"), "missing error in {html}");
    assert!(html.contains("Retry"), "missing retry in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn profile_view_smoke_renders_sections() {
    let mut harness = setup_view_harness(ViewKind::Profile);
    harness.settle().await;
    let html = harness.render();
    for expected in [
        "John Doe",
        "avatar__fallback",
        "JD",
        "ASL Learner",
        "Learning Stats",
        "85%",
        "Weekly Activity",
        "Achievements",
        "2/4",
        "Week Warrior",
        "Join Waiting List",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
}

#[tokio::test(flavor = "current_thread")]
async fn learn_view_smoke_without_lesson_points_home() {
    let mut harness = setup_view_harness(ViewKind::Learn);
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("No lesson in progress"), "missing empty state in {html}");
    assert!(html.contains("Browse Lessons"), "missing link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_view_smoke_renders_first_question() {
    let mut harness = setup_view_harness(ViewKind::Lesson(1));
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Which letter is being signed?"), "missing prompt in {html}");
    assert!(html.contains("1/3"), "missing progress in {html}");
    assert!(html.contains("Check Answer"), "missing action in {html}");

    let state = harness.handles.app_state();
    let active = harness.dom.in_runtime(|| state.active_lesson());
    assert_eq!(active, Some(LessonId::new(1)));
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_view_smoke_locked_lesson_shows_message() {
    let mut harness = setup_view_harness(ViewKind::Lesson(2));
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("part of Premium"), "missing locked message in {html}");
    assert!(html.contains("Back to Home"), "missing back button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_view_smoke_feedback_then_completion() {
    let mut harness = setup_view_harness(ViewKind::Lesson(1));
    harness.settle().await;

    pick(&mut harness, "C");
    lesson_intent(&mut harness, LessonIntent::Primary);
    let html = harness.render();
    assert!(html.contains("Not quite!"), "missing retry feedback in {html}");
    assert!(html.contains("closed fist"), "missing explanation in {html}");
    assert!(html.contains("Next"), "missing next in {html}");

    lesson_intent(&mut harness, LessonIntent::Primary);
    pick(&mut harness, "B");
    lesson_intent(&mut harness, LessonIntent::Primary);
    let html = harness.render();
    assert!(html.contains("Correct!"), "missing correct feedback in {html}");

    lesson_intent(&mut harness, LessonIntent::Primary);
    pick(&mut harness, "1");
    lesson_intent(&mut harness, LessonIntent::Primary);
    let vm = harness.handles.lesson.vm();
    let score = harness
        .dom
        .in_runtime(|| vm.read().as_ref().map(|vm| (vm.score(), vm.action_label())));
    assert_eq!(score, Some((2, "Finish")));

    lesson_intent(&mut harness, LessonIntent::Primary);
    let (cleared, active) = harness.dom.in_runtime(|| {
        let state = harness.handles.app_state();
        (vm.read().is_none(), state.active_lesson())
    });
    assert!(cleared);
    assert_eq!(active, None);
}

#[tokio::test(flavor = "current_thread")]
async fn learn_tab_resumes_lesson_in_progress() {
    let mut harness = setup_view_harness(ViewKind::Lesson(1));
    harness.settle().await;

    pick(&mut harness, "A");
    lesson_intent(&mut harness, LessonIntent::Primary);
    lesson_intent(&mut harness, LessonIntent::Primary);
    assert!(harness.render().contains("2/3"));

    harness.switch_to(ViewKind::Learn).await;
    let html = harness.render();
    assert!(html.contains("2/3"), "progress reset in {html}");
    assert!(!html.contains("No lesson in progress"), "empty state in {html}");

    let vm = harness.handles.lesson.vm();
    let run = harness
        .dom
        .in_runtime(|| vm.read().as_ref().map(|vm| (vm.current_index(), vm.score())));
    assert_eq!(run, Some((1, 1)));

    harness.switch_to(ViewKind::Lesson(1)).await;
    assert!(harness.render().contains("2/3"));
}

#[tokio::test(flavor = "current_thread")]
async fn paywall_view_smoke_purchase_flow() {
    let mut harness = setup_view_harness(ViewKind::Paywall);
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Unlock Your Learning Potential"), "missing hero in {html}");
    assert!(html.contains("Most Popular"), "missing ribbon in {html}");
    assert!(html.contains("Save 33%"), "missing discount in {html}");

    paywall_intent(
        &mut harness,
        PaywallIntent::SelectPackage(PackageId::new("monthly").expect("package id")),
    );
    paywall_intent(&mut harness, PaywallIntent::ContinueToPayment);
    let html = harness.render();
    assert!(html.contains("Monthly Plan"), "missing summary in {html}");
    assert!(html.contains("Pay $9.99"), "missing pay label in {html}");
    assert!(html.contains("Email Address"), "missing email field in {html}");

    paywall_intent(
        &mut harness,
        PaywallIntent::Edit(PaymentField::CardholderName, "Jane Roe".to_string()),
    );
    paywall_intent(&mut harness, PaywallIntent::Pay);
    for _ in 0..3 {
        harness.drive_async().await;
    }
    let html = harness.render();
    assert!(html.contains("Thank You!"), "missing thank you in {html}");
    assert!(!harness.is_premium());

    paywall_intent(&mut harness, PaywallIntent::Finish);
    for _ in 0..3 {
        harness.drive_async().await;
    }
    assert!(harness.is_premium());
    assert_eq!(harness.handles.paywall_exits(), vec![PaywallExit::Completed]);
    let state = harness.handles.app_state();
    assert!(harness.dom.in_runtime(|| state.is_premium()));
}

#[tokio::test(flavor = "current_thread")]
async fn paywall_view_smoke_close_keeps_free_tier() {
    let mut harness = setup_view_harness(ViewKind::Paywall);
    harness.settle().await;
    paywall_intent(&mut harness, PaywallIntent::ContinueToPayment);
    paywall_intent(&mut harness, PaywallIntent::Back);
    let html = harness.render();
    assert!(html.contains("Choose Your Plan"), "missing plans in {html}");

    paywall_intent(&mut harness, PaywallIntent::Close);
    assert_eq!(harness.handles.paywall_exits(), vec![PaywallExit::Closed]);
    assert!(!harness.is_premium());
}

/// Lists plans but cannot confirm any of them, so every payment fails.
struct UnconfirmedPackages(Arc<dyn PackageRepository>);

#[async_trait::async_trait]
impl PackageRepository for UnconfirmedPackages {
    async fn list_packages(&self) -> Result<Vec<SubscriptionPackage>, CatalogError> {
        self.0.list_packages().await
    }

    async fn get_package(&self, _id: &PackageId) -> Result<SubscriptionPackage, CatalogError> {
        Err(CatalogError::Invalid("payment gateway offline".to_string()))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn paywall_view_smoke_failed_payment_allows_retry() {
    let builtin = Catalog::builtin().expect("catalog");
    let catalog = Catalog {
        packages: Arc::new(UnconfirmedPackages(Arc::clone(&builtin.packages))),
        ..builtin
    };
    let mut harness = setup_view_harness_with_catalog(ViewKind::Paywall, &catalog, test_config());
    harness.settle().await;

    paywall_intent(&mut harness, PaywallIntent::ContinueToPayment);
    paywall_intent(&mut harness, PaywallIntent::Pay);
    for _ in 0..3 {
        harness.drive_async().await;
    }

    let flow = harness.handles.paywall.flow();
    let step = harness
        .dom
        .in_runtime(|| flow.read().as_ref().map(|flow| flow.step()));
    assert_eq!(step, Some(PaywallStep::Payment));
    let html = harness.render();
    assert!(html.contains("Something went wrong"), "missing error in {html}");
    assert!(html.contains("Pay $"), "missing pay button in {html}");
    assert!(!html.contains("Thank You!"), "unexpected thank you in {html}");
    assert!(!harness.is_premium());

    paywall_intent(&mut harness, PaywallIntent::Pay);
    let step = harness
        .dom
        .in_runtime(|| flow.read().as_ref().map(|flow| flow.step()));
    assert_eq!(step, Some(PaywallStep::Processing));
}
