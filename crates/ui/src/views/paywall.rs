use dioxus::prelude::*;
use services::{PaymentField, PaywallFlow, PaywallStep};

use crate::components::{Button, Card, Input};
use crate::context::{AppContext, use_app_state};
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{PackageCardVm, PaywallIntent, map_package_cards};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

const BENEFITS: [(&str, &str, &str); 4] = [
    ("📚", "Unlimited Lessons", "Access to all sign language lessons"),
    ("📊", "Progress Tracking", "Monitor your learning journey"),
    ("📱", "Offline Access", "Learn anywhere, anytime"),
    ("🎯", "Personalized Learning", "Adaptive content based on your progress"),
];

const CONFIRMATIONS: [&str; 3] = [
    "Unlimited access to all lessons",
    "Progress tracking enabled",
    "Offline access available",
];

/// Subscription offer shown in place of the home screen.
#[component]
pub fn PaywallView(on_close: EventHandler<()>, on_complete: EventHandler<()>) -> Element {
    let ctx = use_context::<AppContext>();
    let subscription = ctx.subscription();
    let mut app_state = use_app_state();
    let flow = use_signal(|| None::<PaywallFlow>);
    let error = use_signal(|| None::<ViewError>);

    let subscription_for_resource = subscription.clone();
    let resource = use_resource(move || {
        let subscription = subscription_for_resource.clone();
        let mut flow = flow;
        async move {
            let started = subscription
                .start_paywall()
                .await
                .map_err(|_| ViewError::Unknown)?;
            flow.set(Some(started));
            Ok::<_, ViewError>(())
        }
    });

    let dispatch_intent = use_callback(move |intent: PaywallIntent| {
        let mut flow = flow;
        let mut error = error;
        let subscription = subscription.clone();

        let result = {
            let mut guard = flow.write();
            let Some(current) = guard.as_mut() else {
                return;
            };
            match intent {
                PaywallIntent::SelectPackage(id) => current.select_package(&id).map(|()| None),
                PaywallIntent::ContinueToPayment => current.continue_to_payment().map(|()| None),
                PaywallIntent::Back => current.back().map(|()| None),
                PaywallIntent::Edit(field, value) => current.set_field(field, value).map(|()| None),
                PaywallIntent::Pay => current.begin_payment().map(|id| Some((id, false))),
                PaywallIntent::Finish => current.finish().map(|id| Some((id, true))),
                PaywallIntent::Close => {
                    if current.can_close() {
                        tracing::info!(step = ?current.step(), "paywall closed");
                        on_close.call(());
                    }
                    return;
                }
            }
        };

        match result {
            Ok(None) => {
                if let Some(current) = flow.read().as_ref() {
                    tracing::debug!(step = ?current.step(), "paywall step");
                }
            }
            Ok(Some((package_id, false))) => {
                error.set(None);
                spawn(async move {
                    let outcome = subscription.simulate_payment(&package_id).await;
                    let mut guard = flow.write();
                    let Some(current) = guard.as_mut() else {
                        return;
                    };
                    match outcome {
                        Ok(_) => {
                            if let Err(err) = current.payment_succeeded() {
                                tracing::debug!(error = %err, "payment result ignored");
                            }
                        }
                        Err(err) => {
                            tracing::warn!(package = %package_id, error = %err, "payment failed");
                            if let Err(err) = current.payment_failed() {
                                tracing::debug!(error = %err, "payment failure ignored");
                            }
                            error.set(Some(ViewError::Unknown));
                        }
                    }
                });
            }
            Ok(Some((package_id, true))) => {
                spawn(async move {
                    match subscription.activate(&package_id).await {
                        Ok(()) => {
                            app_state.mark_premium();
                            on_complete.call(());
                        }
                        Err(_) => error.set(Some(ViewError::Unknown)),
                    }
                });
            }
            // Controls for other steps are not rendered; a stale click changes nothing.
            Err(err) => tracing::debug!(error = %err, "ignored paywall intent"),
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<PaywallTestHandles>() {
                handles.register(dispatch_intent, flow);
            }
        }
    }

    let state = view_state_from_resource(&resource);
    let flow_guard = flow.read();

    rsx! {
        div { class: "page paywall-page",
            match (state, flow_guard.as_ref()) {
                (ViewState::Error(err), _) => rsx! {
                    PaywallHeader { title: "Unlock Premium", show_back: false, on_intent: dispatch_intent }
                    p { "{err.message()}" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| {
                            let mut resource = resource;
                            resource.restart();
                        },
                        "Retry"
                    }
                },
                (ViewState::Ready(()), Some(current)) => rsx! {
                    if let Some(err) = error() {
                        p { class: "inline-error", "{err.message()}" }
                    }
                    match current.step() {
                        PaywallStep::Benefits => rsx! {
                            BenefitsStep { packages: map_package_cards(current), on_intent: dispatch_intent }
                        },
                        PaywallStep::Payment | PaywallStep::Processing => rsx! {
                            PaymentStep {
                                plan_name: current.selected_package().name().to_string(),
                                plan_period: current.selected_package().period().to_string(),
                                price: current.selected_package().price().to_string(),
                                values: PaymentField::ALL
                                    .iter()
                                    .map(|field| current.details().get(*field).to_string())
                                    .collect::<Vec<_>>(),
                                processing: current.is_processing(),
                                on_intent: dispatch_intent,
                            }
                        },
                        PaywallStep::ThankYou => rsx! {
                            ThankYouStep { on_intent: dispatch_intent }
                        },
                    }
                },
                _ => rsx! {
                    p { "Loading..." }
                },
            }
        }
    }
}

#[component]
fn PaywallHeader(
    title: &'static str,
    show_back: bool,
    on_intent: Callback<PaywallIntent>,
) -> Element {
    rsx! {
        header { class: "paywall-header",
            if show_back {
                button {
                    class: "paywall-header__back",
                    id: "paywall-back",
                    r#type: "button",
                    onclick: move |_| on_intent.call(PaywallIntent::Back),
                    "← Back"
                }
            }
            h1 { class: "paywall-header__title", "{title}" }
            button {
                class: "paywall-header__close",
                id: "paywall-close",
                r#type: "button",
                aria_label: "Close",
                onclick: move |_| on_intent.call(PaywallIntent::Close),
                "✕"
            }
        }
    }
}

#[component]
fn BenefitsStep(packages: Vec<PackageCardVm>, on_intent: Callback<PaywallIntent>) -> Element {
    rsx! {
        PaywallHeader { title: "Unlock Premium", show_back: false, on_intent }
        div { class: "paywall-body",
            div { class: "paywall-hero",
                div { class: "paywall-hero__icon", "⭐" }
                h2 { "Unlock Your Learning Potential" }
                p { class: "muted",
                    "Get unlimited access to all lessons, track your progress, and learn at your own pace."
                }
            }
            div { class: "benefit-list",
                for (icon, title, desc) in BENEFITS {
                    div { key: "{title}", class: "benefit",
                        span { class: "benefit__icon", "{icon}" }
                        div {
                            h3 { class: "benefit__title", "{title}" }
                            p { class: "benefit__desc", "{desc}" }
                        }
                    }
                }
            }
            h3 { class: "paywall-section-title", "Choose Your Plan" }
            div { class: "package-list",
                for pkg in packages {
                    PackageCard { key: "{pkg.id}", pkg: pkg.clone(), on_intent }
                }
            }
            Button {
                id: "paywall-continue",
                class: "btn-block btn-lg",
                onclick: move |_| on_intent.call(PaywallIntent::ContinueToPayment),
                "Continue to Payment"
            }
        }
    }
}

#[component]
fn PackageCard(pkg: PackageCardVm, on_intent: Callback<PaywallIntent>) -> Element {
    let id = pkg.id.clone();
    let (class, radio_class) = if pkg.selected {
        ("package package--selected", "radio radio--on")
    } else {
        ("package", "radio")
    };
    rsx! {
        Card { class: "{class}", onclick: move |_| on_intent.call(PaywallIntent::SelectPackage(id.clone())),
            if pkg.popular {
                span { class: "package__ribbon", "Most Popular" }
            }
            div { class: "package__header",
                div {
                    h4 { class: "package__name", "{pkg.name}" }
                    div { class: "package__price-row",
                        span { class: "package__price", "{pkg.price}" }
                        span { class: "package__period", "{pkg.period}" }
                    }
                    if let Some(original) = pkg.original_price.as_deref() {
                        div { class: "package__discount-row",
                            span { class: "package__original", "{original}" }
                            if let Some(discount) = pkg.discount.as_deref() {
                                span { class: "package__discount", "{discount}" }
                            }
                        }
                    }
                }
                div { class: "{radio_class}",
                    if pkg.selected { "✓" }
                }
            }
            ul { class: "package__features",
                for feature in pkg.features.iter() {
                    li { key: "{feature}", "✓ {feature}" }
                }
            }
        }
    }
}

#[component]
fn PaymentStep(
    plan_name: String,
    plan_period: String,
    price: String,
    values: Vec<String>,
    processing: bool,
    on_intent: Callback<PaywallIntent>,
) -> Element {
    let pay_label = if processing {
        "Processing...".to_string()
    } else {
        format!("Pay {price}")
    };
    rsx! {
        PaywallHeader { title: "Payment", show_back: !processing, on_intent }
        div { class: "paywall-body",
            Card { class: "plan-summary",
                div {
                    h3 { class: "plan-summary__name", "{plan_name} Plan" }
                    p { class: "muted", "{plan_period}" }
                }
                div { class: "plan-summary__price", "{price}" }
            }
            Card { class: "payment-form",
                h3 { class: "payment-form__title", "💳 Payment Information" }
                for (field, value) in PaymentField::ALL.into_iter().zip(values) {
                    Input {
                        key: "{field.input_id()}",
                        id: field.input_id(),
                        label: field.label(),
                        placeholder: field.placeholder(),
                        input_type: field.input_type(),
                        value,
                        disabled: processing,
                        on_input: move |value: String| on_intent.call(PaywallIntent::Edit(field, value)),
                    }
                }
            }
            p { class: "secure-note", "🔒 Your payment information is secure and encrypted" }
            Button {
                id: "paywall-pay",
                class: "btn-block btn-lg",
                disabled: processing,
                onclick: move |_| on_intent.call(PaywallIntent::Pay),
                "{pay_label}"
            }
        }
    }
}

#[component]
fn ThankYouStep(on_intent: Callback<PaywallIntent>) -> Element {
    rsx! {
        div { class: "thank-you",
            div { class: "thank-you__icon", "✓" }
            h2 { "Thank You!" }
            p { class: "muted", "You now have access to all premium features!" }
            div { class: "thank-you__list",
                for item in CONFIRMATIONS {
                    div { key: "{item}", class: "thank-you__item", "✓ {item}" }
                }
            }
            Button {
                id: "paywall-finish",
                class: "btn-block btn-lg",
                onclick: move |_| on_intent.call(PaywallIntent::Finish),
                "Start Learning"
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct PaywallTestHandles {
    dispatch: Rc<RefCell<Option<Callback<PaywallIntent>>>>,
    flow: Rc<RefCell<Option<Signal<Option<PaywallFlow>>>>>,
}

#[cfg(test)]
impl PaywallTestHandles {
    pub(crate) fn register(
        &self,
        dispatch: Callback<PaywallIntent>,
        flow: Signal<Option<PaywallFlow>>,
    ) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.flow.borrow_mut() = Some(flow);
    }

    pub(crate) fn dispatch(&self) -> Callback<PaywallIntent> {
        (*self.dispatch.borrow()).expect("paywall dispatch registered")
    }

    pub(crate) fn flow(&self) -> Signal<Option<PaywallFlow>> {
        (*self.flow.borrow()).expect("paywall flow registered")
    }
}
