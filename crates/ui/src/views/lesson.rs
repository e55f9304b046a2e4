use dioxus::prelude::*;
use dioxus_router::use_navigator;
use signlearn_core::model::{LessonId, QuestionKind};

use crate::components::{Button, ButtonVariant, Card, ProgressBar};
use crate::context::{AppContext, use_app_state};
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{FeedbackVm, LessonIntent, LessonOutcome, OptionTileVm, start_lesson};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[cfg(test)]
use crate::vm::LessonVm;

/// Route entry point; remembers the lesson so the Learn tab can resume it.
#[component]
pub fn LessonView(lesson_id: u64) -> Element {
    let mut app_state = use_app_state();
    use_effect(move || app_state.set_active_lesson(Some(LessonId::new(lesson_id))));

    rsx! {
        LessonRunner { key: "{lesson_id}", lesson_id }
    }
}

#[component]
pub fn LessonRunner(lesson_id: u64) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let mut app_state = use_app_state();
    let runner = ctx.lesson_sessions();
    let lesson_id = LessonId::new(lesson_id);

    let vm = app_state.lesson_run();
    let error = use_signal(|| None::<ViewError>);

    let runner_for_resource = runner.clone();
    let resource = use_resource(move || {
        let runner = runner_for_resource.clone();
        let premium = app_state.is_premium();
        let mut vm = vm;
        async move {
            let resuming = vm
                .peek()
                .as_ref()
                .is_some_and(|run| run.lesson_id() == lesson_id);
            if resuming {
                tracing::debug!(lesson = %lesson_id, "lesson resumed");
                return Ok(());
            }
            let started = start_lesson(&runner, lesson_id, premium).await?;
            vm.set(Some(started));
            Ok::<_, ViewError>(())
        }
    });

    let mut leave = move || {
        app_state.end_lesson();
        let _ = navigator.push(Route::Home {});
    };

    let dispatch_intent = use_callback(move |intent: LessonIntent| {
        let mut vm = vm;
        let mut error = error;
        let outcome = {
            let mut guard = vm.write();
            let Some(current) = guard.as_mut() else {
                error.set(Some(ViewError::Unknown));
                return;
            };
            current.apply(&runner, intent)
        };

        match outcome {
            Ok(LessonOutcome::Continue) => error.set(None),
            Ok(LessonOutcome::Completed(result)) => {
                error.set(None);
                tracing::info!(
                    lesson = %result.lesson_id,
                    score = %result.label(),
                    "lesson finished"
                );
                leave();
            }
            Err(err) => error.set(Some(err)),
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<LessonTestHandles>() {
                handles.register(dispatch_intent, vm);
            }
        }
    }

    let state = view_state_from_resource(&resource);
    let vm_guard = vm.read();
    let current = vm_guard.as_ref();
    let (progress, progress_label) = current.map_or((0, String::new()), |vm| {
        (vm.progress_percent(), vm.progress_label())
    });

    rsx! {
        div { class: "page lesson-page",
            header { class: "lesson-header",
                button {
                    class: "lesson-header__close",
                    id: "lesson-quit",
                    r#type: "button",
                    aria_label: "Close lesson",
                    onclick: move |_| leave(),
                    "✕"
                }
                ProgressBar { value: progress, class: "lesson-header__progress" }
                span { class: "lesson-header__count", "{progress_label}" }
            }
            match (state, current) {
                (ViewState::Error(err), _) => rsx! {
                    div { class: "lesson-body",
                        p { "{err.message()}" }
                        if err == ViewError::Locked || err == ViewError::NotFound {
                            Button {
                                variant: ButtonVariant::Secondary,
                                onclick: move |_| leave(),
                                "Back to Home"
                            }
                        } else {
                            button {
                                class: "btn btn-secondary",
                                r#type: "button",
                                onclick: move |_| {
                                    let mut resource = resource;
                                    resource.restart();
                                },
                                "Retry"
                            }
                        }
                    }
                },
                (ViewState::Ready(()), Some(lesson)) => rsx! {
                    div { class: "lesson-body",
                        h2 { class: "lesson-prompt", "{lesson.prompt()}" }
                        if let Some(src) = lesson.media_src() {
                            Card { class: "lesson-media",
                                img { class: "lesson-media__image", src: "{src}", alt: "Sign demonstration" }
                            }
                        }
                        OptionGrid {
                            kind: lesson.kind(),
                            options: lesson.options(),
                            on_intent: dispatch_intent,
                        }
                        if let Some(feedback) = lesson.feedback() {
                            FeedbackCard { feedback }
                        }
                        if let Some(err) = *error.read() {
                            p { class: "inline-error", "{err.message()}" }
                        }
                        Button {
                            id: "lesson-primary",
                            class: "btn-block btn-lg",
                            disabled: !lesson.can_submit(),
                            onclick: move |_| dispatch_intent.call(LessonIntent::Primary),
                            "{lesson.action_label()}"
                        }
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
fn OptionGrid(
    kind: QuestionKind,
    options: Vec<OptionTileVm>,
    on_intent: Callback<LessonIntent>,
) -> Element {
    let grid_class = match kind {
        QuestionKind::MultipleChoice => "options options--letters",
        QuestionKind::PictureMatch => "options options--pictures",
        QuestionKind::Dialogue => "options options--dialogue",
    };
    rsx! {
        div { class: "{grid_class}",
            for option in options {
                OptionTile { key: "{option.id}", kind, option: option.clone(), on_intent }
            }
        }
    }
}

#[component]
fn OptionTile(kind: QuestionKind, option: OptionTileVm, on_intent: Callback<LessonIntent>) -> Element {
    let id = option.id.clone();
    let class = option.class();
    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            disabled: option.disabled,
            onclick: move |_| on_intent.call(LessonIntent::Select(id.clone())),
            if kind == QuestionKind::PictureMatch {
                if let Some(src) = option.image_src.as_deref() {
                    img { class: "option__image", src: "{src}", alt: "{option.label}" }
                }
                if let Some(mark) = option.mark() {
                    span { class: "option__mark", "{mark}" }
                }
            } else {
                span { class: "option__label", "{option.label}" }
            }
        }
    }
}

#[component]
fn FeedbackCard(feedback: FeedbackVm) -> Element {
    let (class, badge) = if feedback.correct {
        ("feedback feedback--correct", "✓")
    } else {
        ("feedback feedback--retry", "!")
    };
    rsx! {
        Card { class: "{class}",
            div { class: "feedback__row",
                span { class: "feedback__badge", "{badge}" }
                div {
                    h3 { class: "feedback__title", "{feedback.title}" }
                    if let Some(explanation) = feedback.explanation.as_deref() {
                        p { class: "feedback__text", "{explanation}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct LessonTestHandles {
    dispatch: Rc<RefCell<Option<Callback<LessonIntent>>>>,
    vm: Rc<RefCell<Option<Signal<Option<LessonVm>>>>>,
}

#[cfg(test)]
impl LessonTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<LessonIntent>, vm: Signal<Option<LessonVm>>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.vm.borrow_mut() = Some(vm);
    }

    pub(crate) fn dispatch(&self) -> Callback<LessonIntent> {
        (*self.dispatch.borrow()).expect("lesson dispatch registered")
    }

    pub(crate) fn vm(&self) -> Signal<Option<LessonVm>> {
        (*self.vm.borrow()).expect("lesson vm registered")
    }
}
