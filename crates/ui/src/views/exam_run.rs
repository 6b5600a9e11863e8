use chrono::Utc;
use dioxus::prelude::*;
use dioxus_router::{Navigator, use_navigator};
use tokio::sync::mpsc::{self, UnboundedSender};

use content::ContentSource;
use services::{ExamBuildError, ExamBuilder, ExamHandoff, ExamPhase, RUNNING_LOW_SECONDS};

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::{ExamVm, LockReason, format_mm_ss};

fn build_error_message(err: &ExamBuildError) -> String {
    match err {
        ExamBuildError::NotEnoughQuestions {
            requested,
            available,
        } => format!(
            "A seleção pede {requested} questões, mas apenas {available} estão disponíveis."
        ),
        ExamBuildError::Config(_) => "Configuração inválida. Monte o simulado novamente.".to_owned(),
    }
}

/// Starts the countdown for the question on screen and keeps the remaining
/// seconds flowing into the display signal until the countdown is replaced
/// or cancelled.
fn start_question(
    mut vm: Signal<Option<ExamVm>>,
    mut remaining: Signal<u32>,
    timeout_tx: UnboundedSender<u64>,
) {
    let rx = {
        let mut guard = vm.write();
        let Some(vm_value) = guard.as_mut() else {
            return;
        };
        remaining.set(vm_value.seconds_per_question());
        vm_value.start_timer(move |generation| {
            // Runs on the timer task; hand the event back to the UI loop.
            let _ = timeout_tx.send(generation);
        })
    };
    spawn(async move {
        let mut rx = rx;
        // Ends when the countdown's sender is dropped (cancel or replace).
        while rx.changed().await.is_ok() {
            let value = *rx.borrow();
            remaining.set(value);
        }
    });
}

/// Waits out the acknowledgement delay, then advances the session, starting
/// the next countdown or finishing into the results screen.
fn schedule_advance(
    delay: std::time::Duration,
    mut vm: Signal<Option<ExamVm>>,
    remaining: Signal<u32>,
    timeout_tx: UnboundedSender<u64>,
    handoff: ExamHandoff,
    navigator: Navigator,
) {
    spawn(async move {
        tokio::time::sleep(delay).await;
        let phase = {
            let mut guard = vm.write();
            guard.as_mut().map(ExamVm::advance)
        };
        match phase {
            Some(Ok(ExamPhase::Active(_))) => start_question(vm, remaining, timeout_tx),
            Some(Ok(ExamPhase::Complete)) => {
                let result = {
                    let mut guard = vm.write();
                    guard.as_mut().and_then(|vm_value| vm_value.finish(Utc::now()))
                };
                if let Some(result) = result {
                    handoff.put_result(result);
                }
                navigator.push(Route::ExamResultPage {});
            }
            _ => {}
        }
    });
}

#[component]
pub fn ExamRunView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();

    let vm = use_signal(|| None::<ExamVm>);
    let remaining = use_signal(|| 0_u32);
    let mut build_error = use_signal(|| None::<String>);
    let timeout_tx = use_signal(|| None::<UnboundedSender<u64>>);
    let mut image_failed = use_signal(|| false);

    // Boot once: take the config, build the session, then keep draining
    // timeout deliveries for the rest of the run.
    let handoff = ctx.exam_handoff();
    let catalog = ctx.catalog();
    use_future(move || {
        let handoff = handoff.clone();
        let catalog = catalog.clone();
        let mut vm = vm;
        let mut timeout_tx_slot = timeout_tx;
        async move {
            let (tx, mut rx) = mpsc::unbounded_channel::<u64>();
            timeout_tx_slot.set(Some(tx.clone()));

            let Some(config) = handoff.take_config() else {
                // Missing handoff: back to setup rather than a broken screen.
                navigator.replace(Route::ExamSetup {});
                return;
            };
            match ExamBuilder::build(&config, catalog.source().all_practice_questions()) {
                Ok(session) => {
                    vm.set(Some(ExamVm::new(session)));
                    start_question(vm, remaining, tx.clone());
                }
                Err(err) => {
                    build_error.set(Some(build_error_message(&err)));
                    return;
                }
            }

            while let Some(generation) = rx.recv().await {
                let delay = {
                    let mut guard = vm.write();
                    guard.as_mut().and_then(|vm_value| vm_value.timeout(generation))
                };
                if let Some(delay) = delay {
                    schedule_advance(
                        delay,
                        vm,
                        remaining,
                        tx.clone(),
                        handoff.clone(),
                        navigator,
                    );
                }
            }
        }
    });

    let snapshot = {
        let guard = vm.read();
        guard.as_ref().map(|vm_value| {
            (
                vm_value.position(),
                vm_value.total(),
                vm_value.current_question().cloned(),
                vm_value.lock_reason(),
                vm_value.seconds_per_question(),
            )
        })
    };

    // A new question gets a fresh image state.
    use_effect(move || {
        let _position = vm.read().as_ref().map(ExamVm::position);
        image_failed.set(false);
    });

    let handoff_for_answer = ctx.exam_handoff();
    let on_answer = use_callback(move |choice: usize| {
        let delay = {
            let mut guard = vm.write();
            guard
                .as_mut()
                .and_then(|vm_value| vm_value.answer(choice).ok().flatten())
        };
        if let (Some(delay), Some(tx)) = (delay, timeout_tx.read().clone()) {
            schedule_advance(
                delay,
                vm,
                remaining,
                tx,
                handoff_for_answer.clone(),
                navigator,
            );
        }
    });

    if let Some(message) = build_error.read().as_ref() {
        return rsx! {
            div { class: "page exam-run-page",
                div { class: "notice notice--error",
                    p { "{message}" }
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| { navigator.push(Route::ExamSetup {}); },
                        "Voltar à configuração"
                    }
                }
            }
        };
    }

    let Some((position, total, question, lock, seconds_per_question)) = snapshot else {
        return rsx! {
            div { class: "page exam-run-page",
                p { class: "empty", "Preparando simulado..." }
            }
        };
    };
    let Some(question) = question else {
        // Between Complete and the results navigation there is nothing to draw.
        return rsx! {
            div { class: "page exam-run-page",
                p { class: "empty", "Finalizando simulado..." }
            }
        };
    };

    let remaining_now = *remaining.read();
    let timer_text = format_mm_ss(u64::from(remaining_now));
    let running_low = remaining_now > 0 && remaining_now <= RUNNING_LOW_SECONDS;
    let time_up = remaining_now == 0 && lock == Some(LockReason::TimedOut);
    let fraction = if seconds_per_question == 0 {
        0.0
    } else {
        f64::from(remaining_now) / f64::from(seconds_per_question) * 100.0
    };
    let timer_class = if time_up {
        "timer timer--expired"
    } else if running_low {
        "timer timer--low"
    } else {
        "timer"
    };
    let progress = (position as f64) / (total as f64) * 100.0;
    let locked = lock.is_some();
    let is_last = position == total;

    rsx! {
        div { class: "page exam-run-page",
            header { class: "exam-head",
                div {
                    h2 { "Simulado Prático" }
                    p { class: "page-subtitle", "Questão {position} de {total}" }
                }
                div { class: "progress-bar",
                    div { class: "progress-bar__fill", style: "width: {progress}%" }
                }
            }

            div { class: "exam-grid",
                aside { class: "{timer_class}",
                    span { class: "timer__label",
                        if time_up { "Tempo Esgotado!" } else { "Tempo Restante" }
                    }
                    span { class: "timer__value", "{timer_text}" }
                    div { class: "timer__bar",
                        div { class: "timer__bar-fill", style: "width: {fraction}%" }
                    }
                    if running_low {
                        p { class: "timer__warning", "Tempo esgotando!" }
                    }
                }

                section { class: "exam-question",
                    {
                        let theme_name = question.question().theme().display_name();
                        let question_id = question.question().id();
                        let image_src = question.question().image().as_str().to_owned();
                        let prompt = question.question().prompt().to_owned();
                        rsx! {
                            header { class: "question-card__head",
                                span { class: "badge", "Questão {question_id}" }
                                span { class: "badge badge--theme", "{theme_name}" }
                            }
                            if image_failed() {
                                div { class: "slide-placeholder", "Imagem não disponível" }
                            } else {
                                img {
                                    class: "exam-question__image",
                                    src: "{image_src}",
                                    alt: "Lâmina histológica — {theme_name}",
                                    onerror: move |_| image_failed.set(true),
                                }
                            }
                            h3 { class: "question-card__prompt", "{prompt}" }
                        }
                    }
                    div { class: "exam-choices",
                        for (index, choice) in question.question().choices().iter().enumerate() {
                            ExamChoiceButton {
                                key: "{index}",
                                index,
                                text: choice.text.clone(),
                                selected: question.selected_choice() == Some(index),
                                locked,
                                on_answer,
                            }
                        }
                    }
                    match lock {
                        Some(LockReason::Answered) => rsx! {
                            div { class: "notice notice--ok",
                                p { "Resposta registrada!" }
                                p { class: "notice__sub",
                                    if is_last { "Finalizando simulado..." } else { "Avançando para a próxima questão..." }
                                }
                            }
                        },
                        Some(LockReason::TimedOut) => rsx! {
                            div { class: "notice notice--warn",
                                p { "Tempo esgotado!" }
                                p { class: "notice__sub",
                                    if is_last { "Finalizando simulado..." } else { "Avançando para a próxima questão..." }
                                }
                            }
                        },
                        None => rsx! {},
                    }
                }
            }
        }
    }
}

#[component]
fn ExamChoiceButton(
    index: usize,
    text: String,
    selected: bool,
    locked: bool,
    on_answer: Callback<usize>,
) -> Element {
    let letter = char::from(b'A' + (index % 26) as u8);
    let class = if selected {
        "exam-choice exam-choice--selected"
    } else {
        "exam-choice"
    };

    rsx! {
        button {
            class: "{class}",
            disabled: locked,
            onclick: move |_| on_answer.call(index),
            span { class: "exam-choice__letter", "{letter}" }
            span { class: "exam-choice__text", "{text}" }
            if selected {
                span { class: "exam-choice__mark", "✓ Selecionada" }
            }
        }
    }
}
