use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use histo_core::model::{ExamResult, SessionQuestion};

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::format_mm_ss;

fn performance_message(percent: u8) -> &'static str {
    match percent {
        90..=100 => "Excelente!",
        80..=89 => "Muito bom!",
        70..=79 => "Bom!",
        60..=69 => "Regular",
        _ => "Precisa melhorar",
    }
}

#[component]
pub fn ExamResultView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let handoff = ctx.exam_handoff();

    // Take the result exactly once; reloading this screen has nothing to show.
    let result = use_hook(|| std::rc::Rc::new(handoff.take_result()));

    use_effect({
        let result = result.clone();
        move || {
            if result.is_none() {
                navigator.replace(Route::ExamSetup {});
            }
        }
    });

    let Some(result) = result.as_ref() else {
        return rsx! {
            div { class: "page exam-result-page",
                p { class: "empty", "Nenhum resultado para mostrar. Redirecionando..." }
            }
        };
    };

    let handoff_for_restart = ctx.exam_handoff();
    let on_new_exam = move |_| {
        handoff_for_restart.clear();
        navigator.push(Route::ExamSetup {});
    };

    rsx! {
        div { class: "page exam-result-page",
            Link { class: "back-link", to: Route::Home {}, "Voltar ao início" }
            h2 { "Resultado do Simulado" }

            ResultSummary { result: result.clone() }

            button { class: "btn btn-primary", onclick: on_new_exam, "Novo Simulado" }

            section { class: "review",
                h3 { "Revisão das questões" }
                for (index, question) in result.questions().iter().enumerate() {
                    ReviewCard {
                        key: "{index}",
                        number: index + 1,
                        question: question.clone(),
                    }
                }
            }
        }
    }
}

#[component]
fn ResultSummary(result: ExamResult) -> Element {
    let percent = result.percent_correct();
    let message = performance_message(percent);
    let total_time = format_mm_ss(result.total_elapsed_seconds());
    let percent_class = match percent {
        80..=100 => "score score--high",
        60..=79 => "score score--mid",
        _ => "score score--low",
    };

    rsx! {
        section { class: "result-summary",
            div { class: "{percent_class}",
                span { class: "score__value", "{percent}%" }
                span { class: "score__message", "{message}" }
            }
            ul { class: "result-summary__counts",
                li { class: "count count--correct",
                    strong { "{result.correct()}" }
                    span { "Acertos" }
                }
                li { class: "count count--incorrect",
                    strong { "{result.incorrect()}" }
                    span { "Erros" }
                }
                li { class: "count count--blank",
                    strong { "{result.unanswered()}" }
                    span { "Não respondidas" }
                }
                li { class: "count",
                    strong { "{total_time}" }
                    span { "Tempo total" }
                }
            }
        }
    }
}

#[component]
fn ReviewCard(number: usize, question: SessionQuestion) -> Element {
    let mut expanded = use_signal(|| false);
    let mut image_failed = use_signal(|| false);

    let source = question.question();
    let correct = source.correct();
    let (status_class, status_label) = match question.selected_choice() {
        Some(_) if question.is_correct() => ("review-card--correct", "Acertou"),
        Some(_) => ("review-card--incorrect", "Errou"),
        None => ("review-card--blank", "Tempo esgotado"),
    };
    let elapsed = format_mm_ss(u64::from(question.elapsed_seconds().unwrap_or(0)));

    rsx! {
        article { class: "review-card {status_class}",
            button {
                class: "review-card__toggle",
                onclick: move |_| expanded.toggle(),
                span { class: "badge", "Questão {number}" }
                span { class: "review-card__status", "{status_label}" }
                span { class: "review-card__time", "{elapsed}" }
                span { class: "review-card__chevron",
                    if expanded() { "▲" } else { "▼" }
                }
            }
            if expanded() {
                div { class: "review-card__body",
                    if image_failed() {
                        div { class: "slide-placeholder", "Imagem não disponível" }
                    } else {
                        img {
                            class: "review-card__image",
                            src: "{source.image().as_str()}",
                            alt: "Lâmina histológica — {source.theme().display_name()}",
                            onerror: move |_| image_failed.set(true),
                        }
                    }
                    p { class: "question-card__prompt", "{source.prompt()}" }
                    ol { class: "question-card__choices",
                        for (index, choice) in source.choices().iter().enumerate() {
                            {
                                let is_correct = index == source.correct_choice();
                                let is_chosen = question.selected_choice() == Some(index);
                                let class = if is_correct {
                                    "choice choice--correct"
                                } else if is_chosen {
                                    "choice choice--wrong"
                                } else {
                                    "choice"
                                };
                                rsx! {
                                    li { key: "{index}", class: "{class}",
                                        span { "{choice.text}" }
                                        if is_chosen && !is_correct {
                                            span { class: "choice__tag", "Sua resposta" }
                                        }
                                        if is_correct {
                                            span { class: "choice__tag", "Correta" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                    p { class: "choice__explanation", "{correct.explanation}" }
                }
            }
        }
    }
}
