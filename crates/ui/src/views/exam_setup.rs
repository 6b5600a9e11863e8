use std::collections::BTreeSet;

use dioxus::prelude::*;
use dioxus_router::use_navigator;

use histo_core::model::{
    ExamConfig, ExamConfigError, ThemeId, MAX_SECONDS_PER_QUESTION, MIN_SECONDS_PER_QUESTION,
};

use crate::context::AppContext;
use crate::routes::Route;

const SECONDS_OPTIONS: [u32; 5] = [30, 60, 90, 120, 180];

fn config_error_message(err: &ExamConfigError) -> String {
    match err {
        ExamConfigError::NoThemesSelected => "Selecione pelo menos um tema!".to_owned(),
        ExamConfigError::ZeroQuestions => "Escolha pelo menos uma questão.".to_owned(),
        ExamConfigError::SecondsOutOfRange(_) => format!(
            "O tempo por questão deve ficar entre {MIN_SECONDS_PER_QUESTION} e {MAX_SECONDS_PER_QUESTION} segundos."
        ),
    }
}

#[component]
pub fn ExamSetupView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let catalog = ctx.catalog();
    let handoff = ctx.exam_handoff();

    let mut selected = use_signal(BTreeSet::<ThemeId>::new);
    let mut question_count = use_signal(|| 10_usize);
    let mut seconds = use_signal(|| 60_u32);
    let mut error = use_signal(|| None::<String>);

    let summaries = use_memo({
        let catalog = catalog.clone();
        move || catalog.theme_summaries()
    });
    let available = use_memo({
        let catalog = catalog.clone();
        move || catalog.available_practice_count(&selected.read())
    });

    let all_theme_ids: Vec<ThemeId> = summaries
        .read()
        .iter()
        .filter(|summary| summary.practice_count > 0)
        .map(|summary| summary.theme.id().clone())
        .collect();
    let all_for_select = all_theme_ids.clone();

    let on_start = move |_| {
        let available = *available.read();
        let requested = *question_count.read();
        if requested > available {
            error.set(Some(format!(
                "Número máximo de questões disponíveis para os temas escolhidos: {available}"
            )));
            return;
        }
        match ExamConfig::new(selected.read().iter().cloned(), requested, *seconds.read()) {
            Ok(config) => {
                // Handing off the config also discards any stale result.
                handoff.put_config(config);
                navigator.push(Route::ExamRun {});
            }
            Err(err) => error.set(Some(config_error_message(&err))),
        }
    };

    rsx! {
        div { class: "page exam-setup-page",
            h2 { "Configurar Simulado" }
            p { class: "page-subtitle",
                "Escolha os temas, o número de questões e o tempo por questão."
            }

            section { class: "setup-section",
                div { class: "setup-section__head",
                    h3 { "Temas" }
                    div { class: "setup-section__actions",
                        button {
                            class: "btn btn-ghost",
                            onclick: move |_| selected.set(all_for_select.iter().cloned().collect()),
                            "Selecionar todos"
                        }
                        button {
                            class: "btn btn-ghost",
                            onclick: move |_| selected.set(BTreeSet::new()),
                            "Limpar"
                        }
                    }
                }
                div { class: "theme-grid",
                    for summary in summaries.read().iter().filter(|s| s.practice_count > 0) {
                        {
                            let id = summary.theme.id().clone();
                            let is_selected = selected.read().contains(&id);
                            rsx! {
                                button {
                                    key: "{id}",
                                    class: if is_selected { "theme-chip theme-chip--selected" } else { "theme-chip" },
                                    onclick: move |_| {
                                        let mut set = selected.write();
                                        if !set.remove(&id) {
                                            set.insert(id.clone());
                                        }
                                    },
                                    span { "{summary.theme.name()}" }
                                    span { class: "theme-chip__count", "{summary.practice_count} questões" }
                                }
                            }
                        }
                    }
                }
                p { class: "setup-hint",
                    "{available} questões disponíveis para a seleção atual"
                }
            }

            section { class: "setup-section",
                h3 { "Questões" }
                input {
                    class: "setup-number",
                    r#type: "number",
                    min: "1",
                    value: "{question_count}",
                    oninput: move |evt| {
                        if let Ok(value) = evt.value().parse::<usize>() {
                            question_count.set(value);
                        }
                    },
                }
            }

            section { class: "setup-section",
                h3 { "Tempo por questão" }
                select {
                    class: "filters__select",
                    onchange: move |evt| {
                        if let Ok(value) = evt.value().parse::<u32>() {
                            seconds.set(value);
                        }
                    },
                    for option in SECONDS_OPTIONS {
                        option {
                            key: "{option}",
                            value: "{option}",
                            selected: *seconds.read() == option,
                            "{option} segundos"
                        }
                    }
                }
            }

            if let Some(message) = error.read().as_ref() {
                p { class: "form-error", "{message}" }
            }

            button { class: "btn btn-primary btn-start", onclick: on_start, "Iniciar Simulado" }
        }
    }
}
