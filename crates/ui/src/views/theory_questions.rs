use dioxus::prelude::*;

use histo_core::model::{ThemeId, TheoryQuestion};

use crate::context::AppContext;

#[component]
pub fn TheoryQuestionsView() -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();

    let mut theme = use_signal(|| None::<ThemeId>);
    let mut subtopic = use_signal(|| None::<String>);
    let mut keywords = use_signal(String::new);

    let themes = use_memo({
        let catalog = catalog.clone();
        move || catalog.themes()
    });
    let subtopics = use_memo({
        let catalog = catalog.clone();
        move || catalog.subtopics(theme.read().as_ref())
    });
    let questions = use_memo(move || {
        catalog.filter_theory(
            theme.read().as_ref(),
            subtopic.read().as_deref(),
            &keywords.read(),
        )
    });

    let questions_read = questions.read();

    rsx! {
        div { class: "page theory-page",
            h2 { "Questões Teóricas" }
            div { class: "filters",
                select {
                    class: "filters__select",
                    onchange: move |evt| {
                        subtopic.set(None);
                        theme.set(ThemeId::new(evt.value()).ok());
                    },
                    option { value: "", "Todos os temas" }
                    for item in themes.read().iter() {
                        option {
                            key: "{item.id()}",
                            value: "{item.id()}",
                            selected: theme.read().as_ref() == Some(item.id()),
                            "{item.name()}"
                        }
                    }
                }
                select {
                    class: "filters__select",
                    onchange: move |evt| {
                        let value = evt.value();
                        subtopic.set((!value.is_empty()).then_some(value));
                    },
                    option { value: "", "Todos os subtópicos" }
                    for item in subtopics.read().iter() {
                        option {
                            key: "{item}",
                            value: "{item}",
                            selected: subtopic.read().as_deref() == Some(item.as_str()),
                            "{item}"
                        }
                    }
                }
                input {
                    class: "filters__search",
                    r#type: "search",
                    placeholder: "Buscar por palavras-chave...",
                    value: "{keywords}",
                    oninput: move |evt| keywords.set(evt.value()),
                }
            }
            p { class: "result-count", "{questions_read.len()} questões encontradas" }
            div { class: "question-list",
                for question in questions_read.iter() {
                    TheoryQuestionCard {
                        key: "{question.theme()}-{question.id()}",
                        question: question.clone(),
                    }
                }
            }
        }
    }
}

#[component]
fn TheoryQuestionCard(question: TheoryQuestion) -> Element {
    let mut revealed = use_signal(|| false);

    rsx! {
        article { class: "question-card",
            header { class: "question-card__head",
                span { class: "badge", "Questão {question.id()}" }
                span { class: "badge badge--theme", "{question.theme().display_name()}" }
                if !question.level().is_empty() {
                    span { class: "badge badge--level", "{question.level()}" }
                }
            }
            p { class: "question-card__prompt", "{question.prompt()}" }
            ol { class: "question-card__choices",
                for (index, choice) in question.choices().iter().enumerate() {
                    li {
                        key: "{index}",
                        class: if revealed() && index == question.correct_choice() {
                            "choice choice--correct"
                        } else {
                            "choice"
                        },
                        span { "{choice.text}" }
                        if revealed() && index == question.correct_choice() {
                            p { class: "choice__explanation", "{choice.explanation}" }
                        }
                    }
                }
            }
            button {
                class: "btn btn-secondary",
                onclick: move |_| revealed.toggle(),
                if revealed() { "Ocultar resposta" } else { "Mostrar resposta" }
            }
        }
    }
}
