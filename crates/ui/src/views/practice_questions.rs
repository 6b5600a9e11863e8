use dioxus::prelude::*;

use histo_core::model::{PracticeQuestion, ThemeId};

use crate::context::AppContext;

#[component]
pub fn PracticeQuestionsView() -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();

    let mut theme = use_signal(|| None::<ThemeId>);
    let mut keywords = use_signal(String::new);

    let themes = use_memo({
        let catalog = catalog.clone();
        move || catalog.themes()
    });
    let questions =
        use_memo(move || catalog.filter_practice(theme.read().as_ref(), &keywords.read()));

    let questions_read = questions.read();

    rsx! {
        div { class: "page practice-page",
            h2 { "Questões Práticas" }
            p { class: "page-subtitle", "Identifique as estruturas nas lâminas histológicas." }
            div { class: "filters",
                select {
                    class: "filters__select",
                    onchange: move |evt| theme.set(ThemeId::new(evt.value()).ok()),
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
                input {
                    class: "filters__search",
                    r#type: "search",
                    placeholder: "Buscar por palavras-chave...",
                    value: "{keywords}",
                    oninput: move |evt| keywords.set(evt.value()),
                }
            }
            p { class: "result-count", "{questions_read.len()} questões encontradas" }
            div { class: "practice-grid",
                for question in questions_read.iter() {
                    PracticeQuestionCard {
                        key: "{question.theme()}-{question.id()}",
                        question: question.clone(),
                    }
                }
            }
        }
    }
}

#[component]
fn PracticeQuestionCard(question: PracticeQuestion) -> Element {
    let mut revealed = use_signal(|| false);
    let mut image_failed = use_signal(|| false);

    rsx! {
        article { class: "practice-card",
            if image_failed() {
                div { class: "slide-placeholder", "Imagem não disponível" }
            } else {
                img {
                    class: "practice-card__image",
                    src: "{question.image().as_str()}",
                    alt: "Lâmina histológica — {question.theme().display_name()}",
                    onerror: move |_| image_failed.set(true),
                }
            }
            div { class: "practice-card__body",
                header { class: "question-card__head",
                    span { class: "badge", "Questão {question.id()}" }
                    span { class: "badge badge--theme", "{question.theme().display_name()}" }
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
}
