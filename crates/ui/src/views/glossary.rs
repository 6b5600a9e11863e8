use dioxus::prelude::*;

use crate::context::AppContext;

#[component]
pub fn GlossaryView() -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();

    let mut query = use_signal(String::new);
    let mut letter = use_signal(|| None::<char>);

    let letters = use_memo({
        let catalog = catalog.clone();
        move || catalog.glossary_letters()
    });
    let terms = use_memo(move || catalog.filter_glossary(&query.read(), *letter.read()));

    let terms_read = terms.read();

    rsx! {
        div { class: "page glossary-page",
            h2 { "Glossário" }
            div { class: "filters",
                input {
                    class: "filters__search",
                    r#type: "search",
                    placeholder: "Buscar termo, definição ou categoria...",
                    value: "{query}",
                    oninput: move |evt| query.set(evt.value()),
                }
            }
            div { class: "letter-bar",
                button {
                    class: if letter.read().is_none() { "letter-bar__btn letter-bar__btn--active" } else { "letter-bar__btn" },
                    onclick: move |_| letter.set(None),
                    "Todas"
                }
                for current in letters.read().iter().copied() {
                    button {
                        key: "{current}",
                        class: if *letter.read() == Some(current) { "letter-bar__btn letter-bar__btn--active" } else { "letter-bar__btn" },
                        onclick: move |_| letter.set(Some(current)),
                        "{current}"
                    }
                }
            }
            if terms_read.is_empty() {
                p { class: "empty", "Nenhum termo encontrado." }
            } else {
                ul { class: "term-list",
                    for term in terms_read.iter() {
                        li { key: "{term.term()}", class: "term-list__item",
                            div { class: "term-list__head",
                                h3 { "{term.term()}" }
                                span { class: "term-list__category", "{term.category()}" }
                            }
                            p { "{term.definition()}" }
                        }
                    }
                }
            }
        }
    }
}
