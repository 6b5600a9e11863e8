use dioxus::prelude::*;

use histo_core::model::{FlashcardFront, ThemeId};
use services::DeckKind;

use crate::context::AppContext;

#[component]
pub fn FlashcardsView(kind: DeckKind) -> Element {
    let ctx = use_context::<AppContext>();
    let flashcards = ctx.flashcards();
    let catalog = ctx.catalog();

    let mut theme = use_signal(|| None::<ThemeId>);
    let mut keywords = use_signal(String::new);
    let mut index = use_signal(|| 0_usize);
    let mut flipped = use_signal(|| false);

    let themes = use_memo(move || catalog.themes());
    let deck = use_memo(move || {
        flashcards.filtered_deck(kind, theme.read().as_ref(), &keywords.read())
    });

    // Filtering invalidates the position, so go back to the first card.
    use_effect(move || {
        let _ = deck.read().len();
        index.set(0);
        flipped.set(false);
    });

    let deck_read = deck.read();
    let total = deck_read.len();
    let current = deck_read.get(*index.read());
    let title = match kind {
        DeckKind::Theory => "Flashcards Teóricos",
        DeckKind::Practice => "Flashcards Práticos",
    };

    rsx! {
        div { class: "page flashcards-page",
            h2 { "{title}" }
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
            if let Some(card) = current {
                div {
                    class: "flashcard",
                    onclick: move |_| flipped.toggle(),
                    if flipped() {
                        div { class: "flashcard__face flashcard__face--back",
                            h3 { "{card.back().answer}" }
                            p { "{card.back().explanation}" }
                        }
                    } else {
                        div { class: "flashcard__face flashcard__face--front",
                            match card.front() {
                                FlashcardFront::Text(text) => rsx! {
                                    p { class: "flashcard__prompt", "{text}" }
                                },
                                FlashcardFront::Image { image, caption } => rsx! {
                                    img {
                                        class: "flashcard__image",
                                        src: "{image.as_str()}",
                                        alt: "Lâmina histológica",
                                    }
                                    p { class: "flashcard__caption", "{caption}" }
                                },
                            }
                        }
                    }
                    p { class: "flashcard__hint", "Clique para virar" }
                }
                div { class: "flashcard-nav",
                    button {
                        class: "btn btn-secondary",
                        disabled: *index.read() == 0,
                        onclick: move |_| {
                            if *index.read() > 0 {
                                index -= 1;
                                flipped.set(false);
                            }
                        },
                        "Anterior"
                    }
                    span { class: "flashcard-nav__position", "{*index.read() + 1} / {total}" }
                    button {
                        class: "btn btn-secondary",
                        disabled: *index.read() + 1 >= total,
                        onclick: move |_| {
                            if *index.read() + 1 < total {
                                index += 1;
                                flipped.set(false);
                            }
                        },
                        "Próximo"
                    }
                }
            } else {
                p { class: "empty", "Nenhum flashcard para os filtros escolhidos." }
            }
        }
    }
}
