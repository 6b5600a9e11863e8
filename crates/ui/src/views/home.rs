use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let summaries = use_memo(move || ctx.catalog().theme_summaries());

    let summaries_read = summaries.read();
    let theory_total: usize = summaries_read.iter().map(|s| s.theory_count).sum();
    let practice_total: usize = summaries_read.iter().map(|s| s.practice_count).sum();

    rsx! {
        div { class: "page home-page",
            section { class: "welcome",
                h2 { "Estude histologia no seu ritmo" }
                p {
                    "Questões teóricas e práticas, flashcards, glossário e um simulado "
                    "cronometrado para testar o que você aprendeu."
                }
            }
            section { class: "feature-grid",
                FeatureCard {
                    title: "Questões Teóricas",
                    description: format!("{theory_total} questões por tema e subtópico"),
                    to: Route::TheoryQuestions {},
                }
                FeatureCard {
                    title: "Questões Práticas",
                    description: format!("{practice_total} lâminas para identificar"),
                    to: Route::PracticeQuestions {},
                }
                FeatureCard {
                    title: "Flashcards",
                    description: "Revisão rápida em frente e verso".to_string(),
                    to: Route::TheoryFlashcards {},
                }
                FeatureCard {
                    title: "Glossário",
                    description: "Termos de histologia de A a Z".to_string(),
                    to: Route::Glossary {},
                }
                FeatureCard {
                    title: "Simulado",
                    description: "Prova prática cronometrada com correção".to_string(),
                    to: Route::ExamSetup {},
                }
            }
            section { class: "theme-list",
                h3 { "Temas disponíveis" }
                ul {
                    for summary in summaries_read.iter() {
                        li { key: "{summary.theme.id()}",
                            span { class: "theme-list__name", "{summary.theme.name()}" }
                            span { class: "theme-list__counts",
                                "{summary.theory_count} teóricas · {summary.practice_count} práticas"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn FeatureCard(title: &'static str, description: String, to: Route) -> Element {
    rsx! {
        Link { class: "feature-card", to,
            h3 { "{title}" }
            p { "{description}" }
        }
    }
}
