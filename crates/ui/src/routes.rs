use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{
    ExamResultView, ExamRunView, ExamSetupView, FlashcardsView, GlossaryView, HomeView,
    PracticeQuestionsView, TheoryQuestionsView,
};
use services::DeckKind;

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/questoes-teoricas", TheoryQuestionsView)] TheoryQuestions {},
        #[route("/questoes-praticas", PracticeQuestionsView)] PracticeQuestions {},
        #[route("/flashcards-teoricos", TheoryFlashcardsView)] TheoryFlashcards {},
        #[route("/flashcards-praticos", PracticeFlashcardsView)] PracticeFlashcards {},
        #[route("/glossario", GlossaryView)] Glossary {},
        #[route("/simulado/configuracao", ExamSetupView)] ExamSetup {},
        #[route("/simulado/execucao", ExamRunView)] ExamRun {},
        #[route("/simulado/resultado", ExamResultView)] ExamResultPage {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Header {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Header() -> Element {
    rsx! {
        nav { class: "header",
            h1 { class: "header__brand", Link { to: Route::Home {}, "Histoguia" } }
            ul { class: "header__nav",
                li { Link { to: Route::TheoryQuestions {}, "Questões Teóricas" } }
                li { Link { to: Route::PracticeQuestions {}, "Questões Práticas" } }
                li { Link { to: Route::TheoryFlashcards {}, "Flashcards" } }
                li { Link { to: Route::Glossary {}, "Glossário" } }
                li { Link { to: Route::ExamSetup {}, "Simulado" } }
            }
        }
    }
}

#[component]
fn TheoryFlashcardsView() -> Element {
    rsx! {
        FlashcardsView { kind: DeckKind::Theory }
    }
}

#[component]
fn PracticeFlashcardsView() -> Element {
    rsx! {
        FlashcardsView { kind: DeckKind::Practice }
    }
}
