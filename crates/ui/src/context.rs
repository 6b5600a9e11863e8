use std::sync::Arc;

use services::{CatalogService, ExamHandoff, FlashcardService};

/// What the composition root must provide to the UI.
pub trait UiApp: Send + Sync {
    fn catalog(&self) -> CatalogService;
    fn flashcards(&self) -> FlashcardService;
    fn exam_handoff(&self) -> ExamHandoff;
}

/// Services handed to every view through the Dioxus context.
///
/// The exam handoff lives here on purpose: it is the explicit, typed
/// replacement for ambient cross-screen storage, created once at startup and
/// reset when a new exam is configured.
#[derive(Clone)]
pub struct AppContext {
    catalog: CatalogService,
    flashcards: FlashcardService,
    exam_handoff: ExamHandoff,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            catalog: app.catalog(),
            flashcards: app.flashcards(),
            exam_handoff: app.exam_handoff(),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> CatalogService {
        self.catalog.clone()
    }

    #[must_use]
    pub fn flashcards(&self) -> FlashcardService {
        self.flashcards.clone()
    }

    #[must_use]
    pub fn exam_handoff(&self) -> ExamHandoff {
        self.exam_handoff.clone()
    }
}

/// Build an `AppContext` from the application composition root.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
