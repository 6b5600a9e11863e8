use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use log::info;

use content::{BundledCatalog, ContentSource};
use services::{CatalogService, ExamHandoff, FlashcardService};
use ui::{App, UiApp, build_app_context};

struct DesktopApp {
    catalog: CatalogService,
    flashcards: FlashcardService,
    exam_handoff: ExamHandoff,
}

impl UiApp for DesktopApp {
    fn catalog(&self) -> CatalogService {
        self.catalog.clone()
    }

    fn flashcards(&self) -> FlashcardService {
        self.flashcards.clone()
    }

    fn exam_handoff(&self) -> ExamHandoff {
        self.exam_handoff.clone()
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  RUST_LOG   log filter (default: info)");
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            other => {
                eprintln!("unknown argument: {other}");
                print_usage();
                return Err(std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    "unknown argument",
                )
                .into());
            }
        }
    }

    // Parse the bundled content once at startup; themes that fail validation
    // are logged and skipped inside the loader.
    let source: Arc<dyn ContentSource> = Arc::new(BundledCatalog::load());
    info!("starting Histoguia with {} themes", source.themes().len());

    let app = DesktopApp {
        catalog: CatalogService::new(Arc::clone(&source)),
        flashcards: FlashcardService::new(source),
        exam_handoff: ExamHandoff::new(),
    };
    let app: Arc<dyn UiApp> = Arc::new(app);
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Histoguia")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
