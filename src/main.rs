mod app;
mod markdown;

use std::path::PathBuf;

use app::CardsApp;
use mdcards_app::loader;

/// Folder scanned for card sets, expected next to the executable.
const CARD_FOLDER: &str = "FlashCards";

/// Prefers a `FlashCards` folder next to the executable, matching how
/// the app is distributed; falls back to the working directory so
/// `cargo run` picks up a local folder.
fn card_root() -> PathBuf {
    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            let root = dir.join(CARD_FOLDER);
            if root.is_dir() {
                return root;
            }
        }
    }
    PathBuf::from(CARD_FOLDER)
}

fn main() -> eframe::Result<()> {
    env_logger::init();

    let root = card_root();
    let sets = match loader::discover(&root) {
        Ok(sets) => sets,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    log::info!("found {} card sets under {}", sets.len(), root.display());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([960.0, 720.0]),
        ..Default::default()
    };
    eframe::run_native(
        "mdcards",
        options,
        Box::new(|_cc| Ok(Box::new(CardsApp::new(root, sets)))),
    )
}
