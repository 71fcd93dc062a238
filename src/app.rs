//! Main application UI and state management.
//! Three regions mirror the study workflow: a card set list with a
//! filter, the current card, and the controls row.

use std::path::PathBuf;

use eframe::egui;
use mdcards_app::StudySession;

use crate::markdown;

/// Directory holding per-set progress files, created inside the card
/// root on first save.
const PROGRESS_FOLDER: &str = ".progress";

/// Main application state.
pub struct CardsApp {
    root: PathBuf,
    progress_dir: PathBuf,
    /// Discovered card set paths, relative to `root`.
    sets: Vec<PathBuf>,
    filter: String,
    session: Option<StudySession>,
    always_show_answer: bool,
    error_message: Option<String>,
}

impl CardsApp {
    pub fn new(root: PathBuf, sets: Vec<PathBuf>) -> Self {
        let progress_dir = root.join(PROGRESS_FOLDER);
        Self {
            root,
            progress_dir,
            sets,
            filter: String::new(),
            session: None,
            always_show_answer: false,
            error_message: None,
        }
    }

    /// Replaces the session with a freshly parsed set. Load failures
    /// are surfaced in a dialog; the file stays selectable.
    fn select_set(&mut self, rel_path: PathBuf) {
        match StudySession::select(&self.root, &rel_path, &self.progress_dir) {
            Ok(session) => {
                log::info!("selected {} ({} cards)", rel_path.display(), session.len());
                self.session = Some(session);
            }
            Err(err) => {
                log::warn!("failed to load {}: {err}", rel_path.display());
                self.error_message =
                    Some(format!("Failed to load {}: {err}", rel_path.display()));
                self.session = None;
            }
        }
    }

    /// Renders the card set list with its filter box.
    fn render_set_panel(&mut self, ctx: &egui::Context) {
        // Actions are deferred past rendering to avoid borrowing conflicts.
        let mut action_select: Option<PathBuf> = None;

        egui::SidePanel::left("card_sets").show(ctx, |ui| {
            ui.heading("Card sets");

            ui.horizontal(|ui| {
                ui.label("Filter:");
                ui.text_edit_singleline(&mut self.filter);
            });

            ui.separator();

            egui::ScrollArea::vertical()
                .id_source("sets_list")
                .show(ui, |ui| {
                    for rel_path in &self.sets {
                        let label = rel_path.display().to_string();
                        if !label.contains(self.filter.as_str()) {
                            continue;
                        }
                        ui.horizontal(|ui| {
                            if ui.button("Select").clicked() {
                                action_select = Some(rel_path.clone());
                            }
                            ui.label(&label);
                        });
                    }
                });
        });

        if let Some(rel_path) = action_select {
            self.select_set(rel_path);
        }
    }

    /// Renders the controls row: navigation buttons, keyboard
    /// shortcuts, and the per-question progress checkbox.
    fn render_controls(&mut self, ctx: &egui::Context) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.is_empty() {
            return;
        }

        let mut always_show = self.always_show_answer;
        let mut save_error: Option<String> = None;

        egui::TopBottomPanel::bottom("controls").show(ctx, |ui| {
            ui.label(session.card_set().rel_path.display().to_string());
            ui.label(format!(
                "Cards: {} / {}",
                session.current_index() + 1,
                session.len()
            ));

            ui.separator();

            ui.horizontal(|ui| {
                let toggle_requested = ui.input(|i| {
                    i.key_pressed(egui::Key::ArrowDown) || i.key_pressed(egui::Key::ArrowUp)
                });
                if ui.button("Show answer").clicked() || toggle_requested {
                    session.toggle_answer();
                }

                if ui.button("Random question").clicked() {
                    session.random_jump(&mut rand::rng());
                }

                if ui.button("Shuffle").clicked() {
                    session.shuffle(&mut rand::rng());
                }

                if ui.button("Back").clicked()
                    || ui.input(|i| i.key_pressed(egui::Key::ArrowLeft))
                {
                    session.back();
                }

                if ui.button("Next").clicked()
                    || ui.input(|i| i.key_pressed(egui::Key::ArrowRight))
                {
                    session.next();
                }
            });

            ui.checkbox(&mut always_show, "Always show solution");

            let mut correct = session.current_answered_correctly();
            if ui.checkbox(&mut correct, "Answered correctly").changed() {
                if let Err(err) = session.mark_current_answer(correct) {
                    save_error = Some(format!("Failed to save progress: {err}"));
                }
            }
            if ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                if let Err(err) = session.toggle_current_answer() {
                    save_error = Some(format!("Failed to save progress: {err}"));
                }
            }
        });

        self.always_show_answer = always_show;
        if let Some(message) = save_error {
            log::warn!("{message}");
            self.error_message = Some(message);
        }
    }

    /// Renders the current card: question above the separator, answer
    /// below it when revealed.
    fn render_card_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let Some(session) = self.session.as_ref() else {
                ui.label("Select a card set to start studying.");
                return;
            };

            let Some(card) = session.current_card() else {
                ui.label(format!(
                    "{} has no cards.",
                    session.card_set().rel_path.display()
                ));
                return;
            };

            egui::ScrollArea::vertical()
                .id_source("current_card")
                .show(ui, |ui| {
                    markdown::render(ui, &card.question);
                    ui.separator();
                    if session.show_answer() || self.always_show_answer {
                        markdown::render(ui, &card.answer);
                    }
                });
        });
    }

    /// Modal for surfaced errors (failed loads, failed progress saves).
    fn render_error_dialog(&mut self, ctx: &egui::Context) {
        let Some(message) = self.error_message.clone() else {
            return;
        };

        egui::Window::new("Problem")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label(message);
                ui.add_space(10.0);
                if ui.button("OK").clicked() {
                    self.error_message = None;
                }
            });
    }
}

impl eframe::App for CardsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render_set_panel(ctx);
        self.render_controls(ctx);
        self.render_card_panel(ctx);
        self.render_error_dialog(ctx);
    }
}
