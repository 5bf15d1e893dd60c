//! The editor application: panels, canvas preview, and AI wiring.
//!
//! AI calls run on a worker thread and report back over a channel; the
//! triggering buttons stay disabled while one request is in flight. That
//! busy flag is the only concurrency guard, matching the single-in-flight
//! model of the rest of the system.

use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

use anyhow::Context as _;
use eframe::egui;

use crate::ai::client::{BackendMode, ChatReply, Gateway};
use crate::ai::{parse, prompts};
use crate::config::Config;
use crate::deck::{Deck, Slide};
use crate::questionnaire::{self, Answers, Questionnaire, Step};
use crate::render;
use crate::session::{Role, SessionLog};
use crate::theme::ThemeSet;

/// Which AI operation a worker thread finished.
enum AiOutcome {
    Improve(ChatReply),
    Generate(ChatReply),
    Chat(ChatReply),
}

struct EditorApp {
    deck: Deck,
    themes: ThemeSet,
    gateway: Gateway,
    log: SessionLog,
    models: Vec<String>,
    selected_model: String,
    chat_input: String,
    questionnaire: Option<Questionnaire>,
    wizard_input: String,
    busy: bool,
    pending: Option<mpsc::Receiver<AiOutcome>>,
    show_log: bool,
}

impl EditorApp {
    fn new(config: &Config, deck: Deck) -> Self {
        let gateway = Gateway::connect(config);
        let models = gateway.list_models();
        let selected_model = config.default_model();

        let mut log = SessionLog::new();
        match gateway.mode() {
            BackendMode::Connected => {
                log.system(format!("Connected to gateway at {}", gateway.endpoint()));
            }
            BackendMode::Offline => {
                log.system(format!("Gateway not reachable at {}", gateway.endpoint()));
                log.system("To enable AI features, run `pitchgate` in a terminal, then try again.");
            }
            BackendMode::Disabled => {
                log.system("AI backend disabled in config.");
                log.system("Enable with `pitchdeck config set gateway.enabled true`.");
            }
        }

        Self {
            deck,
            themes: ThemeSet::builtin(),
            gateway,
            log,
            models,
            selected_model,
            chat_input: String::new(),
            questionnaire: None,
            wizard_input: String::new(),
            busy: false,
            pending: None,
            show_log: false,
        }
    }

    fn spawn_ai<F>(&mut self, ctx: &egui::Context, job: F)
    where
        F: FnOnce(&Gateway) -> AiOutcome + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        self.pending = Some(rx);
        self.busy = true;
        let gateway = self.gateway.clone();
        let ctx = ctx.clone();
        std::thread::spawn(move || {
            let outcome = job(&gateway);
            let _ = tx.send(outcome);
            ctx.request_repaint();
        });
    }

    fn poll_ai(&mut self) {
        let Some(rx) = &self.pending else { return };
        match rx.try_recv() {
            Ok(outcome) => {
                self.pending = None;
                self.busy = false;
                self.handle_outcome(outcome);
            }
            Err(mpsc::TryRecvError::Empty) => {}
            Err(mpsc::TryRecvError::Disconnected) => {
                self.pending = None;
                self.busy = false;
                self.log.system("AI request failed: worker thread disappeared.");
            }
        }
    }

    fn handle_outcome(&mut self, outcome: AiOutcome) {
        match outcome {
            AiOutcome::Improve(reply) => {
                if !reply.success {
                    self.log.system(format!(
                        "Improve failed: {}",
                        reply.error.unwrap_or_else(|| "unknown error".to_string())
                    ));
                    return;
                }
                let patch = parse::parse_improvement(&reply.response, &self.themes);
                let index = self.deck.current_index();
                let summary = summarize_patch(&patch);
                if let Some(slide) = self.deck.current_slide_mut() {
                    if let Some(title) = patch.title {
                        slide.title = title;
                    }
                    if let Some(content) = patch.content {
                        slide.content = content;
                    }
                    if let Some(theme) = patch.theme {
                        slide.theme = theme;
                    }
                    let title = slide.title.clone();
                    self.log.push(Role::Ai, summary, index, Some(title));
                }
            }
            AiOutcome::Generate(reply) => {
                if !reply.success {
                    self.log.system(format!(
                        "Deck generation failed: {}",
                        reply.error.unwrap_or_else(|| "unknown error".to_string())
                    ));
                    return;
                }
                let generated = parse::parse_deck(&reply.response, &self.themes);
                if generated.slides.is_empty() {
                    self.log.system("The model returned nothing usable; deck unchanged.");
                    return;
                }
                let theme = generated
                    .theme
                    .unwrap_or_else(|| crate::theme::DEFAULT_THEME.to_string());
                let slides: Vec<Slide> = generated
                    .slides
                    .into_iter()
                    .map(|g| {
                        let mut slide = Slide::new(0, g.title);
                        slide.content = g.content;
                        slide.notes = g.notes;
                        slide.theme = theme.clone();
                        slide
                    })
                    .collect();
                let count = slides.len();
                self.deck.replace_all(slides);
                self.log.push(
                    Role::Ai,
                    format!("Generated {count} slides with the {theme} theme"),
                    Some(0),
                    self.deck.current_slide().map(|s| s.title.clone()),
                );
            }
            AiOutcome::Chat(reply) => {
                if reply.success {
                    self.log.push(
                        Role::Ai,
                        reply.response,
                        self.deck.current_index(),
                        self.deck.current_slide().map(|s| s.title.clone()),
                    );
                } else {
                    self.log.system(format!(
                        "Chat failed: {}",
                        reply.error.unwrap_or_else(|| "unknown error".to_string())
                    ));
                }
            }
        }
    }

    fn improve_current(&mut self, ctx: &egui::Context) {
        let names = self.themes.names();
        let prepared = self.deck.current_slide().map(|slide| {
            (
                slide.title.is_empty() && slide.content.is_empty(),
                prompts::improve_slide(slide, &names),
                slide.title.clone(),
            )
        });
        match prepared {
            None => self.log.system("Select a slide before asking for an improvement."),
            Some((true, _, _)) => {
                self.log.system("The selected slide is empty; nothing to improve.");
            }
            Some((false, prompt, title)) => {
                let index = self.deck.current_index();
                self.log.push(
                    Role::User,
                    format!("Improve slide \"{title}\""),
                    index,
                    Some(title),
                );
                let model = self.selected_model.clone();
                self.spawn_ai(ctx, move |gateway| {
                    AiOutcome::Improve(gateway.chat(&prompt, &model))
                });
            }
        }
    }

    fn send_chat(&mut self, ctx: &egui::Context) {
        let message = self.chat_input.trim().to_string();
        self.chat_input.clear();
        if message.is_empty() {
            return;
        }
        self.log.push(
            Role::User,
            message.clone(),
            self.deck.current_index(),
            self.deck.current_slide().map(|s| s.title.clone()),
        );
        let model = self.selected_model.clone();
        self.spawn_ai(ctx, move |gateway| AiOutcome::Chat(gateway.chat(&message, &model)));
    }

    fn start_generation(&mut self, ctx: &egui::Context, answers: Answers) {
        let count = questionnaire::slide_count(&answers);
        let prompt = prompts::generate_deck(&answers, count, &self.themes.names());
        self.log.push(
            Role::User,
            format!("Generate a {count}-slide deck from the questionnaire"),
            None,
            None,
        );
        let model = self.selected_model.clone();
        self.spawn_ai(ctx, move |gateway| {
            AiOutcome::Generate(gateway.chat(&prompt, &model))
        });
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped: Vec<egui::DroppedFile> = ctx.input(|i| i.raw.dropped_files.clone());
        for file in dropped {
            let Some(path) = file.path else { continue };
            match std::fs::read_to_string(&path) {
                Ok(json) => match self.deck.load_json(&json) {
                    Ok(count) => {
                        self.log
                            .system(format!("Loaded {count} slides from {}", path.display()));
                    }
                    Err(err) => {
                        self.log
                            .system(format!("Could not load {}: {err}", path.display()));
                    }
                },
                Err(err) => {
                    self.log
                        .system(format!("Could not read {}: {err}", path.display()));
                }
            }
        }
    }

    fn connection_badge(&self) -> (egui::Color32, &'static str) {
        match self.gateway.mode() {
            BackendMode::Connected => (egui::Color32::from_rgb(0x5C, 0xDB, 0x95), "connected"),
            BackendMode::Offline => (egui::Color32::from_rgb(0xE8, 0xA8, 0x38), "offline"),
            BackendMode::Disabled => (egui::Color32::from_rgb(0x88, 0x88, 0x90), "disabled"),
        }
    }

    fn top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top-bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Pitch Perfect");
                ui.separator();
                let (color, label) = self.connection_badge();
                ui.colored_label(color, label);
                if ui.button("Test connection").clicked() {
                    let report = self.gateway.test_connection();
                    let mut line = format!(
                        "{} ({} models at {})",
                        report.message,
                        report.models,
                        report.endpoint.unwrap_or_default()
                    );
                    if let Some(err) = report.error {
                        line.push_str(&format!(": {err}"));
                    }
                    self.log.system(line);
                }
                ui.separator();
                ui.label("Model:");
                egui::ComboBox::from_id_salt("model-picker")
                    .selected_text(self.selected_model.clone())
                    .show_ui(ui, |ui| {
                        for model in &self.models {
                            ui.selectable_value(&mut self.selected_model, model.clone(), model);
                        }
                    });
                ui.checkbox(&mut self.show_log, "Session log");
            });
        });
    }

    fn slide_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("slide-list")
            .default_width(220.0)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if ui.button("Add").clicked() {
                        self.deck.add();
                    }
                    if ui.button("Duplicate").clicked() {
                        self.deck.duplicate_current();
                    }
                    if ui.button("Delete").clicked() {
                        self.deck.delete_current();
                    }
                });
                ui.separator();
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let current = self.deck.current_index();
                    let labels: Vec<String> = self
                        .deck
                        .slides()
                        .iter()
                        .enumerate()
                        .map(|(i, s)| {
                            if s.title.is_empty() {
                                format!("{}. (untitled)", i + 1)
                            } else {
                                format!("{}. {}", i + 1, s.title)
                            }
                        })
                        .collect();
                    for (i, label) in labels.iter().enumerate() {
                        if ui.selectable_label(current == Some(i), label).clicked() {
                            self.deck.select(i);
                        }
                    }
                });
            });
    }

    fn chat_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("ai-bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let busy = self.busy;
                if ui.add_enabled(!busy, egui::Button::new("Improve slide")).clicked() {
                    self.improve_current(ctx);
                }
                if ui
                    .add_enabled(!busy, egui::Button::new("Generate deck…"))
                    .clicked()
                {
                    self.questionnaire = Some(Questionnaire::new());
                    self.wizard_input.clear();
                }
                ui.separator();
                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.chat_input)
                        .hint_text("Ask the assistant…")
                        .desired_width(ui.available_width() - 90.0),
                );
                let submitted =
                    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if (ui.add_enabled(!busy, egui::Button::new("Send")).clicked() || submitted)
                    && !busy
                {
                    self.send_chat(ctx);
                }
                if busy {
                    ui.spinner();
                }
            });
        });
    }

    fn central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.deck.is_empty() {
                ui.centered_and_justified(|ui| {
                    ui.label("No slides. Add one from the left panel, or drop a deck file here.");
                });
                return;
            }

            let theme_names = self.themes.names();
            if let Some(slide) = self.deck.current_slide_mut() {
                ui.horizontal(|ui| {
                    ui.label("Title:");
                    ui.add(egui::TextEdit::singleline(&mut slide.title).desired_width(360.0));
                    ui.label("Theme:");
                    egui::ComboBox::from_id_salt("theme-picker")
                        .selected_text(slide.theme.clone())
                        .show_ui(ui, |ui| {
                            for name in &theme_names {
                                ui.selectable_value(&mut slide.theme, name.to_string(), *name);
                            }
                        });
                });
                ui.columns(2, |columns| {
                    columns[0].label("Content:");
                    columns[0].add(
                        egui::TextEdit::multiline(&mut slide.content)
                            .desired_rows(5)
                            .desired_width(f32::INFINITY),
                    );
                    columns[1].label("Notes:");
                    columns[1].add(
                        egui::TextEdit::multiline(&mut slide.notes)
                            .desired_rows(5)
                            .desired_width(f32::INFINITY),
                    );
                });
            }

            ui.separator();

            // 16:9 canvas preview of the selected slide
            let available = ui.available_size();
            let width = available
                .x
                .min(available.y * render::SLIDE_WIDTH / render::SLIDE_HEIGHT);
            let size = egui::vec2(width, width * render::SLIDE_HEIGHT / render::SLIDE_WIDTH);
            let (rect, _response) = ui.allocate_exact_size(size, egui::Sense::hover());
            if let Some(slide) = self.deck.current_slide() {
                render::render_slide(ui, slide, &self.themes, rect);
            }
        });
    }

    fn questionnaire_window(&mut self, ctx: &egui::Context) {
        let Some(wizard) = self.questionnaire.as_mut() else {
            return;
        };

        let mut open = true;
        let mut go_back = false;
        let mut advance = false;
        egui::Window::new("Deck questionnaire")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label(format!(
                    "Question {} of {}",
                    wizard.index() + 1,
                    wizard.total()
                ));
                ui.label(wizard.question().prompt);
                ui.add(
                    egui::TextEdit::multiline(&mut self.wizard_input)
                        .desired_rows(3)
                        .desired_width(360.0),
                );
                ui.horizontal(|ui| {
                    if wizard.index() > 0 && ui.button("Back").clicked() {
                        go_back = true;
                    }
                    let last = wizard.index() + 1 == wizard.total();
                    if ui.button(if last { "Generate" } else { "Next" }).clicked() {
                        advance = true;
                    }
                });
            });

        let mut completed: Option<Answers> = None;
        if go_back {
            wizard.back();
            self.wizard_input = wizard.current_answer().unwrap_or("").to_string();
        } else if advance {
            let answer = self.wizard_input.clone();
            match wizard.record_and_advance(&answer) {
                Step::Advanced => {
                    self.wizard_input = wizard.current_answer().unwrap_or("").to_string();
                }
                Step::Complete(answers) => completed = Some(answers),
            }
        }

        if !open || completed.is_some() {
            self.questionnaire = None;
            self.wizard_input.clear();
        }
        if let Some(answers) = completed {
            self.start_generation(ctx, answers);
        }
    }

    fn log_window(&mut self, ctx: &egui::Context) {
        if !self.show_log {
            return;
        }
        let mut open = self.show_log;
        egui::Window::new("Session log")
            .open(&mut open)
            .default_width(420.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .max_height(320.0)
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        if self.log.is_empty() {
                            ui.label("Nothing logged yet.");
                        }
                        for entry in self.log.entries() {
                            let slide = entry
                                .slide_title
                                .as_deref()
                                .map(|t| format!(" [{t}]"))
                                .unwrap_or_default();
                            ui.label(format!(
                                "{} {}{}: {}",
                                entry.at.format("%H:%M:%S"),
                                entry.role.label(),
                                slide,
                                entry.content
                            ));
                        }
                    });
            });
        self.show_log = open;
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_ai();
        self.handle_dropped_files(ctx);

        self.top_bar(ctx);
        self.slide_panel(ctx);
        self.chat_panel(ctx);
        self.central_panel(ctx);
        self.questionnaire_window(ctx);
        self.log_window(ctx);

        if self.busy {
            ctx.request_repaint_after(Duration::from_millis(200));
        }
    }
}

fn summarize_patch(patch: &parse::SlidePatch) -> String {
    if patch.is_empty() {
        return "No usable changes found in the reply; slide unchanged.".to_string();
    }
    let mut parts = Vec::new();
    if patch.title.is_some() {
        parts.push("title");
    }
    if patch.content.is_some() {
        parts.push("content");
    }
    if patch.theme.is_some() {
        parts.push("theme");
    }
    format!("Updated {}", parts.join(", "))
}

/// Load the deck (if a file was given) and start the editor.
pub fn run(file: Option<PathBuf>, windowed: bool, slide: Option<usize>) -> anyhow::Result<()> {
    let config = Config::load_or_default();

    let mut deck = Deck::starter();
    if let Some(path) = &file {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        deck.load_json(&json)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
    } else if let Some(theme) = config.default_theme() {
        if let Some(starter) = deck.current_slide_mut() {
            starter.theme = theme.to_string();
        }
    }
    if let Some(n) = slide {
        deck.select(n.saturating_sub(1));
    }

    let viewport = if windowed {
        egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_title("Pitch Perfect")
    } else {
        egui::ViewportBuilder::default()
            .with_maximized(true)
            .with_title("Pitch Perfect")
    };
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Pitch Perfect",
        options,
        Box::new(move |_cc| Ok(Box::new(EditorApp::new(&config, deck)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}
