#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui desktop entry point: a sidebar shell with one page per
//! travel helper.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use clap::Parser;
use eframe::{egui, App as EframeApp, Frame};
use image::GenericImageView;
use rfd::FileDialog;
use tourist_converter::{
    app::App,
    config,
    conversion::{format_result, CURRENCY},
    country::{filter_countries, CulturalProfile, Extracurriculars, LookupError},
    expense::format_amount,
    logging,
    navigation::Page,
    translate::{translate_or_error_text, LANGUAGES},
};

const ACCENT: egui::Color32 = egui::Color32::from_rgb(0xF7, 0xBF, 0xBF);
const SIDEBAR_FILL: egui::Color32 = egui::Color32::from_rgb(0xFD, 0xF1, 0xF1);
const CARD_FILL: egui::Color32 = egui::Color32::from_rgb(0xFD, 0xF7, 0xE3);

#[derive(Debug, Parser)]
#[command(name = "tourist_converter", version)]
struct Args {
    /// Configuration file; created with defaults when missing.
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let cfg = config::load_or_default(&args.config)?;
    logging::init_logging(&cfg.logging);
    let app = App::from_config(cfg, &args.config)?;

    let mut viewport = egui::ViewportBuilder::default()
        .with_title("Tourist Converter")
        .with_inner_size(egui::vec2(980.0, 680.0));
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    eframe::run_native(
        "Tourist Converter",
        options,
        Box::new(move |_cc| Box::new(GuiApp::new(app))),
    )?;
    Ok(())
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../assets/icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let (width, height) = img.dimensions();
    Some(egui::IconData {
        rgba: img.to_rgba8().into_raw(),
        width,
        height,
    })
}

/// State of a background request.
enum Pending<T> {
    Idle,
    Loading(Receiver<T>),
    Done(T),
}

impl<T> Pending<T> {
    /// Moves a finished background result into `Done`.
    fn poll(&mut self) {
        if let Pending::Loading(rx) = self {
            match rx.try_recv() {
                Ok(value) => *self = Pending::Done(value),
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Disconnected) => *self = Pending::Idle,
            }
        }
    }

    fn is_loading(&self) -> bool {
        matches!(self, Pending::Loading(_))
    }
}

/// Runs `job` on a worker thread and repaints when it finishes.
fn spawn_job<T, F>(ctx: &egui::Context, job: F) -> Pending<T>
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    let (tx, rx) = mpsc::channel();
    let ctx = ctx.clone();
    thread::spawn(move || {
        let _ = tx.send(job());
        ctx.request_repaint();
    });
    Pending::Loading(rx)
}

struct GuiApp {
    app: App,
    status: Option<String>,
    // conversion
    conv_category: String,
    conv_from: String,
    conv_to: String,
    conv_input: String,
    // translator
    tr_input: String,
    tr_target: String,
    tr_output: Pending<String>,
    // expense tracker
    exp_amount: String,
    exp_description: String,
    exp_error: Option<String>,
    // country pages, shared search box
    country_search: String,
    selected_country: Option<String>,
    cultural: Pending<Result<CulturalProfile, LookupError>>,
    activities: Pending<Result<Extracurriculars, LookupError>>,
}

impl GuiApp {
    fn new(app: App) -> Self {
        let category = app.default_category();
        let (from, to) = app
            .engine
            .default_pair(&category)
            .map(|(f, t)| (f.to_string(), t.to_string()))
            .unwrap_or_default();
        let tr_target = app.config.translation.default_target.clone();
        Self {
            app,
            status: None,
            conv_category: category,
            conv_from: from,
            conv_to: to,
            conv_input: String::new(),
            tr_input: String::new(),
            tr_target,
            tr_output: Pending::Idle,
            exp_amount: String::new(),
            exp_description: String::new(),
            exp_error: None,
            country_search: String::new(),
            selected_country: None,
            cultural: Pending::Idle,
            activities: Pending::Idle,
        }
    }

    /// Resets the unit selection to the category's first two units.
    fn select_category(&mut self, category: &str) {
        if let Ok((from, to)) = self.app.engine.default_pair(category) {
            self.conv_from = from.to_string();
            self.conv_to = to.to_string();
            self.conv_category = category.to_string();
        }
    }

    /// Live result for the conversion page; empty while the input is not a
    /// number.
    fn conversion_output(&self) -> String {
        let Ok(value) = self.conv_input.trim().parse::<f64>() else {
            return String::new();
        };
        match self
            .app
            .engine
            .convert(&self.conv_category, &self.conv_from, &self.conv_to, value)
        {
            Ok(result) => format_result(result),
            Err(err) => err.to_string(),
        }
    }

    fn import_rates(&mut self) {
        let Some(path) = FileDialog::new().add_filter("TOML", &["toml"]).pick_file() else {
            return;
        };
        let outcome = config::load_rate_table(&path)
            .map_err(|e| e.to_string())
            .and_then(|rates| self.app.replace_rates(rates).map_err(|e| e.to_string()));
        self.status = Some(match outcome {
            Ok(()) => {
                // the currency list may have changed under the current selection
                if self.conv_category == CURRENCY {
                    let category = self.conv_category.clone();
                    self.select_category(&category);
                }
                format!("Exchange rates loaded from {}", path.display())
            }
            Err(e) => format!("Could not load rates: {e}"),
        });
    }

    fn save_config(&mut self) {
        self.status = Some(match self.app.config.save(&self.app.config_path) {
            Ok(()) => "Settings saved.".to_string(),
            Err(e) => format!("Save error: {e}"),
        });
    }

    fn ui_nav(&mut self, ui: &mut egui::Ui) {
        ui.add_space(8.0);
        for page in Page::ALL {
            let selected = self.app.navigator.current() == page;
            let button = egui::Button::new(format!("★  {}", page.title()))
                .fill(if selected {
                    ACCENT
                } else {
                    ui.visuals().extreme_bg_color
                })
                .min_size(egui::vec2(ui.available_width(), 32.0));
            if ui.add(button).clicked() {
                self.app.navigator.show(page);
            }
            ui.add_space(4.0);
        }
    }

    fn ui_home(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.heading("Welcome to Tourist Converter");
            ui.add_space(8.0);
            ui.label("Convert currencies and units, translate phrases, keep track of");
            ui.label("what you spend, and read up on the country you are visiting.");
        });
        ui.add_space(16.0);
        ui.horizontal_wrapped(|ui| {
            for page in Page::ALL.into_iter().filter(|p| *p != Page::Home) {
                if ui.button(page.title()).clicked() {
                    self.app.navigator.show(page);
                }
            }
        });
    }

    fn ui_conversion(&mut self, ui: &mut egui::Ui) {
        ui.heading("Conversion Tool");
        ui.add_space(8.0);
        let categories: Vec<String> = self
            .app
            .engine
            .category_names()
            .into_iter()
            .map(String::from)
            .collect();
        let units: Vec<String> = self
            .app
            .engine
            .units_for(&self.conv_category)
            .unwrap_or_default()
            .into_iter()
            .map(String::from)
            .collect();
        let mut picked_category = self.conv_category.clone();

        egui::Frame::group(ui.style()).show(ui, |ui| {
            egui::Grid::new("conv_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label("Category");
                    egui::ComboBox::from_id_source("conv_category")
                        .selected_text(&picked_category)
                        .show_ui(ui, |ui| {
                            for name in &categories {
                                ui.selectable_value(&mut picked_category, name.clone(), name);
                            }
                        });
                    ui.end_row();

                    ui.label("From");
                    ui.horizontal(|ui| {
                        ui.add(
                            egui::TextEdit::singleline(&mut self.conv_input)
                                .hint_text("Enter a value")
                                .desired_width(160.0),
                        );
                        unit_combo(ui, "conv_from", &mut self.conv_from, &units);
                    });
                    ui.end_row();

                    ui.label("To");
                    ui.horizontal(|ui| {
                        let mut output = self.conversion_output();
                        ui.add(
                            egui::TextEdit::singleline(&mut output)
                                .interactive(false)
                                .desired_width(160.0),
                        );
                        unit_combo(ui, "conv_to", &mut self.conv_to, &units);
                    });
                    ui.end_row();
                });
        });

        if picked_category != self.conv_category {
            self.select_category(&picked_category);
        }

        if self.conv_category == CURRENCY {
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.label(format!(
                    "Rates are static, relative to {}.",
                    self.app.config.currency.base
                ));
                if ui.button("Load rates…").clicked() {
                    self.import_rates();
                }
                if ui.button("Save as default").clicked() {
                    self.save_config();
                }
            });
        }
    }

    fn ui_translate(&mut self, ui: &mut egui::Ui) {
        ui.heading("Translator");
        ui.add_space(8.0);
        self.tr_output.poll();
        ui.columns(2, |cols| {
            cols[0].add(
                egui::TextEdit::multiline(&mut self.tr_input)
                    .hint_text("Enter text to translate")
                    .desired_rows(6),
            );
            let target_name = LANGUAGES
                .iter()
                .find(|(code, _)| *code == self.tr_target)
                .map(|(_, name)| *name)
                .unwrap_or("Select language");
            egui::ComboBox::from_id_source("tr_target")
                .selected_text(target_name)
                .show_ui(&mut cols[0], |ui| {
                    for (code, name) in LANGUAGES {
                        ui.selectable_value(&mut self.tr_target, code.to_string(), *name);
                    }
                });
            let busy = self.tr_output.is_loading();
            if cols[0]
                .add_enabled(!busy, egui::Button::new("Translate"))
                .clicked()
            {
                let translator = self.app.translator.clone();
                let text = self.tr_input.trim().to_string();
                let target = self.tr_target.clone();
                self.tr_output = spawn_job(cols[0].ctx(), move || {
                    translate_or_error_text(translator.as_ref(), &text, &target)
                });
            }

            egui::Frame::group(cols[1].style()).show(&mut cols[1], |ui| {
                ui.set_min_height(150.0);
                match &self.tr_output {
                    Pending::Idle => {
                        ui.weak("Translation will appear here...");
                    }
                    Pending::Loading(_) => {
                        ui.add(egui::Spinner::new());
                    }
                    Pending::Done(text) => {
                        ui.label(text);
                    }
                }
            });
        });
    }

    fn ui_expenses(&mut self, ui: &mut egui::Ui) {
        ui.heading("Expense Tracker");
        ui.add_space(8.0);
        ui.add(egui::TextEdit::singleline(&mut self.exp_amount).hint_text("Amount"));
        ui.add(egui::TextEdit::singleline(&mut self.exp_description).hint_text("Description"));
        if ui.button("Add Expense").clicked() {
            match self
                .app
                .ledger
                .add_from_input(&self.exp_amount, &self.exp_description)
            {
                Ok(_) => {
                    self.exp_amount.clear();
                    self.exp_description.clear();
                    self.exp_error = None;
                }
                Err(e) => self.exp_error = Some(e.to_string()),
            }
        }
        if let Some(err) = &self.exp_error {
            ui.colored_label(egui::Color32::RED, err);
        }
        ui.add_space(12.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.strong("Expenses");
            for expense in self.app.ledger.entries() {
                ui.horizontal(|ui| {
                    ui.label(&expense.description);
                    ui.weak(format!("Amount: {}", format_amount(expense.amount)));
                });
                ui.separator();
            }
            ui.strong(format!(
                "Total Spent: {}",
                format_amount(self.app.ledger.total())
            ));
        });
    }

    /// Search box plus country picker shared by both lookup pages. Returns
    /// the newly chosen country, if any.
    fn country_picker(&mut self, ui: &mut egui::Ui) -> Option<String> {
        ui.add(egui::TextEdit::singleline(&mut self.country_search).hint_text("Search for a country"));
        let mut chosen = None;
        let current = self
            .selected_country
            .clone()
            .unwrap_or_else(|| "Select a country".to_string());
        egui::ComboBox::from_id_source("country_pick")
            .selected_text(current)
            .width(240.0)
            .show_ui(ui, |ui| {
                for name in filter_countries(&self.country_search) {
                    let selected = self.selected_country.as_deref() == Some(name);
                    if ui.selectable_label(selected, name).clicked() && !selected {
                        chosen = Some(name.to_string());
                    }
                }
            });
        if let Some(name) = &chosen {
            self.selected_country = Some(name.clone());
        }
        chosen
    }

    fn ui_cultural_recs(&mut self, ui: &mut egui::Ui) {
        ui.heading("Cultural Recommendations");
        ui.add_space(8.0);
        self.cultural.poll();
        if let Some(country) = self.country_picker(ui) {
            let directory = self.app.directory.clone();
            self.cultural = spawn_job(ui.ctx(), move || directory.cultural_profile(&country));
        }
        match &self.cultural {
            Pending::Idle => {}
            Pending::Loading(_) => {
                ui.add(egui::Spinner::new());
            }
            Pending::Done(Err(err)) => lookup_error_label(ui, err),
            Pending::Done(Ok(profile)) => {
                if let Some(phrases) = &profile.key_phrases {
                    card(ui, "Key Phrases", |ui| {
                        for (phrase, local) in phrases {
                            ui.horizontal_wrapped(|ui| {
                                ui.strong(format!("{phrase}:"));
                                ui.label(local);
                            });
                        }
                    });
                }
                if let Some(norms) = &profile.cultural_norms {
                    card(ui, "Cultural Norms", |ui| {
                        ui.label(norms);
                    });
                }
            }
        }
    }

    fn ui_extracurriculars(&mut self, ui: &mut egui::Ui) {
        ui.heading("Extracurriculars");
        ui.add_space(8.0);
        self.activities.poll();
        if let Some(country) = self.country_picker(ui) {
            let directory = self.app.directory.clone();
            self.activities = spawn_job(ui.ctx(), move || directory.extracurriculars(&country));
        }
        match &self.activities {
            Pending::Idle => {}
            Pending::Loading(_) => {
                ui.add(egui::Spinner::new());
            }
            Pending::Done(Err(err)) => lookup_error_label(ui, err),
            Pending::Done(Ok(activities)) => {
                for (title, content) in activities.sections() {
                    card(ui, title, |ui| {
                        ui.label(content);
                    });
                }
            }
        }
    }
}

impl EframeApp for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        egui::TopBottomPanel::top("top_bar")
            .frame(egui::Frame::default().fill(ACCENT).inner_margin(10.0))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if ui.button("☰").clicked() {
                        self.app.navigator.toggle_menu();
                    }
                    ui.heading("Tourist Converter");
                    if let Some(status) = &self.status {
                        ui.separator();
                        ui.label(status);
                    }
                });
            });

        if self.app.navigator.menu_open() {
            egui::SidePanel::left("nav")
                .frame(egui::Frame::default().fill(SIDEBAR_FILL).inner_margin(8.0))
                .resizable(false)
                .exact_width(220.0)
                .show(ctx, |ui| self.ui_nav(ui));
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| match self.app.navigator.current() {
                    Page::Home => self.ui_home(ui),
                    Page::Conversion => self.ui_conversion(ui),
                    Page::Translate => self.ui_translate(ui),
                    Page::ExpenseTracker => self.ui_expenses(ui),
                    Page::Extracurriculars => self.ui_extracurriculars(ui),
                    Page::CulturalRecs => self.ui_cultural_recs(ui),
                });
        });
    }
}

fn unit_combo(ui: &mut egui::Ui, id: &str, value: &mut String, options: &[String]) {
    egui::ComboBox::from_id_source(id)
        .selected_text(value.as_str())
        .show_ui(ui, |ui| {
            for unit in options {
                ui.selectable_value(value, unit.clone(), unit);
            }
        });
}

fn card(ui: &mut egui::Ui, title: &str, body: impl FnOnce(&mut egui::Ui)) {
    ui.add_space(12.0);
    egui::Frame::group(ui.style())
        .fill(CARD_FILL)
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.heading(title);
            ui.add_space(4.0);
            body(ui);
        });
}

fn lookup_error_label(ui: &mut egui::Ui, err: &LookupError) {
    let text = match err {
        LookupError::NotFound(country) => format!("No data available for {country}."),
        other => format!("Could not load country data: {other}"),
    };
    ui.colored_label(egui::Color32::DARK_RED, text);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tourist_converter::config::Config;
    use tourist_converter::conversion::ConversionEngine;
    use tourist_converter::country::InMemoryDirectory;
    use tourist_converter::translate::{TranslateError, Translator};

    struct Echo;

    impl Translator for Echo {
        fn translate(&self, text: &str, _target: &str) -> Result<String, TranslateError> {
            Ok(text.to_string())
        }
    }

    fn gui() -> GuiApp {
        let app = App::with_services(
            Config::default(),
            Path::new("config.toml"),
            ConversionEngine::default(),
            Arc::new(Echo),
            Arc::new(InMemoryDirectory::new()),
        );
        GuiApp::new(app)
    }

    #[test]
    fn opens_on_default_category_pair() {
        let gui = gui();
        assert_eq!(gui.conv_category, "Currency");
        assert_eq!((gui.conv_from.as_str(), gui.conv_to.as_str()), ("USD", "EUR"));
        assert_eq!(gui.tr_target, "es");
    }

    #[test]
    fn switching_category_resets_units() {
        let mut gui = gui();
        gui.select_category("Volume");
        assert_eq!(gui.conv_category, "Volume");
        assert_eq!((gui.conv_from.as_str(), gui.conv_to.as_str()), ("L", "mL"));
        gui.conv_input = "1".into();
        assert_eq!(gui.conversion_output(), "1000.0000");

        gui.select_category("Nope");
        assert_eq!(gui.conv_category, "Volume");
    }

    #[test]
    fn non_numeric_input_shows_nothing() {
        let mut gui = gui();
        gui.conv_input = "".into();
        assert_eq!(gui.conversion_output(), "");
        gui.conv_input = "abc".into();
        assert_eq!(gui.conversion_output(), "");
    }
}
