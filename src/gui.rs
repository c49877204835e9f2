use eframe::egui;
use log::debug;

use passforge::clipboard;
use passforge::error::{PassforgeError, Result};
use passforge::form::{Dialog, FormState};
use passforge::types::{Context, OutputMode};

pub fn run(ctx: Context) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([560.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Password Generator",
        options,
        Box::new(move |_cc| Ok(Box::new(FormApp::new(ctx)))),
    )
    .map_err(|e| PassforgeError::gui(e.to_string()))
}

struct FormApp {
    ctx: Context,
    form: FormState,
    dialog: Option<Dialog>,
}

impl FormApp {
    fn new(ctx: Context) -> Self {
        Self {
            ctx,
            form: FormState::default(),
            dialog: None,
        }
    }

    fn fields(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("fields")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                ui.label("Input string (master password + site):");
                ui.add(egui::TextEdit::singleline(&mut self.form.input).desired_width(f32::INFINITY));
                ui.end_row();

                ui.label("Base64 truncate length:");
                ui.add(egui::TextEdit::singleline(&mut self.form.limit).desired_width(80.0));
                ui.end_row();

                ui.label("Additional special symbol(s):");
                ui.add(egui::TextEdit::singleline(&mut self.form.symbol).desired_width(80.0));
                ui.end_row();

                ui.label("Output mode:");
                egui::ComboBox::from_id_salt("mode")
                    .selected_text(self.form.mode.name())
                    .show_ui(ui, |ui| {
                        for mode in OutputMode::CHOICES {
                            let response = ui.selectable_value(&mut self.form.mode, mode, mode.name());
                            if let OutputMode::Single(kind) = mode {
                                response.on_hover_text(self.ctx.registry.codec(kind).meta().description);
                            }
                        }
                    });
                ui.end_row();
            });
        ui.checkbox(&mut self.form.single_symbol, "Append symbol to the recommendation once");
    }

    fn result_area(&mut self, ui: &mut egui::Ui) {
        egui::ScrollArea::vertical()
            .max_height(280.0)
            .show(ui, |ui| {
                let mut shown = self.form.output();
                ui.add(
                    egui::TextEdit::multiline(&mut shown)
                        .desired_rows(15)
                        .desired_width(f32::INFINITY)
                        .font(egui::TextStyle::Monospace),
                );
            });
    }

    fn show_dialog(&mut self, ctx: &egui::Context) {
        let Some(dialog) = &self.dialog else {
            return;
        };
        let mut dismissed = false;
        egui::Window::new(dialog.title())
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(&dialog.message);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
            });
        if dismissed {
            self.dialog = None;
        }
    }
}

impl eframe::App for FormApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let idle = self.dialog.is_none();
            ui.add_enabled_ui(idle, |ui| {
                self.fields(ui);
                ui.add_space(6.0);
                ui.vertical_centered(|ui| {
                    if ui.button("Generate Password").clicked() {
                        debug!("generate pressed");
                        self.dialog = self.form.generate(&self.ctx);
                    }
                });
                ui.add_space(6.0);
                self.result_area(ui);
                ui.add_space(6.0);
                ui.vertical_centered(|ui| {
                    if ui.button("Copy Result").clicked() {
                        self.dialog = Some(self.form.copy(clipboard::system_clipboard));
                    }
                });
            });
        });
        self.show_dialog(ctx);
    }
}
