//! Calculator form application.
//!
//! The form is a thin shell: widgets mutate a [`FormState`], the Calculate
//! button feeds a snapshot of it through the pure evaluator, and the result
//! line shows whatever came back. All failures end up as display text.

use egui::Context;
use simplecore::eval::{self, Operator};
use simplecore::repaint::RepaintController;
use simplecore::theme::{menu_bar, FlatTheme, Palette};

/// Current contents of the form widgets.
///
/// Owned by the UI layer; the evaluator only ever sees it by reference.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub first: String,
    pub second: String,
    pub operator: Operator,
}

/// Run one calculation over a form snapshot and render the outcome as
/// display text. Pure; this is the whole Calculate action minus the UI.
fn compute(form: &FormState) -> String {
    match eval::evaluate(&form.first, form.operator.symbol(), &form.second) {
        Ok(result) => result.to_string(),
        Err(err) => err.to_string(),
    }
}

pub struct CalcApp {
    form: FormState,
    /// Text after "Result: "; empty until the first calculation.
    result: String,
    show_about: bool,
    repaint: RepaintController,
}

impl CalcApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            form: FormState::default(),
            result: String::new(),
            show_about: false,
            repaint: RepaintController::new(),
        }
    }

    fn calculate(&mut self) {
        self.result = compute(&self.form);
        self.repaint.mark_needs_repaint();
    }

    fn render_form(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("calc_form")
            .num_columns(2)
            .spacing([8.0, 8.0])
            .show(ui, |ui| {
                ui.label("first number");
                ui.add(egui::TextEdit::singleline(&mut self.form.first).desired_width(140.0));
                ui.end_row();

                ui.label("second number");
                ui.add(egui::TextEdit::singleline(&mut self.form.second).desired_width(140.0));
                ui.end_row();

                ui.label("operation");
                egui::ComboBox::from_id_source("operator")
                    .selected_text(self.form.operator.symbol())
                    .width(60.0)
                    .show_ui(ui, |ui| {
                        for op in Operator::ALL {
                            ui.selectable_value(&mut self.form.operator, op, op.symbol());
                        }
                    });
                ui.end_row();
            });

        ui.add_space(8.0);

        ui.vertical_centered(|ui| {
            if ui
                .add_sized([120.0, 32.0], egui::Button::new("Calculate"))
                .clicked()
            {
                self.calculate();
            }
        });
    }

    fn render_result(&self, ui: &mut egui::Ui) {
        FlatTheme::window_frame()
            .inner_margin(egui::Margin::symmetric(8.0, 6.0))
            .show(ui, |ui| {
                ui.set_min_height(32.0);
                ui.with_layout(egui::Layout::left_to_right(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(format!("Result: {}", self.result))
                            .font(egui::FontId::proportional(18.0))
                            .strong(),
                    );
                });
            });
    }

    fn render_about(&mut self, ctx: &Context) {
        egui::Window::new("about calculator")
            .collapsible(false)
            .resizable(false)
            .default_width(220.0)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading("calculator");
                    ui.label("version 0.1.0");
                    ui.add_space(4.0);
                    ui.label("two numbers, four operations");
                });
                ui.add_space(4.0);
                ui.separator();
                ui.add_space(2.0);
                ui.label("pick an operation, press Calculate.");
                ui.label("division by zero is reported, not computed.");
                ui.add_space(4.0);
                ui.vertical_centered(|ui| {
                    if ui.button("ok").clicked() {
                        self.show_about = false;
                    }
                });
            });
    }
}

impl eframe::App for CalcApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.repaint.begin_frame(ctx);

        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            menu_bar(ui, |ui| {
                ui.menu_button("help", |ui| {
                    if ui.button("about").clicked() {
                        self.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });

        egui::CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(Palette::WHITE)
                    .inner_margin(egui::Margin::same(12.0)),
            )
            .show(ctx, |ui| {
                self.render_form(ui);
                ui.add_space(12.0);
                self.render_result(ui);
            });

        if self.show_about {
            self.render_about(ctx);
        }

        self.repaint.end_frame(ctx);
    }
}
