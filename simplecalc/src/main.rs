//! simplecalc - a four-function calculator
//!
//! Two operands, one operator, one result.

mod app;

use app::CalcApp;
use eframe::NativeOptions;

fn main() -> eframe::Result<()> {
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([320.0, 260.0])
            .with_resizable(false)
            .with_title("calculator"),
        ..Default::default()
    };

    eframe::run_native(
        "calculator",
        options,
        Box::new(|cc| {
            simplecore::FlatTheme::default().apply(&cc.egui_ctx);
            Box::new(CalcApp::new(cc))
        }),
    )
}
