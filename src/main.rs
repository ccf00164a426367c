mod history;
mod shapes;
mod ui;

use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 820.0])
            .with_title("Universeller Flächenrechner"),
        ..Default::default()
    };

    eframe::run_native(
        "Flächenrechner",
        options,
        Box::new(|cc| {
            // Größere Schrift global einstellen
            let mut style = (*cc.egui_ctx.style()).clone();
            style.text_styles = [
                (egui::TextStyle::Heading, egui::FontId::proportional(30.0)),
                (egui::TextStyle::Body, egui::FontId::proportional(19.0)),
                (egui::TextStyle::Monospace, egui::FontId::proportional(17.0)),
                (egui::TextStyle::Button, egui::FontId::proportional(21.0)),
                (egui::TextStyle::Small, egui::FontId::proportional(15.0)),
            ]
            .into();

            // Größere Buttons und Inputs
            style.spacing.button_padding = egui::vec2(12.0, 8.0);
            style.spacing.item_spacing = egui::vec2(12.0, 10.0);
            style.spacing.interact_size = egui::vec2(50.0, 30.0);

            cc.egui_ctx.set_style(style);

            // Heller Skin als Startzustand
            cc.egui_ctx.set_visuals(egui::Visuals::light());

            Ok(Box::new(ui::RechnerApp::default()))
        }),
    )
}
