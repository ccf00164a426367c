use crate::history::HistoryLog;
use crate::shapes::utils::format_area_cm2;
use crate::shapes::*;
use eframe::egui;
use egui::{Color32, Pos2, Stroke, Vec2};

/// Die drei wählbaren Farbschemata ("Skins")
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Skin {
    Hell,
    Dunkel,
    Beige,
}

impl Skin {
    pub const ALL: [Skin; 3] = [Skin::Hell, Skin::Dunkel, Skin::Beige];

    pub fn label(&self) -> &'static str {
        match self {
            Skin::Hell => "Hell",
            Skin::Dunkel => "Dunkel",
            Skin::Beige => "Beige",
        }
    }

    fn apply(&self, ctx: &egui::Context) {
        match self {
            Skin::Hell => ctx.set_visuals(egui::Visuals::light()),
            Skin::Dunkel => ctx.set_visuals(egui::Visuals::dark()),
            Skin::Beige => {
                let mut visuals = egui::Visuals::light();
                visuals.panel_fill = Color32::from_rgb(245, 245, 220);
                visuals.window_fill = Color32::from_rgb(255, 248, 220);
                visuals.extreme_bg_color = Color32::from_rgb(255, 252, 235);
                ctx.set_visuals(visuals);
            }
        }
    }
}

pub struct RechnerApp {
    shape_kind: ShapeKind,
    unit: Unit,

    // Eingabefelder
    input_side: String,
    input_length: String,
    input_width: String,
    input_side_a: String,
    input_side_b: String,
    input_side_c: String,
    input_diameter: String,

    // Letztes Ergebnis
    result: Option<(ShapeInput, AreaResult)>,
    error_message: Option<String>,

    history: HistoryLog,

    // UI State
    skin: Skin,
    show_history: bool,
    show_help: bool,
}

impl Default for RechnerApp {
    fn default() -> Self {
        Self {
            shape_kind: ShapeKind::Square,
            unit: Unit::Centimeter,
            input_side: String::new(),
            input_length: String::new(),
            input_width: String::new(),
            input_side_a: String::new(),
            input_side_b: String::new(),
            input_side_c: String::new(),
            input_diameter: String::new(),
            result: None,
            error_message: None,
            history: HistoryLog::new(),
            skin: Skin::Hell,
            show_history: false,
            show_help: false,
        }
    }
}

// ========== HILFSFUNKTIONEN: PARSEN UND ERGEBNISBLOCK ==========

/// Akzeptiert Komma oder Punkt als Dezimaltrennzeichen
fn parse_field(name: &str, raw: &str) -> Result<f64, String> {
    raw.trim().replace(',', ".").parse::<f64>().map_err(|_| {
        format!(
            "❌ Bitte eine gültige Zahl für \"{}\" eingeben.\n\n\
            Eingegeben: \"{}\"",
            name, raw
        )
    })
}

/// Baut den Textblock für Ergebnisanzeige und Verlauf
fn format_result_block(input: &ShapeInput, result: &AreaResult) -> String {
    let line = "=".repeat(60);
    let mut block = String::new();

    block.push_str(&line);
    block.push_str("\n📊 Berechnungsergebnis\n");
    block.push_str(&line);
    block.push_str("\n\n");
    block.push_str(&format!("📐 Form: {}\n", input.kind().label()));
    block.push_str(&format!("📏 Einheit: {}\n\n", input.unit().suffix()));
    block.push_str("📋 Eingabewerte:\n");

    for (label, value) in &result.labeled_fields {
        block.push_str(&format!("   • {}: {}\n", label, value));
    }

    block.push_str(&format!(
        "\n✅ Fläche: {}\n",
        format_area_cm2(result.area_cm2)
    ));
    block.push_str(&line);

    block
}

impl eframe::App for RechnerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Linkes Panel für Eingaben mit Scrollbar
        egui::SidePanel::left("input_panel")
            .min_width(380.0)
            .max_width(420.0)
            .resizable(true)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false; 2])
                    .show(ui, |ui| {
                        ui.heading("📐 Flächenrechner");
                        ui.separator();

                        // === SKIN-AUSWAHL ===
                        ui.horizontal(|ui| {
                            ui.label("🎨 Skin:");
                            egui::ComboBox::from_id_source("skin_combo")
                                .selected_text(self.skin.label())
                                .show_ui(ui, |ui| {
                                    for skin in Skin::ALL {
                                        if ui
                                            .selectable_value(&mut self.skin, skin, skin.label())
                                            .changed()
                                        {
                                            self.skin.apply(ctx);
                                        }
                                    }
                                });
                        });

                        ui.add_space(5.0);

                        // === FORM-AUSWAHL ===
                        egui::CollapsingHeader::new("🔲 Form wählen")
                            .default_open(true)
                            .show(ui, |ui| {
                                ui.add_space(3.0);
                                for kind in ShapeKind::ALL {
                                    ui.radio_value(&mut self.shape_kind, kind, kind.label());
                                }
                            });

                        ui.add_space(10.0);

                        // === EINHEIT ===
                        egui::CollapsingHeader::new("📏 Einheit wählen")
                            .default_open(true)
                            .show(ui, |ui| {
                                ui.add_space(3.0);
                                ui.radio_value(&mut self.unit, Unit::Centimeter, "Zentimeter (cm)");
                                ui.radio_value(&mut self.unit, Unit::Inch, "Zoll (inch)");
                            });

                        ui.add_space(10.0);

                        // === MASS-EINGABE (abhängig von der gewählten Form) ===
                        let header = format!("✏️ Maße (in {})", self.unit.suffix());
                        egui::CollapsingHeader::new(header)
                            .default_open(true)
                            .show(ui, |ui| {
                                ui.add_space(3.0);
                                match self.shape_kind {
                                    ShapeKind::Square => {
                                        ui.horizontal(|ui| {
                                            ui.label("Seitenlänge:");
                                            ui.add(
                                                egui::TextEdit::singleline(&mut self.input_side)
                                                    .desired_width(120.0),
                                            );
                                        });
                                    }
                                    ShapeKind::Rectangle => {
                                        ui.horizontal(|ui| {
                                            ui.label("Länge:");
                                            ui.add(
                                                egui::TextEdit::singleline(&mut self.input_length)
                                                    .desired_width(120.0),
                                            );
                                        });
                                        ui.horizontal(|ui| {
                                            ui.label("Breite:");
                                            ui.add(
                                                egui::TextEdit::singleline(&mut self.input_width)
                                                    .desired_width(120.0),
                                            );
                                        });
                                    }
                                    ShapeKind::Triangle => {
                                        ui.horizontal(|ui| {
                                            ui.label("Seite a:");
                                            ui.add(
                                                egui::TextEdit::singleline(&mut self.input_side_a)
                                                    .desired_width(120.0),
                                            );
                                        });
                                        ui.horizontal(|ui| {
                                            ui.label("Seite b:");
                                            ui.add(
                                                egui::TextEdit::singleline(&mut self.input_side_b)
                                                    .desired_width(120.0),
                                            );
                                        });
                                        ui.horizontal(|ui| {
                                            ui.label("Seite c:");
                                            ui.add(
                                                egui::TextEdit::singleline(&mut self.input_side_c)
                                                    .desired_width(120.0),
                                            );
                                        });
                                    }
                                    ShapeKind::Circle => {
                                        ui.horizontal(|ui| {
                                            ui.label("Durchmesser:");
                                            ui.add(
                                                egui::TextEdit::singleline(
                                                    &mut self.input_diameter,
                                                )
                                                .desired_width(120.0),
                                            );
                                        });
                                    }
                                }
                            });

                        ui.add_space(15.0);

                        // Berechnen-Button
                        let calc_button = egui::Button::new(
                            egui::RichText::new("🧮 Fläche berechnen").size(24.0),
                        )
                        .min_size(egui::vec2(250.0, 45.0))
                        .fill(Color32::from_rgb(50, 120, 200));

                        if ui.add(calc_button).clicked() {
                            self.calculate_area();
                        }

                        // === ERGEBNIS SECTION ===
                        if let Some((input, result)) = self.result.clone() {
                            ui.add_space(20.0);
                            ui.separator();

                            egui::CollapsingHeader::new("📊 Ergebnis")
                                .default_open(true)
                                .show(ui, |ui| {
                                    egui::ScrollArea::vertical()
                                        .max_height(250.0)
                                        .show(ui, |ui| {
                                            ui.label(format!(
                                                "Form: {} ({})",
                                                input.kind().label(),
                                                input.unit().suffix()
                                            ));
                                            ui.add_space(8.0);

                                            ui.group(|ui| {
                                                ui.label(
                                                    egui::RichText::new("Eingabewerte:").strong(),
                                                );
                                                for (label, value) in &result.labeled_fields {
                                                    ui.label(format!("  {}: {}", label, value));
                                                }
                                            });

                                            ui.add_space(8.0);
                                            ui.label(
                                                egui::RichText::new(format!(
                                                    "✅ Fläche: {}",
                                                    format_area_cm2(result.area_cm2)
                                                ))
                                                .strong()
                                                .color(Color32::from_rgb(0, 120, 0)),
                                            );
                                        });
                                });
                        }

                        // === AKTIONEN ===
                        ui.add_space(20.0);
                        ui.separator();

                        if ui.button("📋 Verlauf anzeigen").clicked() {
                            self.show_history = !self.show_history;
                        }

                        ui.add_space(10.0);
                        if ui.button("🗑️ Ergebnis löschen").clicked() {
                            // Nur die Anzeige, der Verlauf bleibt erhalten
                            self.result = None;
                        }

                        ui.add_space(10.0);
                        if ui.button("❓ Hilfe").clicked() {
                            self.show_help = !self.show_help;
                        }

                        ui.add_space(20.0);
                        ui.separator();

                        ui.add_space(10.0);
                        let close_button = egui::Button::new(
                            egui::RichText::new("❌ App schließen")
                                .size(24.0)
                                .color(Color32::WHITE),
                        )
                        .fill(Color32::from_rgb(180, 40, 40))
                        .min_size(egui::vec2(200.0, 50.0));

                        if ui.add(close_button).clicked() {
                            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                        }
                    });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.result.is_some() {
                self.draw_shape(ui);
            } else {
                ui.vertical_centered(|ui| {
                    ui.add_space(250.0);
                    ui.heading("👈 Form wählen, Maße eingeben und 'Berechnen' klicken");
                    ui.add_space(10.0);
                    ui.label("Alle Ergebnisse werden in Quadratzentimeter (cm²) angezeigt.");
                });
            }
        });

        // Fehler-Dialog
        if self.error_message.is_some() {
            let error_text = self.error_message.clone().unwrap();

            egui::Window::new("⚠️ Fehler bei der Berechnung")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.set_min_width(400.0);

                    egui::ScrollArea::vertical()
                        .max_height(400.0)
                        .show(ui, |ui| {
                            ui.colored_label(Color32::from_rgb(200, 50, 50), &error_text);
                        });

                    ui.add_space(15.0);
                    ui.separator();
                    ui.add_space(10.0);

                    if ui.button("OK - Eingaben überprüfen").clicked() {
                        self.error_message = None;
                    }
                });
        }

        // Hilfe-Dialog
        if self.show_help {
            egui::Window::new("❓ Hilfe")
                .collapsible(false)
                .show(ctx, |ui| {
                    ui.label("🔢 Bedienung:");
                    ui.label("  1. Form und Einheit wählen");
                    ui.label("  2. Maße eingeben (Komma oder Punkt)");
                    ui.label("  3. 'Fläche berechnen' klicken");
                    ui.add_space(5.0);

                    ui.label("📐 Unterstützte Formen:");
                    ui.label("  • Quadrat - Seitenlänge");
                    ui.label("  • Rechteck - Länge und Breite");
                    ui.label("  • Dreieck - drei Seiten (Heron-Formel)");
                    ui.label("  • Kreis - Durchmesser");
                    ui.add_space(5.0);

                    ui.label("📏 Alle Flächen werden in cm² angezeigt.");

                    ui.add_space(10.0);
                    if ui.button("Schließen").clicked() {
                        self.show_help = false;
                    }
                });
        }

        // Verlauf-Dialog
        if self.show_history {
            egui::Window::new("📋 Verlauf")
                .collapsible(false)
                .default_size([620.0, 450.0])
                .show(ctx, |ui| {
                    if self.history.is_empty() {
                        ui.label("Noch keine Berechnungen in dieser Sitzung.");
                    } else {
                        egui::ScrollArea::vertical()
                            .max_height(400.0)
                            .show(ui, |ui| {
                                for (i, entry) in self.history.entries().iter().enumerate() {
                                    ui.group(|ui| {
                                        ui.label(
                                            egui::RichText::new(format!(
                                                "Eintrag {} – {} ({})",
                                                i + 1,
                                                entry.shape_label,
                                                entry.timestamp.format("%H:%M:%S")
                                            ))
                                            .strong(),
                                        );
                                        ui.label(
                                            egui::RichText::new(&entry.summary).monospace(),
                                        );
                                    });
                                    ui.add_space(8.0);
                                }
                            });
                    }

                    ui.add_space(10.0);
                    if ui.button("Schließen").clicked() {
                        self.show_history = false;
                    }
                });
        }
    }
}

impl RechnerApp {
    /// Liest die Eingabefelder der aktuell gewählten Form
    fn parse_input(&self) -> Result<ShapeInput, String> {
        let unit = self.unit;
        let input = match self.shape_kind {
            ShapeKind::Square => ShapeInput::Square {
                side: parse_field("Seitenlänge", &self.input_side)?,
                unit,
            },
            ShapeKind::Rectangle => ShapeInput::Rectangle {
                length: parse_field("Länge", &self.input_length)?,
                width: parse_field("Breite", &self.input_width)?,
                unit,
            },
            ShapeKind::Triangle => ShapeInput::Triangle {
                side_a: parse_field("Seite a", &self.input_side_a)?,
                side_b: parse_field("Seite b", &self.input_side_b)?,
                side_c: parse_field("Seite c", &self.input_side_c)?,
                unit,
            },
            ShapeKind::Circle => ShapeInput::Circle {
                diameter: parse_field("Durchmesser", &self.input_diameter)?,
                unit,
            },
        };
        Ok(input)
    }

    fn calculate_area(&mut self) {
        self.error_message = None;

        let input = match self.parse_input() {
            Ok(input) => input,
            Err(message) => {
                log::warn!("Eingabe nicht lesbar: {}", self.shape_kind.label());
                self.error_message = Some(message);
                return;
            }
        };

        match input.compute_area() {
            Ok(result) => {
                log::info!(
                    "{} berechnet: {:.3} cm²",
                    input.kind().label(),
                    result.area_cm2
                );
                let summary = format_result_block(&input, &result);
                self.history.push(input.kind().label(), summary);
                self.result = Some((input, result));
            }
            Err(e) => {
                log::warn!("Berechnung abgelehnt: {:?}", e);
                // Vorheriges Ergebnis und Verlauf bleiben unverändert
                self.error_message = Some(e.to_string());
            }
        }
    }

    /// Zeichnet die berechnete Form maßstabsgetreu in das zentrale Panel
    fn draw_shape(&mut self, ui: &mut egui::Ui) {
        let Some((input, result)) = self.result.clone() else {
            return;
        };

        let available_size = ui.available_size();
        let (response, painter) = ui.allocate_painter(available_size, egui::Sense::hover());
        let rect = response.rect;
        let padding = 120.0_f32;

        let outline = Stroke::new(4.0, Color32::from_rgb(50, 50, 200));
        let label_font = egui::FontId::proportional(22.0);
        let label_color = Color32::from_rgb(0, 120, 0);
        let area_font = egui::FontId::proportional(26.0);
        let area_color = Color32::from_rgb(56, 62, 66); //Anthrazit

        if let ShapeInput::Circle { diameter, unit } = input {
            let d_cm = unit.to_cm(diameter);
            let radius_px = (available_size.x.min(available_size.y) / 2.0 - padding).max(40.0);
            let center = rect.center();

            painter.circle_stroke(center, radius_px, outline);

            // Durchmesserlinie mit Beschriftung
            let left = Pos2::new(center.x - radius_px, center.y);
            let right = Pos2::new(center.x + radius_px, center.y);
            painter.line_segment([left, right], Stroke::new(2.0, Color32::from_rgb(150, 150, 150)));
            painter.circle_filled(left, 6.0, Color32::from_rgb(200, 50, 50));
            painter.circle_filled(right, 6.0, Color32::from_rgb(200, 50, 50));
            painter.text(
                center + Vec2::new(0.0, -12.0),
                egui::Align2::CENTER_BOTTOM,
                format!("d = {} cm", format_value(d_cm)),
                label_font,
                label_color,
            );

            painter.text(
                Pos2::new(center.x, center.y + radius_px + 40.0),
                egui::Align2::CENTER_CENTER,
                format!("Fläche: {}", format_area_cm2(result.area_cm2)),
                area_font,
                area_color,
            );
            return;
        }

        // Umriss in cm-Koordinaten
        let points_cm: Vec<(f64, f64)> = match input {
            ShapeInput::Square { side, unit } => {
                let s = unit.to_cm(side);
                vec![(0.0, 0.0), (s, 0.0), (s, s), (0.0, s)]
            }
            ShapeInput::Rectangle {
                length,
                width,
                unit,
            } => {
                let l = unit.to_cm(length);
                let w = unit.to_cm(width);
                vec![(0.0, 0.0), (l, 0.0), (l, w), (0.0, w)]
            }
            ShapeInput::Triangle {
                side_a,
                side_b,
                side_c,
                unit,
            } => triangle_vertices(unit.to_cm(side_a), unit.to_cm(side_b), unit.to_cm(side_c))
                .to_vec(),
            ShapeInput::Circle { .. } => unreachable!(),
        };

        let mut min_x = f64::MAX;
        let mut max_x = f64::MIN;
        let mut min_y = f64::MAX;
        let mut max_y = f64::MIN;

        for &(x, y) in &points_cm {
            min_x = min_x.min(x);
            max_x = max_x.max(x);
            min_y = min_y.min(y);
            max_y = max_y.max(y);
        }

        // Sehr flache Dreiecke nicht durch 0 teilen lassen
        let width = (max_x - min_x).max(1e-9);
        let height = (max_y - min_y).max(1e-9);

        let scale_x = (available_size.x - 2.0 * padding) / width as f32;
        let scale_y = (available_size.y - 2.0 * padding) / height as f32;
        let scale = scale_x.min(scale_y).max(0.0);

        let offset_x = (available_size.x - width as f32 * scale) / 2.0;
        let offset_y = (available_size.y - height as f32 * scale) / 2.0;

        // y-Achse spiegeln, damit die Form nicht kopfüber erscheint
        let to_screen = |(x, y): (f64, f64)| -> Pos2 {
            Pos2::new(
                rect.min.x + offset_x + (x - min_x) as f32 * scale,
                rect.min.y + offset_y + (max_y - y) as f32 * scale,
            )
        };

        let screen_vertices: Vec<Pos2> = points_cm.iter().map(|&p| to_screen(p)).collect();
        let n = screen_vertices.len();

        for i in 0..n {
            let next = (i + 1) % n;
            painter.line_segment([screen_vertices[i], screen_vertices[next]], outline);
        }

        for vertex in &screen_vertices {
            painter.circle_filled(*vertex, 8.0, Color32::from_rgb(200, 50, 50));
        }

        // Seitenlängen an den Seitenmitten beschriften
        for i in 0..n {
            let next = (i + 1) % n;
            let mid = Pos2::new(
                (screen_vertices[i].x + screen_vertices[next].x) / 2.0,
                (screen_vertices[i].y + screen_vertices[next].y) / 2.0,
            );

            let dx = points_cm[next].0 - points_cm[i].0;
            let dy = points_cm[next].1 - points_cm[i].1;
            let length_cm = (dx * dx + dy * dy).sqrt();

            painter.text(
                mid,
                egui::Align2::CENTER_CENTER,
                format!("{} cm", format_value(length_cm)),
                label_font.clone(),
                label_color,
            );
        }

        // Flächenangabe in den Schwerpunkt
        let centroid = Pos2::new(
            screen_vertices.iter().map(|p| p.x).sum::<f32>() / n as f32,
            screen_vertices.iter().map(|p| p.y).sum::<f32>() / n as f32,
        );
        painter.text(
            centroid,
            egui::Align2::CENTER_CENTER,
            format!("Fläche: {}", format_area_cm2(result.area_cm2)),
            area_font,
            area_color,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field_accepts_comma() {
        assert_eq!(parse_field("Seitenlänge", "3,5").unwrap(), 3.5);
        assert_eq!(parse_field("Seitenlänge", " 2.54 ").unwrap(), 2.54);
        assert!(parse_field("Seitenlänge", "abc").is_err());
        assert!(parse_field("Seitenlänge", "").is_err());
    }

    #[test]
    fn test_result_block_contains_inputs_and_area() {
        let input = ShapeInput::Square {
            side: 3.0,
            unit: Unit::Inch,
        };
        let result = input.compute_area().unwrap();
        let block = format_result_block(&input, &result);

        assert!(block.contains("Form: Quadrat"));
        assert!(block.contains("Einheit: inch"));
        assert!(block.contains("• Seitenlänge: 3.000 inch"));
        assert!(block.contains("• Seitenlänge (cm): 7.620 cm"));
        assert!(block.contains("✅ Fläche: 58.064 cm²"));
    }
}
