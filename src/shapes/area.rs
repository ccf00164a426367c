// Flächenberechnung für alle Formen
// Ergebnisse immer in Quadratzentimeter (cm²), unabhängig von der Eingabe-Einheit

use std::f64::consts::PI;

use super::types::{AreaResult, ShapeInput, Unit};
use super::utils::format_value;
use super::validation::ShapeError;

fn raw_field(label: &str, value: f64, unit: Unit) -> (String, String) {
    (
        label.to_string(),
        format!("{} {}", format_value(value), unit.suffix()),
    )
}

fn cm_field(label: &str, value_cm: f64) -> (String, String) {
    (label.to_string(), format!("{} cm", format_value(value_cm)))
}

impl ShapeInput {
    /// Validiert die Maße und berechnet die Fläche in cm²
    pub fn compute_area(&self) -> Result<AreaResult, ShapeError> {
        self.validate()?;

        let result = match *self {
            ShapeInput::Square { side, unit } => {
                let side_cm = unit.to_cm(side);
                AreaResult {
                    area_cm2: side_cm * side_cm,
                    labeled_fields: vec![
                        raw_field("Seitenlänge", side, unit),
                        cm_field("Seitenlänge (cm)", side_cm),
                    ],
                }
            }
            ShapeInput::Rectangle {
                length,
                width,
                unit,
            } => {
                let length_cm = unit.to_cm(length);
                let width_cm = unit.to_cm(width);
                AreaResult {
                    area_cm2: length_cm * width_cm,
                    labeled_fields: vec![
                        raw_field("Länge", length, unit),
                        raw_field("Breite", width, unit),
                        cm_field("Länge (cm)", length_cm),
                        cm_field("Breite (cm)", width_cm),
                    ],
                }
            }
            ShapeInput::Triangle {
                side_a,
                side_b,
                side_c,
                unit,
            } => {
                let a_cm = unit.to_cm(side_a);
                let b_cm = unit.to_cm(side_b);
                let c_cm = unit.to_cm(side_c);

                // Heron-Formel über den Halbumfang
                let s = (a_cm + b_cm + c_cm) / 2.0;
                // Rundungsfehler können den Radikanden knapp unter 0 drücken
                let radicand = (s * (s - a_cm) * (s - b_cm) * (s - c_cm)).max(0.0);

                AreaResult {
                    area_cm2: radicand.sqrt(),
                    labeled_fields: vec![
                        raw_field("Seite a", side_a, unit),
                        raw_field("Seite b", side_b, unit),
                        raw_field("Seite c", side_c, unit),
                        cm_field("Seite a (cm)", a_cm),
                        cm_field("Seite b (cm)", b_cm),
                        cm_field("Seite c (cm)", c_cm),
                        cm_field("Halbumfang", s),
                    ],
                }
            }
            ShapeInput::Circle { diameter, unit } => {
                let radius_cm = unit.to_cm(diameter) / 2.0;
                AreaResult {
                    area_cm2: PI * radius_cm * radius_cm,
                    labeled_fields: vec![
                        raw_field("Durchmesser", diameter, unit),
                        cm_field("Radius (cm)", radius_cm),
                    ],
                }
            }
        };

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::utils::triangle_vertices;

    fn area_of(input: ShapeInput) -> f64 {
        input.compute_area().unwrap().area_cm2
    }

    #[test]
    fn test_square_area() {
        let area = area_of(ShapeInput::Square {
            side: 3.0,
            unit: Unit::Centimeter,
        });
        assert!((area - 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_square_in_inch() {
        let result = ShapeInput::Square {
            side: 3.0,
            unit: Unit::Inch,
        }
        .compute_area()
        .unwrap();

        // 3 inch = 7.62 cm, Fläche = 7.62² = 58.0644 cm²
        assert!((result.area_cm2 - 58.0644).abs() < 1e-9);
        assert_eq!(
            result.labeled_fields,
            vec![
                ("Seitenlänge".to_string(), "3.000 inch".to_string()),
                ("Seitenlänge (cm)".to_string(), "7.620 cm".to_string()),
            ]
        );
    }

    #[test]
    fn test_rectangle_area() {
        let area = area_of(ShapeInput::Rectangle {
            length: 4.0,
            width: 2.5,
            unit: Unit::Centimeter,
        });
        assert!((area - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_triangle_right_angled() {
        // 3-4-5-Dreieck hat die Fläche 6
        let area = area_of(ShapeInput::Triangle {
            side_a: 3.0,
            side_b: 4.0,
            side_c: 5.0,
            unit: Unit::Centimeter,
        });
        assert!((area - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_heron_matches_coordinate_reference() {
        // Unabhängige Referenz über Koordinaten und Kreuzprodukt
        let (a, b, c) = (5.0, 6.0, 7.0);
        let heron = area_of(ShapeInput::Triangle {
            side_a: a,
            side_b: b,
            side_c: c,
            unit: Unit::Centimeter,
        });

        let [p0, p1, p2] = triangle_vertices(a, b, c);
        let cross = (p1.0 - p0.0) * (p2.1 - p0.1) - (p2.0 - p0.0) * (p1.1 - p0.1);
        let reference = cross.abs() / 2.0;

        assert!((heron - reference).abs() < 1e-9);
    }

    #[test]
    fn test_triangle_semi_perimeter_field() {
        let result = ShapeInput::Triangle {
            side_a: 3.0,
            side_b: 4.0,
            side_c: 5.0,
            unit: Unit::Centimeter,
        }
        .compute_area()
        .unwrap();

        let (label, value) = result.labeled_fields.last().unwrap();
        assert_eq!(label, "Halbumfang");
        assert_eq!(value, "6.000 cm");
    }

    #[test]
    fn test_nearly_degenerate_triangle_clamps_to_zero() {
        // Sehr flaches, aber gültiges Dreieck: Ergebnis muss endlich und >= 0 sein
        let area = area_of(ShapeInput::Triangle {
            side_a: 0.5,
            side_b: 0.5,
            side_c: 0.999_999_999_9,
            unit: Unit::Centimeter,
        });
        assert!(area.is_finite());
        assert!(area >= 0.0);
    }

    #[test]
    fn test_degenerate_triangle_rejected() {
        let err = ShapeInput::Triangle {
            side_a: 1.0,
            side_b: 1.0,
            side_c: 5.0,
            unit: Unit::Centimeter,
        }
        .compute_area()
        .unwrap_err();
        assert!(matches!(err, ShapeError::DegenerateTriangle { .. }));
    }

    #[test]
    fn test_invalid_dimension_rejected() {
        let err = ShapeInput::Circle {
            diameter: -2.0,
            unit: Unit::Centimeter,
        }
        .compute_area()
        .unwrap_err();
        assert!(matches!(
            err,
            ShapeError::InvalidDimension { field, value } if field == "Der Durchmesser" && value == -2.0
        ));
    }

    #[test]
    fn test_circle_area_formatting() {
        // Durchmesser 2 cm -> Radius 1 cm -> Fläche π ≈ 3.142 cm²
        let result = ShapeInput::Circle {
            diameter: 2.0,
            unit: Unit::Centimeter,
        }
        .compute_area()
        .unwrap();
        assert_eq!(format_value(result.area_cm2), "3.142");
        assert_eq!(
            result.labeled_fields,
            vec![
                ("Durchmesser".to_string(), "2.000 cm".to_string()),
                ("Radius (cm)".to_string(), "1.000 cm".to_string()),
            ]
        );
    }

    #[test]
    fn test_unit_round_trip() {
        // 2 inch entsprechen exakt 5.08 cm
        let in_inch = area_of(ShapeInput::Circle {
            diameter: 2.0,
            unit: Unit::Inch,
        });
        let in_cm = area_of(ShapeInput::Circle {
            diameter: 5.08,
            unit: Unit::Centimeter,
        });
        assert!((in_inch - in_cm).abs() < 1e-9);
    }
}
