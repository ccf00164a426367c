// Validierung der Eingabemaße

use std::fmt;

use super::types::ShapeInput;

/// Fehler bei der Prüfung der Eingabemaße
#[derive(Clone, Debug, PartialEq)]
pub enum ShapeError {
    /// Ein Maß ist nicht endlich oder nicht größer als 0
    InvalidDimension { field: &'static str, value: f64 },
    /// Die drei Seiten verletzen die strikte Dreiecksungleichung
    DegenerateTriangle { a: f64, b: f64, c: f64 },
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::InvalidDimension { field, value } => write!(
                f,
                "❌ Ungültige Eingabe!\n\n\
                {} muss eine Zahl größer als 0 sein.\n\
                Eingegeben: {}",
                field, value
            ),
            ShapeError::DegenerateTriangle { a, b, c } => write!(
                f,
                "❌ Die Seiten a={}, b={} und c={} ergeben kein Dreieck!\n\n\
                Die Summe zweier Seiten muss immer größer\n\
                als die dritte Seite sein.\n\n\
                Bitte überprüfen Sie die Messungen.",
                a, b, c
            ),
        }
    }
}

impl std::error::Error for ShapeError {}

fn check_positive(field: &'static str, value: f64) -> Result<(), ShapeError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ShapeError::InvalidDimension { field, value })
    }
}

/// Strikte Dreiecksungleichung: jede Summe zweier Seiten muss die dritte übertreffen
pub fn validate_triangle(a: f64, b: f64, c: f64) -> Result<(), ShapeError> {
    if a + b > c && a + c > b && b + c > a {
        Ok(())
    } else {
        Err(ShapeError::DegenerateTriangle { a, b, c })
    }
}

impl ShapeInput {
    /// Prüft alle Maße: endlich, größer 0, beim Dreieck zusätzlich die Dreiecksungleichung
    pub fn validate(&self) -> Result<(), ShapeError> {
        match *self {
            ShapeInput::Square { side, .. } => check_positive("Die Seitenlänge", side),
            ShapeInput::Rectangle { length, width, .. } => {
                check_positive("Die Länge", length)?;
                check_positive("Die Breite", width)
            }
            ShapeInput::Triangle {
                side_a,
                side_b,
                side_c,
                ..
            } => {
                check_positive("Seite a", side_a)?;
                check_positive("Seite b", side_b)?;
                check_positive("Seite c", side_c)?;
                validate_triangle(side_a, side_b, side_c)
            }
            ShapeInput::Circle { diameter, .. } => check_positive("Der Durchmesser", diameter),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::types::Unit;

    #[test]
    fn test_rejects_zero_and_negative() {
        let zero = ShapeInput::Square {
            side: 0.0,
            unit: Unit::Centimeter,
        };
        assert!(matches!(
            zero.validate(),
            Err(ShapeError::InvalidDimension { value, .. }) if value == 0.0
        ));

        let negative = ShapeInput::Square {
            side: -3.0,
            unit: Unit::Centimeter,
        };
        assert!(matches!(
            negative.validate(),
            Err(ShapeError::InvalidDimension { value, .. }) if value == -3.0
        ));
    }

    #[test]
    fn test_rejects_non_finite() {
        let nan = ShapeInput::Circle {
            diameter: f64::NAN,
            unit: Unit::Centimeter,
        };
        assert!(matches!(
            nan.validate(),
            Err(ShapeError::InvalidDimension { field, .. }) if field == "Der Durchmesser"
        ));

        let inf = ShapeInput::Rectangle {
            length: 2.0,
            width: f64::INFINITY,
            unit: Unit::Centimeter,
        };
        assert!(matches!(
            inf.validate(),
            Err(ShapeError::InvalidDimension { field, .. }) if field == "Die Breite"
        ));
    }

    #[test]
    fn test_names_offending_field() {
        let input = ShapeInput::Rectangle {
            length: -1.0,
            width: 2.0,
            unit: Unit::Centimeter,
        };
        match input.validate() {
            Err(ShapeError::InvalidDimension { field, value }) => {
                assert_eq!(field, "Die Länge");
                assert_eq!(value, -1.0);
            }
            other => panic!("unerwartetes Ergebnis: {:?}", other),
        }
    }

    #[test]
    fn test_triangle_inequality_strict() {
        // deutlich verletzt
        assert!(matches!(
            validate_triangle(1.0, 1.0, 5.0),
            Err(ShapeError::DegenerateTriangle { .. })
        ));
        // Grenzfall a+b == c ist ebenfalls ungültig
        assert!(matches!(
            validate_triangle(1.0, 2.0, 3.0),
            Err(ShapeError::DegenerateTriangle { .. })
        ));
        // alle drei Permutationen werden geprüft
        assert!(validate_triangle(5.0, 1.0, 1.0).is_err());
        assert!(validate_triangle(1.0, 5.0, 1.0).is_err());
        // gültige Dreiecke
        assert!(validate_triangle(3.0, 4.0, 5.0).is_ok());
        assert!(validate_triangle(2.0, 2.0, 2.0).is_ok());
    }

    #[test]
    fn test_valid_inputs_pass() {
        let input = ShapeInput::Triangle {
            side_a: 3.0,
            side_b: 4.0,
            side_c: 5.0,
            unit: Unit::Inch,
        };
        assert!(input.validate().is_ok());
    }
}
