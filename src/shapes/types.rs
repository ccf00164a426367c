// Grundlegende Datenstrukturen für die Flächenberechnung
// Alle Flächen werden intern in Quadratzentimeter (cm²) ausgedrückt

/// Umrechnungsfaktor: 1 inch = 2,54 cm (exakt)
pub const CM_PER_INCH: f64 = 2.54;

/// Eingabe-Einheit für alle Maße
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unit {
    Centimeter,
    Inch,
}

impl Unit {
    /// Kurzbezeichnung für die Anzeige
    pub fn suffix(&self) -> &'static str {
        match self {
            Unit::Centimeter => "cm",
            Unit::Inch => "inch",
        }
    }

    /// Konvertiert einen Wert in dieser Einheit nach Zentimeter
    pub fn to_cm(&self, value: f64) -> f64 {
        match self {
            Unit::Centimeter => value,
            Unit::Inch => value * CM_PER_INCH,
        }
    }
}

/// Die vier unterstützten Formen
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Square,
    Rectangle,
    Triangle,
    Circle,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 4] = [
        ShapeKind::Square,
        ShapeKind::Rectangle,
        ShapeKind::Triangle,
        ShapeKind::Circle,
    ];

    /// Anzeigename der Form
    pub fn label(&self) -> &'static str {
        match self {
            ShapeKind::Square => "Quadrat",
            ShapeKind::Rectangle => "Rechteck",
            ShapeKind::Triangle => "Dreieck",
            ShapeKind::Circle => "Kreis",
        }
    }
}

/// Rohe Eingabemaße einer Form (vor der Einheiten-Umrechnung)
/// Nach erfolgreicher Validierung unveränderlich
#[derive(Clone, Debug)]
pub enum ShapeInput {
    Square { side: f64, unit: Unit },
    Rectangle { length: f64, width: f64, unit: Unit },
    Triangle { side_a: f64, side_b: f64, side_c: f64, unit: Unit },
    Circle { diameter: f64, unit: Unit },
}

impl ShapeInput {
    pub fn kind(&self) -> ShapeKind {
        match self {
            ShapeInput::Square { .. } => ShapeKind::Square,
            ShapeInput::Rectangle { .. } => ShapeKind::Rectangle,
            ShapeInput::Triangle { .. } => ShapeKind::Triangle,
            ShapeInput::Circle { .. } => ShapeKind::Circle,
        }
    }

    pub fn unit(&self) -> Unit {
        match *self {
            ShapeInput::Square { unit, .. }
            | ShapeInput::Rectangle { unit, .. }
            | ShapeInput::Triangle { unit, .. }
            | ShapeInput::Circle { unit, .. } => unit,
        }
    }
}

/// Ergebnis einer Flächenberechnung
/// labeled_fields enthält die Eingabewerte (roh und in cm) in Anzeige-Reihenfolge,
/// jeweils auf exakt 3 Nachkommastellen formatiert
#[derive(Clone, Debug)]
pub struct AreaResult {
    pub area_cm2: f64,
    pub labeled_fields: Vec<(String, String)>,
}
