// Hilfsfunktionen für Formatierung und Koordinaten-Geometrie

/// Formatiert einen Wert mit exakt 3 Nachkommastellen
pub fn format_value(value: f64) -> String {
    format!("{:.3}", value)
}

/// Formatiert eine Fläche in cm² für die Anzeige
pub fn format_area_cm2(area_cm2: f64) -> String {
    format!("{} cm²", format_value(area_cm2))
}

/// Platziert ein Dreieck mit den Seiten a, b, c in der Ebene
/// A=(0|0), B=(c|0), C über den Kosinussatz
/// Konvention: a = |BC|, b = |CA|, c = |AB|
pub fn triangle_vertices(a: f64, b: f64, c: f64) -> [(f64, f64); 3] {
    let cx = (b * b + c * c - a * a) / (2.0 * c);
    // Rundungsfehler können den Radikanden knapp unter 0 drücken
    let cy = (b * b - cx * cx).max(0.0).sqrt();
    [(0.0, 0.0), (c, 0.0), (cx, cy)]
}
