// Haupt-Modul für das Formen-Modell
// Exportiert alle öffentlichen Typen und Funktionen

pub mod area;
pub mod types;
pub mod utils;
pub mod validation;

// Re-exports für einfachen Zugriff
pub use types::{AreaResult, ShapeInput, ShapeKind, Unit};
pub use utils::{format_value, triangle_vertices};
pub use validation::ShapeError;
