// Sitzungs-Verlauf aller abgeschlossenen Berechnungen
// Einträge leben nur bis zum Beenden der App (keine Persistenz)

use chrono::{DateTime, Local};

/// Ein abgeschlossener Berechnungseintrag
#[derive(Clone, Debug)]
pub struct HistoryEntry {
    pub timestamp: DateTime<Local>,
    pub shape_label: &'static str,
    pub summary: String,
}

/// Geordneter Verlauf einer Sitzung, nur anhängend
#[derive(Default)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, shape_label: &'static str, summary: String) {
        self.entries.push(HistoryEntry {
            timestamp: Local::now(),
            shape_label,
            summary,
        });
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_insertion_order() {
        let mut log = HistoryLog::new();
        assert!(log.is_empty());

        log.push("Quadrat", "erste Berechnung".to_string());
        log.push("Kreis", "zweite Berechnung".to_string());
        log.push("Dreieck", "dritte Berechnung".to_string());

        assert_eq!(log.len(), 3);
        let labels: Vec<_> = log.entries().iter().map(|e| e.shape_label).collect();
        assert_eq!(labels, vec!["Quadrat", "Kreis", "Dreieck"]);
        assert_eq!(log.entries()[1].summary, "zweite Berechnung");
    }
}
