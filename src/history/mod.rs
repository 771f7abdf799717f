//! Session calculation history
//!
//! The log is append-only and kept in insertion (chronological) order. Display
//! is newest-first through a reversed view; the stored order never changes.

mod export;

pub use export::{export_file_name, ExportError, Exporter, EXPORT_HEADER_LINES};

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Most recent entries shown when displaying history
pub const MAX_DISPLAYED_ENTRIES: usize = 5;

/// One recorded calculation: `[DD/MM/YYYY] summary`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    date: NaiveDate,
    text: String,
}

impl HistoryEntry {
    fn new(date: NaiveDate, summary: &str) -> Self {
        Self {
            date,
            text: format!("[{}] {}", date.format("%d/%m/%Y"), single_line(summary)),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Full line including the date prefix
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl std::fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Join a multi-line summary into one line; each entry is exactly one export line
fn single_line(summary: &str) -> String {
    summary
        .split(['\r', '\n'])
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Ordered, append-only log of calculation summaries
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a summary stamped with today's date
    pub fn record(&mut self, summary: &str) -> &HistoryEntry {
        self.record_on(Local::now().date_naive(), summary)
    }

    /// Append a summary stamped with the given date
    ///
    /// Line breaks in `summary` are folded into single spaces.
    pub fn record_on(&mut self, date: NaiveDate, summary: &str) -> &HistoryEntry {
        self.entries.push(HistoryEntry::new(date, summary));
        log::debug!("History entry #{} recorded", self.entries.len());
        &self.entries[self.entries.len() - 1]
    }

    /// Entries oldest-first
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Entries newest-first, without touching the stored order
    pub fn newest_first(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Capped newest-first view for display
    pub fn view(&self, cap: usize) -> HistoryView<'_> {
        HistoryView {
            shown: self.newest_first().take(cap).collect(),
            total: self.entries.len(),
        }
    }
}

/// Newest-first slice of the history prepared for display
#[derive(Debug, Clone)]
pub struct HistoryView<'a> {
    shown: Vec<&'a HistoryEntry>,
    total: usize,
}

impl<'a> HistoryView<'a> {
    pub fn entries(&self) -> &[&'a HistoryEntry] {
        &self.shown
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// More entries exist than are shown
    pub fn is_capped(&self) -> bool {
        self.total > self.shown.len()
    }

    /// Introductory sentence, including the `shown / total` indicator when capped
    pub fn intro(&self) -> String {
        if self.is_capped() {
            format!(
                "Below are your recent calculations - showing {} / {} financial calculations",
                self.shown.len(),
                self.total
            )
        } else {
            "Below are all your financial calculations".to_string()
        }
    }

    /// Intro followed by one entry per line
    pub fn render(&self) -> String {
        let mut out = self.intro();
        for entry in &self.shown {
            out.push('\n');
            out.push_str(entry.text());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, d).unwrap()
    }

    #[test]
    fn test_entry_prefixes_date() {
        let mut history = History::new();
        let entry = history.record_on(day(24), "Loan: Amount: $50,000.00 NZD");
        assert_eq!(entry.text(), "[24/05/2025] Loan: Amount: $50,000.00 NZD");
        assert_eq!(entry.date(), day(24));
    }

    #[test]
    fn test_multi_line_summary_folded() {
        let mut history = History::new();
        let entry = history.record_on(day(24), "GST: Amount: $100.00 NZD\n  → Total: $115.00 NZD\r\n");
        assert_eq!(entry.text(), "[24/05/2025] GST: Amount: $100.00 NZD → Total: $115.00 NZD");
        assert!(!entry.text().contains(['\n', '\r']));
    }

    #[test]
    fn test_newest_first_is_non_destructive() {
        let mut history = History::new();
        for d in 1..=3 {
            history.record_on(day(d), &format!("calc {}", d));
        }

        let newest: Vec<_> = history.newest_first().map(|e| e.text().to_string()).collect();
        assert_eq!(newest[0], "[03/05/2025] calc 3");
        assert_eq!(newest[2], "[01/05/2025] calc 1");

        // Stored order unchanged
        assert_eq!(history.entries()[0].text(), "[01/05/2025] calc 1");
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn test_view_uncapped() {
        let mut history = History::new();
        history.record_on(day(1), "only");
        let view = history.view(MAX_DISPLAYED_ENTRIES);

        assert!(!view.is_capped());
        assert_eq!(view.intro(), "Below are all your financial calculations");
        assert_eq!(view.render(), "Below are all your financial calculations\n[01/05/2025] only");
    }

    #[test]
    fn test_view_capped() {
        let mut history = History::new();
        for d in 1..=8 {
            history.record_on(day(d), &format!("calc {}", d));
        }
        let view = history.view(MAX_DISPLAYED_ENTRIES);

        assert!(view.is_capped());
        assert_eq!(view.entries().len(), 5);
        assert_eq!(view.total(), 8);
        assert_eq!(view.entries()[0].text(), "[08/05/2025] calc 8");
        assert_eq!(view.entries()[4].text(), "[04/05/2025] calc 4");
        assert!(view.intro().contains("showing 5 / 8"));
    }

    #[test]
    fn test_empty_history() {
        let history = History::new();
        assert!(history.is_empty());
        assert_eq!(history.view(MAX_DISPLAYED_ENTRIES).entries().len(), 0);
    }
}
