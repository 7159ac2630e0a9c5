//! Persistent session history and derived practice stats.
//!
//! Finished sessions are appended as JSON records. The stats views
//! (totals, daily streak, favorite pattern) are computed on demand from
//! the record list, and the whole history can be exported as CSV.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::PathBuf;

use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use breathe_types::SessionReport;

use super::controller::{ReportSink, SinkError};

/// One finished breathing session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub recorded_at: NaiveDateTime,
    pub pattern_name: String,
    pub duration_seconds: f64,
    pub completed: bool,
}

/// Errors that can occur reading or writing the history file.
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("IO error on history file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("history file {path:?} is not valid JSON: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Session records plus the stats derived from them.
///
/// With a backing path, every added record is written through to disk.
/// Without one the history is purely in-memory (used in tests and when the
/// user has no writable data directory).
#[derive(Debug, Default)]
pub struct SessionHistory {
    records: Vec<SessionRecord>,
    path: Option<PathBuf>,
}

impl SessionHistory {
    /// History with no backing file.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Load history from `path`, creating an empty store if the file does
    /// not exist yet.
    pub fn load(path: PathBuf) -> Result<Self, HistoryError> {
        if !path.exists() {
            return Ok(Self {
                records: Vec::new(),
                path: Some(path),
            });
        }

        let contents = fs::read_to_string(&path).map_err(|e| HistoryError::Io {
            path: path.clone(),
            source: e,
        })?;
        let records = serde_json::from_str(&contents).map_err(|e| HistoryError::Parse {
            path: path.clone(),
            source: e,
        })?;

        Ok(Self {
            records,
            path: Some(path),
        })
    }

    /// Append a record, writing through to the backing file if any.
    pub fn add(&mut self, record: SessionRecord) -> Result<(), HistoryError> {
        self.records.push(record);
        self.save()
    }

    fn save(&self) -> Result<(), HistoryError> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| HistoryError::Io {
                path: path.clone(),
                source: e,
            })?;
        }

        let contents = serde_json::to_string_pretty(&self.records).map_err(|e| {
            HistoryError::Parse {
                path: path.clone(),
                source: e,
            }
        })?;
        fs::write(path, contents).map_err(|e| HistoryError::Io {
            path: path.clone(),
            source: e,
        })
    }

    pub fn records(&self) -> &[SessionRecord] {
        &self.records
    }

    pub fn session_count(&self) -> usize {
        self.records.len()
    }

    /// Total recorded practice time in seconds.
    pub fn total_seconds(&self) -> f64 {
        self.records.iter().map(|r| r.duration_seconds).sum()
    }

    /// Consecutive calendar days with at least one session, ending today.
    /// Zero if there is no session today.
    pub fn current_streak(&self, today: NaiveDate) -> u32 {
        let days: HashSet<NaiveDate> = self.records.iter().map(|r| r.recorded_at.date()).collect();
        if !days.contains(&today) {
            return 0;
        }

        let mut streak = 1;
        let mut day = today;
        while let Some(prev) = day.pred_opt() {
            if !days.contains(&prev) {
                break;
            }
            streak += 1;
            day = prev;
        }
        streak
    }

    /// The most-practiced pattern. Ties go to the pattern that reached the
    /// top count first in record order.
    pub fn favorite_pattern(&self) -> Option<&str> {
        let mut counts: HashMap<&str, u32> = HashMap::new();
        for record in &self.records {
            *counts.entry(record.pattern_name.as_str()).or_default() += 1;
        }
        let max = counts.values().copied().max()?;

        self.records
            .iter()
            .map(|r| r.pattern_name.as_str())
            .find(|name| counts[name] == max)
    }

    /// Export all records as CSV. Pattern names are quoted since they may
    /// contain commas.
    pub fn export_csv(&self) -> String {
        let mut rows = vec!["Date,Pattern,Duration (seconds),Completed".to_string()];
        for record in &self.records {
            rows.push(format!(
                "{},\"{}\",{},{}",
                record.recorded_at.format("%Y-%m-%d %H:%M:%S"),
                record.pattern_name,
                record.duration_seconds,
                if record.completed { "Yes" } else { "No" }
            ));
        }
        rows.join("\n")
    }
}

impl ReportSink for SessionHistory {
    fn record_session(&mut self, report: &SessionReport) -> Result<(), SinkError> {
        self.add(SessionRecord {
            recorded_at: Local::now().naive_local(),
            pattern_name: report.pattern_name.clone(),
            duration_seconds: report.duration_seconds,
            completed: report.completed,
        })?;
        Ok(())
    }
}

/// Default location for the history file.
pub fn default_history_path() -> Option<PathBuf> {
    dirs::data_dir().map(|p| p.join("breathe").join("sessions.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: (i32, u32, u32), pattern: &str) -> SessionRecord {
        SessionRecord {
            recorded_at: NaiveDate::from_ymd_opt(date.0, date.1, date.2)
                .unwrap()
                .and_hms_opt(9, 30, 0)
                .unwrap(),
            pattern_name: pattern.to_string(),
            duration_seconds: 16.0,
            completed: true,
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_streak_requires_session_today() {
        let mut history = SessionHistory::in_memory();
        history.add(record((2026, 8, 3), "Box Breathing")).unwrap();

        assert_eq!(history.current_streak(day(2026, 8, 4)), 0);
        assert_eq!(history.current_streak(day(2026, 8, 3)), 1);
    }

    #[test]
    fn test_streak_counts_consecutive_days() {
        let mut history = SessionHistory::in_memory();
        history.add(record((2026, 8, 1), "Box Breathing")).unwrap();
        history.add(record((2026, 8, 2), "Box Breathing")).unwrap();
        history.add(record((2026, 8, 3), "Triangle Breath")).unwrap();
        history.add(record((2026, 8, 4), "Box Breathing")).unwrap();

        assert_eq!(history.current_streak(day(2026, 8, 4)), 4);
    }

    #[test]
    fn test_streak_broken_by_gap() {
        let mut history = SessionHistory::in_memory();
        history.add(record((2026, 8, 1), "Box Breathing")).unwrap();
        // No session on the 2nd
        history.add(record((2026, 8, 3), "Box Breathing")).unwrap();
        history.add(record((2026, 8, 4), "Box Breathing")).unwrap();

        assert_eq!(history.current_streak(day(2026, 8, 4)), 2);
    }

    #[test]
    fn test_multiple_sessions_same_day_count_once() {
        let mut history = SessionHistory::in_memory();
        history.add(record((2026, 8, 4), "Box Breathing")).unwrap();
        history.add(record((2026, 8, 4), "Triangle Breath")).unwrap();

        assert_eq!(history.current_streak(day(2026, 8, 4)), 1);
    }

    #[test]
    fn test_favorite_pattern() {
        let mut history = SessionHistory::in_memory();
        assert_eq!(history.favorite_pattern(), None);

        history.add(record((2026, 8, 1), "Box Breathing")).unwrap();
        history.add(record((2026, 8, 2), "Triangle Breath")).unwrap();
        history.add(record((2026, 8, 3), "Triangle Breath")).unwrap();

        assert_eq!(history.favorite_pattern(), Some("Triangle Breath"));
    }

    #[test]
    fn test_favorite_pattern_tie_goes_to_earliest() {
        let mut history = SessionHistory::in_memory();
        history.add(record((2026, 8, 1), "Box Breathing")).unwrap();
        history.add(record((2026, 8, 2), "Triangle Breath")).unwrap();

        assert_eq!(history.favorite_pattern(), Some("Box Breathing"));
    }

    #[test]
    fn test_totals() {
        let mut history = SessionHistory::in_memory();
        history.add(record((2026, 8, 1), "Box Breathing")).unwrap();
        history.add(record((2026, 8, 2), "Box Breathing")).unwrap();

        assert_eq!(history.session_count(), 2);
        assert_eq!(history.total_seconds(), 32.0);
    }

    #[test]
    fn test_csv_export_quotes_pattern_names() {
        let mut history = SessionHistory::in_memory();
        history.add(record((2026, 8, 4), "4-7-8, Extended")).unwrap();

        let csv = history.export_csv();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("Date,Pattern,Duration (seconds),Completed"));
        assert_eq!(
            lines.next(),
            Some("2026-08-04 09:30:00,\"4-7-8, Extended\",16,Yes")
        );
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sessions.json");

        let mut history = SessionHistory::load(path.clone()).unwrap();
        history.add(record((2026, 8, 4), "Box Breathing")).unwrap();

        let reloaded = SessionHistory::load(path).unwrap();
        assert_eq!(reloaded.records(), history.records());
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let history = SessionHistory::load(dir.path().join("sessions.json")).unwrap();
        assert_eq!(history.session_count(), 0);
    }

    #[test]
    fn test_record_session_sink() {
        let mut history = SessionHistory::in_memory();
        let report = SessionReport {
            pattern_name: "Box Breathing".to_string(),
            duration_seconds: 16.0,
            completed: false,
        };

        history.record_session(&report).unwrap();
        assert_eq!(history.session_count(), 1);
        assert_eq!(history.records()[0].pattern_name, "Box Breathing");
        assert!(!history.records()[0].completed);
    }
}
