use serde::Serialize;

use crate::model::progress::{ProgressCounts, UpsertOutcome};

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize, Debug)]
pub struct NewProblemJson {
    pub name: String,
    pub category: String,
    pub done: bool,
    pub code_file: String,
    pub created: bool,
    pub document: String,
    pub entry: UpsertOutcome,
    pub summary: SummaryJson,
}

#[derive(Serialize, Debug)]
pub struct SummaryJson {
    pub done: usize,
    pub total: usize,
    pub planned: u32,
}

impl SummaryJson {
    pub fn new(counts: ProgressCounts, planned: u32) -> Self {
        SummaryJson {
            done: counts.done,
            total: counts.total,
            planned,
        }
    }
}

// ---------------------------------------------------------------------------
// Text output
// ---------------------------------------------------------------------------

/// Line printed after the code file step
pub fn code_file_line(report: &NewProblemJson) -> String {
    if report.created {
        format!("Created: {}", report.code_file)
    } else {
        format!("Note: {} already exists (won't overwrite).", report.code_file)
    }
}

/// Line printed after the progress document was written
pub fn document_line(report: &NewProblemJson) -> String {
    format!(
        "Updated {} with '{}' under '{}' ({}, done={}). Total: {} done / {} planned",
        report.document,
        report.name,
        report.category,
        report.entry,
        report.done,
        report.summary.done,
        report.summary.planned,
    )
}
