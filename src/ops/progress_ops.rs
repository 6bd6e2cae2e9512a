use std::sync::LazyLock;

use regex::Regex;

use crate::model::config::ProgressConfig;
use crate::model::progress::{CategorySection, Entry, ProgressCounts, ProgressRegion, UpsertOutcome};
use crate::parse::{parse_region, serialize_region};

static TOTAL_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^- Total: \d+ done / \d+ planned(\s*)$").expect("valid total line regex")
});

/// Categories a freshly created progress document starts with
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "Arrays",
    "Two Pointers",
    "Sliding Window",
    "Stack",
    "Binary Search",
];

/// Result of recording one problem in a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordResult {
    pub document: String,
    pub outcome: UpsertOutcome,
    pub counts: ProgressCounts,
}

// ---------------------------------------------------------------------------
// Region extraction and replacement
// ---------------------------------------------------------------------------

/// Byte range of the text strictly between the first start marker and the
/// first end marker after it
fn region_bounds(document: &str, config: &ProgressConfig) -> Option<(usize, usize)> {
    let start = document.find(&config.start_marker)? + config.start_marker.len();
    let end = start + document[start..].find(&config.end_marker)?;
    Some((start, end))
}

/// Content of a progress document that doesn't exist yet
pub fn default_document(config: &ProgressConfig) -> String {
    let mut out = format!(
        "# NeetCode 150 – My Progress\n\nGoal: 5 problems/week\n\n{}\n- Total: 0 done / {} planned\n\n---\n\n{}\n",
        config.summary_heading, config.planned, config.start_marker
    );
    for category in DEFAULT_CATEGORIES {
        out.push_str(&format!("## {}\n{}\n\n", category, config.placeholder));
    }
    out.push_str(&config.end_marker);
    out.push('\n');
    out
}

/// The region used when a document has no markers: the default category
/// with an empty body.
pub fn default_region(config: &ProgressConfig) -> String {
    format!("\n## {}\n{}\n\n", config.default_category, config.placeholder)
}

/// Text between the progress markers.
///
/// Without markers a default region is synthesized. It only reaches the
/// document if the caller writes it back with [`replace_region`].
pub fn extract_region(document: &str, config: &ProgressConfig) -> String {
    match region_bounds(document, config) {
        Some((start, end)) => document[start..end].to_string(),
        None => default_region(config),
    }
}

/// Swap the text between the markers for `region`. A document without
/// markers gets a new marked region appended at the end.
pub fn replace_region(document: &str, region: &str, config: &ProgressConfig) -> String {
    if let Some((start, end)) = region_bounds(document, config) {
        let mut out = String::with_capacity(document.len() + region.len());
        out.push_str(&document[..start]);
        out.push_str(region);
        out.push_str(&document[end..]);
        return out;
    }

    let kept = document.trim_end();
    let mut out = String::from(kept);
    if !kept.is_empty() {
        out.push_str("\n\n");
    }
    out.push_str(&config.start_marker);
    out.push_str(region);
    out.push_str(&config.end_marker);
    out.push('\n');
    out
}

// ---------------------------------------------------------------------------
// Category and entry editing
// ---------------------------------------------------------------------------

/// Index of the section titled `title`, appending a placeholder section at
/// the end of the region first if there is none. The bool is true when the
/// section was created.
pub fn ensure_section(region: &mut ProgressRegion, title: &str, placeholder: &str) -> (usize, bool) {
    if let Some(idx) = region.section_index(title) {
        return (idx, false);
    }

    // Keep a blank line between existing content and the new heading
    let needs_separator = region.lines().last().is_some_and(|l| !l.trim().is_empty());
    if needs_separator {
        match region.sections.last_mut() {
            Some(last) => last.body.push(String::new()),
            None => region.preamble.push(String::new()),
        }
    }
    if region.tail.is_none() {
        region.tail = Some(String::new());
    }

    region.sections.push(CategorySection::new(title, placeholder));
    (region.sections.len() - 1, true)
}

/// Add `entry` to the section titled `title`, creating the section if needed.
///
/// An existing entry with the same name is only ever upgraded from not-done
/// to done; everything else about it is left as is.
pub fn upsert_in_region(
    region: &mut ProgressRegion,
    title: &str,
    entry: &Entry,
    placeholder: &str,
) -> UpsertOutcome {
    let (idx, _) = ensure_section(region, title, placeholder);
    let section = &mut region.sections[idx];

    if let Some((line_idx, current_done)) = section.find_entry(&entry.name) {
        if entry.done && !current_done {
            section.body[line_idx] = mark_done(&section.body[line_idx]);
            return UpsertOutcome::Upgraded;
        }
        return UpsertOutcome::Unchanged;
    }

    let line = entry.to_line();
    match section.body.iter().position(|l| l.trim() == placeholder) {
        Some(line_idx) => section.body[line_idx] = line,
        None => {
            let at = append_point(&section.body);
            section.body.insert(at, line);
        }
    }
    section.body.retain(|l| l.trim() != placeholder);
    UpsertOutcome::Inserted
}

/// Rewrite `- [ ] rest` as `- [x] rest`
fn mark_done(line: &str) -> String {
    match line.strip_prefix("- [ ]") {
        Some(rest) => format!("- [x]{}", rest),
        None => line.to_string(),
    }
}

/// Position just after the last non-blank line, so trailing blank lines
/// stay between this section and the next
fn append_point(body: &[String]) -> usize {
    body.iter()
        .rposition(|l| !l.trim().is_empty())
        .map(|i| i + 1)
        .unwrap_or(0)
}

/// Ensure a `## <title>` section exists in the region text
pub fn ensure_category(region_text: &str, title: &str, config: &ProgressConfig) -> String {
    let mut region = parse_region(region_text);
    let (_, created) = ensure_section(&mut region, title, &config.placeholder);
    if !created {
        return region_text.to_string();
    }
    serialize_region(&region)
}

/// Insert or update a problem line in the region text
pub fn upsert_entry(
    region_text: &str,
    title: &str,
    entry: &Entry,
    config: &ProgressConfig,
) -> (String, UpsertOutcome) {
    let mut region = parse_region(region_text);
    let outcome = upsert_in_region(&mut region, title, entry, &config.placeholder);
    (serialize_region(&region), outcome)
}

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

/// Count checklist lines in region text. The first segment shares a line
/// with the start marker and is never counted.
pub fn count_entries(region_text: &str) -> ProgressCounts {
    let mut counts = ProgressCounts::default();
    for line in region_text.split('\n').skip(1) {
        if line.starts_with("- [x]") {
            counts.done += 1;
            counts.total += 1;
        } else if line.starts_with("- [ ]") {
            counts.total += 1;
        }
    }
    counts
}

/// Rewrite the `- Total: N done / M planned` line under the summary heading
/// from the entries currently in the progress region. Documents without a
/// summary line come back unchanged.
pub fn recompute_summary(document: &str, config: &ProgressConfig) -> String {
    let counts = count_entries(&extract_region(document, config));
    let mut lines: Vec<String> = document.split('\n').map(|l| l.to_string()).collect();

    let mut idx = 0;
    while idx < lines.len() {
        if lines[idx].trim_end() != config.summary_heading {
            idx += 1;
            continue;
        }
        let mut next = idx + 1;
        while next < lines.len() && lines[next].trim().is_empty() {
            next += 1;
        }
        if next < lines.len()
            && let Some(caps) = TOTAL_LINE.captures(&lines[next])
        {
            let trailing = caps.get(1).map_or("", |m| m.as_str()).to_string();
            lines[next] = format!(
                "- Total: {} done / {} planned{}",
                counts.done, config.planned, trailing
            );
        }
        idx = next;
    }

    lines.join("\n")
}

// ---------------------------------------------------------------------------
// Whole-document edit
// ---------------------------------------------------------------------------

/// Record `entry` under `title`: extract the region (or synthesize one),
/// upsert the entry, put the region back and refresh the summary line.
pub fn record_entry(
    document: &str,
    title: &str,
    entry: &Entry,
    config: &ProgressConfig,
) -> RecordResult {
    let region = extract_region(document, config);
    let region = ensure_category(&region, title, config);
    let (region, outcome) = upsert_entry(&region, title, entry, config);
    let counts = count_entries(&region);

    let document = replace_region(document, &region, config);
    let document = recompute_summary(&document, config);

    RecordResult {
        document,
        outcome,
        counts,
    }
}
