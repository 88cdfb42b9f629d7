//! Task and time extraction from `Project: ...` lines.
//!
//! A project line looks like
//!
//! ```text
//! Acme: @office: #dev: fix login 1h 30m | #mtg: standup 15m
//! ```
//!
//! Everything after the first `": "` is split on `|` into segments. Each
//! segment may carry a `#task:` tag and any number of `<n>h` / `<n>m`
//! quantities, which are summed into hours.

use crate::patterns::{HOURS, MINUTES, TASK_TAG};

/// Bucket for segments without a `#task:` tag, and for untagged project time.
pub const OTHER_TASK: &str = "Other";

/// Location markers stripped from project lines unless configured otherwise.
pub const DEFAULT_LOCATION_TAGS: [&str; 2] = ["@smartworking:", "@office:"];

const PROJECT_SEPARATOR: &str = ": ";
const SEGMENT_SEPARATOR: char = '|';

/// One `|`-delimited piece of a project line.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskSegment {
    /// Task name without the leading `#`, or [`OTHER_TASK`].
    pub task: String,
    /// Segment text with the tag and time quantities removed.
    pub description: String,
    /// Hours recorded in this segment.
    pub hours: f64,
}

/// A parsed project line.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectEntry {
    pub project: String,
    pub segments: Vec<TaskSegment>,
}

impl ProjectEntry {
    /// Sum of all segment hours, in segment order.
    pub fn total_hours(&self) -> f64 {
        self.segments.iter().map(|s| s.hours).sum()
    }
}

/// Parses a project line.
///
/// Returns `None` when the line has no `": "` separator. Segments that are
/// empty after trimming are dropped.
pub fn parse_project_line<S: AsRef<str>>(
    line: &str,
    location_tags: &[S],
) -> Option<ProjectEntry> {
    let (project, remainder) = line.trim().split_once(PROJECT_SEPARATOR)?;

    let remainder = location_tags
        .iter()
        .map(AsRef::<str>::as_ref)
        .filter(|tag| !tag.is_empty())
        .fold(remainder.to_string(), |rest, tag| rest.replace(tag, ""));

    let segments = remainder
        .split(SEGMENT_SEPARATOR)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(parse_segment)
        .collect();

    Some(ProjectEntry {
        project: project.to_string(),
        segments,
    })
}

/// Parses a single segment: task tag, hours and description.
pub fn parse_segment(segment: &str) -> TaskSegment {
    let segment = segment.trim();
    let tag = TASK_TAG
        .captures(segment)
        .map(|caps| caps["task"].to_string());

    let hours = segment_hours(segment);

    // An untagged segment drops a literal `Other` label instead.
    let token = tag
        .as_ref()
        .map_or_else(|| OTHER_TASK.to_string(), |raw| format!("#{raw}"));

    let mut description = HOURS.replace_all(segment, "").into_owned();
    description = MINUTES.replace_all(&description, "").into_owned();
    let description = description
        .replace(&format!("{token}:"), "")
        .replace(&token, "");
    let description = description
        .trim_matches(|c| matches!(c, ' ' | ':' | '|'))
        .to_string();

    let task = tag
        .map(|raw| raw.trim().to_string())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| OTHER_TASK.to_string());

    TaskSegment {
        task,
        description,
        hours,
    }
}

/// Total hours of all `<n>h` and `<n>m` quantities in `text`.
pub fn segment_hours(text: &str) -> f64 {
    let hours: f64 = HOURS
        .captures_iter(text)
        .filter_map(|caps| caps["value"].parse::<f64>().ok())
        .sum();
    let minutes: f64 = MINUTES
        .captures_iter(text)
        .filter_map(|caps| caps["value"].parse::<f64>().ok())
        .sum();
    hours + minutes / 60.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Option<ProjectEntry> {
        parse_project_line(line, &DEFAULT_LOCATION_TAGS[..])
    }

    fn assert_hours(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}h, got {actual}h"
        );
    }

    #[test]
    fn converts_time_units() {
        assert_hours(segment_hours("2h"), 2.0);
        assert_hours(segment_hours("30m"), 0.5);
        assert_hours(segment_hours("1h 30m"), 1.5);
        assert_hours(segment_hours("1h 1h 15m 15m"), 2.5);
        assert_hours(segment_hours("no time here"), 0.0);
    }

    #[test]
    fn two_tagged_segments() {
        let entry = parse("ProjA: #dev: fix bug 1h | #mtg: standup 15m").unwrap();
        assert_eq!(entry.project, "ProjA");
        assert_eq!(
            entry.segments,
            vec![
                TaskSegment {
                    task: "dev".to_string(),
                    description: "fix bug".to_string(),
                    hours: 1.0,
                },
                TaskSegment {
                    task: "mtg".to_string(),
                    description: "standup".to_string(),
                    hours: 0.25,
                },
            ]
        );
        assert_hours(entry.total_hours(), 1.25);
    }

    #[test]
    fn untagged_segment_goes_to_other() {
        let entry = parse("ProjB: general work 2h").unwrap();
        let segment = &entry.segments[0];
        assert_eq!(segment.task, OTHER_TASK);
        assert_eq!(segment.description, "general work");
        assert_hours(segment.hours, 2.0);
    }

    #[test]
    fn line_without_separator_is_ignored() {
        assert!(parse("just some notes").is_none());
        assert!(parse("Proj:no-space 1h").is_none());
        assert!(parse("Proj:").is_none());
    }

    #[test]
    fn location_tags_are_stripped() {
        let entry = parse("Acme: @smartworking: #dev: api 2h").unwrap();
        assert_eq!(entry.segments[0].task, "dev");
        assert_eq!(entry.segments[0].description, "api");

        let entry = parse("Acme: @office: onsite 1h").unwrap();
        assert_eq!(entry.segments[0].task, OTHER_TASK);
        assert_eq!(entry.segments[0].description, "onsite");
    }

    #[test]
    fn custom_location_tags() {
        let entry = parse_project_line("Acme: @home: #dev: api 2h", &["@home:"][..])
            .unwrap();
        assert_eq!(entry.segments[0].description, "api");

        let kept = parse_project_line("Acme: @home: #dev: api 2h", &[] as &[&str]).unwrap();
        let description = &kept.segments[0].description;
        assert!(description.starts_with("@home:"), "got {description:?}");
        assert!(description.ends_with("api"), "got {description:?}");
    }

    #[test]
    fn empty_segments_are_dropped() {
        let entry = parse("Acme: #dev: a 1h || | #ops: b 30m |").unwrap();
        assert_eq!(entry.segments.len(), 2);
        assert_hours(entry.total_hours(), 1.5);
    }

    #[test]
    fn project_with_no_segments() {
        let entry = parse("Acme: | ").unwrap();
        assert!(entry.segments.is_empty());
        assert_hours(entry.total_hours(), 0.0);
    }

    #[test]
    fn segment_without_time_contributes_zero() {
        let segment = parse_segment("#docs: wrote notes");
        assert_eq!(segment.task, "docs");
        assert_eq!(segment.description, "wrote notes");
        assert_hours(segment.hours, 0.0);
    }

    #[test]
    fn explicit_other_label_is_not_repeated() {
        let segment = parse_segment("Other: misc admin 1h");
        assert_eq!(segment.task, OTHER_TASK);
        assert_eq!(segment.description, "misc admin");
        assert_hours(segment.hours, 1.0);
    }

    #[test]
    fn tagged_segment_keeps_other_in_description() {
        let segment = parse_segment("#dev: Other: cleanup 30m");
        assert_eq!(segment.task, "dev");
        assert_eq!(segment.description, "Other: cleanup");
    }

    #[test]
    fn non_ascii_digits_are_not_time() {
        let segment = parse_segment("#dev: \u{0663}h fix");
        assert_hours(segment.hours, 0.0);
        assert_eq!(segment.description, "\u{0663}h fix");
    }

    #[test]
    fn multi_word_task_tag() {
        let segment = parse_segment("#code review: PR 42 45m");
        assert_eq!(segment.task, "code review");
        assert_eq!(segment.description, "PR 42");
        assert_hours(segment.hours, 0.75);
    }

    #[test]
    fn description_keeps_interior_text_and_drops_trailing_colons() {
        let segment = parse_segment("#dev: refactor: parser: 1h 30m");
        assert_eq!(segment.task, "dev");
        assert_eq!(segment.description, "refactor: parser");
        assert_hours(segment.hours, 1.5);
    }

    #[test]
    fn time_with_space_before_unit() {
        let segment = parse_segment("#ops: deploy 2 h 10 m");
        assert_eq!(segment.description, "deploy");
        assert_hours(segment.hours, 2.0 + 10.0 / 60.0);
    }

    #[test]
    fn only_first_separator_splits_project() {
        let entry = parse("Acme: #dev: note: with colons 1h").unwrap();
        assert_eq!(entry.project, "Acme");
        assert_eq!(entry.segments[0].description, "note: with colons");
    }
}
