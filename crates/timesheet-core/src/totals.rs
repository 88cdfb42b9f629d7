//! Running hour totals per project and task.
//!
//! Projects and tasks keep first-seen order so the summary lists them in the
//! order they appear in the timesheet.

use std::collections::HashMap;

use crate::extract::ProjectEntry;

/// Project hours not covered by task totals are only reported above this.
pub const OTHER_TOLERANCE: f64 = 0.01;

/// Accumulated hours for one task of a project.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskTotal {
    pub task: String,
    pub hours: f64,
}

/// Accumulated hours for one project.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectTotal {
    pub project: String,
    pub hours: f64,
    pub tasks: Vec<TaskTotal>,
}

impl ProjectTotal {
    fn new(project: &str) -> Self {
        Self {
            project: project.to_string(),
            hours: 0.0,
            tasks: Vec::new(),
        }
    }

    /// Hours recorded for `task`, if it has been seen.
    pub fn task(&self, task: &str) -> Option<f64> {
        self.tasks.iter().find(|t| t.task == task).map(|t| t.hours)
    }

    /// Sum of all task totals.
    pub fn task_hours(&self) -> f64 {
        self.tasks.iter().map(|t| t.hours).sum()
    }

    /// Project hours not attributed to any task, when above [`OTHER_TOLERANCE`].
    pub fn unattributed_hours(&self) -> Option<f64> {
        let difference = self.hours - self.task_hours();
        (difference > OTHER_TOLERANCE).then_some(difference)
    }

    fn add_task(&mut self, task: &str, hours: f64) {
        if let Some(existing) = self.tasks.iter_mut().find(|t| t.task == task) {
            existing.hours += hours;
        } else {
            self.tasks.push(TaskTotal {
                task: task.to_string(),
                hours,
            });
        }
    }
}

/// Hour totals for a whole run.
#[derive(Debug, Clone, Default)]
pub struct Totals {
    projects: Vec<ProjectTotal>,
    index: HashMap<String, usize>,
}

impl Totals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds every segment of `entry` to its task and the line total to the
    /// project. Returns the line total.
    pub fn record(&mut self, entry: &ProjectEntry) -> f64 {
        let slot = match self.index.get(&entry.project) {
            Some(&slot) => slot,
            None => {
                self.projects.push(ProjectTotal::new(&entry.project));
                let slot = self.projects.len() - 1;
                self.index.insert(entry.project.clone(), slot);
                slot
            }
        };
        let project = &mut self.projects[slot];

        let mut line_total = 0.0;
        for segment in &entry.segments {
            project.add_task(&segment.task, segment.hours);
            line_total += segment.hours;
        }
        project.hours += line_total;
        line_total
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Projects in first-seen order.
    pub fn projects(&self) -> &[ProjectTotal] {
        &self.projects
    }

    pub fn project(&self, project: &str) -> Option<&ProjectTotal> {
        self.index.get(project).map(|&slot| &self.projects[slot])
    }

    /// Sum of all project totals.
    pub fn total_hours(&self) -> f64 {
        self.projects.iter().map(|p| p.hours).sum()
    }

    pub fn into_projects(self) -> Vec<ProjectTotal> {
        self.projects
    }
}
