//! Output rows and human-readable reports.

use std::fmt::Write;

use chrono::NaiveDate;
use prio_core::{Energy, Task};
use serde::Serialize;

/// Round to three decimals for output.
fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// One computed task as written to CSV and JSON output.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TaskRow {
    /// Task title
    pub title: String,
    /// Owner
    pub owner: String,
    /// Deadline, empty when absent
    pub deadline: Option<NaiveDate>,
    /// Signed days left
    pub days_to_deadline: Option<i64>,
    /// Hours
    pub time_est: f64,
    /// Energy level
    pub energy: Energy,
    /// Layer label as given
    pub layer: String,
    /// Impact
    pub impact: f64,
    /// Leverage
    pub leverage: f64,
    /// Effort
    pub effort: f64,
    /// Layer weight, 3 decimals
    pub layer_weight: f64,
    /// Urgency multiplier, 3 decimals
    #[serde(rename = "UM")]
    pub urgency_multiplier: f64,
    /// Importance core, 3 decimals
    pub importance_core: f64,
    /// Score, 3 decimals
    pub score: f64,
    /// Quadrant label
    pub quadrant: String,
    /// Tag label, empty when none
    pub tag: String,
    /// Notes
    pub notes: String,
}

impl From<&Task> for TaskRow {
    fn from(t: &Task) -> Self {
        Self {
            title: t.title.clone(),
            owner: t.owner.clone(),
            deadline: t.deadline,
            days_to_deadline: t.days_to_deadline,
            time_est: t.time_est,
            energy: t.energy,
            layer: t.layer.clone(),
            impact: t.impact,
            leverage: t.leverage,
            effort: t.effort,
            layer_weight: round3(t.layer_weight),
            urgency_multiplier: round3(t.urgency_multiplier),
            importance_core: round3(t.importance_core),
            score: round3(t.score),
            quadrant: t.quadrant_label().to_string(),
            tag: t.tag_label().to_string(),
            notes: t.notes.clone(),
        }
    }
}

/// Input columns only, as accepted by the loader.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct InputRow {
    /// Task title
    pub title: String,
    /// Owner
    pub owner: String,
    /// Deadline, empty when absent
    pub deadline: Option<NaiveDate>,
    /// Hours
    pub time_est: f64,
    /// Energy level
    pub energy: Energy,
    /// Layer label
    pub layer: String,
    /// Impact
    pub impact: f64,
    /// Leverage
    pub leverage: f64,
    /// Effort
    pub effort: f64,
    /// Notes
    pub notes: String,
}

impl From<&Task> for InputRow {
    fn from(t: &Task) -> Self {
        Self {
            title: t.title.clone(),
            owner: t.owner.clone(),
            deadline: t.deadline,
            time_est: t.time_est,
            energy: t.energy,
            layer: t.layer.clone(),
            impact: t.impact,
            leverage: t.leverage,
            effort: t.effort,
            notes: t.notes.clone(),
        }
    }
}

/// Bucket sizes of one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Counts {
    /// Tasks loaded
    pub total: usize,
    /// Tasks owned by someone else
    pub delegated: usize,
    /// Tasks not worth doing
    pub dropped: usize,
}

/// Machine-readable result of one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessReport {
    /// Computed tasks in priority order
    pub prioritized: Vec<TaskRow>,
    /// Daily MIT list, when requested
    pub mits: Option<Vec<TaskRow>>,
    /// Bucket sizes
    pub counts: Counts,
}

impl ProcessReport {
    /// Build a report from computed tasks.
    pub fn new(prioritized: &[Task], mits: Option<&[Task]>, counts: Counts) -> Self {
        Self {
            prioritized: prioritized.iter().map(TaskRow::from).collect(),
            mits: mits.map(|m| m.iter().map(TaskRow::from).collect()),
            counts,
        }
    }
}

/// Render the daily MIT list as Markdown.
pub fn render_mits_markdown(mits: &[Task]) -> String {
    let mut out = String::from("# Today's MIT (Most Important Tasks)\n\n");
    if mits.is_empty() {
        out.push_str("_No suitable MITs found._\n");
        return out;
    }

    for (i, t) in mits.iter().enumerate() {
        let tag = match t.tag_label() {
            "" => "—",
            label => label,
        };
        // Writing to a String never fails.
        let _ = writeln!(out, "## {}. {}", i + 1, t.title);
        let _ = writeln!(
            out,
            "- Layer: **{}** | Tag: **{}** | Quadrant: **{}**",
            t.layer,
            tag,
            t.quadrant_label()
        );
        let _ = writeln!(
            out,
            "- Score: **{:.2}** | TimeEst: **{} h** | Effort: **{}** | Impact: **{}** | Leverage: **{}**",
            t.score, t.time_est, t.effort, t.impact, t.leverage
        );
        if let Some(deadline) = t.deadline {
            let days = t
                .days_to_deadline
                .map(|d| d.to_string())
                .unwrap_or_default();
            let _ = writeln!(out, "- Deadline: **{}** (D-**{}**)", deadline, days);
        }
        if !t.notes.is_empty() {
            let _ = writeln!(out, "- Notes: {}", t.notes);
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use prio_core::{Quadrant, Tag};

    fn computed() -> Task {
        let mut task = Task::new("Backups")
            .with_layer("Fundament")
            .with_deadline(NaiveDate::from_ymd_opt(2025, 5, 2).unwrap())
            .with_notes("rclone + cron");
        task.layer_weight = 1.3;
        task.urgency_multiplier = 1.6;
        task.importance_core = 4.123456;
        task.score = 4.038153;
        task.quadrant = Some(Quadrant::ImportantUrgent);
        task.tag = Some(Tag::QuickWin);
        task.days_to_deadline = Some(1);
        task
    }

    #[test]
    fn test_row_rounds_derived_fields() {
        let row = TaskRow::from(&computed());
        assert_eq!(row.importance_core, 4.123);
        assert_eq!(row.score, 4.038);
        assert_eq!(row.quadrant, "Important+Urgent");
        assert_eq!(row.tag, "QuickWin");
    }

    #[test]
    fn test_report_json_shape() {
        let task = computed();
        let counts = Counts { total: 3, delegated: 1, dropped: 1 };
        let report = ProcessReport::new(std::slice::from_ref(&task), None, counts);
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["counts"]["total"], 3);
        assert!(json["mits"].is_null());
        assert_eq!(json["prioritized"][0]["Title"], "Backups");
        assert_eq!(json["prioritized"][0]["UM"], 1.6);
        assert_eq!(json["prioritized"][0]["Deadline"], "2025-05-02");
        assert_eq!(json["prioritized"][0]["Energy"], "medium");
    }

    #[test]
    fn test_markdown_empty() {
        let md = render_mits_markdown(&[]);
        assert!(md.starts_with("# Today's MIT"));
        assert!(md.contains("_No suitable MITs found._"));
    }

    #[test]
    fn test_markdown_entries() {
        let mut plain = Task::new("Tidy desk");
        plain.quadrant = Some(Quadrant::NotImportantNotUrgent);

        let md = render_mits_markdown(&[computed(), plain]);
        assert!(md.contains("## 1. Backups"));
        assert!(md.contains("Tag: **QuickWin**"));
        assert!(md.contains("Score: **4.04**"));
        assert!(md.contains("- Deadline: **2025-05-02** (D-**1**)"));
        assert!(md.contains("- Notes: rclone + cron"));
        assert!(md.contains("## 2. Tidy desk"));
        assert!(md.contains("Tag: **—**"));
        assert_eq!(md.matches("- Deadline").count(), 1);
    }
}
