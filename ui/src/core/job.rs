//! Job and plugin-report data model.
//!
//! The job shape mirrors the reporting API: a job carries four plugin
//! categories (analyzer, connector, pivot, visualizer), each with the list of
//! plugins requested for execution and the reports those plugins have
//! produced so far. Reports arrive asynchronously while the job runs, so the
//! two lists for a category are not index-aligned.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a whole job.
///
/// The `*_running` states surface which plugin category the pipeline is
/// currently working through; all of them count as "running" for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Pending,
    Running,
    AnalyzersRunning,
    ConnectorsRunning,
    PivotsRunning,
    VisualizersRunning,
    Success,
    Failed,
    Killed,
}

impl JobStatus {
    /// Final statuses mean no further reports will arrive for this job.
    pub fn is_final(self) -> bool {
        matches!(self, Self::Success | Self::Failed | Self::Killed)
    }

    /// Short human label for badges and the job header.
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Running => "running",
            Self::AnalyzersRunning => "analyzers running",
            Self::ConnectorsRunning => "connectors running",
            Self::PivotsRunning => "pivots running",
            Self::VisualizersRunning => "visualizers running",
            Self::Success => "success",
            Self::Failed => "failed",
            Self::Killed => "killed",
        }
    }

    /// CSS modifier for the status icon. Example: `status-icon--running`.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Success => "success",
            Self::Failed => "failed",
            Self::Killed => "killed",
            _ => "running",
        }
    }
}

/// Status of a single plugin report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Pending,
    Running,
    Success,
    Failed,
    Killed,
}

impl ReportStatus {
    pub fn is_final(self) -> bool {
        matches!(self, Self::Success | Self::Failed | Self::Killed)
    }

    pub fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Running => "running",
            Self::Success => "success",
            Self::Failed => "failed",
            Self::Killed => "killed",
        }
    }

    pub fn css_class(self) -> &'static str {
        self.label()
    }
}

/// One plugin's output on a job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginReport {
    pub name: String,
    pub status: ReportStatus,
    #[serde(default)]
    pub errors: Vec<String>,
    #[serde(default)]
    pub process_time: Option<f64>,
    #[serde(default)]
    pub report: serde_json::Value,
}

/// The four plugin categories a job executes, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluginKind {
    Analyzer,
    Connector,
    Pivot,
    Visualizer,
}

impl PluginKind {
    pub const ALL: [PluginKind; 4] = [
        Self::Analyzer,
        Self::Connector,
        Self::Pivot,
        Self::Visualizer,
    ];

    /// URL sub-section id for this category's raw tab.
    pub fn tab_id(self) -> &'static str {
        match self {
            Self::Analyzer => "analyzer",
            Self::Connector => "connector",
            Self::Pivot => "pivot",
            Self::Visualizer => "visualizer",
        }
    }

    /// Plural heading used on tab labels and table headers.
    pub fn title(self) -> &'static str {
        match self {
            Self::Analyzer => "Analyzers",
            Self::Connector => "Connectors",
            Self::Pivot => "Pivots",
            Self::Visualizer => "Visualizers",
        }
    }

    pub fn from_tab_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tab_id() == id)
    }
}

/// One analysis run with its metadata and per-category plugin reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: u64,
    pub status: JobStatus,
    pub observable_name: String,
    pub observable_classification: String,
    pub tlp: String,
    pub user: String,
    pub received_request_time: String,
    #[serde(default)]
    pub finished_analysis_time: Option<String>,
    #[serde(default)]
    pub playbook: Option<String>,
    #[serde(default)]
    pub analyzers_to_execute: Vec<String>,
    #[serde(default)]
    pub connectors_to_execute: Vec<String>,
    #[serde(default)]
    pub pivots_to_execute: Vec<String>,
    #[serde(default)]
    pub visualizers_to_execute: Vec<String>,
    #[serde(default)]
    pub analyzer_reports: Vec<PluginReport>,
    #[serde(default)]
    pub connector_reports: Vec<PluginReport>,
    #[serde(default)]
    pub pivot_reports: Vec<PluginReport>,
    #[serde(default)]
    pub visualizer_reports: Vec<PluginReport>,
}

impl Job {
    /// Plugins requested for execution in the given category.
    pub fn requested(&self, kind: PluginKind) -> &[String] {
        match kind {
            PluginKind::Analyzer => &self.analyzers_to_execute,
            PluginKind::Connector => &self.connectors_to_execute,
            PluginKind::Pivot => &self.pivots_to_execute,
            PluginKind::Visualizer => &self.visualizers_to_execute,
        }
    }

    /// Reports produced so far in the given category.
    pub fn reports(&self, kind: PluginKind) -> &[PluginReport] {
        match kind {
            PluginKind::Analyzer => &self.analyzer_reports,
            PluginKind::Connector => &self.connector_reports,
            PluginKind::Pivot => &self.pivot_reports,
            PluginKind::Visualizer => &self.visualizer_reports,
        }
    }

    /// How many reports in the category have settled. Drives the `3/5`
    /// badge next to each raw tab label.
    pub fn reported_count(&self, kind: PluginKind) -> usize {
        self.reports(kind)
            .iter()
            .filter(|report| report.status.is_final())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_job() -> Job {
        serde_json::from_value(json!({
            "id": 7,
            "status": "analyzers_running",
            "observable_name": "example.org",
            "observable_classification": "domain",
            "tlp": "CLEAR",
            "user": "ana",
            "received_request_time": "2026-03-17T09:30:05Z",
            "analyzers_to_execute": ["Classic_DNS", "Shodan"],
            "visualizers_to_execute": ["Domain overview"],
            "analyzer_reports": [
                {"name": "Classic_DNS", "status": "success", "process_time": 0.4},
                {"name": "Shodan", "status": "running"}
            ]
        }))
        .unwrap()
    }

    #[test]
    fn final_statuses() {
        assert!(JobStatus::Success.is_final());
        assert!(JobStatus::Failed.is_final());
        assert!(JobStatus::Killed.is_final());
        assert!(!JobStatus::Pending.is_final());
        assert!(!JobStatus::VisualizersRunning.is_final());
    }

    #[test]
    fn running_states_share_a_css_modifier() {
        assert_eq!(JobStatus::Running.css_class(), "running");
        assert_eq!(JobStatus::AnalyzersRunning.css_class(), "running");
        assert_eq!(JobStatus::Failed.css_class(), "failed");
    }

    #[test]
    fn job_deserializes_with_partial_fields() {
        let job = sample_job();
        assert_eq!(job.id, 7);
        assert_eq!(job.status, JobStatus::AnalyzersRunning);
        assert!(job.connector_reports.is_empty());
        assert!(job.finished_analysis_time.is_none());
        assert_eq!(job.analyzer_reports[1].errors, Vec::<String>::new());
    }

    #[test]
    fn reported_count_skips_unfinished_reports() {
        let job = sample_job();
        assert_eq!(job.reported_count(PluginKind::Analyzer), 1);
        assert_eq!(job.requested(PluginKind::Analyzer).len(), 2);
        assert_eq!(job.reported_count(PluginKind::Visualizer), 0);
    }

    #[test]
    fn plugin_kind_round_trips_tab_ids() {
        for kind in PluginKind::ALL {
            assert_eq!(PluginKind::from_tab_id(kind.tab_id()), Some(kind));
        }
        assert_eq!(PluginKind::from_tab_id("loading"), None);
    }
}
