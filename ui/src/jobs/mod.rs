//! Job results surface: overview layout, metadata card, report tables and
//! visualizer panes for a single analysis job.

mod overview;
mod sections;
mod tables;
mod visualizer;

pub use overview::JobOverview;
pub use sections::{JobActionsBar, JobInfoCard, JobIsRunningAlert};
pub use tables::ReportTable;
pub use visualizer::VisualizerPanel;
