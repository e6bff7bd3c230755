//! Route state for the report area and the redirect decision table.
//!
//! The URL owns tab selection: `/jobs/{id}/{section}/{sub_section}` is the
//! whole selection state. `resolve_route` compares that state to the derived
//! tab set and answers with at most one corrective navigation; the hosting
//! component replays it through the router. Keeping the decision pure means
//! the whole redirect behavior is testable without a rendering environment.

use std::fmt;
use std::fmt::Write as _;
use std::str::FromStr;

use crate::core::job::PluginKind;
use crate::core::tabs::{TabId, UiTab, LOADING_TAB_ID, NO_VISUALIZER_TAB_ID};

/// Which of the two tab sets the URL is addressing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportSection {
    Raw,
    #[default]
    Visualizer,
}

impl ReportSection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Raw => "raw",
            Self::Visualizer => "visualizer",
        }
    }
}

impl fmt::Display for ReportSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for unrecognized section segments in a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSectionError(String);

impl fmt::Display for ParseSectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized report section `{}`", self.0)
    }
}

impl FromStr for ReportSection {
    type Err = ParseSectionError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "raw" => Ok(Self::Raw),
            "visualizer" => Ok(Self::Visualizer),
            other => Err(ParseSectionError(other.to_string())),
        }
    }
}

/// Who performed the most recent navigation on this job view.
///
/// The resolver only corrects the URL after its own (or the router's
/// initial) navigation. Once the user has picked a tab themselves, later
/// report arrivals must not yank the selection away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOrigin {
    System,
    User,
}

/// The route state the resolver reads at firing time.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteSnapshot {
    pub section: ReportSection,
    /// Decoded sub-section segment; empty when the URL carries none.
    pub sub_section: String,
    pub origin: NavOrigin,
}

/// A corrective navigation the resolver wants performed.
#[derive(Debug, Clone, PartialEq)]
pub struct NavCommand {
    pub job_id: u64,
    pub section: ReportSection,
    pub sub_section: String,
}

impl NavCommand {
    /// Serialize to a router path. The sub-section is percent-encoded since
    /// visualizer names are arbitrary strings.
    pub fn to_path(&self) -> String {
        format!(
            "/jobs/{}/{}/{}",
            self.job_id,
            self.section,
            encode_segment(&self.sub_section)
        )
    }
}

/// Percent-encode a path segment, keeping the unreserved characters.
pub fn encode_segment(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        if is_unreserved(byte) {
            out.push(byte as char);
        } else {
            let _ = write!(out, "%{byte:02X}");
        }
    }
    out
}

fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric()
        || matches!(
            byte,
            b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')'
        )
}

/// Decide whether the current route needs correcting against the derived
/// tab set. Returns at most one command per call; first matching rule wins:
///
/// 1. no sub-section selected: go to the first UI tab;
/// 2. parked on `loading` while the first UI tab is a real one: the
///    visualizers have landed, go to the first UI tab;
/// 3. parked on `no-visualizer`: this job will never have UI tabs, go to the
///    first raw tab;
/// 4. sub-section matches nothing in the addressed set (stale deep link or a
///    renamed visualizer): go to that set's first tab.
///
/// Never fires while the tab set is empty or right after a user-initiated
/// navigation; the caller re-invokes it when the tab set next changes.
pub fn resolve_route(job_id: u64, ui_tabs: &[UiTab], route: &RouteSnapshot) -> Option<NavCommand> {
    if ui_tabs.is_empty() || route.origin == NavOrigin::User {
        return None;
    }

    let first_ui = &ui_tabs[0].id;
    let to_first_ui = || {
        Some(NavCommand {
            job_id,
            section: ReportSection::Visualizer,
            sub_section: first_ui.as_str().to_string(),
        })
    };
    let to_first_raw = || {
        Some(NavCommand {
            job_id,
            section: ReportSection::Raw,
            sub_section: PluginKind::Analyzer.tab_id().to_string(),
        })
    };

    if route.sub_section.is_empty() {
        return to_first_ui();
    }

    if route.sub_section == LOADING_TAB_ID && *first_ui != TabId::Loading {
        return to_first_ui();
    }

    if route.sub_section == NO_VISUALIZER_TAB_ID {
        return to_first_raw();
    }

    match route.section {
        ReportSection::Visualizer => {
            let known = ui_tabs
                .iter()
                .any(|tab| tab.id.as_str() == route.sub_section);
            if known {
                None
            } else {
                to_first_ui()
            }
        }
        ReportSection::Raw => {
            if PluginKind::from_tab_id(&route.sub_section).is_some() {
                None
            } else {
                to_first_raw()
            }
        }
    }
}
