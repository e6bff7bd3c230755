//! Shared UI crate for Casework. Most cross-platform logic and views live here.

use dioxus::prelude::*;

/// Shared theme stylesheet. The web shell links it; the desktop shell embeds
/// the same file at compile time.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");

pub mod core;
pub mod i18n;
pub mod jobs;
pub mod views;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;

    // Status badges shared by the job header, tab strip and report tables
    pub mod status_icon;
    pub use status_icon::JobStatusIcon;
    pub use status_icon::ReportStatusIcon;
}
