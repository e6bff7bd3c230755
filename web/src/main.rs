use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::core::route::ReportSection;
use ui::views::{Home, JobLanding, JobResult, PageNotFound};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
    #[route("/jobs/:id")]
    JobLanding { id: u64 },
    #[route("/jobs/:id/:section/:sub_section")]
    JobResult { id: u64, section: ReportSection, sub_section: String },
    #[route("/:..route")]
    PageNotFound { route: Vec<String> },
}

const FAVICON: Asset = asset!("/assets/favicon.ico");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn nav_home(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Home {},
        "{label}"
    })
}
fn nav_website_job(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::JobLanding { id: 101 },
        "{label}"
    })
}
fn nav_hash_job(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::JobLanding { id: 102 },
        "{label}"
    })
}
fn nav_killed_job(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::JobLanding { id: 103 },
        "{label}"
    })
}

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    {
        ui::i18n::init();
        register_nav(NavBuilder {
            home: nav_home,
            website_job: nav_website_job,
            hash_job: nav_hash_job,
            killed_job: nav_killed_job,
        });
    }

    // Global reactive language code; AppNavbar updates it on selection.
    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// A web-specific Router around the shared `Navbar` component
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar { }
        Outlet::<Route> {}
    }
}
