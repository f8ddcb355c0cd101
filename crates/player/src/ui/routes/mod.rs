//! Route table and route handlers
//!
//! Route components are thin: they set the page title and render the view.

use dioxus::prelude::*;

mod layout;

use layout::SiteLayout;

use crate::ui::presentation::views::{
    dashboard::DashboardView, forgot_password::ForgotPasswordView, home::HomeView,
    login::LoginView, not_found::NotFoundView, signup::SignupView,
};
use crate::ui::use_platform;

#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(SiteLayout)]
        #[route("/")]
        HomeRoute {},
        #[route("/login")]
        LoginRoute {},
        #[route("/signup")]
        SignupRoute {},
        #[route("/forgot-password")]
        ForgotPasswordRoute {},
        #[route("/dashboard")]
        DashboardRoute {},
        #[route("/:..segments")]
        NotFoundRoute { segments: Vec<String> },
}

/// Set the document title once per mount
fn use_page_title(title: &'static str) {
    let platform = use_platform();
    use_hook(move || platform.set_page_title(title));
}

#[component]
fn HomeRoute() -> Element {
    use_page_title("Online Casino");
    rsx! { HomeView {} }
}

#[component]
fn LoginRoute() -> Element {
    use_page_title("Log in");
    rsx! { LoginView {} }
}

#[component]
fn SignupRoute() -> Element {
    use_page_title("Create account");
    rsx! { SignupView {} }
}

#[component]
fn ForgotPasswordRoute() -> Element {
    use_page_title("Reset password");
    rsx! { ForgotPasswordView {} }
}

#[component]
fn DashboardRoute() -> Element {
    use_page_title("Lobby");
    rsx! { DashboardView {} }
}

#[component]
fn NotFoundRoute(segments: Vec<String>) -> Element {
    use_page_title("Page not found");
    rsx! { NotFoundView { segments: segments } }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_render_to_expected_paths() {
        assert_eq!(Route::HomeRoute {}.to_string(), "/");
        assert_eq!(Route::SignupRoute {}.to_string(), "/signup");
        assert_eq!(Route::ForgotPasswordRoute {}.to_string(), "/forgot-password");
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        let route: Route = "/nowhere/at-all".parse().expect("catch-all route");
        assert_eq!(
            route,
            Route::NotFoundRoute {
                segments: vec!["nowhere".to_string(), "at-all".to_string()]
            }
        );
    }

    #[test]
    fn known_paths_parse() {
        let route: Route = "/dashboard".parse().expect("dashboard route");
        assert_eq!(route, Route::DashboardRoute {});
    }
}
