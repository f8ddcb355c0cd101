//! Login view

use dioxus::prelude::*;

use reelhouse_domain::{ErrorMap, LoginField, LoginForm};

use crate::application::services::LoginOutcome;
use crate::ui::presentation::components::common::{Banner, BannerKind, CheckboxField, FormField};
use crate::ui::presentation::components::icon::IconKind;
use crate::ui::presentation::services::{use_auth_service, use_preference_service};
use crate::ui::presentation::state::SessionState;
use crate::ui::routes::Route;

#[component]
pub fn LoginView() -> Element {
    let auth_service = use_auth_service();
    let preferences = use_preference_service();
    let mut session = use_context::<SessionState>();
    let navigator = use_navigator();

    let remembered = use_hook(|| preferences.remembered_email());
    let mut email = use_signal(|| remembered.clone().unwrap_or_default());
    let mut password = use_signal(String::new);
    let mut remember_me = use_signal(|| remembered.is_some());
    let mut errors: Signal<ErrorMap<LoginField>> = use_signal(ErrorMap::new);
    let mut is_submitting = use_signal(|| false);
    let mut error_message: Signal<Option<String>> = use_signal(|| None);

    let on_submit = move |e: FormEvent| {
        e.prevent_default();
        if *is_submitting.read() {
            return;
        }

        let form = LoginForm {
            email: email.read().clone(),
            password: password.read().clone(),
            remember_me: *remember_me.read(),
        };
        let svc = auth_service.clone();
        let prefs = preferences.clone();

        is_submitting.set(true);
        error_message.set(None);
        spawn(async move {
            match svc.login(&form).await {
                LoginOutcome::Invalid(found) => errors.set(found),
                LoginOutcome::SignedIn(account) => {
                    errors.set(ErrorMap::new());
                    prefs.remember_email(&form.email, form.remember_me);
                    session.sign_in(account);
                    navigator.push(Route::DashboardRoute {});
                }
                LoginOutcome::Failed(message) => {
                    errors.set(ErrorMap::new());
                    error_message.set(Some(message));
                }
            }
            is_submitting.set(false);
        });
    };

    let submitting = *is_submitting.read();

    rsx! {
        div { class: "auth-page",
            div { class: "auth-card",
                header { class: "auth-header",
                    h1 { "Welcome back" }
                    p { class: "muted", "Log in to pick up where you left off." }
                }

                if let Some(message) = error_message.read().clone() {
                    Banner { kind: BannerKind::Error, message: message }
                }

                form { class: "auth-form", novalidate: true, onsubmit: on_submit,
                    FormField {
                        id: "login-email",
                        label: "Email",
                        value: email.read().clone(),
                        input_type: "email",
                        autocomplete: "email",
                        icon: Some(IconKind::Mail),
                        error: errors.read().message(LoginField::Email),
                        oninput: move |value: String| email.set(value),
                    }
                    FormField {
                        id: "login-password",
                        label: "Password",
                        value: password.read().clone(),
                        input_type: "password",
                        autocomplete: "current-password",
                        icon: Some(IconKind::Lock),
                        error: errors.read().message(LoginField::Password),
                        oninput: move |value: String| password.set(value),
                    }
                    div { class: "auth-row",
                        CheckboxField {
                            id: "remember-me",
                            checked: *remember_me.read(),
                            error: None,
                            onchange: move |checked: bool| remember_me.set(checked),
                            "Remember me"
                        }
                        Link { to: Route::ForgotPasswordRoute {}, class: "link", "Forgot password?" }
                    }
                    button {
                        class: "btn btn-primary btn-block",
                        r#type: "submit",
                        disabled: submitting,
                        if submitting {
                            span { class: "spinner" }
                            "Logging in..."
                        } else {
                            "Log in"
                        }
                    }
                }

                p { class: "auth-switch",
                    "New to Reelhouse? "
                    Link { to: Route::SignupRoute {}, "Create an account" }
                }
            }
        }
    }
}
