//! Forgot-password view

use dioxus::prelude::*;

use reelhouse_domain::{ErrorMap, PasswordResetForm, ResetField};

use crate::application::services::ResetOutcome;
use crate::ui::presentation::components::common::{Banner, BannerKind, FormField};
use crate::ui::presentation::components::icon::IconKind;
use crate::ui::presentation::services::use_auth_service;
use crate::ui::presentation::state::TimedNotice;
use crate::ui::routes::Route;
use crate::ui::use_platform;

const SENT_BANNER_MS: u64 = 8_000;

#[component]
pub fn ForgotPasswordView() -> Element {
    let auth_service = use_auth_service();
    let platform = use_platform();

    let mut email = use_signal(String::new);
    let mut errors: Signal<ErrorMap<ResetField>> = use_signal(ErrorMap::new);
    let mut is_submitting = use_signal(|| false);
    let mut sent_notice = use_signal(TimedNotice::default);
    let mut error_message: Signal<Option<String>> = use_signal(|| None);

    let on_submit = move |e: FormEvent| {
        e.prevent_default();
        if *is_submitting.read() {
            return;
        }

        let form = PasswordResetForm {
            email: email.read().clone(),
        };
        let svc = auth_service.clone();
        let platform = platform.clone();

        is_submitting.set(true);
        sent_notice.write().clear();
        error_message.set(None);
        spawn(async move {
            match svc.request_password_reset(&form).await {
                ResetOutcome::Invalid(found) => errors.set(found),
                ResetOutcome::Sent => {
                    errors.set(ErrorMap::new());
                    let ticket = sent_notice.write().show(format!(
                        "If an account exists for {}, a reset link is on its way.",
                        form.email.trim()
                    ));
                    tracing::info!("Password reset link requested");
                    is_submitting.set(false);
                    platform.sleep_ms(SENT_BANNER_MS).await;
                    sent_notice.write().expire(ticket);
                    return;
                }
                ResetOutcome::Failed(message) => {
                    tracing::warn!("Password reset failed: {}", message);
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
                    h1 { "Reset your password" }
                    p { class: "muted", "Enter the email you signed up with." }
                }

                if let Some(message) = sent_notice.read().message().map(str::to_string) {
                    Banner { kind: BannerKind::Success, message: message }
                }
                if let Some(message) = error_message.read().clone() {
                    Banner { kind: BannerKind::Error, message: message }
                }

                form { class: "auth-form", novalidate: true, onsubmit: on_submit,
                    FormField {
                        id: "reset-email",
                        label: "Email",
                        value: email.read().clone(),
                        input_type: "email",
                        autocomplete: "email",
                        icon: Some(IconKind::Mail),
                        error: errors.read().message(ResetField::Email),
                        oninput: move |value: String| email.set(value),
                    }
                    button {
                        class: "btn btn-primary btn-block",
                        r#type: "submit",
                        disabled: submitting,
                        if submitting {
                            span { class: "spinner" }
                            "Sending..."
                        } else {
                            "Send reset link"
                        }
                    }
                }

                p { class: "auth-switch",
                    Link { to: Route::LoginRoute {}, "Back to log in" }
                }
            }
        }
    }
}
