//! Sign-up view
//!
//! Three collapsible sections with live progress, a terms checkbox and a
//! submit button. Validation only runs on submit; the first section holding
//! an error is opened so the player sees it.

use dioxus::prelude::*;

use reelhouse_domain::{SectionId, SignupField, SignupForm};

use crate::application::services::SignupOutcome;
use crate::ui::presentation::components::common::{Banner, BannerKind, CheckboxField, FormField};
use crate::ui::presentation::components::icon::IconKind;
use crate::ui::presentation::components::signup::{
    GamePicker, OverallProgress, SectionPanel, SectionSteps,
};
use crate::ui::presentation::services::use_signup_service;
use crate::ui::presentation::state::{SessionState, SignupState};
use crate::ui::routes::Route;
use crate::ui::use_platform;

#[component]
pub fn SignupView() -> Element {
    let mut state = use_hook(SignupState::new);
    let signup_service = use_signup_service();
    let platform = use_platform();
    let mut session = use_context::<SessionState>();
    let navigator = use_navigator();

    let form = state.form.read().clone();
    let progress = state.progress();
    let sections = *state.sections.read();
    let submitting = *state.submitting.read();
    let terms_accepted = *state.terms_accepted.read();
    let failure = state.failure.read().clone();

    let on_submit = move |e: FormEvent| {
        e.prevent_default();
        if !state.begin_submit() {
            return;
        }

        let service = signup_service.clone();
        let today = platform.local_now().date();
        let form = state.form.read().clone();
        let terms_accepted = *state.terms_accepted.read();

        spawn(async move {
            let outcome = service.submit(&form, terms_accepted, today).await;
            state.finish_submit(&outcome);
            if let SignupOutcome::Registered(account) = outcome {
                tracing::info!(username = %account.username, "Registered account");
                session.sign_in(account);
                navigator.push(Route::DashboardRoute {});
            }
        });
    };

    rsx! {
        div { class: "auth-page",
            div { class: "auth-card auth-card-wide",
                header { class: "auth-header",
                    h1 { "Create your account" }
                    p { class: "muted", "Join Reelhouse and claim your welcome bonus." }
                }

                OverallProgress { percent: progress.overall() }
                SectionSteps { progress: progress, active: sections.active() }

                if let Some(message) = failure {
                    Banner { kind: BannerKind::Error, message: message }
                }

                form {
                    class: "signup-form",
                    novalidate: true,
                    onsubmit: on_submit,

                    for section in SectionId::ALL {
                        SectionPanel {
                            key: "{section:?}",
                            descriptor: section.descriptor(),
                            open: sections.is_open(section),
                            percent: progress.section(section),
                            on_toggle: move |_| state.toggle_section(section),
                            {section_body(state, &form, section)}
                        }
                    }

                    CheckboxField {
                        id: "terms",
                        checked: terms_accepted,
                        error: state.error_for(SignupField::Terms),
                        onchange: move |accepted: bool| state.terms_accepted.set(accepted),
                        "I am 18 or older and accept the terms and conditions"
                    }

                    button {
                        class: "btn btn-primary btn-block",
                        r#type: "submit",
                        disabled: submitting,
                        if submitting {
                            span { class: "spinner" }
                            "Creating account..."
                        } else {
                            "Create account"
                        }
                    }
                }

                p { class: "auth-switch",
                    "Already playing? "
                    Link { to: Route::LoginRoute {}, "Log in" }
                }
            }
        }
    }
}

fn section_body(mut state: SignupState, form: &SignupForm, section: SectionId) -> Element {
    let fields: Vec<SignupField> = SignupField::ALL
        .into_iter()
        .filter(|field| field.is_text() && field.section() == Some(section))
        .collect();
    let selected_games: Vec<String> = form.games.iter().cloned().collect();

    rsx! {
        if section == SectionId::Gaming {
            GamePicker {
                selected: selected_games,
                error: state.error_for(SignupField::Games),
                on_toggle: move |game: String| state.toggle_game(&game),
            }
        }
        div { class: "field-grid",
            for field in fields {
                {text_field(state, form, field)}
            }
        }
    }
}

fn text_field(mut state: SignupState, form: &SignupForm, field: SignupField) -> Element {
    let value = form.text(field).unwrap_or_default().to_string();
    let (input_type, autocomplete, icon) = input_hints(field);

    rsx! {
        FormField {
            id: field.as_str().to_string(),
            label: field.label().to_string(),
            value: value,
            input_type: input_type.to_string(),
            autocomplete: autocomplete.to_string(),
            icon: icon,
            error: state.error_for(field),
            oninput: move |value: String| state.set_field(field, value),
        }
    }
}

/// HTML input type, autocomplete token and icon for a text field
fn input_hints(field: SignupField) -> (&'static str, &'static str, Option<IconKind>) {
    match field {
        SignupField::Username => ("text", "username", Some(IconKind::User)),
        SignupField::FirstName => ("text", "given-name", None),
        SignupField::LastName => ("text", "family-name", None),
        SignupField::DateOfBirth => ("date", "bday", None),
        SignupField::Email => ("email", "email", Some(IconKind::Mail)),
        SignupField::Phone => ("tel", "tel", None),
        SignupField::Address => ("text", "street-address", None),
        SignupField::Password | SignupField::ConfirmPassword => {
            ("password", "new-password", Some(IconKind::Lock))
        }
        SignupField::ReferralEmail => ("email", "off", Some(IconKind::Mail)),
        SignupField::Games | SignupField::Terms => ("text", "off", None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secret_fields_are_masked() {
        assert_eq!(input_hints(SignupField::Password).0, "password");
        assert_eq!(input_hints(SignupField::ConfirmPassword).0, "password");
    }

    #[test]
    fn date_of_birth_uses_native_picker() {
        assert_eq!(input_hints(SignupField::DateOfBirth).0, "date");
    }
}
