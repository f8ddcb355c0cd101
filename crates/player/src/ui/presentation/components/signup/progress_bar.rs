use dioxus::prelude::*;

use reelhouse_domain::{ProgressSnapshot, SectionId};

use super::super::icon::{Icon, IconKind};

/// Overall completion bar at the top of the form
#[component]
pub fn OverallProgress(percent: u8) -> Element {
    rsx! {
        div { class: "progress",
            div { class: "progress-header",
                span { "Profile completion" }
                span { class: "progress-value", "{percent}%" }
            }
            div {
                class: "progress-track",
                role: "progressbar",
                aria_valuemin: "0",
                aria_valuemax: "100",
                aria_valuenow: "{percent}",
                div { class: "progress-fill", style: "width: {percent}%;" }
            }
        }
    }
}

/// One step marker per section, ticked when the section is complete
#[component]
pub fn SectionSteps(
    progress: ProgressSnapshot,
    #[props(!optional)] active: Option<SectionId>,
) -> Element {
    rsx! {
        ol { class: "section-steps",
            for section in SectionId::ALL {
                li {
                    key: "{section:?}",
                    class: step_class(progress.is_section_complete(section), active == Some(section)),
                    span { class: "step-marker",
                        if progress.is_section_complete(section) {
                            Icon { kind: IconKind::Check, size: 14 }
                        } else {
                            {(section.index() + 1).to_string()}
                        }
                    }
                    span { class: "step-title", {section.descriptor().title} }
                }
            }
        }
    }
}

fn step_class(complete: bool, active: bool) -> &'static str {
    match (complete, active) {
        (true, true) => "step step-complete step-active",
        (true, false) => "step step-complete",
        (false, true) => "step step-active",
        (false, false) => "step",
    }
}
