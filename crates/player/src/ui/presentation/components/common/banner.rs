use dioxus::prelude::*;

use super::super::icon::{Icon, IconKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Error,
    Success,
}

impl BannerKind {
    fn class(&self) -> &'static str {
        match self {
            BannerKind::Error => "banner banner-error",
            BannerKind::Success => "banner banner-success",
        }
    }

    fn icon(&self) -> IconKind {
        match self {
            BannerKind::Error => IconKind::Alert,
            BannerKind::Success => IconKind::Check,
        }
    }
}

/// Full-width message above a form
#[component]
pub fn Banner(kind: BannerKind, message: String) -> Element {
    rsx! {
        div {
            class: kind.class(),
            role: "alert",
            Icon { kind: kind.icon(), size: 18 }
            span { "{message}" }
        }
    }
}
