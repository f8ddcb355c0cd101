//! Inline SVG icons
//!
//! Components take an [`IconKind`] and the drawing is resolved here, so no
//! view embeds raw SVG.

use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Logo,
    User,
    Mail,
    Lock,
    Gamepad,
    ChevronDown,
    Check,
    Sun,
    Moon,
    Trophy,
    Search,
    Alert,
    Wallet,
}

impl IconKind {
    /// Path data on a 24x24 stroke grid
    fn paths(&self) -> &'static [&'static str] {
        match self {
            IconKind::Logo => &[
                "M5 3h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2z",
                "M8 8h.01M16 8h.01M12 12h.01M8 16h.01M16 16h.01",
            ],
            IconKind::User => &[
                "M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2",
                "M12 11a4 4 0 1 0 0-8 4 4 0 0 0 0 8z",
            ],
            IconKind::Mail => &[
                "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "M22 6l-10 7L2 6",
            ],
            IconKind::Lock => &[
                "M5 11h14a2 2 0 0 1 2 2v7a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-7a2 2 0 0 1 2-2z",
                "M7 11V7a5 5 0 0 1 10 0v4",
            ],
            IconKind::Gamepad => &[
                "M6 11h4M8 9v4M15 12h.01M18 10h.01",
                "M17.3 5H6.7a4 4 0 0 0-4 3.6L2 15a3 3 0 0 0 5.2 2.1L9 15h6l1.8 2.1A3 3 0 0 0 22 15l-.7-6.4a4 4 0 0 0-4-3.6z",
            ],
            IconKind::ChevronDown => &["M6 9l6 6 6-6"],
            IconKind::Check => &["M20 6L9 17l-5-5"],
            IconKind::Sun => &[
                "M12 17a5 5 0 1 0 0-10 5 5 0 0 0 0 10z",
                "M12 1v2M12 21v2M4.2 4.2l1.4 1.4M18.4 18.4l1.4 1.4M1 12h2M21 12h2M4.2 19.8l1.4-1.4M18.4 5.6l1.4-1.4",
            ],
            IconKind::Moon => &["M21 12.8A9 9 0 1 1 11.2 3a7 7 0 0 0 9.8 9.8z"],
            IconKind::Trophy => &[
                "M6 9H4.5a2.5 2.5 0 0 1 0-5H6M18 9h1.5a2.5 2.5 0 0 0 0-5H18",
                "M4 22h16M10 14.7V17c0 .6-.5 1-1 1.2C7.8 18.8 7 20.2 7 22M14 14.7V17c0 .6.5 1 1 1.2 1.2.6 2 2 2 3.8",
                "M18 2H6v7a6 6 0 0 0 12 0V2z",
            ],
            IconKind::Search => &["M11 19a8 8 0 1 0 0-16 8 8 0 0 0 0 16z", "M21 21l-4.3-4.3"],
            IconKind::Alert => &[
                "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20z",
                "M12 8v4M12 16h.01",
            ],
            IconKind::Wallet => &[
                "M21 12V7H5a2 2 0 0 1 0-4h14v4",
                "M3 5v14a2 2 0 0 0 2 2h16v-5",
                "M18 12a2 2 0 0 0 0 4h4v-4z",
            ],
        }
    }
}

#[component]
pub fn Icon(kind: IconKind, #[props(default = 20)] size: u32) -> Element {
    rsx! {
        svg {
            class: "icon",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            for d in kind.paths().iter() {
                path { d: *d }
            }
        }
    }
}
