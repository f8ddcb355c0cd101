//! Sign-up form widgets

mod game_picker;
mod progress_bar;
mod section_panel;

pub use game_picker::GamePicker;
pub use progress_bar::{OverallProgress, SectionSteps};
pub use section_panel::SectionPanel;
