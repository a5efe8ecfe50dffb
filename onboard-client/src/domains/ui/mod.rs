//! UI-facing feedback surfaces

pub mod feedback_ui;
