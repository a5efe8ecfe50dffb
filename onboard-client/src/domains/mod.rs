pub mod ui;
pub mod user_creation;
