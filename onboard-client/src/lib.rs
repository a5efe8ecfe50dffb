//! Onboard client: the user-registration form controller.
//!
//! The form is an Elm-style domain. Front ends feed [`Message`]s into
//! [`update_user_creation`], which mutates the owned form state and hands
//! back a [`Task`] describing any backend work. A [`FormRuntime`] polls
//! those tasks and routes their results back through the same update
//! function, so every state change happens on one logical thread.
//!
//! [`Message`]: domains::user_creation::messages::Message
//! [`update_user_creation`]: domains::user_creation::update::update_user_creation
//! [`Task`]: common::task::Task
//! [`FormRuntime`]: runtime::FormRuntime

pub mod app;
pub mod common;
pub mod domains;
pub mod infrastructure;
pub mod runtime;
