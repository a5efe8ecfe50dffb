use crate::common::task::Task;
use crate::domains::user_creation::messages::{Message, UserCreationEvent};

/// Result of a domain update that includes both a task and events to emit
#[derive(Debug)]
pub struct DomainUpdateResult {
    /// The task to execute (may produce more messages)
    pub task: Task<Message>,
    /// Events to hand to whoever embeds the form
    pub events: Vec<UserCreationEvent>,
}

impl DomainUpdateResult {
    /// Nothing to run, nothing to report
    pub fn none() -> Self {
        Self::task(Task::none())
    }

    /// Create a result with just a task
    pub fn task(task: Task<Message>) -> Self {
        Self {
            task,
            events: Vec::new(),
        }
    }

    /// Create a result with task and events
    pub fn with_events(task: Task<Message>, events: Vec<UserCreationEvent>) -> Self {
        Self { task, events }
    }
}
