//! Drives a form domain: runs the tasks its update function returns and feeds
//! their results back in, one message at a time.

use futures::StreamExt;
use futures::future::BoxFuture;
use futures::stream::FuturesUnordered;
use log::debug;

use crate::domains::user_creation::{
    UserCreationDomain, UserCreationDomainState,
    messages::{Message, UserCreationEvent},
};

pub struct FormRuntime {
    domain: UserCreationDomain,
    pending: FuturesUnordered<BoxFuture<'static, Message>>,
    events: Vec<UserCreationEvent>,
}

impl std::fmt::Debug for FormRuntime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormRuntime")
            .field("domain", &self.domain)
            .field("pending", &self.pending.len())
            .field("events", &self.events)
            .finish()
    }
}

impl FormRuntime {
    pub fn new(domain: UserCreationDomain) -> Self {
        Self {
            domain,
            pending: FuturesUnordered::new(),
            events: Vec::new(),
        }
    }

    /// Apply `message` synchronously and queue whatever work it produced.
    pub fn dispatch(&mut self, message: Message) {
        let result = self.domain.update(message);
        self.events.extend(result.events);
        for future in result.task.into_futures() {
            self.pending.push(future);
        }
    }

    /// Wait for the next pending task to finish and dispatch its message.
    /// Returns `false` when nothing was pending.
    pub async fn step(&mut self) -> bool {
        match self.pending.next().await {
            Some(message) => {
                debug!("Task completed with {}", message.name());
                self.dispatch(message);
                true
            }
            None => false,
        }
    }

    /// Keep stepping until no task is outstanding.
    pub async fn run_until_idle(&mut self) {
        while self.step().await {}
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn state(&self) -> &UserCreationDomainState {
        &self.domain.state
    }

    pub fn take_events(&mut self) -> Vec<UserCreationEvent> {
        std::mem::take(&mut self.events)
    }
}
