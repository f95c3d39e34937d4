//! Scripted in-process bridge for tests.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use super::HostBridge;

/// Replies to host procedures with scripted results.
///
/// Responses are queued per procedure name; the last queued response is
/// repeated once the queue drains. Unscripted procedures resolve with
/// `None`, like a host that is not attached. Clones share state.
#[derive(Clone, Debug, Default)]
pub struct MockBridge {
    responses: Rc<RefCell<HashMap<String, VecDeque<Option<String>>>>>,
    calls: Rc<RefCell<Vec<String>>>,
}

impl MockBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a raw result for `procedure`.
    pub fn respond(&self, procedure: &str, raw: &str) {
        self.push(procedure, Some(raw.to_string()));
    }

    /// Queue a result-less completion for `procedure`.
    pub fn respond_unavailable(&self, procedure: &str) {
        self.push(procedure, None);
    }

    /// Every script evaluated so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn push(&self, procedure: &str, raw: Option<String>) {
        self.responses
            .borrow_mut()
            .entry(procedure.to_string())
            .or_default()
            .push_back(raw);
    }

    fn next_response(&self, procedure: &str) -> Option<String> {
        let mut responses = self.responses.borrow_mut();
        let queue = responses.get_mut(procedure)?;
        if queue.len() > 1 {
            queue.pop_front().flatten()
        } else {
            queue.front().cloned().flatten()
        }
    }
}

impl HostBridge for MockBridge {
    async fn eval_script(&self, script: String) -> Option<String> {
        let procedure = script.split('(').next().unwrap_or_default().to_string();
        self.calls.borrow_mut().push(script);
        self.next_response(&procedure)
    }
}
