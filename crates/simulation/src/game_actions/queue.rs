use bevy::prelude::*;

use super::GameAction;

/// Where an action came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionSource {
    Pointer,
    Keyboard,
    Toolbar,
}

impl ActionSource {
    pub fn label(self) -> &'static str {
        match self {
            ActionSource::Pointer => "pointer",
            ActionSource::Keyboard => "keyboard",
            ActionSource::Toolbar => "toolbar",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct QueuedAction {
    pub source: ActionSource,
    pub action: GameAction,
}

/// FIFO of actions waiting for the executor.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct ActionQueue {
    pending: Vec<QueuedAction>,
}

impl ActionQueue {
    pub fn push(&mut self, source: ActionSource, action: GameAction) {
        self.pending.push(QueuedAction { source, action });
    }

    pub fn drain(&mut self) -> Vec<QueuedAction> {
        self.pending.drain(..).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }
}
