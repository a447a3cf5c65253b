use serde::{Deserialize, Serialize};

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub left: u32,  // Left player score
    pub right: u32, // Right player score
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_left(&mut self) {
        self.left = self.left.saturating_add(1);
    }

    pub fn increment_right(&mut self) {
        self.right = self.right.saturating_add(1);
    }
}

/// Discrete notification produced by a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchEvent {
    LeftPaddleHit,
    RightPaddleHit,
    Scored,
}

/// Events that occurred during this tick, in emission order
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub list: Vec<MatchEvent>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: MatchEvent) {
        self.list.push(event);
    }

    pub fn clear(&mut self) {
        self.list.clear();
    }

    pub fn drain(&mut self) -> Vec<MatchEvent> {
        std::mem::take(&mut self.list)
    }

    pub fn count(&self, event: MatchEvent) -> usize {
        self.list.iter().filter(|e| **e == event).count()
    }
}
