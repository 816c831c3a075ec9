use std::fmt;
use std::time::{Duration, Instant};

use crate::modules::elevator::ElevatorId;

#[derive(Debug, Clone)]
pub struct Rider {
    name: String,
    target: u8,
    elevator: Option<ElevatorId>,
    waiting_since: Option<Instant>,
}

impl Rider {
    pub fn new(name: impl Into<String>, target: u8) -> Self {
        Rider {
            name: name.into(),
            target,
            elevator: None,
            waiting_since: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn target(&self) -> u8 {
        self.target
    }

    pub fn start_waiting(&mut self) {
        self.waiting_since = Some(Instant::now());
    }

    /// Boards `elevator` and returns how long the rider waited for it.
    pub fn enter_elevator(&mut self, elevator: ElevatorId) -> Duration {
        self.elevator = Some(elevator);
        self.waiting_since
            .take()
            .map(|since| since.elapsed())
            .unwrap_or_default()
    }
}

impl fmt::Display for Rider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.elevator {
            Some(elevator) => write!(f, "{} (to floor {}, in elevator {})", self.name, self.target, elevator),
            None => write!(f, "{} (to floor {})", self.name, self.target),
        }
    }
}
