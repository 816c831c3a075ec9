use super::direction::Direction;

#[derive(serde::Serialize, serde::Deserialize, PartialEq, Eq, Debug, Clone, Copy)]
pub enum ElevatorStatus {
    Idle,
    RunningUp,
    RunningDown,
}

impl ElevatorStatus {
    pub fn as_string(&self) -> String {
        match self {
            ElevatorStatus::Idle => String::from("idle"),
            ElevatorStatus::RunningUp => String::from("up"),
            ElevatorStatus::RunningDown => String::from("down"),
        }
    }

    /// Status while travelling from `from` to `to`. Standing still means the
    /// elevator keeps heading the way the task asked for.
    pub fn towards(from: u8, to: u8, direction: Direction) -> Self {
        if to > from {
            ElevatorStatus::RunningUp
        } else if to < from {
            ElevatorStatus::RunningDown
        } else {
            match direction {
                Direction::Up => ElevatorStatus::RunningUp,
                Direction::Down => ElevatorStatus::RunningDown,
                Direction::None => ElevatorStatus::Idle,
            }
        }
    }

    /// Whether a task asking for `direction` agrees with the way the elevator
    /// is travelling. Idle elevators and car calls agree with everything.
    pub fn same_direction(self, direction: Direction) -> bool {
        match (self, direction) {
            (ElevatorStatus::Idle, _) | (_, Direction::None) => true,
            (ElevatorStatus::RunningUp, Direction::Up) => true,
            (ElevatorStatus::RunningDown, Direction::Down) => true,
            _ => false,
        }
    }
}

/// Immutable view of an elevator used by the strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElevatorState {
    pub floor: u8,
    pub status: ElevatorStatus,
}
