/// ----- PRIORITY CALCULATION -----
/// Stateless cost functions telling an elevator how urgent a task is for it.
/// Lower is better. The elevator calls them again whenever its own position
/// or queue changes, so they must only depend on their arguments.

use std::str::FromStr;
use std::sync::Arc;

use super::elevator_status::{ElevatorState, ElevatorStatus};
use super::error::Error;
use super::task::Task;

pub trait PriorityCalculationStrategy: Send + Sync {
    fn calc_priority(&self, elevator: ElevatorState, task: &Task) -> i32;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityStrategyKind {
    SameDirectionNearestFirst,
    DistanceShort,
}

impl PriorityStrategyKind {
    pub fn build(self, num_floors: u8) -> Arc<dyn PriorityCalculationStrategy> {
        match self {
            PriorityStrategyKind::SameDirectionNearestFirst => {
                Arc::new(SameDirectionNearestFirst::new(num_floors))
            }
            PriorityStrategyKind::DistanceShort => Arc::new(DistanceShort::new(num_floors)),
        }
    }
}

impl FromStr for PriorityStrategyKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SameDirectionNearestFirst" => Ok(PriorityStrategyKind::SameDirectionNearestFirst),
            "DistanceShort" => Ok(PriorityStrategyKind::DistanceShort),
            other => Err(Error::UnknownPriorityStrategy(other.to_string())),
        }
    }
}

/// Prefers tasks the elevator passes anyway, then tasks it has to come back
/// for, then tasks going the other way.
///
/// With `x` the task floor, `y` the elevator floor, `e` the number of floors
/// and `d` the distance still ahead in the direction of travel:
/// - idle: `|x - y|`
/// - same direction, on the way (`d >= 0`): `d`, in `[0, e-1]`
/// - same direction, behind (`d < 0`): `2e - d`, in `[2e+1, 3e-1]`
/// - opposite direction: `4e + |x - y|`, in `[4e, 5e-1]`
#[derive(Debug, Clone, Copy)]
pub struct SameDirectionNearestFirst {
    num_floors: i32,
}

impl SameDirectionNearestFirst {
    pub fn new(num_floors: u8) -> Self {
        SameDirectionNearestFirst {
            num_floors: num_floors as i32,
        }
    }
}

impl PriorityCalculationStrategy for SameDirectionNearestFirst {
    fn calc_priority(&self, elevator: ElevatorState, task: &Task) -> i32 {
        let x = task.floor() as i32;
        let y = elevator.floor as i32;
        let e = self.num_floors;
        let ahead = match elevator.status {
            ElevatorStatus::Idle => return (x - y).abs(),
            ElevatorStatus::RunningUp => x - y,
            ElevatorStatus::RunningDown => y - x,
        };
        if !elevator.status.same_direction(task.direction()) {
            4 * e + (x - y).abs()
        } else if ahead >= 0 {
            ahead
        } else {
            2 * e - ahead
        }
    }
}

/// Plain distance, with tasks in the other direction pushed behind a
/// threshold.
#[derive(Debug, Clone, Copy)]
pub struct DistanceShort {
    threshold: i32,
}

impl DistanceShort {
    pub fn new(num_floors: u8) -> Self {
        DistanceShort {
            threshold: 2 * num_floors as i32,
        }
    }
}

impl PriorityCalculationStrategy for DistanceShort {
    fn calc_priority(&self, elevator: ElevatorState, task: &Task) -> i32 {
        let distance = (task.floor() as i32 - elevator.floor as i32).abs();
        if elevator.status.same_direction(task.direction()) {
            distance
        } else {
            self.threshold + distance
        }
    }
}
