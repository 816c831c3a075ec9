/// ----- DISPATCH STRATEGY -----
/// Decides which elevator of the roster gets a new task. Returning `None`
/// means no elevator qualifies right now and the dispatcher should retry.

use std::str::FromStr;
use std::sync::Arc;

use rand::seq::SliceRandom;

use crate::modules::elevator::Elevator;

use super::error::Error;
use super::task::Task;

pub trait DispatchStrategy: Send + Sync {
    fn select(&self, roster: &[Arc<Elevator>], task: &Task) -> Option<Arc<Elevator>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchStrategyKind {
    RandomDispatch,
    PriorityFirstDispatch,
}

impl DispatchStrategyKind {
    pub fn build(self) -> Box<dyn DispatchStrategy> {
        match self {
            DispatchStrategyKind::RandomDispatch => Box::new(RandomDispatch),
            DispatchStrategyKind::PriorityFirstDispatch => Box::new(PriorityFirstDispatch),
        }
    }
}

impl FromStr for DispatchStrategyKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RandomDispatch" => Ok(DispatchStrategyKind::RandomDispatch),
            "PriorityFirstDispatch" => Ok(DispatchStrategyKind::PriorityFirstDispatch),
            other => Err(Error::UnknownDispatchStrategy(other.to_string())),
        }
    }
}

/// Any elevator, full or not. A full one hands the task back if it cannot
/// make room at the task's floor.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomDispatch;

impl DispatchStrategy for RandomDispatch {
    fn select(&self, roster: &[Arc<Elevator>], _task: &Task) -> Option<Arc<Elevator>> {
        roster.choose(&mut rand::thread_rng()).cloned()
    }
}

/// The elevator that would give the task the best priority, skipping full
/// elevators.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriorityFirstDispatch;

impl DispatchStrategy for PriorityFirstDispatch {
    fn select(&self, roster: &[Arc<Elevator>], task: &Task) -> Option<Arc<Elevator>> {
        roster
            .iter()
            .filter(|elevator| !elevator.is_full())
            .min_by_key(|elevator| elevator.try_receive(task))
            .cloned()
    }
}
