/// ----- FLOOR MODULE -----
/// A floor keeps one waiting crowd per hall direction and makes sure each
/// non-empty crowd has exactly one outstanding task in the bank. The task is
/// issued when the first rider arrives and re-issued if riders are left
/// behind after an elevator has loaded.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, info, warn};

use crate::utilities::direction::Direction;
use crate::utilities::rider::Rider;
use crate::utilities::task::Task;

use super::dispatcher::Dispatcher;

pub struct Floor {
    floor_no: u8,
    waiting_up: RwLock<Vec<Rider>>,
    waiting_down: RwLock<Vec<Rider>>,
    outstanding: RwLock<HashMap<Direction, Arc<Task>>>,
    dispatcher: Arc<Dispatcher>,
}

impl Floor {
    pub fn new(floor_no: u8, dispatcher: Arc<Dispatcher>) -> Self {
        Floor {
            floor_no,
            waiting_up: RwLock::new(Vec::new()),
            waiting_down: RwLock::new(Vec::new()),
            outstanding: RwLock::new(HashMap::new()),
            dispatcher,
        }
    }

    pub fn floor_no(&self) -> u8 {
        self.floor_no
    }

    fn crowd(&self, direction: Direction) -> Option<&RwLock<Vec<Rider>>> {
        match direction {
            Direction::Up => Some(&self.waiting_up),
            Direction::Down => Some(&self.waiting_down),
            Direction::None => None,
        }
    }

    /// A rider starts waiting here for `direction`.
    pub fn add(&self, mut rider: Rider, direction: Direction) {
        let Some(crowd) = self.crowd(direction) else {
            warn!(floor = self.floor_no, rider = %rider, "rider has no direction to wait for, ignoring");
            return;
        };
        rider.start_waiting();
        debug!(floor = self.floor_no, rider = %rider, ?direction, "rider waiting");
        crowd.write().push(rider);
        self.ensure_task(direction);
    }

    /// Takes up to `capacity` riders waiting for `direction`, oldest first.
    pub fn reduce(&self, direction: Direction, capacity: usize) -> Vec<Rider> {
        let Some(crowd) = self.crowd(direction) else {
            return Vec::new();
        };
        let mut crowd = crowd.write();
        let count = capacity.min(crowd.len());
        crowd.drain(..count).collect()
    }

    /// Withdraws the outstanding task for `direction`. Fails if an elevator is
    /// already on its way for it.
    pub fn cancel(&self, direction: Direction) -> bool {
        let mut outstanding = self.outstanding.write();
        let Some(task) = outstanding.get(&direction) else {
            return false;
        };
        if !self.dispatcher.cancel(task) {
            return false;
        }
        info!(floor = self.floor_no, task = %task, "task cancelled");
        outstanding.remove(&direction);
        true
    }

    /// An elevator finished loading for `task`. Clears the outstanding entry
    /// it belongs to and issues a fresh task if riders were left behind.
    pub fn done(&self, task: &Task) {
        let direction = task.direction();
        {
            let mut outstanding = self.outstanding.write();
            match outstanding.get(&direction) {
                Some(current) if current.id() == task.id() => {
                    outstanding.remove(&direction);
                }
                _ => return,
            }
        }
        self.ensure_task(direction);
    }

    /// Direction of travel from `other` to this floor. A rider here bound for
    /// `other` waits for the opposite.
    pub fn locate(&self, other: &Floor) -> Direction {
        if other.floor_no < self.floor_no {
            Direction::Up
        } else {
            Direction::Down
        }
    }

    pub fn waiting(&self, direction: Direction) -> usize {
        self.crowd(direction).map_or(0, |crowd| crowd.read().len())
    }

    pub fn outstanding(&self, direction: Direction) -> Option<Arc<Task>> {
        self.outstanding.read().get(&direction).cloned()
    }

    fn ensure_task(&self, direction: Direction) {
        if self.waiting(direction) == 0 {
            return;
        }
        let task = {
            let mut outstanding = self.outstanding.write();
            if outstanding.contains_key(&direction) {
                return;
            }
            let task = Task::generate(self.floor_no, direction);
            outstanding.insert(direction, Arc::clone(&task));
            task
        };
        debug!(floor = self.floor_no, task = %task, "issuing hall call");
        self.dispatcher.dispatch(task);
    }
}

/// The floors of the bank, numbered from 1.
pub struct Building {
    floors: Vec<Arc<Floor>>,
}

impl Building {
    pub fn new(num_floors: u8, dispatcher: &Arc<Dispatcher>) -> Arc<Self> {
        let floors = (1..=num_floors)
            .map(|floor_no| Arc::new(Floor::new(floor_no, Arc::clone(dispatcher))))
            .collect();
        Arc::new(Building { floors })
    }

    pub fn num_floors(&self) -> u8 {
        self.floors.len() as u8
    }

    pub fn floor(&self, floor_no: u8) -> Option<&Arc<Floor>> {
        self.floors.get((floor_no as usize).checked_sub(1)?)
    }

    pub fn floors(&self) -> &[Arc<Floor>] {
        &self.floors
    }

    /// Neighbouring floor number in `direction`, if there is one.
    pub fn next(&self, floor_no: u8, direction: Direction) -> Option<u8> {
        let next = match direction {
            Direction::Up => floor_no.checked_add(1)?,
            Direction::Down => floor_no.checked_sub(1)?,
            Direction::None => return None,
        };
        self.floor(next).map(|floor| floor.floor_no())
    }
}
