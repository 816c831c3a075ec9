/// ----- TASK -----
/// A unit of travel intent. Hall calls come from a floor and carry the
/// direction the riders want to go, car calls come from a rider inside an
/// elevator and carry `Direction::None`. Tasks are shared between the floor
/// that issued them, the dispatcher and the elevator executing them, so the
/// mutable parts live behind interior locks.

use std::cmp::Ordering;
use std::fmt;
use std::sync::atomic::{self, AtomicI32, AtomicU64};
use std::sync::Arc;

use parking_lot::Mutex;

use super::direction::Direction;

pub type TaskId = u64;

static NEXT_TASK_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Runnable,
    Running,
    Cancelled,
}

/// What happened when an elevator tried to execute a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskOutcome {
    Completed,
    /// Cancelled before or while waiting for execution. Dropped.
    Cancelled,
    /// Elevator is full and nobody gets off at the task's floor.
    CannotExecute,
    /// A car call lost the elevator to a better task. Stays with this elevator.
    PreemptedLocal,
    /// A hall call lost the elevator to a better task. Any elevator may take it.
    PreemptedGlobal,
}

pub struct Task {
    id: TaskId,
    floor: u8,
    direction: Direction,
    status: Mutex<TaskStatus>,
    priority: AtomicI32,
}

impl Task {
    pub fn generate(floor: u8, direction: Direction) -> Arc<Task> {
        Arc::new(Task {
            id: NEXT_TASK_ID.fetch_add(1, atomic::Ordering::Relaxed),
            floor,
            direction,
            status: Mutex::new(TaskStatus::Runnable),
            priority: AtomicI32::new(i32::MAX),
        })
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn floor(&self) -> u8 {
        self.floor
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_car_call(&self) -> bool {
        self.direction == Direction::None
    }

    pub fn status(&self) -> TaskStatus {
        *self.status.lock()
    }

    pub fn priority(&self) -> i32 {
        self.priority.load(atomic::Ordering::Acquire)
    }

    pub fn set_priority(&self, priority: i32) {
        self.priority.store(priority, atomic::Ordering::Release);
    }

    /// Cancels the task unless it is already being executed.
    pub fn cancel(&self) -> bool {
        let mut status = self.status.lock();
        match *status {
            TaskStatus::Running => false,
            _ => {
                *status = TaskStatus::Cancelled;
                true
            }
        }
    }

    /// The yield primitive: pushes a running task back to runnable so the
    /// elevator executing it gives it up at the next floor boundary.
    pub fn preempt(&self) -> bool {
        let mut status = self.status.lock();
        match *status {
            TaskStatus::Running => {
                *status = TaskStatus::Runnable;
                true
            }
            _ => false,
        }
    }

    /// Admits the task into execution.
    pub fn start(&self) -> bool {
        let mut status = self.status.lock();
        match *status {
            TaskStatus::Runnable => {
                *status = TaskStatus::Running;
                true
            }
            _ => false,
        }
    }

    pub fn cmp_priority(&self, other: &Task) -> Ordering {
        self.priority()
            .cmp(&other.priority())
            .then_with(|| self.id.cmp(&other.id))
    }
}

/// Same floor and same direction, with `Direction::None` matching any
/// direction. Not transitive, so there is deliberately no `Eq`.
impl PartialEq for Task {
    fn eq(&self, other: &Self) -> bool {
        self.floor == other.floor
            && (self.direction == other.direction
                || self.direction == Direction::None
                || other.direction == Direction::None)
    }
}

impl fmt::Debug for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Task")
            .field("id", &self.id)
            .field("floor", &self.floor)
            .field("direction", &self.direction)
            .field("status", &self.status())
            .field("priority", &self.priority())
            .finish()
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction.as_string() {
            Some(direction) => write!(f, "task#{} (floor {}, {})", self.id, self.floor, direction),
            None => write!(f, "task#{} (floor {}, car)", self.id, self.floor),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_tasks_are_runnable_with_fresh_ids() {
        let a = Task::generate(3, Direction::Up);
        let b = Task::generate(3, Direction::Up);
        assert_eq!(a.status(), TaskStatus::Runnable);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn cancel_runnable_task() {
        let task = Task::generate(2, Direction::Down);
        assert!(task.cancel());
        assert_eq!(task.status(), TaskStatus::Cancelled);
        assert!(!task.start());
    }

    #[test]
    fn cancel_running_task_fails() {
        let task = Task::generate(2, Direction::Down);
        assert!(task.start());
        assert!(!task.cancel());
        assert_eq!(task.status(), TaskStatus::Running);
    }

    #[test]
    fn preempt_only_affects_running_tasks() {
        let task = Task::generate(5, Direction::Up);
        assert!(!task.preempt());
        assert_eq!(task.status(), TaskStatus::Runnable);

        assert!(task.start());
        assert!(task.preempt());
        assert_eq!(task.status(), TaskStatus::Runnable);

        task.cancel();
        assert!(!task.preempt());
        assert_eq!(task.status(), TaskStatus::Cancelled);
    }

    #[test]
    fn car_call_equals_hall_calls_on_same_floor() {
        let car = Task::generate(6, Direction::None);
        assert!(*car == *Task::generate(6, Direction::Up));
        assert!(*car == *Task::generate(6, Direction::Down));
        assert!(*Task::generate(6, Direction::Down) == *car);
        assert!(*car != *Task::generate(7, Direction::Up));
    }

    #[test]
    fn hall_calls_need_same_direction() {
        let up = Task::generate(4, Direction::Up);
        assert!(*up == *Task::generate(4, Direction::Up));
        assert!(*up != *Task::generate(4, Direction::Down));
    }

    #[test]
    fn lower_priority_orders_first() {
        let near = Task::generate(1, Direction::Up);
        let far = Task::generate(9, Direction::Up);
        near.set_priority(2);
        far.set_priority(8);
        assert_eq!(near.cmp_priority(&far), Ordering::Less);
        far.set_priority(1);
        assert_eq!(near.cmp_priority(&far), Ordering::Greater);
    }
}
