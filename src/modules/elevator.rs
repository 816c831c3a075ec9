/// ----- ELEVATOR MODULE -----
/// One worker thread per elevator. The worker pops the most urgent task from
/// its queue, moves floor by floor towards it and checks between floors
/// whether the task was preempted or cancelled. Tasks arrive from the
/// dispatcher (hall calls) and from riders that board (car calls). Each field
/// that other threads read sits behind its own lock, so the dispatcher can
/// price a task without waiting for a running elevator.
///
/// Lock order: `queue` before `curr_task`, `curr_load` before a floor's crowd.

use std::collections::BTreeSet;
use std::fmt;
use std::io;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{unbounded, Receiver, RecvTimeoutError, Sender};
use parking_lot::{Mutex, RwLock};
use tracing::{debug, info, trace, warn};

use crate::utilities::config::Config;
use crate::utilities::direction::Direction;
use crate::utilities::elevator_status::{ElevatorState, ElevatorStatus};
use crate::utilities::priority_strategy::PriorityCalculationStrategy;
use crate::utilities::rider::Rider;
use crate::utilities::statistics::Statistics;
use crate::utilities::task::{Task, TaskOutcome, TaskStatus};

use super::dispatcher::Dispatcher;
use super::floor::{Building, Floor};

pub type ElevatorId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElevatorSettings {
    pub max_load: usize,
    pub step_duration: Duration,
    pub idle_timeout: Duration,
}

impl ElevatorSettings {
    pub fn from_config(config: &Config) -> Self {
        ElevatorSettings {
            max_load: config.max_load,
            step_duration: config.step_duration(),
            idle_timeout: config.idle_timeout(),
        }
    }
}

#[derive(Default)]
struct TaskQueue {
    tasks: Vec<Arc<Task>>,
    retired: bool,
}

impl TaskQueue {
    fn pop_most_urgent(&mut self) -> Option<Arc<Task>> {
        let index = self
            .tasks
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| a.cmp_priority(b))
            .map(|(index, _)| index)?;
        Some(self.tasks.swap_remove(index))
    }
}

pub struct Elevator {
    id: ElevatorId,
    settings: ElevatorSettings,
    building: Arc<Building>,
    priority_strategy: Arc<dyn PriorityCalculationStrategy>,
    dispatcher: Arc<Dispatcher>,
    statistics: Arc<Statistics>,
    status: RwLock<ElevatorStatus>,
    curr_floor: RwLock<u8>,
    curr_load: RwLock<Vec<Rider>>,
    curr_task: RwLock<Option<Arc<Task>>>,
    queue: Mutex<TaskQueue>,
    wake_tx: Sender<()>,
    wake_rx: Receiver<()>,
}

impl Elevator {
    pub fn new(
        id: ElevatorId,
        start_floor: u8,
        settings: ElevatorSettings,
        building: Arc<Building>,
        priority_strategy: Arc<dyn PriorityCalculationStrategy>,
        dispatcher: Arc<Dispatcher>,
        statistics: Arc<Statistics>,
    ) -> Arc<Self> {
        let (wake_tx, wake_rx) = unbounded();
        Arc::new(Elevator {
            id,
            settings,
            building,
            priority_strategy,
            dispatcher,
            statistics,
            status: RwLock::new(ElevatorStatus::Idle),
            curr_floor: RwLock::new(start_floor),
            curr_load: RwLock::new(Vec::new()),
            curr_task: RwLock::new(None),
            queue: Mutex::new(TaskQueue::default()),
            wake_tx,
            wake_rx,
        })
    }

    pub fn start(self: &Arc<Self>) -> io::Result<JoinHandle<()>> {
        let elevator = Arc::clone(self);
        thread::Builder::new()
            .name(format!("elevator_{}", self.id))
            .spawn(move || elevator.run())
    }

    pub fn id(&self) -> ElevatorId {
        self.id
    }

    pub fn max_load(&self) -> usize {
        self.settings.max_load
    }

    pub fn curr_floor(&self) -> u8 {
        *self.curr_floor.read()
    }

    pub fn status(&self) -> ElevatorStatus {
        *self.status.read()
    }

    pub fn state(&self) -> ElevatorState {
        ElevatorState {
            floor: self.curr_floor(),
            status: self.status(),
        }
    }

    pub fn load(&self) -> usize {
        self.curr_load.read().len()
    }

    pub fn is_full(&self) -> bool {
        self.load() >= self.settings.max_load
    }

    pub fn riders(&self) -> Vec<Rider> {
        self.curr_load.read().clone()
    }

    /// Queued tasks, most urgent first.
    pub fn queued(&self) -> Vec<Arc<Task>> {
        let mut tasks = self.queue.lock().tasks.clone();
        tasks.sort_by(|a, b| a.cmp_priority(b));
        tasks
    }

    pub fn is_retired(&self) -> bool {
        self.queue.lock().retired
    }

    /// Priority `task` would get here right now, without queueing it.
    pub fn try_receive(&self, task: &Task) -> i32 {
        self.priority_strategy.calc_priority(self.state(), task)
    }

    /// Whether the elevator has room at `floor_no`, counting riders that get
    /// off there.
    fn has_room_at(&self, floor_no: u8) -> bool {
        let load = self.curr_load.read();
        load.len() < self.settings.max_load || load.iter().any(|rider| rider.target() == floor_no)
    }

    fn someone_leaves_at(&self, floor_no: u8) -> bool {
        self.curr_load.read().iter().any(|rider| rider.target() == floor_no)
    }

    /// Queues `task` and reprices the whole queue. Preempts the running task
    /// if `task` is strictly more urgent.
    pub fn receive(&self, task: Arc<Task>) {
        let state = self.state();
        let mut queue = self.queue.lock();
        if queue.retired {
            drop(queue);
            debug!(elevator = self.id, task = %task, "elevator retired, giving task back");
            self.dispatcher.redispatch(task);
            return;
        }

        // a withdrawn hall call must not shadow the one issued after it
        queue.tasks.retain(|queued| queued.status() != TaskStatus::Cancelled);

        let mut replaced = false;
        if let Some(index) = queue.tasks.iter().position(|queued| **queued == *task) {
            // A hall call covers the car call to the same floor, not the
            // other way round.
            if queue.tasks[index].is_car_call() && !task.is_car_call() {
                debug!(elevator = self.id, old = %queue.tasks[index], new = %task, "hall call replaces car call");
                queue.tasks[index] = Arc::clone(&task);
                replaced = true;
            } else {
                trace!(elevator = self.id, task = %task, "duplicate task dropped");
                return;
            }
        }

        for queued in queue.tasks.iter() {
            queued.set_priority(self.priority_strategy.calc_priority(state, queued));
        }
        task.set_priority(self.priority_strategy.calc_priority(state, &task));

        if let Some(current) = self.curr_task.read().as_ref() {
            current.set_priority(self.priority_strategy.calc_priority(state, current));
            if task.priority() < current.priority()
                && self.has_room_at(task.floor())
                && current.preempt()
            {
                info!(elevator = self.id, preempted = %current, by = %task, "preempting current task");
            }
        }

        if !replaced {
            queue.tasks.push(task);
        }
        drop(queue);
        let _ = self.wake_tx.send(());
    }

    fn run(&self) {
        info!(elevator = self.id, floor = self.curr_floor(), "elevator started");
        while let Some(task) = self.next_task() {
            let outcome = self.exec_task(&task);
            *self.curr_task.write() = None;
            self.set_status(ElevatorStatus::Idle);

            match outcome {
                TaskOutcome::Completed => {
                    debug!(elevator = self.id, task = %task, "task completed");
                }
                TaskOutcome::Cancelled => {
                    info!(elevator = self.id, task = %task, "task was cancelled, dropping it");
                }
                TaskOutcome::CannotExecute => {
                    info!(elevator = self.id, task = %task, load = self.load(), "elevator is full, handing task back");
                    self.dispatcher.hand_back(task, self.id);
                }
                TaskOutcome::PreemptedLocal => {
                    debug!(elevator = self.id, task = %task, "car call preempted, requeueing");
                    self.receive(task);
                }
                TaskOutcome::PreemptedGlobal => {
                    debug!(elevator = self.id, task = %task, "hall call preempted, redispatching");
                    self.dispatcher.redispatch(task);
                }
            }
        }

        info!(elevator = %self, "no task within {:?}, retiring", self.settings.idle_timeout);
        self.statistics.record_retirement();
        self.dispatcher.quit(self.id);
    }

    /// Blocks until a task is queued. Returns `None` once the elevator has
    /// been idle for the idle timeout and is retired.
    fn next_task(&self) -> Option<Arc<Task>> {
        loop {
            {
                let mut queue = self.queue.lock();
                if let Some(task) = queue.pop_most_urgent() {
                    *self.curr_task.write() = Some(Arc::clone(&task));
                    return Some(task);
                }
            }
            if self.reissue_car_calls() {
                continue;
            }
            match self.wake_rx.recv_timeout(self.settings.idle_timeout) {
                Ok(()) => continue,
                Err(RecvTimeoutError::Timeout) => {
                    let mut queue = self.queue.lock();
                    if queue.tasks.is_empty() {
                        queue.retired = true;
                        return None;
                    }
                }
                Err(RecvTimeoutError::Disconnected) => return None,
            }
        }
    }

    /// Riders aboard whose car call was covered by a hall call that later
    /// left this elevator still need to get off somewhere.
    fn reissue_car_calls(&self) -> bool {
        let targets: BTreeSet<u8> = self.curr_load.read().iter().map(Rider::target).collect();
        if targets.is_empty() {
            return false;
        }
        for target in targets {
            debug!(elevator = self.id, floor = target, "reissuing car call");
            self.receive(Task::generate(target, Direction::None));
        }
        true
    }

    pub(crate) fn exec_task(&self, task: &Task) -> TaskOutcome {
        let target = task.floor();
        // riders already left on the way
        if task.is_car_call() && !self.someone_leaves_at(target) {
            return TaskOutcome::Completed;
        }
        if !self.has_room_at(target) {
            return TaskOutcome::CannotExecute;
        }
        if !task.start() {
            return TaskOutcome::Cancelled;
        }

        let Some(floor) = self.building.floor(target).cloned() else {
            warn!(elevator = self.id, task = %task, "task targets a floor outside the building");
            return TaskOutcome::Completed;
        };
        let from = self.curr_floor();
        self.set_status(ElevatorStatus::towards(from, target, task.direction()));
        info!(elevator = self.id, task = %task, from, "executing task");

        let heading = if target > from { Direction::Up } else { Direction::Down };
        while self.curr_floor() != target {
            thread::sleep(self.settings.step_duration);
            self.step(heading);
            // preempted on the last step, still served
            if self.curr_floor() == target {
                break;
            }
            match task.status() {
                TaskStatus::Running => {}
                TaskStatus::Cancelled => return TaskOutcome::Cancelled,
                TaskStatus::Runnable if task.is_car_call() => return TaskOutcome::PreemptedLocal,
                TaskStatus::Runnable => return TaskOutcome::PreemptedGlobal,
            }
        }
        if task.status() == TaskStatus::Cancelled {
            return TaskOutcome::Cancelled;
        }

        self.arrive(&floor, task);
        TaskOutcome::Completed
    }

    fn step(&self, heading: Direction) {
        let mut curr_floor = self.curr_floor.write();
        if let Some(next) = self.building.next(*curr_floor, heading) {
            *curr_floor = next;
            self.statistics.record_step();
            trace!(elevator = self.id, floor = next, "passing floor");
        }
    }

    fn arrive(&self, floor: &Floor, task: &Task) {
        debug!(elevator = self.id, floor = floor.floor_no(), "arrived");
        self.unload(floor.floor_no());
        self.load_from(floor, task.direction());
        floor.done(task);
    }

    fn unload(&self, floor_no: u8) {
        let leaving: Vec<Rider> = {
            let mut load = self.curr_load.write();
            let (leaving, staying): (Vec<Rider>, Vec<Rider>) =
                load.drain(..).partition(|rider| rider.target() == floor_no);
            *load = staying;
            leaving
        };
        for rider in leaving {
            debug!(elevator = self.id, rider = %rider, floor = floor_no, "rider left");
            self.statistics.record_delivery();
        }
    }

    fn load_from(&self, floor: &Floor, direction: Direction) {
        let targets: Vec<u8> = {
            let mut load = self.curr_load.write();
            let room = self.settings.max_load.saturating_sub(load.len());
            if room == 0 {
                return;
            }
            let mut boarding = floor.reduce(direction, room);
            for rider in boarding.iter_mut() {
                let waited = rider.enter_elevator(self.id);
                self.statistics.record_wait(waited);
                debug!(elevator = self.id, rider = %rider, floor = floor.floor_no(), ?waited, "rider entered");
            }
            let targets: Vec<u8> = boarding.iter().map(Rider::target).collect();
            load.extend(boarding);
            targets
        };
        for target in targets {
            self.receive(Task::generate(target, Direction::None));
        }
    }

    fn set_status(&self, status: ElevatorStatus) {
        *self.status.write() = status;
    }

    #[cfg(test)]
    pub(crate) fn seat(&self, rider: Rider) -> bool {
        let mut load = self.curr_load.write();
        if load.len() >= self.settings.max_load {
            return false;
        }
        load.push(rider);
        true
    }

    #[cfg(test)]
    pub(crate) fn unseat_all(&self) {
        self.curr_load.write().clear();
    }
}

impl fmt::Display for Elevator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "elevator {} (floor {}, {}, {}/{})",
            self.id,
            self.curr_floor(),
            self.status().as_string(),
            self.load(),
            self.settings.max_load
        )
    }
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    use super::*;
    use crate::utilities::dispatch_strategy::DispatchStrategyKind;
    use crate::utilities::priority_strategy::PriorityStrategyKind;

    const NUM_FLOORS: u8 = 10;

    fn settings(max_load: usize) -> ElevatorSettings {
        ElevatorSettings {
            max_load,
            step_duration: Duration::from_millis(1),
            idle_timeout: Duration::from_millis(100),
        }
    }

    fn elevator(start_floor: u8, max_load: usize) -> (Arc<Elevator>, Arc<Building>, Arc<Statistics>) {
        let dispatcher = Dispatcher::new(
            DispatchStrategyKind::RandomDispatch.build(),
            Duration::from_millis(10),
        );
        let building = Building::new(NUM_FLOORS, &dispatcher);
        let statistics = Arc::new(Statistics::new());
        let elevator = Elevator::new(
            0,
            start_floor,
            settings(max_load),
            Arc::clone(&building),
            PriorityStrategyKind::SameDirectionNearestFirst.build(NUM_FLOORS),
            Arc::clone(&dispatcher),
            Arc::clone(&statistics),
        );
        dispatcher.enroll([Arc::clone(&elevator)]);
        (elevator, building, statistics)
    }

    fn run_current(elevator: &Elevator, task: &Arc<Task>) -> TaskOutcome {
        *elevator.curr_task.write() = Some(Arc::clone(task));
        let outcome = elevator.exec_task(task);
        *elevator.curr_task.write() = None;
        elevator.set_status(ElevatorStatus::Idle);
        outcome
    }

    #[test]
    fn better_task_preempts_running_one() {
        let (elevator, _, _) = elevator(5, 2);
        let far = Task::generate(9, Direction::Up);
        elevator.set_status(ElevatorStatus::RunningUp);
        far.set_priority(elevator.try_receive(&far));
        assert!(far.start());
        *elevator.curr_task.write() = Some(Arc::clone(&far));

        let near = Task::generate(6, Direction::Up);
        elevator.receive(Arc::clone(&near));
        assert_eq!(far.status(), TaskStatus::Runnable);
        assert_eq!(near.priority(), 1);
        assert_eq!(elevator.queued()[0].id(), near.id());
    }

    #[test]
    fn worse_task_just_queues() {
        let (elevator, _, _) = elevator(5, 2);
        let near = Task::generate(6, Direction::Up);
        elevator.set_status(ElevatorStatus::RunningUp);
        assert!(near.start());
        *elevator.curr_task.write() = Some(Arc::clone(&near));

        elevator.receive(Task::generate(3, Direction::Down));
        assert_eq!(near.status(), TaskStatus::Running);
        assert_eq!(elevator.queued().len(), 1);
    }

    #[test]
    fn duplicates_are_dropped() {
        let (elevator, _, _) = elevator(1, 2);
        elevator.receive(Task::generate(4, Direction::Up));
        elevator.receive(Task::generate(4, Direction::Up));
        elevator.receive(Task::generate(4, Direction::None));
        assert_eq!(elevator.queued().len(), 1);
        elevator.receive(Task::generate(4, Direction::Down));
        assert_eq!(elevator.queued().len(), 2);
    }

    #[test]
    #[traced_test]
    fn hall_call_replaces_car_call() {
        let (elevator, _, _) = elevator(1, 2);
        elevator.receive(Task::generate(4, Direction::None));
        let hall = Task::generate(4, Direction::Up);
        elevator.receive(Arc::clone(&hall));
        let queued = elevator.queued();
        assert_eq!(queued.len(), 1);
        assert_eq!(queued[0].id(), hall.id());
        assert!(logs_contain("hall call replaces car call"));
    }

    #[test]
    fn queue_is_repriced_on_receive() {
        let (elevator, _, _) = elevator(1, 2);
        let first = Task::generate(6, Direction::Up);
        elevator.receive(Arc::clone(&first));
        assert_eq!(first.priority(), 5);
        *elevator.curr_floor.write() = 4;
        elevator.receive(Task::generate(9, Direction::Down));
        assert_eq!(first.priority(), 2);
    }

    #[test]
    fn full_elevator_cannot_execute() {
        let (elevator, _, _) = elevator(1, 1);
        elevator.seat(Rider::new("a", 8));
        let task = Task::generate(3, Direction::Up);
        assert_eq!(run_current(&elevator, &task), TaskOutcome::CannotExecute);
        assert_eq!(task.status(), TaskStatus::Runnable);
        assert_eq!(elevator.curr_floor(), 1);
    }

    #[test]
    fn full_elevator_stops_where_riders_leave() {
        let (elevator, building, statistics) = elevator(1, 1);
        elevator.seat(Rider::new("a", 3));
        building.floor(3).unwrap().add(Rider::new("b", 7), Direction::Up);
        let task = building.floor(3).unwrap().outstanding(Direction::Up).unwrap();

        assert_eq!(run_current(&elevator, &task), TaskOutcome::Completed);
        let riders = elevator.riders();
        assert_eq!(riders.len(), 1);
        assert_eq!(riders[0].name(), "b");
        assert_eq!(statistics.summary().delivered, 1);
        assert_eq!(statistics.summary().total_distance, 2);
    }

    #[test]
    fn cancelled_task_is_dropped() {
        let (elevator, _, _) = elevator(1, 2);
        let task = Task::generate(3, Direction::Up);
        task.cancel();
        assert_eq!(run_current(&elevator, &task), TaskOutcome::Cancelled);
        assert_eq!(elevator.curr_floor(), 1);
    }

    #[test]
    fn preempted_car_call_stays_local() {
        let (elevator, _, _) = elevator(1, 2);
        elevator.seat(Rider::new("a", 9));
        let task = Task::generate(9, Direction::None);
        *elevator.curr_task.write() = Some(Arc::clone(&task));
        let preempter = {
            let task = Arc::clone(&task);
            thread::spawn(move || {
                while task.status() != TaskStatus::Running {
                    thread::yield_now();
                }
                task.preempt();
            })
        };
        let outcome = elevator.exec_task(&task);
        preempter.join().unwrap();
        assert_eq!(outcome, TaskOutcome::PreemptedLocal);
        assert!(elevator.curr_floor() < 9);
    }

    #[test]
    fn preempted_hall_call_goes_global() {
        let (elevator, _, _) = elevator(1, 2);
        let task = Task::generate(9, Direction::Down);
        let preempter = {
            let task = Arc::clone(&task);
            thread::spawn(move || {
                while task.status() != TaskStatus::Running {
                    thread::yield_now();
                }
                task.preempt();
            })
        };
        let outcome = elevator.exec_task(&task);
        preempter.join().unwrap();
        assert_eq!(outcome, TaskOutcome::PreemptedGlobal);
    }

    #[test]
    fn preempted_on_arrival_still_serves() {
        let (elevator, building, _) = elevator(1, 2);
        let floor = building.floor(2).unwrap();
        floor.add(Rider::new("a", 5), Direction::Up);
        let task = floor.outstanding(Direction::Up).unwrap();
        let preempter = {
            let task = Arc::clone(&task);
            thread::spawn(move || {
                while task.status() != TaskStatus::Running {
                    thread::yield_now();
                }
                task.preempt();
            })
        };
        let outcome = elevator.exec_task(&task);
        preempter.join().unwrap();
        assert_eq!(outcome, TaskOutcome::Completed);
        assert_eq!(elevator.curr_floor(), 2);
        assert_eq!(elevator.load(), 1);
        assert!(floor.outstanding(Direction::Up).is_none());
    }

    #[test]
    fn cancelled_call_does_not_shadow_the_next_one() {
        let (elevator, building, statistics) = elevator(1, 2);
        let floor = building.floor(4).unwrap();
        floor.add(Rider::new("a", 8), Direction::Up);
        let withdrawn = floor.outstanding(Direction::Up).unwrap();
        elevator.receive(Arc::clone(&withdrawn));
        assert!(floor.cancel(Direction::Up));

        floor.add(Rider::new("b", 8), Direction::Up);
        let fresh = floor.outstanding(Direction::Up).unwrap();
        assert_ne!(fresh.id(), withdrawn.id());
        elevator.receive(Arc::clone(&fresh));
        let queued: Vec<_> = elevator.queued().iter().map(|t| t.id()).collect();
        assert_eq!(queued, [fresh.id()]);

        elevator.start().unwrap().join().unwrap();
        assert_eq!(floor.waiting(Direction::Up), 0);
        assert!(floor.outstanding(Direction::Up).is_none());
        assert_eq!(statistics.summary().boarded, 2);
        assert_eq!(statistics.summary().delivered, 2);
    }

    #[test]
    fn stale_car_call_completes_in_place() {
        let (elevator, _, statistics) = elevator(2, 2);
        let task = Task::generate(7, Direction::None);
        assert_eq!(run_current(&elevator, &task), TaskOutcome::Completed);
        assert_eq!(elevator.curr_floor(), 2);
        assert_eq!(statistics.summary().total_distance, 0);
    }

    #[test]
    fn boarding_issues_car_calls() {
        let (elevator, building, statistics) = elevator(4, 3);
        let floor = building.floor(4).unwrap();
        floor.add(Rider::new("a", 2), Direction::Down);
        floor.add(Rider::new("b", 1), Direction::Down);
        let task = floor.outstanding(Direction::Down).unwrap();

        assert_eq!(run_current(&elevator, &task), TaskOutcome::Completed);
        assert_eq!(elevator.load(), 2);
        let mut floors: Vec<u8> = elevator.queued().iter().map(|t| t.floor()).collect();
        floors.sort();
        assert_eq!(floors, [1, 2]);
        assert!(elevator.queued().iter().all(|t| t.is_car_call()));
        assert!(floor.outstanding(Direction::Down).is_none());
        assert_eq!(statistics.summary().boarded, 2);
    }

    #[test]
    fn load_never_exceeds_capacity() {
        let (elevator, building, statistics) = elevator(5, 1);
        elevator.seat(Rider::new("lhy", 6));
        let floor = building.floor(6).unwrap();
        for name in ["a", "b"] {
            floor.add(Rider::new(name, 9), Direction::Up);
        }
        let task = floor.outstanding(Direction::Up).unwrap();
        assert_eq!(run_current(&elevator, &task), TaskOutcome::Completed);
        assert_eq!(statistics.summary().delivered, 1);
        assert_eq!(elevator.load(), 1);
        assert_ne!(elevator.riders()[0].name(), "lhy");
        assert_eq!(floor.waiting(Direction::Up), 1);
        // riders left behind get a fresh hall call
        let reissued = floor.outstanding(Direction::Up).unwrap();
        assert_ne!(reissued.id(), task.id());
    }

    #[test]
    fn idle_elevator_retires() {
        let (elevator, _, statistics) = elevator(1, 2);
        let handle = elevator.start().unwrap();
        handle.join().unwrap();
        assert!(elevator.is_retired());
        assert_eq!(statistics.summary().retired, 1);
    }

    #[test]
    fn riders_aboard_keep_elevator_busy() {
        let (elevator, _, statistics) = elevator(1, 2);
        elevator.seat(Rider::new("a", 4));
        let handle = elevator.start().unwrap();
        handle.join().unwrap();
        assert_eq!(elevator.load(), 0);
        assert_eq!(elevator.curr_floor(), 4);
        assert_eq!(statistics.summary().delivered, 1);
    }
}
