/// ----- DISPATCHER MODULE -----
/// Serialises every hall call of the bank through one worker thread that asks
/// the dispatch strategy for an elevator. When no elevator qualifies the
/// worker sleeps one retry interval and asks again, so a task is never lost
/// while the roster is non-empty. Elevators leave the roster when they retire,
/// and the last one to leave shuts the dispatcher down.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{select, unbounded, Receiver, RecvTimeoutError, Sender};
use parking_lot::{Mutex, RwLock};
use tracing::{debug, info, warn};

use crate::utilities::dispatch_strategy::DispatchStrategy;
use crate::utilities::task::{Task, TaskStatus};

use super::elevator::{Elevator, ElevatorId};

struct DispatchRequest {
    task: Arc<Task>,
    /// Elevator that just gave the task back.
    avoid: Option<ElevatorId>,
}

pub struct Dispatcher {
    roster: RwLock<Vec<Arc<Elevator>>>,
    strategy: Box<dyn DispatchStrategy>,
    retry_interval: Duration,
    pending_tx: Sender<DispatchRequest>,
    pending_rx: Receiver<DispatchRequest>,
    shut_down: AtomicBool,
    // Never sends. Dropping it disconnects `done_rx` and wakes every waiter.
    done_tx: Mutex<Option<Sender<()>>>,
    done_rx: Receiver<()>,
}

impl Dispatcher {
    pub fn new(strategy: Box<dyn DispatchStrategy>, retry_interval: Duration) -> Arc<Self> {
        let (pending_tx, pending_rx) = unbounded();
        let (done_tx, done_rx) = unbounded();
        Arc::new(Dispatcher {
            roster: RwLock::new(Vec::new()),
            strategy,
            retry_interval,
            pending_tx,
            pending_rx,
            shut_down: AtomicBool::new(false),
            done_tx: Mutex::new(Some(done_tx)),
            done_rx,
        })
    }

    /// Registers the elevators of the bank. Called once before `start`, the
    /// roster only shrinks afterwards.
    pub fn enroll(&self, elevators: impl IntoIterator<Item = Arc<Elevator>>) {
        self.roster.write().extend(elevators);
    }

    pub fn start(self: &Arc<Self>) -> io::Result<JoinHandle<()>> {
        let dispatcher = Arc::clone(self);
        thread::Builder::new()
            .name("dispatcher".into())
            .spawn(move || dispatcher.run())
    }

    /// Queues a fresh hall call.
    pub fn dispatch(&self, task: Arc<Task>) {
        debug!(task = %task, "dispatch request");
        self.submit(DispatchRequest { task, avoid: None });
    }

    /// Queues a hall call that was preempted or handed back by an elevator
    /// that retired.
    pub fn redispatch(&self, task: Arc<Task>) {
        info!(task = %task, "redispatch request");
        self.submit(DispatchRequest { task, avoid: None });
    }

    /// Queues a hall call `elevator` could not execute. The first attempt only
    /// considers the other elevators.
    pub fn hand_back(&self, task: Arc<Task>, elevator: ElevatorId) {
        debug!(task = %task, elevator, "task handed back");
        self.submit(DispatchRequest {
            task,
            avoid: Some(elevator),
        });
    }

    fn submit(&self, request: DispatchRequest) {
        if self.is_shut_down() {
            warn!(task = %request.task, "dispatcher is shut down, dropping task");
            return;
        }
        if self.pending_tx.send(request).is_err() {
            warn!("dispatch queue closed");
        }
    }

    pub fn cancel(&self, task: &Task) -> bool {
        task.cancel()
    }

    /// Removes a retired elevator from the roster.
    pub fn quit(&self, elevator: ElevatorId) {
        let remaining = {
            let mut roster = self.roster.write();
            roster.retain(|e| e.id() != elevator);
            roster.len()
        };
        info!(elevator, remaining, "elevator quit");
        if remaining == 0 {
            self.shut_down();
        }
    }

    fn shut_down(&self) {
        if !self.shut_down.swap(true, Ordering::AcqRel) {
            self.done_tx.lock().take();
            info!("no elevator left, dispatcher shut down");
        }
    }

    pub fn is_shut_down(&self) -> bool {
        self.shut_down.load(Ordering::Acquire)
    }

    pub fn roster(&self) -> Vec<Arc<Elevator>> {
        self.roster.read().clone()
    }

    /// Blocks until the last elevator has quit.
    pub fn wait(&self) {
        let _ = self.done_rx.recv();
    }

    /// Like `wait`, but gives up after `timeout`. Returns whether the
    /// dispatcher shut down.
    pub fn wait_timeout(&self, timeout: Duration) -> bool {
        matches!(
            self.done_rx.recv_timeout(timeout),
            Err(RecvTimeoutError::Disconnected)
        )
    }

    fn run(&self) {
        info!(retry_interval = ?self.retry_interval, "dispatcher started");
        loop {
            select! {
                recv(self.pending_rx) -> msg => {
                    match msg {
                        Ok(request) => {
                            if !self.assign(request) {
                                break;
                            }
                        }
                        Err(_) => break,
                    }
                },
                recv(self.done_rx) -> _ => break,
            }
        }
        let dropped = self.pending_rx.len();
        if dropped > 0 {
            warn!(dropped, "dispatcher stopped with pending tasks");
        }
        info!("dispatcher stopped");
    }

    /// Hands the task to an elevator, retrying until one is selected. Returns
    /// `false` once the dispatcher has shut down.
    fn assign(&self, request: DispatchRequest) -> bool {
        let DispatchRequest { task, mut avoid } = request;
        loop {
            if task.status() == TaskStatus::Cancelled {
                info!(task = %task, "dropping cancelled task");
                return true;
            }
            let selected = {
                let roster = self.roster.read();
                if roster.is_empty() {
                    return false;
                }
                match avoid.take() {
                    Some(id) => {
                        let others: Vec<Arc<Elevator>> =
                            roster.iter().filter(|e| e.id() != id).cloned().collect();
                        self.strategy.select(&others, &task)
                    }
                    None => self.strategy.select(&roster, &task),
                }
            };
            match selected {
                Some(elevator) => {
                    info!(task = %task, elevator = elevator.id(), "task dispatched");
                    elevator.receive(task);
                    return true;
                }
                None => {
                    warn!(task = %task, "no elevator can take the task, maybe all of them are full, retry dispatch...");
                }
            }
            if let Err(RecvTimeoutError::Disconnected) = self.done_rx.recv_timeout(self.retry_interval) {
                return false;
            }
        }
    }
}
