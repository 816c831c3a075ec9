use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

use tracing::{info, warn};

use crate::utilities::config::Config;
use crate::utilities::error::Result;
use crate::utilities::statistics::{RoundSummary, Statistics};

pub mod debug;
pub mod dispatcher;
pub mod elevator;
pub mod floor;
pub mod riders;

use dispatcher::Dispatcher;
use elevator::{Elevator, ElevatorSettings};
use floor::{Building, Floor};

/// A building, its elevators and the dispatcher between them, for one round.
pub struct Bank {
    building: Arc<Building>,
    elevators: Vec<Arc<Elevator>>,
    dispatcher: Arc<Dispatcher>,
    statistics: Arc<Statistics>,
    handles: Vec<JoinHandle<()>>,
}

impl Bank {
    /// Every elevator starts at the ground floor.
    pub fn new(config: &Config) -> Result<Self> {
        let start_floors = vec![1; config.num_elevators as usize];
        Self::with_start_floors(config, &start_floors)
    }

    pub fn with_start_floors(config: &Config, start_floors: &[u8]) -> Result<Self> {
        config.validate()?;
        let statistics = Arc::new(Statistics::new());
        let dispatcher = Dispatcher::new(config.dispatch_kind()?.build(), config.retry_interval());
        let building = Building::new(config.num_floors, &dispatcher);
        let priority_strategy = config.priority_kind()?.build(config.num_floors);
        let settings = ElevatorSettings::from_config(config);

        let elevators: Vec<Arc<Elevator>> = start_floors
            .iter()
            .enumerate()
            .map(|(id, start_floor)| {
                Elevator::new(
                    id,
                    (*start_floor).clamp(1, config.num_floors),
                    settings,
                    Arc::clone(&building),
                    Arc::clone(&priority_strategy),
                    Arc::clone(&dispatcher),
                    Arc::clone(&statistics),
                )
            })
            .collect();
        dispatcher.enroll(elevators.iter().cloned());

        Ok(Bank {
            building,
            elevators,
            dispatcher,
            statistics,
            handles: Vec::new(),
        })
    }

    /// Spawns the dispatcher and one thread per elevator.
    pub fn start(&mut self) -> Result<()> {
        self.handles.push(self.dispatcher.start()?);
        for elevator in &self.elevators {
            self.handles.push(elevator.start()?);
        }
        info!(elevators = self.elevators.len(), floors = self.building.num_floors(), "bank started");
        Ok(())
    }

    pub fn building(&self) -> &Arc<Building> {
        &self.building
    }

    pub fn floor(&self, floor_no: u8) -> Option<&Arc<Floor>> {
        self.building.floor(floor_no)
    }

    pub fn elevators(&self) -> &[Arc<Elevator>] {
        &self.elevators
    }

    /// Blocks until every elevator has retired and returns the round's totals.
    pub fn wait(self) -> RoundSummary {
        self.dispatcher.wait();
        for handle in self.handles {
            if handle.join().is_err() {
                warn!("a bank thread panicked");
            }
        }
        self.statistics.summary()
    }

    pub fn wait_timeout(&self, timeout: Duration) -> bool {
        self.dispatcher.wait_timeout(timeout)
    }
}

/// Runs `config.epochs` independent rounds and prints a summary after each.
pub fn run(config: &Config) -> Result<Vec<RoundSummary>> {
    let mut summaries = Vec::with_capacity(config.epochs as usize);
    for epoch in 1..=config.epochs {
        info!(epoch, "starting round");
        let mut bank = Bank::new(config)?;
        bank.start()?;

        let generator = riders::generate(
            Arc::clone(bank.building()),
            config.num_riders,
            config.arrival_interval(),
        )?;
        if generator.join().is_err() {
            warn!("rider generator panicked");
        }

        let elevators: Vec<Arc<Elevator>> = bank.elevators().to_vec();
        let summary = bank.wait();
        if let Err(e) = debug::print_summary(epoch, &summary, &elevators) {
            warn!("failed to print summary: {}", e);
        }
        summaries.push(summary);
    }
    Ok(summaries)
}
