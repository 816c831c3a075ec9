use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::time::Duration;

use tracing::{info, warn};

use super::dispatch_strategy::DispatchStrategyKind;
use super::error::{Error, Result};
use super::priority_strategy::PriorityStrategyKind;

pub const CONFIG_FILE: &str = "config.json";

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub num_floors: u8,
    pub num_elevators: u8,
    pub max_load: usize,
    pub dispatch_strategy: String,
    pub priority_strategy: String,
    pub num_riders: u32,
    pub arrival_interval_ms: u64,
    pub step_duration_ms: u64,
    pub idle_timeout_ms: u64,
    pub retry_interval_ms: u64,
    pub epochs: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            num_floors: 15,
            num_elevators: 3,
            max_load: 2,
            dispatch_strategy: String::from("RandomDispatch"),
            priority_strategy: String::from("SameDirectionNearestFirst"),
            num_riders: 20,
            arrival_interval_ms: 200,
            step_duration_ms: 100,
            idle_timeout_ms: 3000,
            retry_interval_ms: 200,
            epochs: 1,
        }
    }
}

impl Config {
    /// Reads `config.json`, then lets command line argument pairs override it.
    pub fn get() -> Result<Self> {
        let args: Vec<String> = env::args().collect();
        let config = Self::load(Path::new(CONFIG_FILE))?.with_args(&args);
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("No configuration file provided, using default settings...");
                Ok(Config::default())
            }
            Err(source) => Err(Error::ConfigIo {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    pub fn with_args(mut self, args: &[String]) -> Self {
        for arg_pair in args.rchunks_exact(2) {
            let value = arg_pair[1].as_str();
            match arg_pair[0].as_str() {
                "--dispatch" => self.dispatch_strategy = value.to_string(),
                "--priority" => self.priority_strategy = value.to_string(),
                "--floors" => parse_into(&mut self.num_floors, "floors", value),
                "--elevators" => parse_into(&mut self.num_elevators, "elevators", value),
                "--load" => parse_into(&mut self.max_load, "load", value),
                "--riders" => parse_into(&mut self.num_riders, "riders", value),
                "--epochs" => parse_into(&mut self.epochs, "epochs", value),
                other => warn!("illegal argument {}, skipping...", other),
            }
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.num_floors < 2 {
            return Err(Error::InvalidConfig(format!(
                "a bank needs at least 2 floors, got {}",
                self.num_floors
            )));
        }
        if self.num_elevators == 0 {
            return Err(Error::InvalidConfig(String::from("a bank needs at least 1 elevator")));
        }
        if self.max_load == 0 {
            return Err(Error::InvalidConfig(String::from("max load must be at least 1")));
        }
        // elevators would retire between two arrivals
        if self.idle_timeout_ms <= self.arrival_interval_ms {
            return Err(Error::InvalidConfig(format!(
                "idle timeout {}ms must be longer than the arrival interval {}ms",
                self.idle_timeout_ms, self.arrival_interval_ms
            )));
        }
        self.dispatch_kind()?;
        self.priority_kind()?;
        Ok(())
    }

    pub fn dispatch_kind(&self) -> Result<DispatchStrategyKind> {
        self.dispatch_strategy.parse()
    }

    pub fn priority_kind(&self) -> Result<PriorityStrategyKind> {
        self.priority_strategy.parse()
    }

    pub fn arrival_interval(&self) -> Duration {
        Duration::from_millis(self.arrival_interval_ms)
    }

    pub fn step_duration(&self) -> Duration {
        Duration::from_millis(self.step_duration_ms)
    }

    pub fn idle_timeout(&self) -> Duration {
        Duration::from_millis(self.idle_timeout_ms)
    }

    pub fn retry_interval(&self) -> Duration {
        Duration::from_millis(self.retry_interval_ms)
    }
}

fn parse_into<T: std::str::FromStr>(field: &mut T, name: &str, value: &str) {
    match value.parse::<T>() {
        Ok(parsed) => *field = parsed,
        Err(_) => warn!("{} {} is not a number, skipping...", name, value),
    }
}
