pub mod config;
pub mod direction;
pub mod dispatch_strategy;
pub mod elevator_status;
pub mod error;
pub mod priority_strategy;
pub mod rider;
pub mod statistics;
pub mod task;
