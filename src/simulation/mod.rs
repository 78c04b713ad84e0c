pub mod engine;
pub mod log;
pub mod occupancy;
pub mod schedule;

pub use engine::SimulationEngine;
pub use log::{Move, MovementLog, Turn};
pub use occupancy::Occupancy;
pub use schedule::{AgentPlan, SchedulingStrategy};
