//! # Lem-in
//!
//! Routes a colony of ants through a farm of rooms and tunnels, from the
//! `##start` room to the `##end` room, in as few turns as possible.
//!
//! The pipeline runs strictly forward: the farm graph feeds the path
//! search, whose candidates feed the lane selector, whose lanes feed the
//! ant scheduler, whose plans feed the turn simulator.

pub mod ant;
pub mod cli;
pub mod error;
pub mod paths;
pub mod planner;
pub mod simulation;
pub mod world;

pub use ant::{Ant, AntState};
pub use cli::Args;
pub use error::{InputError, LeminError, Result};
pub use paths::{Path, PathFinder, PathSet, SearchMode, SelectionStrategy};
pub use planner::{Planner, RoutePlan, RoutingConfig};
pub use simulation::{AgentPlan, MovementLog, SchedulingStrategy, SimulationEngine};
pub use world::{Farm, Graph, RoomId};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::world::{parse_farm, parse_farm_from_str};
    pub use crate::{
        Args, Farm, Graph, LeminError, MovementLog, Planner, Result, RoutePlan, RoutingConfig,
        SearchMode, SelectionStrategy, SchedulingStrategy, SimulationEngine,
    };
}
