use crate::ant::Ant;
use crate::error::Result;
use crate::paths::{Path, PathFinder, PathSet, SearchMode, SelectionStrategy};
use crate::simulation::schedule::{makespan, AgentPlan, SchedulingStrategy};
use crate::simulation::{MovementLog, SimulationEngine};
use crate::world::Farm;
use colored::Colorize;
use std::num::NonZeroUsize;
use std::time::Duration;
use tracing::debug;

/// Strategy knobs for one routing run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RoutingConfig {
    pub search: SearchMode,
    pub selection: SelectionStrategy,
    pub scheduling: SchedulingStrategy,
    /// Cap on candidate paths; `None` keeps every path
    pub path_limit: Option<NonZeroUsize>,
}

/// Output of the planning stages, ready to simulate
#[derive(Clone, Debug)]
pub struct RoutePlan {
    pub candidates: Vec<Path>,
    pub lanes: PathSet,
    pub schedule: Vec<AgentPlan>,
}

impl RoutePlan {
    /// Turn on which the last ant is expected to arrive
    pub fn makespan(&self) -> usize {
        makespan(&self.schedule, &self.lanes)
    }

    /// Walk the planned ants turn by turn
    pub fn simulate(&self, farm: &Farm) -> Result<MovementLog> {
        let mut ants = Ant::from_plans(&self.schedule);
        SimulationEngine::new(farm, &self.lanes).run(&mut ants)
    }

    /// Print run statistics to stderr. `elapsed` covers planning and the
    /// simulation that produced `log`.
    pub fn print_summary(&self, farm: &Farm, log: &MovementLog, elapsed: Duration) {
        eprintln!(
            "{}\n{} {:.3} ms {} {} {} {} {} {}",
            "===".bright_blue().bold(),
            "⏱️  Routing Latency:".green().bold(),
            elapsed.as_secs_f64() * 1000.0,
            "|".dimmed(),
            format!("ants={}", farm.ants).cyan(),
            format!("candidates={}", self.candidates.len()).cyan(),
            format!("lanes={}", self.lanes.len()).cyan(),
            format!("turns={}", log.len()).cyan(),
            format!("moves={}", log.move_count()).cyan(),
        );
        for (i, lane) in self.lanes.iter().enumerate() {
            eprintln!(
                "  {} {}",
                format!("lane {}:", i).yellow(),
                lane.describe(&farm.graph).dimmed()
            );
        }
    }
}

/// Runs search, selection and scheduling in order
pub struct Planner {
    config: RoutingConfig,
}

impl Planner {
    pub fn new(config: RoutingConfig) -> Self {
        Self { config }
    }

    pub fn plan(&self, farm: &Farm) -> Result<RoutePlan> {
        let candidates = PathFinder::new(&farm.graph, farm.start, farm.end)
            .with_limit(self.config.path_limit)
            .find(self.config.search)?;
        let lanes = self.config.selection.select(&candidates, farm.ants)?;
        for (i, lane) in lanes.iter().enumerate() {
            debug!(lane = i, steps = lane.steps(), route = %lane.describe(&farm.graph), "lane");
        }
        let schedule = self.config.scheduling.assign(&lanes, farm.ants)?;

        Ok(RoutePlan {
            candidates,
            lanes,
            schedule,
        })
    }

    /// Plan and simulate in one go
    pub fn route(&self, farm: &Farm) -> Result<(RoutePlan, MovementLog)> {
        let plan = self.plan(farm)?;
        let log = plan.simulate(farm)?;
        Ok((plan, log))
    }
}
