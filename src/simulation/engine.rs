use crate::ant::Ant;
use crate::error::{LeminError, Result};
use crate::paths::PathSet;
use crate::simulation::log::{Move, MovementLog, Turn};
use crate::simulation::occupancy::Occupancy;
use crate::world::Farm;
use tracing::trace;

/// Turn simulator: walks every ant down its lane, one room per turn,
/// never letting two ants share a room other than start or end.
pub struct SimulationEngine<'a> {
    farm: &'a Farm,
    lanes: &'a PathSet,
}

impl<'a> SimulationEngine<'a> {
    /// Create a simulator over the selected lanes of a farm
    pub fn new(farm: &'a Farm, lanes: &'a PathSet) -> Self {
        Self { farm, lanes }
    }

    /// Run until every ant has arrived.
    ///
    /// Ants are processed in ascending id order each turn, which decides
    /// who gets a contested room. `ants` must already be in that order.
    pub fn run(&self, ants: &mut [Ant]) -> Result<MovementLog> {
        debug_assert!(ants.windows(2).all(|w| w[0].id < w[1].id));

        let mut occupancy = Occupancy::new(self.farm.graph.len());
        let mut log = MovementLog::default();
        let mut remaining = ants.iter().filter(|a| !a.is_arrived()).count();
        let mut turn = 0usize;

        while remaining > 0 {
            turn += 1;
            occupancy.begin_turn(turn);
            let mut moves = Vec::new();

            for ant in ants.iter_mut() {
                if ant.is_arrived() || (ant.is_waiting() && !ant.may_depart(turn)) {
                    continue;
                }
                let lane = self.lanes.get(ant.lane).ok_or(LeminError::UnknownLane {
                    ant: ant.id,
                    lane: ant.lane,
                })?;
                let Some(next) = lane.room_at(ant.cursor + 1) else {
                    continue;
                };

                let unbounded = self.farm.is_terminal(next);
                if !unbounded && !occupancy.can_enter(next) {
                    trace!(turn, ant = ant.id, room = self.farm.graph.name(next), "blocked");
                    continue;
                }

                if let Some(current) = lane.room_at(ant.cursor) {
                    if !self.farm.is_terminal(current) {
                        occupancy.leave(current);
                    }
                }
                if !unbounded {
                    occupancy.enter(next, ant.id);
                }
                ant.advance(lane.room_count());
                moves.push(Move {
                    ant: ant.id,
                    room: next,
                });
                if ant.is_arrived() {
                    remaining -= 1;
                }
            }

            if moves.is_empty() {
                return Err(LeminError::Stalled { turn });
            }
            log.push(Turn {
                number: turn,
                moves,
            });
        }

        Ok(log)
    }

}
