use crate::simulation::schedule::AgentPlan;

/// Where an ant is in its trip
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AntState {
    /// Still in the start room
    Waiting,
    /// Somewhere inside its lane
    Marching,
    /// In the end room, done for the run
    Arrived,
}

/// An ant walking one lane, one room per turn at most
#[derive(Clone, Debug)]
pub struct Ant {
    pub id: u32,
    pub lane: usize,
    /// Turns to wait at the start before the first move
    pub offset: usize,
    /// Index of the current room in the lane
    pub cursor: usize,
    state: AntState,
}

impl Ant {
    /// Create an ant waiting at the start of its planned lane
    pub fn new(plan: &AgentPlan) -> Self {
        Self {
            id: plan.ant,
            lane: plan.lane,
            offset: plan.offset,
            cursor: 0,
            state: AntState::Waiting,
        }
    }

    /// One ant per plan, in ascending id order
    pub fn from_plans(plans: &[AgentPlan]) -> Vec<Ant> {
        let mut ants: Vec<Ant> = plans.iter().map(Ant::new).collect();
        ants.sort_by_key(|ant| ant.id);
        ants
    }

    #[inline]
    pub fn state(&self) -> AntState {
        self.state
    }

    #[inline]
    pub fn is_waiting(&self) -> bool {
        self.state == AntState::Waiting
    }

    #[inline]
    pub fn is_arrived(&self) -> bool {
        self.state == AntState::Arrived
    }

    /// Whether the departure offset has elapsed by `turn` (1-based)
    #[inline]
    pub fn may_depart(&self, turn: usize) -> bool {
        turn > self.offset
    }

    /// Step into the next room of a lane holding `lane_rooms` rooms
    pub fn advance(&mut self, lane_rooms: usize) {
        debug_assert!(!self.is_arrived());
        self.cursor += 1;
        self.state = if self.cursor + 1 >= lane_rooms {
            AntState::Arrived
        } else {
            AntState::Marching
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(ant: u32, lane: usize, offset: usize) -> AgentPlan {
        AgentPlan { ant, lane, offset }
    }

    #[test]
    fn test_ant_creation() {
        let ant = Ant::new(&plan(42, 3, 2));

        assert_eq!(ant.id, 42);
        assert_eq!(ant.lane, 3);
        assert_eq!(ant.offset, 2);
        assert_eq!(ant.cursor, 0);
        assert!(ant.is_waiting());
    }

    #[test]
    fn test_ant_departure_window() {
        let ant = Ant::new(&plan(1, 0, 2));

        assert!(!ant.may_depart(1));
        assert!(!ant.may_depart(2));
        assert!(ant.may_depart(3));
    }

    #[test]
    fn test_ant_walks_to_arrival() {
        // start, two rooms, end
        let mut ant = Ant::new(&plan(1, 0, 0));

        ant.advance(4);
        assert_eq!(ant.state(), AntState::Marching);
        ant.advance(4);
        assert_eq!(ant.state(), AntState::Marching);
        ant.advance(4);
        assert!(ant.is_arrived());
        assert_eq!(ant.cursor, 3);
    }

    #[test]
    fn test_direct_lane_arrives_in_one_move() {
        let mut ant = Ant::new(&plan(1, 0, 0));

        ant.advance(2);

        assert!(ant.is_arrived());
    }

    #[test]
    fn test_from_plans_sorts_by_id() {
        let ants = Ant::from_plans(&[plan(3, 0, 1), plan(1, 0, 0), plan(2, 1, 0)]);
        let ids: Vec<u32> = ants.iter().map(|a| a.id).collect();

        assert_eq!(ids, [1, 2, 3]);
    }
}
