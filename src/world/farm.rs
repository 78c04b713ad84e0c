use crate::world::graph::Graph;
use crate::world::room::RoomId;

/// A validated farm: everything the router needs from the input file
#[derive(Clone, Debug)]
pub struct Farm {
    pub ants: usize,
    pub start: RoomId,
    pub end: RoomId,
    pub graph: Graph,
    /// Accepted input lines, kept for echoing the map back
    pub lines: Vec<String>,
}

impl Farm {
    pub fn start_name(&self) -> &str {
        self.graph.name(self.start)
    }

    pub fn end_name(&self) -> &str {
        self.graph.name(self.end)
    }

    /// True for the two rooms with unbounded capacity
    #[inline]
    pub fn is_terminal(&self, room: RoomId) -> bool {
        room == self.start || room == self.end
    }
}
