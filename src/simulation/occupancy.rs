use crate::world::RoomId;

/// Room bookkeeping for the turn simulator.
///
/// A room is closed for the rest of a turn once an ant enters it, and stays
/// closed while an ant holds it. Entry stamps carry the turn number, so
/// starting a turn never clears the tables.
///
/// Over disjoint lanes the holder check never blocks anyone, and the moves
/// are those of the entry-stamp rule alone. Only lanes that share rooms can
/// see a difference: two ants trying to swap rooms stall instead.
pub struct Occupancy {
    /// Turn of the latest entry per room; 0 = never
    entered: Vec<usize>,
    /// Ant currently inside each room
    holder: Vec<Option<u32>>,
    turn: usize,
}

impl Occupancy {
    /// Create empty tables for a graph with the given number of rooms
    pub fn new(room_count: usize) -> Self {
        Self {
            entered: vec![0; room_count],
            holder: vec![None; room_count],
            turn: 0,
        }
    }

    /// Open a new turn; turns start at 1 and only grow
    #[inline]
    pub fn begin_turn(&mut self, turn: usize) {
        debug_assert!(turn > self.turn);
        self.turn = turn;
    }

    #[inline]
    pub fn entered_this_turn(&self, room: RoomId) -> bool {
        self.entered[room.index()] == self.turn
    }

    #[inline]
    pub fn holder(&self, room: RoomId) -> Option<u32> {
        self.holder[room.index()]
    }

    #[inline]
    pub fn can_enter(&self, room: RoomId) -> bool {
        !self.entered_this_turn(room) && self.holder(room).is_none()
    }

    /// Reserve `room` for `ant` for the rest of this turn
    pub fn enter(&mut self, room: RoomId, ant: u32) {
        debug_assert!(self.can_enter(room), "room {room} entered twice");
        self.entered[room.index()] = self.turn;
        self.holder[room.index()] = Some(ant);
    }

    /// The holder moved on; the room stays closed if it was entered this turn
    #[inline]
    pub fn leave(&mut self, room: RoomId) {
        self.holder[room.index()] = None;
    }
}
