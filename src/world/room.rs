use std::fmt;

/// Dense room index into the graph's room table
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomId(pub u32);

impl RoomId {
    /// Index for table lookups
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A declared room and the tunnels leaving it, in declaration order
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Room {
    pub name: String,
    pub x: i64,
    pub y: i64,
    neighbors: Vec<RoomId>,
}

impl Room {
    /// Create an unconnected room
    pub fn new(name: impl Into<String>, x: i64, y: i64) -> Self {
        Self {
            name: name.into(),
            x,
            y,
            neighbors: Vec::new(),
        }
    }

    /// Append a neighbor; order is kept for tie-breaking downstream
    #[inline]
    pub(crate) fn link(&mut self, other: RoomId) {
        self.neighbors.push(other);
    }

    #[inline]
    pub fn neighbors(&self) -> &[RoomId] {
        &self.neighbors
    }

    #[inline]
    pub fn is_linked_to(&self, other: RoomId) -> bool {
        self.neighbors.contains(&other)
    }

    /// Same name and coordinates
    pub fn same_declaration(&self, name: &str, x: i64, y: i64) -> bool {
        self.name == name && self.x == x && self.y == y
    }
}
