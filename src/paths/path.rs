use crate::world::{Graph, RoomId};

/// A simple route from start to end, both included
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Path {
    rooms: Vec<RoomId>,
}

impl Path {
    /// Wrap a room sequence; callers guarantee at least two rooms
    pub fn new(rooms: Vec<RoomId>) -> Self {
        debug_assert!(rooms.len() >= 2, "a path joins two distinct rooms");
        Self { rooms }
    }

    #[inline]
    pub fn rooms(&self) -> &[RoomId] {
        &self.rooms
    }

    /// Rooms between the terminals
    #[inline]
    pub fn interior(&self) -> &[RoomId] {
        let n = self.rooms.len();
        if n <= 2 {
            &[]
        } else {
            &self.rooms[1..n - 1]
        }
    }

    /// Number of rooms, terminals included
    #[inline]
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Moves an ant needs to walk it
    #[inline]
    pub fn steps(&self) -> usize {
        self.rooms.len().saturating_sub(1)
    }

    #[inline]
    pub fn room_at(&self, cursor: usize) -> Option<RoomId> {
        self.rooms.get(cursor).copied()
    }

    /// True when no interior room is shared with `other`
    pub fn is_disjoint_from(&self, other: &Path) -> bool {
        let theirs = other.interior();
        !self.interior().iter().any(|room| theirs.contains(room))
    }

    /// Human readable `A -> B -> C`
    pub fn describe(&self, graph: &Graph) -> String {
        self.rooms
            .iter()
            .map(|&room| graph.name(room))
            .collect::<Vec<_>>()
            .join(" -> ")
    }
}

/// Lanes chosen for a run, in scheduling priority order
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PathSet {
    paths: Vec<Path>,
}

impl PathSet {
    pub fn new(paths: Vec<Path>) -> Self {
        Self { paths }
    }

    #[inline]
    pub fn get(&self, lane: usize) -> Option<&Path> {
        self.paths.get(lane)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Path> {
        self.paths.iter()
    }

    pub fn as_slice(&self) -> &[Path] {
        &self.paths
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Every pair of lanes has disjoint interiors
    pub fn is_disjoint(&self) -> bool {
        self.paths.iter().enumerate().all(|(i, a)| {
            self.paths[i + 1..]
                .iter()
                .all(|b| a.is_disjoint_from(b))
        })
    }
}

impl<'a> IntoIterator for &'a PathSet {
    type Item = &'a Path;
    type IntoIter = std::slice::Iter<'a, Path>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.iter()
    }
}
