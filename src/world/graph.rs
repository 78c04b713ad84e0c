use crate::error::InputError;
use crate::world::room::{Room, RoomId};
use std::collections::{HashMap, VecDeque};

/// Rooms plus bidirectional tunnels. Read-only once the farm is built.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    rooms: Vec<Room>,
    index: HashMap<String, RoomId>,
    tunnels: usize,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a room. Repeating an identical declaration returns the existing id.
    pub fn add_room(&mut self, name: &str, x: i64, y: i64) -> Result<RoomId, InputError> {
        if let Some(&id) = self.index.get(name) {
            return if self.rooms[id.index()].same_declaration(name, x, y) {
                Ok(id)
            } else {
                Err(InputError::DuplicateRoom(name.to_string()))
            };
        }

        let id = RoomId(self.rooms.len() as u32);
        self.rooms.push(Room::new(name, x, y));
        self.index.insert(name.to_string(), id);
        Ok(id)
    }

    /// Connect two declared rooms both ways
    pub fn add_tunnel(&mut self, a: &str, b: &str) -> Result<(), InputError> {
        let from = self.require(a)?;
        let to = self.require(b)?;
        if from == to {
            return Err(InputError::SelfLoop(a.to_string()));
        }
        if self.rooms[from.index()].is_linked_to(to) {
            return Err(InputError::DuplicateTunnel(a.to_string(), b.to_string()));
        }

        self.rooms[from.index()].link(to);
        self.rooms[to.index()].link(from);
        self.tunnels += 1;
        Ok(())
    }

    fn require(&self, name: &str) -> Result<RoomId, InputError> {
        self.room_id(name)
            .ok_or_else(|| InputError::UnknownRoom(name.to_string()))
    }

    /// Ordered neighbors of a room
    ///
    /// # Panics
    /// If `room` was not issued by this graph.
    #[inline]
    pub fn neighbors(&self, room: RoomId) -> &[RoomId] {
        self.rooms[room.index()].neighbors()
    }

    #[inline]
    pub fn room_id(&self, name: &str) -> Option<RoomId> {
        self.index.get(name).copied()
    }

    #[inline]
    pub fn room(&self, room: RoomId) -> Option<&Room> {
        self.rooms.get(room.index())
    }

    /// Name of a room issued by this graph
    #[inline]
    pub fn name(&self, room: RoomId) -> &str {
        &self.rooms[room.index()].name
    }

    pub fn rooms(&self) -> impl Iterator<Item = (RoomId, &Room)> {
        self.rooms
            .iter()
            .enumerate()
            .map(|(i, room)| (RoomId(i as u32), room))
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn tunnel_count(&self) -> usize {
        self.tunnels
    }

    pub fn has_tunnel(&self, a: RoomId, b: RoomId) -> bool {
        self.room(a).is_some_and(|room| room.is_linked_to(b))
    }

    /// Hop count from `from` to every room, `None` where unreachable
    pub fn distances_from(&self, from: RoomId) -> Vec<Option<usize>> {
        let mut dist = vec![None; self.rooms.len()];
        let mut queue = VecDeque::with_capacity(self.rooms.len());
        dist[from.index()] = Some(0);
        queue.push_back(from);

        while let Some(room) = queue.pop_front() {
            let next = dist[room.index()].map_or(0, |d| d + 1);
            for &neighbor in self.neighbors(room) {
                if dist[neighbor.index()].is_none() {
                    dist[neighbor.index()] = Some(next);
                    queue.push_back(neighbor);
                }
            }
        }

        dist
    }
}
