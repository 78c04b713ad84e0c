use crate::world::{Graph, RoomId};
use std::io::{self, Write};

/// An ant stepping into a room
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    pub ant: u32,
    pub room: RoomId,
}

/// Moves made during one turn, in the order the ants moved
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Turn {
    pub number: usize,
    pub moves: Vec<Move>,
}

impl Turn {
    /// `L<ant>-<room>` tokens joined by single spaces
    pub fn render(&self, graph: &Graph) -> String {
        let mut line = String::with_capacity(self.moves.len() * 8);
        for (i, mv) in self.moves.iter().enumerate() {
            if i > 0 {
                line.push(' ');
            }
            line.push('L');
            line.push_str(&mv.ant.to_string());
            line.push('-');
            line.push_str(graph.name(mv.room));
        }
        line
    }
}

/// The whole run, turn by turn
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MovementLog {
    turns: Vec<Turn>,
}

impl MovementLog {
    pub fn push(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Number of turns the run took
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn move_count(&self) -> usize {
        self.turns.iter().map(|t| t.moves.len()).sum()
    }

    /// One rendered line per turn
    pub fn lines(&self, graph: &Graph) -> Vec<String> {
        self.turns.iter().map(|t| t.render(graph)).collect()
    }

    /// Write every turn followed by a newline
    pub fn write_to<W: Write>(&self, graph: &Graph, out: &mut W) -> io::Result<()> {
        for turn in &self.turns {
            writeln!(out, "{}", turn.render(graph))?;
        }
        Ok(())
    }
}
