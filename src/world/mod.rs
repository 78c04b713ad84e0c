pub mod farm;
pub mod graph;
pub mod parser;
pub mod room;

pub use farm::Farm;
pub use graph::Graph;
pub use parser::{parse_farm, parse_farm_from_str};
pub use room::{Room, RoomId};
