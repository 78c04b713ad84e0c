use crate::error::{InputError, Result};
use crate::world::farm::Farm;
use crate::world::graph::Graph;
use crate::world::room::RoomId;
use std::fs;
use tracing::debug;

const START: &str = "##start";
const END: &str = "##end";

/// Parse a farm from a file path
pub fn parse_farm(path: &str) -> Result<Farm> {
    let src = fs::read_to_string(path)?;
    let farm = parse_farm_from_str(&src)?;
    debug!(
        path,
        ants = farm.ants,
        rooms = farm.graph.len(),
        tunnels = farm.graph.tunnel_count(),
        "farm loaded"
    );
    Ok(farm)
}

/// Which terminal the next room line declares
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Marker {
    Start,
    End,
}

impl Marker {
    fn command(self) -> &'static str {
        match self {
            Marker::Start => START,
            Marker::End => END,
        }
    }
}

/// Parse a farm from an in-memory description
pub fn parse_farm_from_str(src: &str) -> std::result::Result<Farm, InputError> {
    let all: Vec<&str> = src.lines().collect();
    let first = all
        .iter()
        .position(|l| !l.trim().is_empty())
        .ok_or(InputError::Empty)?;
    let last = all
        .iter()
        .rposition(|l| !l.trim().is_empty())
        .unwrap_or(first);

    let mut graph = Graph::new();
    let mut ants: Option<usize> = None;
    let mut pending: Option<Marker> = None;
    let mut start: Option<RoomId> = None;
    let mut end: Option<RoomId> = None;
    let mut seen_start = false;
    let mut seen_end = false;
    let mut lines = Vec::with_capacity(last + 1 - first);

    for (offset, raw) in all[first..=last].iter().enumerate() {
        let line_no = first + offset + 1;
        let line = raw.trim();
        if line.is_empty() {
            return Err(InputError::EmptyLine(line_no));
        }
        lines.push(line.to_string());

        if line.starts_with("##") {
            let marker = match line {
                START if seen_start => return Err(InputError::RepeatedCommand(START)),
                END if seen_end => return Err(InputError::RepeatedCommand(END)),
                START => Marker::Start,
                END => Marker::End,
                other => return Err(InputError::UnknownCommand(other.to_string())),
            };
            if let Some(dangling) = pending {
                return Err(InputError::DanglingCommand(dangling.command()));
            }
            match marker {
                Marker::Start => seen_start = true,
                Marker::End => seen_end = true,
            }
            pending = Some(marker);
            continue;
        }
        if line.starts_with('#') {
            continue;
        }

        if ants.is_none() {
            if let Some(dangling) = pending {
                return Err(InputError::DanglingCommand(dangling.command()));
            }
            ants = Some(parse_ant_count(line)?);
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        match fields.as_slice() {
            [name, x, y] => {
                let room = parse_room(&mut graph, line_no, name, x, y)?;
                match pending.take() {
                    Some(Marker::Start) => start = Some(room),
                    Some(Marker::End) => end = Some(room),
                    None => {}
                }
            }
            [link] if link.contains('-') => {
                if let Some(dangling) = pending {
                    return Err(InputError::DanglingCommand(dangling.command()));
                }
                let (a, b) = link
                    .split_once('-')
                    .filter(|(a, b)| !a.is_empty() && !b.is_empty() && !b.contains('-'))
                    .ok_or_else(|| invalid(line_no, line))?;
                graph.add_tunnel(a, b)?;
            }
            _ => return Err(invalid(line_no, line)),
        }
    }

    if let Some(dangling) = pending {
        return Err(InputError::DanglingCommand(dangling.command()));
    }
    let ants = ants.ok_or_else(|| InputError::InvalidAntCount("missing".to_string()))?;
    let start = start.ok_or(InputError::MissingStart)?;
    let end = end.ok_or(InputError::MissingEnd)?;
    if start == end {
        return Err(InputError::SameStartEnd(graph.name(start).to_string()));
    }

    Ok(Farm {
        ants,
        start,
        end,
        graph,
        lines,
    })
}

/// Ant ids are `u32`, so the count must fit one
fn parse_ant_count(line: &str) -> std::result::Result<usize, InputError> {
    match line.parse::<u32>() {
        Ok(n) if n > 0 => Ok(n as usize),
        _ => Err(InputError::InvalidAntCount(line.to_string())),
    }
}

fn parse_room(
    graph: &mut Graph,
    line_no: usize,
    name: &str,
    x: &str,
    y: &str,
) -> std::result::Result<RoomId, InputError> {
    if name.starts_with('L') || name.starts_with('#') || name.contains('-') {
        return Err(InputError::InvalidRoomName(name.to_string()));
    }
    let (Ok(x), Ok(y)) = (x.parse::<i64>(), y.parse::<i64>()) else {
        return Err(invalid(line_no, &format!("{name} {x} {y}")));
    };
    if graph.room_id(name).is_some() {
        return Err(InputError::DuplicateRoom(name.to_string()));
    }
    graph.add_room(name, x, y)
}

fn invalid(line: usize, content: &str) -> InputError {
    InputError::InvalidLine {
        line,
        content: content.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIAMOND: &str = "2\n##start\nS 0 0\nA 1 1\nB 1 -1\n##end\nE 2 0\nS-A\nA-E\nS-B\nB-E\n";

    #[test]
    fn test_parse_basic_farm() {
        let farm = parse_farm_from_str(DIAMOND).unwrap();

        assert_eq!(farm.ants, 2);
        assert_eq!(farm.start_name(), "S");
        assert_eq!(farm.end_name(), "E");
        assert_eq!(farm.graph.len(), 4);
        assert_eq!(farm.graph.tunnel_count(), 4);
        assert_eq!(farm.lines.len(), 11);
    }

    #[test]
    fn test_parse_comments_and_outer_blank_lines() {
        let src = "\n\n# a comment\n1\n##start\nS 0 0\n#another\n##end\nE 1 0\nS-E\n\n\n";
        let farm = parse_farm_from_str(src).unwrap();

        assert_eq!(farm.ants, 1);
        assert_eq!(farm.lines.first().map(String::as_str), Some("# a comment"));
        assert_eq!(farm.lines.last().map(String::as_str), Some("S-E"));
    }

    #[test]
    fn test_parse_rejects_bad_ant_counts() {
        for count in ["0", "-3", "many", "4294967296", "18446744073709551615"] {
            let src = format!("{count}\n##start\nS 0 0\n##end\nE 1 0\nS-E\n");
            assert_eq!(
                parse_farm_from_str(&src).unwrap_err(),
                InputError::InvalidAntCount(count.to_string())
            );
        }
    }

    #[test]
    fn test_parse_rejects_inner_empty_line() {
        let src = "1\n##start\nS 0 0\n\n##end\nE 1 0\nS-E\n";
        assert_eq!(parse_farm_from_str(src).unwrap_err(), InputError::EmptyLine(4));
    }

    #[test]
    fn test_parse_missing_terminals() {
        let no_start = "1\nS 0 0\n##end\nE 1 0\nS-E\n";
        let no_end = "1\n##start\nS 0 0\nE 1 0\nS-E\n";

        assert_eq!(parse_farm_from_str(no_start).unwrap_err(), InputError::MissingStart);
        assert_eq!(parse_farm_from_str(no_end).unwrap_err(), InputError::MissingEnd);
    }

    #[test]
    fn test_parse_command_errors() {
        let twice = "1\n##start\nS 0 0\n##start\nT 0 0\n##end\nE 1 0\n";
        let unknown = "1\n##middle\n##start\nS 0 0\n##end\nE 1 0\n";
        let dangling = "1\n##start\n##end\nE 1 0\n";

        assert_eq!(
            parse_farm_from_str(twice).unwrap_err(),
            InputError::RepeatedCommand(START)
        );
        assert_eq!(
            parse_farm_from_str(unknown).unwrap_err(),
            InputError::UnknownCommand("##middle".to_string())
        );
        assert_eq!(
            parse_farm_from_str(dangling).unwrap_err(),
            InputError::DanglingCommand(START)
        );
    }

    #[test]
    fn test_parse_room_and_tunnel_errors() {
        let dup_room = "1\n##start\nS 0 0\nS 1 1\n##end\nE 1 0\n";
        let bad_name = "1\n##start\nS 0 0\nLx 1 1\n##end\nE 1 0\n";
        let unknown = "1\n##start\nS 0 0\n##end\nE 1 0\nS-Q\n";
        let self_loop = "1\n##start\nS 0 0\n##end\nE 1 0\nS-S\n";
        let dup_tunnel = "1\n##start\nS 0 0\n##end\nE 1 0\nS-E\nE-S\n";
        let garbage = "1\n##start\nS 0 0\n##end\nE 1 0\nS-E-F\n";

        assert_eq!(
            parse_farm_from_str(dup_room).unwrap_err(),
            InputError::DuplicateRoom("S".to_string())
        );
        assert_eq!(
            parse_farm_from_str(bad_name).unwrap_err(),
            InputError::InvalidRoomName("Lx".to_string())
        );
        assert_eq!(
            parse_farm_from_str(unknown).unwrap_err(),
            InputError::UnknownRoom("Q".to_string())
        );
        assert_eq!(
            parse_farm_from_str(self_loop).unwrap_err(),
            InputError::SelfLoop("S".to_string())
        );
        assert_eq!(
            parse_farm_from_str(dup_tunnel).unwrap_err(),
            InputError::DuplicateTunnel("E".to_string(), "S".to_string())
        );
        assert!(matches!(
            parse_farm_from_str(garbage).unwrap_err(),
            InputError::InvalidLine { line: 6, .. }
        ));
    }

    #[test]
    fn test_parse_empty_input() {
        assert_eq!(parse_farm_from_str("\n  \n").unwrap_err(), InputError::Empty);
    }
}
