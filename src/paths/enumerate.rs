use crate::error::{LeminError, Result};
use crate::paths::path::Path;
use crate::world::{Graph, RoomId};
use clap::ValueEnum;
use std::num::NonZeroUsize;
use tracing::debug;

/// Which start-to-end routes are offered to the selector
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum SearchMode {
    /// Every simple path, depth first
    #[default]
    AllSimple,
    /// Only the paths of minimum length, breadth first
    Shortest,
}

/// Enumerates simple paths between two rooms of a graph.
///
/// Emission order only depends on the neighbor order of the graph, so two
/// runs over the same farm yield the same candidates.
pub struct PathFinder<'g> {
    graph: &'g Graph,
    start: RoomId,
    end: RoomId,
    limit: Option<NonZeroUsize>,
}

impl<'g> PathFinder<'g> {
    pub fn new(graph: &'g Graph, start: RoomId, end: RoomId) -> Self {
        Self {
            graph,
            start,
            end,
            limit: None,
        }
    }

    /// Stop after this many paths
    pub fn with_limit(mut self, limit: Option<NonZeroUsize>) -> Self {
        self.limit = limit;
        self
    }

    /// Run the search; an empty result is a `NoPath` error
    pub fn find(&self, mode: SearchMode) -> Result<Vec<Path>> {
        let paths = match mode {
            SearchMode::AllSimple => self.all_simple_paths(),
            SearchMode::Shortest => self.shortest_paths(),
        };
        debug!(?mode, found = paths.len(), "path search finished");

        if paths.is_empty() {
            return Err(LeminError::NoPath {
                start: self.graph.name(self.start).to_string(),
                end: self.graph.name(self.end).to_string(),
            });
        }
        Ok(paths)
    }

    fn is_full(&self, found: usize) -> bool {
        self.limit.is_some_and(|limit| found >= limit.get())
    }

    /// Depth-first over an explicit stack. The end room is never pushed, so
    /// reaching it emits a path and backtracks.
    pub fn all_simple_paths(&self) -> Vec<Path> {
        let mut paths = Vec::new();
        if self.start == self.end || self.is_full(0) {
            return paths;
        }

        let mut on_path = vec![false; self.graph.len()];
        let mut trail = vec![self.start];
        // next neighbor index to try, one frame per room on the trail
        let mut cursors = vec![0usize];
        on_path[self.start.index()] = true;

        while let Some(&cursor) = cursors.last() {
            let depth = cursors.len() - 1;
            let current = trail[depth];
            let neighbors = self.graph.neighbors(current);

            let Some(&next) = neighbors.get(cursor) else {
                cursors.pop();
                if let Some(room) = trail.pop() {
                    on_path[room.index()] = false;
                }
                continue;
            };
            cursors[depth] += 1;

            if on_path[next.index()] {
                continue;
            }
            if next == self.end {
                let mut rooms = trail.clone();
                rooms.push(next);
                paths.push(Path::new(rooms));
                if self.is_full(paths.len()) {
                    break;
                }
                continue;
            }

            on_path[next.index()] = true;
            trail.push(next);
            cursors.push(0);
        }

        paths
    }

    /// Level-by-level search where each partial path carries its own visited
    /// rooms, so shortest paths sharing a prefix are all kept. Partial paths
    /// only grow into rooms one hop further from the start, which prunes
    /// everything that cannot end up shortest.
    pub fn shortest_paths(&self) -> Vec<Path> {
        let mut found = Vec::new();
        if self.start == self.end || self.is_full(0) {
            return found;
        }

        let dist = self.graph.distances_from(self.start);
        if dist[self.end.index()].is_none() {
            return found;
        }

        let mut frontier: Vec<Vec<RoomId>> = vec![vec![self.start]];
        let mut depth = 0usize;

        while !frontier.is_empty() && found.is_empty() {
            let mut next_frontier = Vec::new();

            'partials: for partial in &frontier {
                let last = partial[partial.len() - 1];
                for &next in self.graph.neighbors(last) {
                    if dist[next.index()] != Some(depth + 1) || partial.contains(&next) {
                        continue;
                    }
                    let mut extended = Vec::with_capacity(partial.len() + 1);
                    extended.extend_from_slice(partial);
                    extended.push(next);

                    if next == self.end {
                        found.push(Path::new(extended));
                        if self.is_full(found.len()) {
                            break 'partials;
                        }
                    } else {
                        next_frontier.push(extended);
                    }
                }
            }

            frontier = next_frontier;
            depth += 1;
        }

        found
    }
}
