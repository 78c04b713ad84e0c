use crate::error::{LeminError, Result};
use crate::paths::path::{Path, PathSet};
use crate::simulation::schedule::lane_makespan;
use crate::world::RoomId;
use clap::ValueEnum;
use std::collections::HashSet;
use tracing::{debug, trace};

/// How lanes are picked out of the candidate paths
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum SelectionStrategy {
    /// Greedy disjoint scan, shortest candidates first
    #[default]
    Sorted,
    /// Greedy disjoint scan in discovery order
    Discovery,
    /// Run both greedy scans and keep the faster one
    Best,
    /// Try every disjoint subset and keep the fastest
    Exhaustive,
}

impl SelectionStrategy {
    /// Pick pairwise-disjoint lanes for `ants` ants.
    ///
    /// `ants` only matters to the strategies that compare makespans.
    pub fn select(self, candidates: &[Path], ants: usize) -> Result<PathSet> {
        let selected = match self {
            SelectionStrategy::Sorted => sorted_disjoint(candidates),
            SelectionStrategy::Discovery => discovery_disjoint(candidates),
            SelectionStrategy::Best => best_greedy(candidates, ants),
            SelectionStrategy::Exhaustive => exhaustive_disjoint(candidates, ants),
        };
        debug!(
            strategy = ?self,
            candidates = candidates.len(),
            lanes = selected.len(),
            "lanes selected"
        );

        if selected.is_empty() {
            return Err(LeminError::NoUsablePath);
        }
        Ok(selected)
    }
}

/// Accept each path whose interior avoids every room already taken
pub fn greedy_disjoint<'a, I>(ordered: I) -> PathSet
where
    I: IntoIterator<Item = &'a Path>,
{
    let mut used: HashSet<RoomId> = HashSet::new();
    let mut chosen = Vec::new();

    for path in ordered {
        if path.interior().iter().any(|room| used.contains(room)) {
            continue;
        }
        used.extend(path.interior().iter().copied());
        chosen.push(path.clone());
    }

    PathSet::new(chosen)
}

/// Candidates by ascending length; equal lengths keep discovery order
fn by_length(candidates: &[Path]) -> Vec<&Path> {
    let mut ordered: Vec<&Path> = candidates.iter().collect();
    ordered.sort_by_key(|path| path.room_count());
    ordered
}

pub fn sorted_disjoint(candidates: &[Path]) -> PathSet {
    greedy_disjoint(by_length(candidates))
}

pub fn discovery_disjoint(candidates: &[Path]) -> PathSet {
    greedy_disjoint(candidates)
}

fn makespan_of(paths: &PathSet, ants: usize) -> usize {
    let steps: Vec<usize> = paths.iter().map(Path::steps).collect();
    lane_makespan(&steps, ants)
}

/// Both greedy scans; the discovery-order one wins ties
pub fn best_greedy(candidates: &[Path], ants: usize) -> PathSet {
    let sorted = sorted_disjoint(candidates);
    let discovery = discovery_disjoint(candidates);
    let sorted_turns = makespan_of(&sorted, ants);
    let discovery_turns = makespan_of(&discovery, ants);
    debug!(sorted_turns, discovery_turns, "greedy scans compared");

    if discovery_turns <= sorted_turns {
        discovery
    } else {
        sorted
    }
}

/// Branch and bound over include/exclude decisions in length order. The
/// first subset reached is the sorted greedy one, later subsets must be
/// strictly faster to replace it.
pub fn exhaustive_disjoint(candidates: &[Path], ants: usize) -> PathSet {
    let ordered = by_length(candidates);
    let mut search = SubsetSearch {
        steps: ordered.iter().map(|path| path.steps()).collect(),
        ordered,
        ants,
        used: HashSet::new(),
        chosen: Vec::new(),
        best: None,
        visited: 0,
    };
    search.explore(0);
    trace!(visited = search.visited, "exhaustive search finished");

    let picks = search.best.map(|(_, picks)| picks).unwrap_or_default();
    PathSet::new(
        picks
            .into_iter()
            .map(|i| search.ordered[i].clone())
            .collect(),
    )
}

struct SubsetSearch<'a> {
    ordered: Vec<&'a Path>,
    steps: Vec<usize>,
    ants: usize,
    used: HashSet<RoomId>,
    chosen: Vec<usize>,
    best: Option<(usize, Vec<usize>)>,
    visited: u64,
}

impl<'a> SubsetSearch<'a> {
    fn fits(&self, index: usize) -> bool {
        !self.ordered[index]
            .interior()
            .iter()
            .any(|room| self.used.contains(room))
    }

    /// Makespan if every remaining compatible path could be added at once.
    /// Extra lanes never slow a run down, so nothing below here beats it.
    fn lower_bound(&self, from: usize) -> usize {
        let mut steps: Vec<usize> = self.chosen.iter().map(|&i| self.steps[i]).collect();
        steps.extend(
            (from..self.ordered.len())
                .filter(|&i| self.fits(i))
                .map(|i| self.steps[i]),
        );
        lane_makespan(&steps, self.ants)
    }

    fn explore(&mut self, index: usize) {
        self.visited += 1;
        if let Some((best, _)) = &self.best {
            if self.lower_bound(index) >= *best {
                return;
            }
        }

        if index == self.ordered.len() {
            if !self.chosen.is_empty() {
                let steps: Vec<usize> = self.chosen.iter().map(|&i| self.steps[i]).collect();
                let turns = lane_makespan(&steps, self.ants);
                self.best = Some((turns, self.chosen.clone()));
            }
            return;
        }

        if self.fits(index) {
            let path: &'a Path = self.ordered[index];
            let interior = path.interior();
            self.used.extend(interior.iter().copied());
            self.chosen.push(index);
            self.explore(index + 1);
            self.chosen.pop();
            for room in interior {
                self.used.remove(room);
            }
        }
        self.explore(index + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(ids: &[u32]) -> Path {
        Path::new(ids.iter().map(|&i| RoomId(i)).collect())
    }

    fn rooms(set: &PathSet) -> Vec<Vec<u32>> {
        set.iter()
            .map(|p| p.rooms().iter().map(|r| r.0).collect())
            .collect()
    }

    /// Start 0, end 9. The long path discovered first blocks both short ones
    /// in discovery order.
    fn trap() -> Vec<Path> {
        vec![
            path(&[0, 1, 2, 3, 4, 9]),
            path(&[0, 1, 5, 9]),
            path(&[0, 6, 4, 9]),
        ]
    }

    #[test]
    fn test_sorted_prefers_short_paths() {
        let set = sorted_disjoint(&trap());

        assert_eq!(rooms(&set), [vec![0, 1, 5, 9], vec![0, 6, 4, 9]]);
        assert!(set.is_disjoint());
    }

    #[test]
    fn test_discovery_keeps_first_seen() {
        let set = discovery_disjoint(&trap());

        assert_eq!(rooms(&set), [vec![0, 1, 2, 3, 4, 9]]);
    }

    #[test]
    fn test_sort_is_stable() {
        let candidates = vec![path(&[0, 2, 3, 9]), path(&[0, 1, 9]), path(&[0, 4, 5, 9])];

        let set = sorted_disjoint(&candidates);

        assert_eq!(
            rooms(&set),
            [vec![0, 1, 9], vec![0, 2, 3, 9], vec![0, 4, 5, 9]]
        );
    }

    #[test]
    fn test_best_picks_lower_makespan() {
        let set = SelectionStrategy::Best.select(&trap(), 4).unwrap();

        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_best_prefers_discovery_on_tie() {
        // same lanes, different order
        let candidates = vec![path(&[0, 2, 3, 9]), path(&[0, 1, 9])];

        let set = best_greedy(&candidates, 1);

        assert_eq!(rooms(&set), [vec![0, 2, 3, 9], vec![0, 1, 9]]);
    }

    #[test]
    fn test_exhaustive_beats_greedy() {
        // the short lane blocks both long ones; two long lanes win for a crowd
        let candidates = vec![
            path(&[0, 1, 2, 9]),
            path(&[0, 1, 5, 6, 9]),
            path(&[0, 7, 8, 2, 9]),
        ];

        let greedy = sorted_disjoint(&candidates);
        let crowd = exhaustive_disjoint(&candidates, 10);
        let single = exhaustive_disjoint(&candidates, 1);

        assert_eq!(rooms(&greedy), [vec![0, 1, 2, 9]]);
        assert_eq!(rooms(&crowd), [vec![0, 1, 5, 6, 9], vec![0, 7, 8, 2, 9]]);
        assert_eq!(makespan_of(&greedy, 10), 12);
        assert_eq!(makespan_of(&crowd, 10), 8);
        assert_eq!(rooms(&single), [vec![0, 1, 2, 9]]);
    }

    #[test]
    fn test_largest_colony_still_compares_makespans() {
        let ants = u32::MAX as usize;

        let best = SelectionStrategy::Best.select(&trap(), ants).unwrap();
        let exhaustive = SelectionStrategy::Exhaustive.select(&trap(), ants).unwrap();

        assert_eq!(rooms(&best), rooms(&sorted_disjoint(&trap())));
        assert_eq!(rooms(&exhaustive), rooms(&best));
    }

    #[test]
    fn test_exhaustive_single_ant_matches_greedy() {
        let set = exhaustive_disjoint(&trap(), 1);

        assert_eq!(rooms(&set), rooms(&sorted_disjoint(&trap())));
    }

    #[test]
    fn test_greedy_is_maximal() {
        let candidates = trap();
        let set = sorted_disjoint(&candidates);

        for candidate in &candidates {
            if set.iter().any(|p| p == candidate) {
                continue;
            }
            assert!(set.iter().any(|p| !p.is_disjoint_from(candidate)));
        }
    }

    #[test]
    fn test_empty_candidates_is_unusable() {
        let err = SelectionStrategy::Sorted.select(&[], 3).unwrap_err();

        assert!(matches!(err, LeminError::NoUsablePath));
    }
}
