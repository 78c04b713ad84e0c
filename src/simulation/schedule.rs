use crate::error::{LeminError, Result};
use crate::paths::{Path, PathSet};
use clap::ValueEnum;
use tracing::debug;

/// How ants are spread over the selected lanes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum SchedulingStrategy {
    /// Each ant takes the lane where it would finish first
    #[default]
    MinFinish,
    /// Ants take lanes in turn, regardless of length
    RoundRobin,
}

/// One ant's lane and how many ants queue ahead of it there
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AgentPlan {
    /// 1-based ant ordinal
    pub ant: u32,
    /// Index into the lane set
    pub lane: usize,
    /// Turns the ant waits at the start before leaving
    pub offset: usize,
}

impl AgentPlan {
    /// Turn on which the ant reaches the end if never blocked
    pub fn arrival_turn(&self, lanes: &PathSet) -> usize {
        self.offset + lanes.get(self.lane).map_or(0, Path::steps)
    }
}

impl SchedulingStrategy {
    /// Give every ant 1..=`ants` exactly one lane
    pub fn assign(self, lanes: &PathSet, ants: usize) -> Result<Vec<AgentPlan>> {
        if lanes.is_empty() {
            return Err(LeminError::NoUsablePath);
        }

        let plans = match self {
            SchedulingStrategy::MinFinish => min_finish(lanes, ants),
            SchedulingStrategy::RoundRobin => round_robin(lanes, ants),
        };
        debug!(
            strategy = ?self,
            ants,
            makespan = makespan(&plans, lanes),
            "ants scheduled"
        );
        Ok(plans)
    }
}

fn min_finish(lanes: &PathSet, ants: usize) -> Vec<AgentPlan> {
    let mut next_finish: Vec<usize> = lanes.iter().map(Path::steps).collect();
    let mut queued = vec![0usize; lanes.len()];

    (1..=ants)
        .map(|ant| {
            // first lane wins ties
            let mut lane = 0;
            for (i, &finish) in next_finish.iter().enumerate() {
                if finish < next_finish[lane] {
                    lane = i;
                }
            }
            let plan = AgentPlan {
                ant: ant as u32,
                lane,
                offset: queued[lane],
            };
            queued[lane] += 1;
            next_finish[lane] += 1;
            plan
        })
        .collect()
}

fn round_robin(lanes: &PathSet, ants: usize) -> Vec<AgentPlan> {
    let mut queued = vec![0usize; lanes.len()];

    (1..=ants)
        .map(|ant| {
            let lane = (ant - 1) % lanes.len();
            let plan = AgentPlan {
                ant: ant as u32,
                lane,
                offset: queued[lane],
            };
            queued[lane] += 1;
            plan
        })
        .collect()
}

/// Turn on which the last ant arrives
pub fn makespan(plans: &[AgentPlan], lanes: &PathSet) -> usize {
    plans
        .iter()
        .map(|plan| plan.arrival_turn(lanes))
        .max()
        .unwrap_or(0)
}

/// Makespan of a min-finish schedule over lanes of the given step counts,
/// without building the schedule: the smallest `t` such that the lanes can
/// deliver `ants` ants by turn `t`. `usize::MAX` when there are no lanes.
pub fn lane_makespan(steps: &[usize], ants: usize) -> usize {
    let Some(&shortest) = steps.iter().min() else {
        return usize::MAX;
    };
    if ants == 0 {
        return 0;
    }

    let delivered_by = |turn: usize| -> usize {
        steps
            .iter()
            .filter(|&&s| s <= turn)
            .fold(0usize, |total, &s| total.saturating_add(turn - s + 1))
    };

    let (mut lo, mut hi) = (shortest, shortest.saturating_add(ants - 1));
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if delivered_by(mid) >= ants {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    lo
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::RoomId;

    /// Lanes of the given step counts, interiors kept apart
    fn lanes(steps: &[usize]) -> PathSet {
        let mut next = 1u32;
        PathSet::new(
            steps
                .iter()
                .map(|&s| {
                    let mut rooms = vec![RoomId(0)];
                    for _ in 1..s {
                        rooms.push(RoomId(next));
                        next += 1;
                    }
                    rooms.push(RoomId(u32::MAX));
                    Path::new(rooms)
                })
                .collect(),
        )
    }

    fn summary(plans: &[AgentPlan]) -> Vec<(usize, usize)> {
        plans.iter().map(|p| (p.lane, p.offset)).collect()
    }

    #[test]
    fn test_min_finish_equal_lanes_alternate() {
        let set = lanes(&[2, 2]);

        let plans = SchedulingStrategy::MinFinish.assign(&set, 4).unwrap();

        assert_eq!(summary(&plans), [(0, 0), (1, 0), (0, 1), (1, 1)]);
        assert_eq!(makespan(&plans, &set), 3);
    }

    #[test]
    fn test_min_finish_balances_uneven_lanes() {
        // lane 0 takes 2 steps, lane 1 takes 4
        let set = lanes(&[2, 4]);

        let plans = SchedulingStrategy::MinFinish.assign(&set, 5).unwrap();

        assert_eq!(
            summary(&plans),
            [(0, 0), (0, 1), (0, 2), (1, 0), (0, 3)]
        );
        assert_eq!(makespan(&plans, &set), 5);
    }

    #[test]
    fn test_single_lane_queues() {
        let set = lanes(&[3]);

        let plans = SchedulingStrategy::MinFinish.assign(&set, 3).unwrap();

        assert_eq!(summary(&plans), [(0, 0), (0, 1), (0, 2)]);
        assert_eq!(makespan(&plans, &set), 5);
    }

    #[test]
    fn test_round_robin_ignores_length() {
        let set = lanes(&[2, 6]);

        let plans = SchedulingStrategy::RoundRobin.assign(&set, 4).unwrap();

        assert_eq!(summary(&plans), [(0, 0), (1, 0), (0, 1), (1, 1)]);
        assert_eq!(makespan(&plans, &set), 7);
    }

    #[test]
    fn test_every_ant_assigned_once() {
        let set = lanes(&[3, 4, 7]);

        for strategy in [SchedulingStrategy::MinFinish, SchedulingStrategy::RoundRobin] {
            let plans = strategy.assign(&set, 11).unwrap();
            let ants: Vec<u32> = plans.iter().map(|p| p.ant).collect();

            assert_eq!(ants, (1..=11).collect::<Vec<u32>>());
            assert!(plans.iter().all(|p| p.lane < set.len()));
        }
    }

    #[test]
    fn test_lane_makespan_matches_schedule() {
        for steps in [vec![2], vec![2, 2], vec![2, 4], vec![3, 4, 7], vec![1, 5, 5, 9]] {
            let set = lanes(&steps);
            for ants in 1..30 {
                let plans = SchedulingStrategy::MinFinish.assign(&set, ants).unwrap();
                assert_eq!(lane_makespan(&steps, ants), makespan(&plans, &set));
            }
        }
    }

    #[test]
    fn test_lane_makespan_without_lanes() {
        assert_eq!(lane_makespan(&[], 3), usize::MAX);
    }

    #[test]
    fn test_lane_makespan_saturates_on_huge_counts() {
        assert_eq!(lane_makespan(&[2], usize::MAX), usize::MAX);
        assert_eq!(lane_makespan(&[2, 2], usize::MAX), usize::MAX / 2 + 2);
    }

    #[test]
    fn test_no_lanes_is_unusable() {
        let err = SchedulingStrategy::MinFinish
            .assign(&PathSet::default(), 2)
            .unwrap_err();

        assert!(matches!(err, LeminError::NoUsablePath));
    }
}
