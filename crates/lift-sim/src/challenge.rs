//! Challenge win/lose conditions, evaluated against the world's running
//! statistics.

use crate::WorldStats;

/// Verdict of a condition check.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ChallengeStatus {
    /// No verdict yet; keep simulating.
    InProgress,
    Succeeded,
    Failed,
}

/// A pure pass/fail rule over [`WorldStats`].
///
/// Limits are strict: once a limit is exceeded the challenge fails even if
/// the transport target is reached in the same instant.  Conditions reach a
/// verdict as soon as either the target or a limit is hit, so they should be
/// evaluated whenever the stats change.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChallengeCondition {
    /// Transport `count` users with at most `time_limit` elapsed time.
    UserCountWithinTime { count: u64, time_limit: f64 },

    /// Transport `count` users while nobody ever waits `max_wait_time` or
    /// longer.
    UserCountWithMaxWaitTime { count: u64, max_wait_time: f64 },

    /// Transport `count` users using at most `move_limit` elevator moves
    /// (floors crossed, summed over all elevators).
    UserCountWithinMoves { count: u64, move_limit: u64 },

    /// Transport `count` users within `time_limit` while nobody ever waits
    /// `max_wait_time` or longer.
    UserCountWithinTimeWithMaxWaitTime {
        count:         u64,
        time_limit:    f64,
        max_wait_time: f64,
    },
}

impl ChallengeCondition {
    /// Check the condition against the current stats.
    pub fn evaluate(&self, stats: &WorldStats) -> ChallengeStatus {
        match *self {
            ChallengeCondition::UserCountWithinTime { count, time_limit } => {
                if stats.elapsed_time >= time_limit || stats.transported >= count {
                    verdict(stats.transported >= count && stats.elapsed_time <= time_limit)
                } else {
                    ChallengeStatus::InProgress
                }
            }
            ChallengeCondition::UserCountWithMaxWaitTime { count, max_wait_time } => {
                if stats.max_wait_time >= max_wait_time || stats.transported >= count {
                    verdict(stats.transported >= count && stats.max_wait_time < max_wait_time)
                } else {
                    ChallengeStatus::InProgress
                }
            }
            ChallengeCondition::UserCountWithinMoves { count, move_limit } => {
                if stats.move_count >= move_limit || stats.transported >= count {
                    verdict(stats.transported >= count && stats.move_count <= move_limit)
                } else {
                    ChallengeStatus::InProgress
                }
            }
            ChallengeCondition::UserCountWithinTimeWithMaxWaitTime {
                count,
                time_limit,
                max_wait_time,
            } => {
                let terminal = stats.elapsed_time >= time_limit
                    || stats.max_wait_time >= max_wait_time
                    || stats.transported >= count;
                if terminal {
                    verdict(
                        stats.transported >= count
                            && stats.elapsed_time <= time_limit
                            && stats.max_wait_time < max_wait_time,
                    )
                } else {
                    ChallengeStatus::InProgress
                }
            }
        }
    }
}

fn verdict(succeeded: bool) -> ChallengeStatus {
    if succeeded {
        ChallengeStatus::Succeeded
    } else {
        ChallengeStatus::Failed
    }
}
