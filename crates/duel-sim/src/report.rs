//! Per-tick reports and the final duel outcome.

use std::fmt;

use duel_core::{FighterId, Tick};
use duel_graph::FighterSnapshot;

/// State of the duel at the end of one tick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TickReport {
    pub tick:     Tick,
    /// Simulated seconds at the start of the tick (the timestamp carried by
    /// the tick's events).
    pub time:     f64,
    pub distance: f64,
    /// Indexed by slot: `fighters[FighterId::FIRST.index()]`.
    pub fighters: [FighterSnapshot; 2],
}

impl TickReport {
    #[inline]
    pub fn fighter(&self, id: FighterId) -> &FighterSnapshot {
        &self.fighters[id.index()]
    }
}

impl fmt::Display for TickReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.1}s]", self.time)?;
        for s in &self.fighters {
            write!(
                f,
                " {}[{} SP:{:.0}] HP:{} ||",
                s.fighter, s.phase, s.stamina, s.health,
            )?;
        }
        write!(f, " Dist:{:.1}m", self.distance)
    }
}

/// How a duel ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DuelOutcome {
    Victory { winner: FighterId, loser: FighterId },
    /// Both fighters at or below zero health after the same tick.
    DoubleKnockout,
    /// Time limit reached with both fighters standing.
    Timeout,
}

impl DuelOutcome {
    pub fn winner(&self) -> Option<FighterId> {
        match self {
            DuelOutcome::Victory { winner, .. } => Some(*winner),
            DuelOutcome::DoubleKnockout | DuelOutcome::Timeout => None,
        }
    }
}

impl fmt::Display for DuelOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DuelOutcome::Victory { winner, loser } => write!(f, "{winner} defeats {loser}"),
            DuelOutcome::DoubleKnockout => f.write_str("double knockout"),
            DuelOutcome::Timeout => f.write_str("time limit reached, draw"),
        }
    }
}
