//! Fluent builder for constructing a [`Duel`].

use std::sync::Arc;

use duel_core::{CombatRules, DistanceModel, DuelConfig, FighterId, UpdateOrder};
use duel_fighter::{Fighter, FighterStats};
use duel_graph::BehaviorGraph;

use crate::{Duel, SimResult};

/// Everything needed to put one fighter in the ring.
#[derive(Clone, Debug)]
pub struct FighterSetup {
    pub name:  String,
    pub graph: Arc<BehaviorGraph>,
    pub stats: FighterStats,
}

impl FighterSetup {
    pub fn new(name: impl Into<String>, graph: Arc<BehaviorGraph>, stats: FighterStats) -> Self {
        Self { name: name.into(), graph, stats }
    }
}

/// Fluent builder for [`Duel`].
///
/// # Required inputs
///
/// - [`DuelConfig`]: step, time limit, initial distance, update order, rules
/// - two [`FighterSetup`]s; the first takes slot `P1`, the second `P2`
///
/// # Optional overrides
///
/// | Method                   | Overrides                   |
/// |--------------------------|-----------------------------|
/// | `.initial_distance(d)`   | `config.initial_distance`   |
/// | `.update_order(o)`       | `config.update_order`       |
/// | `.rules(r)`              | `config.rules`              |
///
/// # Example
///
/// ```rust,ignore
/// let mut duel = DuelBuilder::new(config, heavy, swift)
///     .update_order(UpdateOrder::SecondThenFirst)
///     .build()?;
/// duel.run(&mut NoopObserver);
/// ```
pub struct DuelBuilder {
    config: DuelConfig,
    first:  FighterSetup,
    second: FighterSetup,
}

impl DuelBuilder {
    pub fn new(config: DuelConfig, first: FighterSetup, second: FighterSetup) -> Self {
        Self { config, first, second }
    }

    pub fn initial_distance(mut self, distance: f64) -> Self {
        self.config.initial_distance = distance;
        self
    }

    pub fn update_order(mut self, order: UpdateOrder) -> Self {
        self.config.update_order = order;
        self
    }

    pub fn rules(mut self, rules: CombatRules) -> Self {
        self.config.rules = rules;
        self
    }

    /// Validate the configuration and both fighters, and return a duel
    /// positioned at tick 0.
    pub fn build(self) -> SimResult<Duel> {
        self.config.validate()?;

        let first = Fighter::new(
            FighterId::FIRST,
            self.first.name,
            self.first.graph,
            self.first.stats,
        )?;
        let second = Fighter::new(
            FighterId::SECOND,
            self.second.name,
            self.second.graph,
            self.second.stats,
        )?;

        let distance =
            DistanceModel::new(self.config.initial_distance, self.config.rules.min_distance);
        tracing::debug!(
            first = first.name(),
            second = second.name(),
            distance = distance.get(),
            end_tick = %self.config.end_tick(),
            "duel built",
        );

        Ok(Duel {
            clock:    self.config.make_clock(),
            config:   self.config,
            fighters: [first, second],
            distance,
            outcome:  None,
            events:   Vec::new(),
        })
    }
}
