//! Integration tests for duel-sim.

use std::sync::Arc;

use duel_core::{CombatRules, DuelConfig, DuelError, FighterId, Phase, Tick, UpdateOrder};
use duel_fighter::{CombatEvent, EventKind, FighterError, FighterStats};
use duel_graph::{BehaviorGraph, GraphBuilder, MoveSpec};

use crate::{
    Duel, DuelBuilder, DuelObserver, DuelOutcome, EventRecorder, FighterSetup, NoopObserver,
    SimError, SimResult, TickReport,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn config(limit: f64) -> DuelConfig {
    DuelConfig { time_limit_secs: limit, ..DuelConfig::default() }
}

fn single(spec: MoveSpec) -> Arc<BehaviorGraph> {
    Arc::new(GraphBuilder::new("start").action("start", spec).build().unwrap())
}

fn heavy_graph() -> SimResult<Arc<BehaviorGraph>> {
    let cleave = MoveSpec::attack("Cleave")
        .timing(1.0, 0.2, 1.0)
        .power(50)
        .toughness(25.0)
        .cost(30.0)
        .range(1.5)
        .dash(0.5)
        .knockback(2.0)
        .next("start");
    Ok(Arc::new(GraphBuilder::new("start").action("start", cleave).build()?))
}

fn swift_graph() -> SimResult<Arc<BehaviorGraph>> {
    let stab = MoveSpec::attack("Stab")
        .timing(0.3, 0.1, 0.3)
        .power(15)
        .cost(15.0)
        .range(0.8)
        .dash(1.0)
        .knockback(0.2)
        .next("atk2");
    let rising = stab.clone().dash(0.5).next("dodge");
    let backdash = MoveSpec::dodge("Backdash")
        .timing(0.1, 0.5, 0.2)
        .power(0)
        .cost(20.0)
        .range(0.0)
        .knockback(0.0)
        .retreat(2.0)
        .next("start");
    let graph = GraphBuilder::new("start")
        .action("start", stab)
        .action("atk2", MoveSpec { name: "Rising cut".into(), ..rising })
        .action("dodge", backdash)
        .build()?;
    Ok(Arc::new(graph))
}

fn idle_graph() -> Arc<BehaviorGraph> {
    single(MoveSpec::wait("Watch").range(0.0).cost(1_000.0))
}

fn setup(name: &str, graph: Arc<BehaviorGraph>) -> FighterSetup {
    FighterSetup::new(name, graph, FighterStats::new(200))
}

fn heavy_vs_swift(config: DuelConfig) -> SimResult<Duel> {
    DuelBuilder::new(
        config,
        setup("Heavy", heavy_graph()?),
        setup("Swift", swift_graph()?),
    )
    .build()
}

#[derive(Default)]
struct CallCounter {
    starts:      usize,
    tick_starts: Vec<Tick>,
    tick_ends:   usize,
    ends:        usize,
}

impl DuelObserver for CallCounter {
    fn on_duel_start(&mut self, _duel: &Duel) {
        self.starts += 1;
    }
    fn on_tick_start(&mut self, tick: Tick) {
        self.tick_starts.push(tick);
    }
    fn on_tick_end(&mut self, _report: &TickReport) {
        self.tick_ends += 1;
    }
    fn on_duel_end(&mut self, _outcome: &DuelOutcome, _duel: &Duel) {
        self.ends += 1;
    }
}

// ── DuelBuilder ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn assigns_slots_in_argument_order() {
        let duel = heavy_vs_swift(DuelConfig::default()).unwrap();
        assert_eq!(duel.fighter(FighterId::FIRST).name(), "Heavy");
        assert_eq!(duel.fighter(FighterId::SECOND).name(), "Swift");
        assert_eq!(duel.fighter(FighterId::SECOND).id(), FighterId::SECOND);
        assert_eq!(duel.distance().get(), 3.0);
        assert_eq!(duel.clock.current_tick, Tick::ZERO);
        assert!(!duel.is_over());
    }

    #[test]
    fn every_slot_id_addresses_a_fighter() {
        let duel = heavy_vs_swift(DuelConfig::default()).unwrap();
        for id in FighterId::BOTH {
            assert_eq!(duel.fighter(id).id(), id);
            assert_eq!(duel.fighter(id.opponent()).id(), id.opponent());
        }
        let decoded = FighterId::try_from(1u8).unwrap();
        assert_eq!(duel.fighter(decoded).name(), "Swift");
        assert!(FighterId::try_from(2u8).is_err());
    }

    #[test]
    fn overrides_apply() {
        let rules = CombatRules { min_distance: 1.0, ..CombatRules::default() };
        let duel = DuelBuilder::new(
            DuelConfig::default(),
            setup("A", idle_graph()),
            setup("B", idle_graph()),
        )
        .initial_distance(0.2)
        .update_order(UpdateOrder::SecondThenFirst)
        .rules(rules)
        .build()
        .unwrap();
        assert_eq!(duel.config.update_order, UpdateOrder::SecondThenFirst);
        assert_eq!(duel.distance().floor(), 1.0);
        assert_eq!(duel.distance().get(), 1.0);
    }

    #[test]
    fn bad_step_rejected() {
        let config = DuelConfig { tick_secs: 0.0, ..DuelConfig::default() };
        let err = DuelBuilder::new(config, setup("A", idle_graph()), setup("B", idle_graph()))
            .build()
            .err()
            .unwrap();
        assert!(matches!(
            err,
            SimError::Duel(DuelError::InvalidValue { field: "tick_secs", .. })
        ));
    }

    #[test]
    fn negative_initial_distance_rejected() {
        let err = DuelBuilder::new(
            DuelConfig::default(),
            setup("A", idle_graph()),
            setup("B", idle_graph()),
        )
        .initial_distance(-1.0)
        .build()
        .err()
        .unwrap();
        assert!(matches!(err, SimError::Duel(_)));
    }

    #[test]
    fn bad_fighter_rejected() {
        let err = DuelBuilder::new(
            DuelConfig::default(),
            setup("A", idle_graph()),
            FighterSetup::new("B", idle_graph(), FighterStats::new(-5)),
        )
        .build()
        .err()
        .unwrap();
        assert!(matches!(
            err,
            SimError::Fighter(FighterError::InvalidStat { field: "max_health", .. })
        ));
    }

    #[test]
    fn graph_errors_convert() {
        fn broken() -> SimResult<Arc<BehaviorGraph>> {
            Ok(Arc::new(GraphBuilder::new("start").build()?))
        }
        assert!(matches!(broken(), Err(SimError::Graph(_))));
    }
}

// ── Tick loop ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use super::*;

    #[test]
    fn idle_fighters_time_out() {
        let mut duel = DuelBuilder::new(
            config(1.0),
            setup("A", idle_graph()),
            setup("B", idle_graph()),
        )
        .build()
        .unwrap();
        let mut rec = EventRecorder::new();
        let outcome = duel.run(&mut rec);

        assert_eq!(outcome, DuelOutcome::Timeout);
        assert_eq!(outcome.winner(), None);
        assert_eq!(duel.clock.current_tick, Tick(10));
        assert_eq!(rec.reports.len(), 10);
        assert!(rec.events.is_empty());
        assert_eq!(rec.outcome, Some(DuelOutcome::Timeout));
    }

    #[test]
    fn observer_hooks_fire_in_order() {
        let mut duel = DuelBuilder::new(
            config(0.5),
            setup("A", idle_graph()),
            setup("B", idle_graph()),
        )
        .build()
        .unwrap();
        let mut counter = CallCounter::default();
        duel.run(&mut counter);

        assert_eq!(counter.starts, 1);
        assert_eq!(counter.tick_starts, (0..5).map(Tick).collect::<Vec<_>>());
        assert_eq!(counter.tick_ends, 5);
        assert_eq!(counter.ends, 1);
    }

    #[test]
    fn decided_duel_does_not_advance() {
        let mut duel = DuelBuilder::new(
            config(0.3),
            setup("A", idle_graph()),
            setup("B", idle_graph()),
        )
        .build()
        .unwrap();
        let mut counter = CallCounter::default();
        assert_eq!(duel.run_ticks(10, &mut counter), Some(DuelOutcome::Timeout));
        assert_eq!(duel.step(&mut counter), Some(DuelOutcome::Timeout));
        assert_eq!(duel.clock.current_tick, Tick(3));
        assert_eq!(counter.tick_ends, 3);
        assert_eq!(counter.ends, 1);
    }

    #[test]
    fn run_ticks_stops_short_of_limit() {
        let mut duel = heavy_vs_swift(DuelConfig::default()).unwrap();
        assert_eq!(duel.run_ticks(5, &mut NoopObserver), None);
        assert_eq!(duel.clock.current_tick, Tick(5));
    }

    #[test]
    fn knockout_ends_with_victory() {
        let mut duel = DuelBuilder::new(
            DuelConfig { initial_distance: 1.0, ..DuelConfig::default() },
            setup("Striker", single(MoveSpec::attack("Chop").power(40))),
            FighterSetup::new("Target", idle_graph(), FighterStats::new(100)),
        )
        .build()
        .unwrap();
        let mut rec = EventRecorder::new();
        let outcome = duel.run(&mut rec);

        assert_eq!(
            outcome,
            DuelOutcome::Victory { winner: FighterId::FIRST, loser: FighterId::SECOND }
        );
        assert_eq!(outcome.winner(), Some(FighterId::FIRST));
        assert_eq!(rec.count("hit_landed"), 3);
        assert!(duel.fighter(FighterId::SECOND).is_defeated());
        assert_eq!(duel.fighter(FighterId::SECOND).health(), -20);
        assert_eq!(rec.reports.last().unwrap().fighter(FighterId::SECOND).health, -20);
    }

    #[test]
    fn reports_are_stamped_with_start_of_tick_time() {
        let mut duel = heavy_vs_swift(DuelConfig::default()).unwrap();
        let mut rec = EventRecorder::new();
        duel.run_ticks(20, &mut rec);

        for (i, report) in rec.reports.iter().enumerate() {
            assert_eq!(report.tick, Tick(i as u64));
            assert!((report.time - i as f64 * 0.1).abs() < 1e-12);
        }
        let times: Vec<f64> = rec.events.iter().map(|e| e.time).collect();
        assert!(times.windows(2).all(|w| w[0] <= w[1]));
    }
}

// ── Update order ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod order_tests {
    use super::*;

    fn mirror(order: UpdateOrder) -> (Duel, EventRecorder) {
        let stab = || single(MoveSpec::attack("Stab"));
        let mut duel = DuelBuilder::new(
            DuelConfig { initial_distance: 1.0, ..DuelConfig::default() },
            setup("Left", stab()),
            setup("Right", stab()),
        )
        .update_order(order)
        .build()
        .unwrap();
        let mut rec = EventRecorder::new();
        duel.run_ticks(4, &mut rec);
        (duel, rec)
    }

    fn first_hit(rec: &EventRecorder) -> &CombatEvent {
        rec.with_label("hit_landed").next().unwrap()
    }

    #[test]
    fn first_mover_lands_the_punish() {
        let (duel, rec) = mirror(UpdateOrder::FirstThenSecond);
        let hit = first_hit(&rec);
        assert_eq!(hit.fighter, FighterId::FIRST);
        assert!(matches!(hit.kind, EventKind::HitLanded { interrupt: true, .. }));
        assert_eq!(rec.count("hit_landed"), 1);
        assert_eq!(duel.fighter(FighterId::FIRST).health(), 200);
        assert_eq!(duel.fighter(FighterId::SECOND).health(), 190);
    }

    #[test]
    fn reversed_order_reverses_the_result() {
        let (duel, rec) = mirror(UpdateOrder::SecondThenFirst);
        let hit = first_hit(&rec);
        assert_eq!(hit.fighter, FighterId::SECOND);
        assert_eq!(duel.fighter(FighterId::FIRST).health(), 190);
        assert_eq!(duel.fighter(FighterId::SECOND).health(), 200);
    }

    #[test]
    fn staggered_second_mover_reverses_out_in_the_same_tick() {
        let (duel, rec) = mirror(UpdateOrder::FirstThenSecond);
        let labels: Vec<_> = rec.events.iter().map(|e| e.kind.label()).collect();
        let stagger = labels.iter().position(|&l| l == "staggered").unwrap();
        assert_eq!(labels[stagger + 1], "recovery_reversal");
        assert_eq!(duel.fighter(FighterId::SECOND).phase(), Phase::Idle);
    }
}

// ── Reference fight ───────────────────────────────────────────────────────────

#[cfg(test)]
mod scenario_tests {
    use super::*;

    #[test]
    fn heavy_vs_swift_plays_out() {
        let mut duel = heavy_vs_swift(DuelConfig::default()).unwrap();
        let mut rec = EventRecorder::new();
        let outcome = duel.run(&mut rec);

        assert_eq!(rec.outcome, Some(outcome));
        assert!(rec.count("move_started") > 0);
        assert!(rec.count("combo_cancel") > 0);
        assert!(rec.reports.iter().all(|r| r.distance >= 0.5));

        let heavy = duel.fighter(FighterId::FIRST);
        let swift = duel.fighter(FighterId::SECOND);
        match outcome {
            DuelOutcome::Victory { loser, .. } => assert!(duel.fighter(loser).is_defeated()),
            DuelOutcome::Timeout => {
                assert!(!heavy.is_defeated() && !swift.is_defeated());
                assert_eq!(duel.clock.current_tick, duel.config.end_tick());
            }
            DuelOutcome::DoubleKnockout => unreachable!("defeated fighters stop acting"),
        }
    }

    #[test]
    fn swift_opens_with_an_approach() {
        let mut duel = heavy_vs_swift(DuelConfig::default()).unwrap();
        let mut rec = EventRecorder::new();
        duel.run_ticks(1, &mut rec);
        let approaches: Vec<_> = rec.with_label("approach_started").map(|e| e.fighter).collect();
        assert_eq!(approaches, [FighterId::FIRST, FighterId::SECOND]);
        assert_eq!(rec.reports[0].fighter(FighterId::FIRST).phase, Phase::Moving);
    }

    #[test]
    fn health_never_increases() {
        let mut duel = heavy_vs_swift(DuelConfig::default()).unwrap();
        let mut rec = EventRecorder::new();
        duel.run(&mut rec);
        for slot in [FighterId::FIRST, FighterId::SECOND] {
            let hp: Vec<i32> = rec.reports.iter().map(|r| r.fighter(slot).health).collect();
            assert!(hp.windows(2).all(|w| w[1] <= w[0]));
        }
    }
}

// ── Properties ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod property_tests {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn distance_floor_holds_for_whole_duels(
            tick_secs in 0.02f64..0.3,
            initial   in 0.01f64..6.0,
            reversed  in any::<bool>(),
        ) {
            let order = if reversed { UpdateOrder::SecondThenFirst } else { UpdateOrder::FirstThenSecond };
            let config = DuelConfig {
                tick_secs,
                time_limit_secs: 15.0,
                initial_distance: initial,
                update_order: order,
                ..DuelConfig::default()
            };
            let mut duel = heavy_vs_swift(config).unwrap();
            let mut rec = EventRecorder::new();
            duel.run(&mut rec);
            let floor = duel.config.rules.min_distance;
            prop_assert!(rec.reports.iter().all(|r| r.distance >= floor));
        }

        #[test]
        fn bound_move_matches_phase(
            tick_secs in 0.02f64..0.3,
            reversed  in any::<bool>(),
        ) {
            let order = if reversed { UpdateOrder::SecondThenFirst } else { UpdateOrder::FirstThenSecond };
            let config = DuelConfig { tick_secs, time_limit_secs: 15.0, ..DuelConfig::default() };
            let mut duel = heavy_vs_swift(config).unwrap();
            duel.config.update_order = order;
            while duel.step(&mut NoopObserver).is_none() {
                for f in duel.fighters() {
                    prop_assert_eq!(f.bound_action().is_some(), f.phase().holds_move());
                }
            }
        }
    }
}
