//! The two reference movesets.
//!
//! Both fighters loop forever.  The heavy fighter has a single slow,
//! tough, hard-hitting cleave that chains into itself.  The swift fighter
//! thrusts, flicks upward and then backdashes out of range before starting
//! over.

use std::sync::Arc;

use duel_graph::{BehaviorGraph, GraphBuilder, GraphResult, MoveSpec};

/// One attack: 1.0 s wind-up, 50 power, 25 toughness, reach 1.5 + 0.5 dash.
pub fn heavy_axe() -> GraphResult<Arc<BehaviorGraph>> {
    let cleave = MoveSpec::attack("Mountain-Splitting Axe")
        .timing(1.0, 0.2, 1.0)
        .power(50)
        .toughness(25.0)
        .cost(30.0)
        .range(1.5)
        .dash(0.5)
        .knockback(2.0)
        .next("start");

    let graph = GraphBuilder::new("start").action("start", cleave).build()?;
    Ok(Arc::new(graph))
}

/// Thrust (dash 1.0) → upward flick (dash 0.5) → backdash (retreat 2.0).
pub fn swift_sword() -> GraphResult<Arc<BehaviorGraph>> {
    let thrust = MoveSpec::attack("Taiji Sword: Thrust")
        .timing(0.3, 0.1, 0.3)
        .power(15)
        .cost(15.0)
        .range(0.8)
        .dash(1.0)
        .knockback(0.2)
        .next("atk2");

    let flick = MoveSpec::attack("Taiji Sword: Upward Flick")
        .timing(0.3, 0.1, 0.3)
        .power(15)
        .cost(15.0)
        .range(0.8)
        .dash(0.5)
        .knockback(0.2)
        .next("dodge");

    // Range 0: usable at any distance, never whiffs.
    let backdash = MoveSpec::dodge("Cloud Ladder Leap")
        .timing(0.1, 0.5, 0.2)
        .power(0)
        .cost(20.0)
        .range(0.0)
        .knockback(0.0)
        .retreat(2.0)
        .next("start");

    let graph = GraphBuilder::new("start")
        .action("start", thrust)
        .action("atk2", flick)
        .action("dodge", backdash)
        .build()?;
    Ok(Arc::new(graph))
}
