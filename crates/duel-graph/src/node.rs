//! Graph node types.

use std::fmt;
use std::sync::Arc;

use duel_core::NodeId;

use crate::FighterSnapshot;

// ── MoveKind ──────────────────────────────────────────────────────────────────

/// The category of a timed move.
///
/// Only `Attack` moves resolve hits.  `Defend` and `Dodge` change how the
/// *opponent's* attacks land while they are in their active window; `Wait`
/// simply spends time.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveKind {
    Attack,
    Defend,
    Dodge,
    Wait,
}

impl MoveKind {
    pub fn label(self) -> &'static str {
        match self {
            MoveKind::Attack => "attack",
            MoveKind::Defend => "defend",
            MoveKind::Dodge  => "dodge",
            MoveKind::Wait   => "wait",
        }
    }
}

impl fmt::Display for MoveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ── MoveSpec ──────────────────────────────────────────────────────────────────

/// Authoring-side description of a move, consumed by
/// [`GraphBuilder::action`][crate::GraphBuilder::action].
///
/// Unset fields take the reference defaults: wind-up 0.3 s, active 0.1 s,
/// recovery 0.5 s, power 10, toughness 0, cost 10, range 1.0, no dash,
/// knockback 0.5, no retreat.
#[derive(Clone, Debug, PartialEq)]
pub struct MoveSpec {
    pub name:      String,
    pub kind:      MoveKind,
    pub windup:    f64,
    pub active:    f64,
    pub recovery:  f64,
    pub power:     u32,
    pub toughness: f64,
    pub cost:      f64,
    pub range:     f64,
    pub dash:      f64,
    pub knockback: f64,
    pub retreat:   f64,
    /// Key of the node to continue with after this move.  `None` returns to
    /// the root once the move has fully recovered.
    pub next:      Option<String>,
}

impl MoveSpec {
    pub fn new(name: impl Into<String>, kind: MoveKind) -> Self {
        Self {
            name:      name.into(),
            kind,
            windup:    0.3,
            active:    0.1,
            recovery:  0.5,
            power:     10,
            toughness: 0.0,
            cost:      10.0,
            range:     1.0,
            dash:      0.0,
            knockback: 0.5,
            retreat:   0.0,
            next:      None,
        }
    }

    pub fn attack(name: impl Into<String>) -> Self {
        Self::new(name, MoveKind::Attack)
    }

    pub fn defend(name: impl Into<String>) -> Self {
        Self::new(name, MoveKind::Defend)
    }

    pub fn dodge(name: impl Into<String>) -> Self {
        Self::new(name, MoveKind::Dodge)
    }

    pub fn wait(name: impl Into<String>) -> Self {
        Self::new(name, MoveKind::Wait)
    }

    /// Set wind-up, active and recovery durations in one call.
    pub fn timing(mut self, windup: f64, active: f64, recovery: f64) -> Self {
        self.windup = windup;
        self.active = active;
        self.recovery = recovery;
        self
    }

    pub fn power(mut self, power: u32) -> Self {
        self.power = power;
        self
    }

    pub fn toughness(mut self, toughness: f64) -> Self {
        self.toughness = toughness;
        self
    }

    pub fn cost(mut self, cost: f64) -> Self {
        self.cost = cost;
        self
    }

    pub fn range(mut self, range: f64) -> Self {
        self.range = range;
        self
    }

    pub fn dash(mut self, dash: f64) -> Self {
        self.dash = dash;
        self
    }

    pub fn knockback(mut self, knockback: f64) -> Self {
        self.knockback = knockback;
        self
    }

    pub fn retreat(mut self, retreat: f64) -> Self {
        self.retreat = retreat;
        self
    }

    pub fn next(mut self, key: impl Into<String>) -> Self {
        self.next = Some(key.into());
        self
    }

    /// Check the numbers.  Returns a human-readable reason on failure.
    pub(crate) fn validate(&self) -> Result<(), String> {
        let fields = [
            ("windup",    self.windup),
            ("active",    self.active),
            ("recovery",  self.recovery),
            ("toughness", self.toughness),
            ("cost",      self.cost),
            ("range",     self.range),
            ("dash",      self.dash),
            ("knockback", self.knockback),
            ("retreat",   self.retreat),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("{field} must be finite and non-negative, got {value}"));
            }
        }
        if self.windup + self.active + self.recovery <= 0.0 {
            return Err("wind-up, active and recovery are all zero".into());
        }
        if (self.dash > 0.0 || self.retreat > 0.0) && self.windup == 0.0 {
            return Err("dash and retreat are spread over the wind-up, which is zero".into());
        }
        Ok(())
    }
}

// ── MoveNode ──────────────────────────────────────────────────────────────────

/// A timed move inside a built graph.  Read-only during simulation.
#[derive(Clone, Debug, PartialEq)]
pub struct MoveNode {
    pub name:      Arc<str>,
    pub kind:      MoveKind,
    pub windup:    f64,
    pub active:    f64,
    pub recovery:  f64,
    pub power:     u32,
    pub toughness: f64,
    pub cost:      f64,
    pub range:     f64,
    pub dash:      f64,
    pub knockback: f64,
    pub retreat:   f64,
    /// Combo successor.  When present the move skips recovery.  A declared
    /// successor that named no node is linked to the root.
    pub next:      Option<NodeId>,
}

impl MoveNode {
    pub(crate) fn from_spec(spec: MoveSpec, next: Option<NodeId>) -> Self {
        Self {
            name:      Arc::from(spec.name),
            kind:      spec.kind,
            windup:    spec.windup,
            active:    spec.active,
            recovery:  spec.recovery,
            power:     spec.power,
            toughness: spec.toughness,
            cost:      spec.cost,
            range:     spec.range,
            dash:      spec.dash,
            knockback: spec.knockback,
            retreat:   spec.retreat,
            next,
        }
    }

    /// A zero range means "no range requirement" (self-targeted or
    /// stationary moves such as a backdash).
    #[inline]
    pub fn needs_range(&self) -> bool {
        self.range > 0.0
    }

    /// Range plus dash: how far away the opponent may be when the wind-up
    /// starts.
    #[inline]
    pub fn reach(&self) -> f64 {
        self.range + self.dash
    }
}

// ── ConditionNode ─────────────────────────────────────────────────────────────

/// Branch predicate over (self, opponent).  Must be pure: traversal may
/// evaluate it any number of times per tick.
pub type Predicate = Arc<dyn Fn(&FighterSnapshot, &FighterSnapshot) -> bool + Send + Sync>;

/// An instant branch.
#[derive(Clone)]
pub struct ConditionNode {
    pub name:     Arc<str>,
    pub predicate: Predicate,
    /// `None` means the branch pointed at an unknown node; traversal goes
    /// back to the root.
    pub on_true:  Option<NodeId>,
    pub on_false: Option<NodeId>,
}

impl ConditionNode {
    /// Evaluate the predicate and return the chosen successor.
    #[inline]
    pub fn branch(&self, me: &FighterSnapshot, foe: &FighterSnapshot) -> Option<NodeId> {
        if (self.predicate)(me, foe) { self.on_true } else { self.on_false }
    }
}

impl fmt::Debug for ConditionNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConditionNode")
            .field("name", &self.name)
            .field("on_true", &self.on_true)
            .field("on_false", &self.on_false)
            .finish_non_exhaustive()
    }
}

// ── Node ──────────────────────────────────────────────────────────────────────

/// A graph node: a timed move or an instant branch.
#[derive(Clone, Debug)]
pub enum Node {
    Action(MoveNode),
    Condition(ConditionNode),
}

impl Node {
    pub fn name(&self) -> &str {
        match self {
            Node::Action(m)    => &m.name,
            Node::Condition(c) => &c.name,
        }
    }

    pub fn as_action(&self) -> Option<&MoveNode> {
        match self {
            Node::Action(m) => Some(m),
            Node::Condition(_) => None,
        }
    }
}
