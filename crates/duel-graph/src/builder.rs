//! Fluent builder for constructing a [`BehaviorGraph`].

use std::sync::Arc;

use rustc_hash::FxHashMap;

use duel_core::NodeId;

use crate::{
    BehaviorGraph, ConditionNode, DEFAULT_STEP_CAP, FighterSnapshot, GraphError, GraphResult,
    MoveNode, MoveSpec, Node,
};

enum Pending {
    Action(MoveSpec),
    Condition {
        predicate: crate::Predicate,
        on_true:   String,
        on_false:  String,
    },
}

/// Fluent builder for [`BehaviorGraph`].
///
/// Nodes are registered under string keys and wired to each other by key.
/// `build` interns every key to a [`NodeId`], validates every move, and
/// resolves successor keys.  A successor key that matches no node is logged
/// and resolved to "return to root".
///
/// # Example
///
/// ```rust,ignore
/// let graph = GraphBuilder::new("start")
///     .action("start", MoveSpec::attack("Stab").timing(0.3, 0.1, 0.3).next("guard?"))
///     .condition("guard?", |_me, foe| foe.phase == Phase::WindUp, "dodge", "start")
///     .action("dodge", MoveSpec::dodge("Step back").range(0.0).retreat(2.0))
///     .build()?;
/// ```
pub struct GraphBuilder {
    root:     String,
    entries:  Vec<(String, Pending)>,
    step_cap: usize,
}

impl GraphBuilder {
    /// Start a graph whose traversal begins at the node registered as `root`.
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            root:     root.into(),
            entries:  Vec::new(),
            step_cap: DEFAULT_STEP_CAP,
        }
    }

    /// Register a timed move under `key`.
    pub fn action(mut self, key: impl Into<String>, spec: MoveSpec) -> Self {
        self.entries.push((key.into(), Pending::Action(spec)));
        self
    }

    /// Register an instant branch under `key`.  The key doubles as the
    /// node's display name.
    pub fn condition<F>(
        mut self,
        key:       impl Into<String>,
        predicate: F,
        on_true:   impl Into<String>,
        on_false:  impl Into<String>,
    ) -> Self
    where
        F: Fn(&FighterSnapshot, &FighterSnapshot) -> bool + Send + Sync + 'static,
    {
        self.entries.push((
            key.into(),
            Pending::Condition {
                predicate: Arc::new(predicate),
                on_true:   on_true.into(),
                on_false:  on_false.into(),
            },
        ));
        self
    }

    /// Override the traversal bound (default [`DEFAULT_STEP_CAP`]).
    pub fn step_cap(mut self, cap: usize) -> Self {
        self.step_cap = cap;
        self
    }

    /// Intern keys, validate moves, resolve successors.
    pub fn build(self) -> GraphResult<BehaviorGraph> {
        if self.entries.is_empty() {
            return Err(GraphError::Empty);
        }
        if self.step_cap == 0 {
            return Err(GraphError::ZeroStepCap);
        }

        // ── Intern keys ───────────────────────────────────────────────────
        let mut index: FxHashMap<String, NodeId> = FxHashMap::default();
        for (i, (key, _)) in self.entries.iter().enumerate() {
            let id = NodeId::try_from(i).map_err(|_| GraphError::TooManyNodes(i))?;
            if index.insert(key.clone(), id).is_some() {
                return Err(GraphError::DuplicateNode(key.clone()));
            }
        }
        let root = *index
            .get(&self.root)
            .ok_or_else(|| GraphError::MissingRoot(self.root.clone()))?;

        // ── Resolve nodes ─────────────────────────────────────────────────
        let mut nodes = Vec::with_capacity(self.entries.len());
        for (key, pending) in self.entries {
            let node = match pending {
                Pending::Action(spec) => {
                    spec.validate().map_err(|reason| GraphError::InvalidMove {
                        key: key.clone(),
                        reason,
                    })?;
                    // A declared successor always chains, even when it names
                    // no node: the move skips recovery and restarts at root.
                    let next = spec
                        .next
                        .as_deref()
                        .map(|to| link(&index, &key, to).unwrap_or(root));
                    Node::Action(MoveNode::from_spec(spec, next))
                }
                Pending::Condition { predicate, on_true, on_false } => {
                    Node::Condition(ConditionNode {
                        on_true:  link(&index, &key, &on_true),
                        on_false: link(&index, &key, &on_false),
                        name:     Arc::from(key.as_str()),
                        predicate,
                    })
                }
            };
            nodes.push(node);
        }

        tracing::debug!(nodes = nodes.len(), root = %self.root, "behavior graph built");
        Ok(BehaviorGraph { nodes, index, root, step_cap: self.step_cap })
    }
}

/// Resolve a successor key.  Unknown keys are a recoverable defect: the
/// caller decides how to fall back to the root.
fn link(index: &FxHashMap<String, NodeId>, from: &str, to: &str) -> Option<NodeId> {
    let found = index.get(to).copied();
    if found.is_none() {
        tracing::warn!(from, to, "successor names no node; it will return to root");
    }
    found
}
