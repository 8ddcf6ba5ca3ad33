//! The built behavior graph and its traversal.

use rustc_hash::FxHashMap;

use duel_core::NodeId;

use crate::{FighterSnapshot, MoveNode, Node};

/// Default bound on traversal iterations per resolution.
pub const DEFAULT_STEP_CAP: usize = 100;

/// An immutable arena of nodes with a designated root.
///
/// Build with [`GraphBuilder`][crate::GraphBuilder].  Node names were
/// interned to [`NodeId`]s at build time; runtime lookups are plain `Vec`
/// indexing, and a miss (a foreign or stale id) falls back to the root.
#[derive(Debug)]
pub struct BehaviorGraph {
    pub(crate) nodes:    Vec<Node>,
    pub(crate) index:    FxHashMap<String, NodeId>,
    pub(crate) root:     NodeId,
    pub(crate) step_cap: usize,
}

impl BehaviorGraph {
    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn step_cap(&self) -> usize {
        self.step_cap
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// The move at `id`, or `None` if `id` is unknown or a condition.
    #[inline]
    pub fn action(&self, id: NodeId) -> Option<&MoveNode> {
        self.get(id).and_then(Node::as_action)
    }

    /// Look up a node by the key it was registered under.
    pub fn lookup(&self, key: &str) -> Option<NodeId> {
        self.index.get(key).copied()
    }

    /// Display name of the node at `id` (`"?"` for a miss).
    pub fn name_of(&self, id: NodeId) -> &str {
        self.get(id).map(Node::name).unwrap_or("?")
    }

    /// Walk from `start` through condition nodes until an action node is
    /// reached and return its id.
    ///
    /// An id that does not resolve restarts from the root.  Returns `None`
    /// when no action is reached within the step cap (a cycle made only of
    /// conditions); the caller should stay idle this tick.
    pub fn resolve(
        &self,
        start: NodeId,
        me:    &FighterSnapshot,
        foe:   &FighterSnapshot,
    ) -> Option<NodeId> {
        let mut cursor = start;
        for _ in 0..self.step_cap {
            let id = if cursor.index() < self.nodes.len() { cursor } else { self.root };
            match &self.nodes[id.index()] {
                Node::Action(_) => return Some(id),
                Node::Condition(cond) => {
                    let next = cond.branch(me, foe).unwrap_or(self.root);
                    tracing::trace!(node = %cond.name, ?next, "condition branch");
                    cursor = next;
                }
            }
        }
        tracing::warn!(
            start = %start,
            step_cap = self.step_cap,
            "graph traversal hit step cap without reaching an action",
        );
        None
    }
}
