//! `duel-graph` — the per-fighter behavior graph.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                        |
//! |--------------|-----------------------------------------------------------------|
//! | [`node`]     | `MoveKind`, `MoveSpec`, `MoveNode`, `ConditionNode`, `Node`     |
//! | [`snapshot`] | `FighterSnapshot` — read-only state handed to conditions        |
//! | [`graph`]    | `BehaviorGraph` — node arena + bounded traversal                |
//! | [`builder`]  | `GraphBuilder` — wire nodes by name, intern to `NodeId`s        |
//! | [`error`]    | `GraphError`, `GraphResult<T>`                                  |
//!
//! # Design notes
//!
//! A graph mixes two node kinds.  **Action** nodes are timed moves that a
//! fighter binds and plays through its phases.  **Condition** nodes are
//! instant branches: they read two snapshots and pick a successor without
//! consuming simulated time.
//!
//! Graphs are cyclic by design (a moveset loops back to its opening).  A
//! successor that names no node is a configuration defect, not a fault: it is
//! resolved to "return to root" when the graph is built.
//!
//! Graphs are immutable once built and are shared behind an `Arc` by the
//! fighters that use them.

pub mod builder;
pub mod error;
pub mod graph;
pub mod node;
pub mod snapshot;


pub use builder::GraphBuilder;
pub use error::{GraphError, GraphResult};
pub use graph::{BehaviorGraph, DEFAULT_STEP_CAP};
pub use node::{ConditionNode, MoveKind, MoveNode, MoveSpec, Node, Predicate};
pub use snapshot::FighterSnapshot;
