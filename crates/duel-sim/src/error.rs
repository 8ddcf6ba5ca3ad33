use duel_core::DuelError;
use duel_fighter::FighterError;
use duel_graph::GraphError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Duel(#[from] DuelError),

    #[error("behavior graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("fighter error: {0}")]
    Fighter(#[from] FighterError),
}

pub type SimResult<T> = Result<T, SimError>;
