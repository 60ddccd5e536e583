//! One operation per CLI subcommand. Each writes its result to the given writer.
use std::io;

use thiserror::Error;

use crate::{
    artifact::ArtifactError, client::ClientError, output::OutputError, query::QueryError,
    transaction::TransactionError,
};

pub mod artifacts;
pub mod balance;
pub mod block;
pub mod block_number;
pub mod tx;

pub use artifacts::ArtifactsCommand;
pub use balance::BalanceCommand;
pub use block::BlockCommand;
pub use block_number::BlockNumberCommand;
pub use tx::TxCommand;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Query(#[from] QueryError),
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error(transparent)]
    Output(#[from] OutputError),
    #[error(transparent)]
    Artifact(#[from] ArtifactError),
    #[error(transparent)]
    Transaction(#[from] TransactionError),
    #[error("IO error {0}")]
    IoError(#[from] io::Error),
    #[error("please pass --file")]
    MissingArtifactFile,
    #[error("please pass either --abi or --bytecode")]
    MissingArtifactSection,
    #[error("please pass either --abi or --bytecode, not both")]
    ConflictingArtifactSections,
}
