use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use ethkit::commands::{
    ArtifactsCommand, BalanceCommand, BlockCommand, BlockNumberCommand, TxCommand,
};

use crate::cli::{AppArgs, Command};

mod cli;

/// Queries an Ethereum node over JSON-RPC and prints the result.
///
/// Each invocation makes one or two sequential requests to the node given by
/// `--rpc-url` (or the ETH_RPC_URL environment variable). Set RUST_LOG=debug to
/// see the requests.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::init();

    let args = AppArgs::parse();
    let mut out = io::stdout().lock();

    match args.command {
        Command::Tx(args) => TxCommand::from(args).run(&mut out).await?,
        Command::BlockNumber(args) => BlockNumberCommand::from(args).run(&mut out).await?,
        Command::Block(args) => BlockCommand::from(args).run(&mut out).await?,
        Command::Balance(args) => BalanceCommand::from(args).run(&mut out).await?,
        Command::Artifacts(args) => ArtifactsCommand::from(args).run(&mut out)?,
        Command::Version => writeln!(out, "ethkit {}", env!("CARGO_PKG_VERSION"))?,
    };
    Ok(())
}
