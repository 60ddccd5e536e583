//! For Command Line Interface for ethkit

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use ethkit::commands::{
    ArtifactsCommand, BalanceCommand, BlockCommand, BlockNumberCommand, TxCommand,
};

/// ethkit - Ethereum dev toolkit
#[derive(Parser, Debug)]
#[command(name = "ethkit", author, version, about, long_about = None)]
pub struct AppArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Get the information about the transaction
    #[command(visible_alias = "t")]
    Tx(TxArgs),
    /// Get the latest block number for a given blockchain network
    #[command(visible_alias = "bn")]
    BlockNumber(BlockNumberArgs),
    /// Get the information about the block
    #[command(visible_alias = "b")]
    Block(BlockArgs),
    /// Get the balance of an account
    Balance(BalanceArgs),
    /// Print the contract abi or bytecode from a truffle artifacts file
    Artifacts(ArtifactsArgs),
    /// Print the version number
    Version,
}

#[derive(Args, Debug)]
pub struct RpcArgs {
    /// The RPC endpoint to the blockchain node to interact with
    #[arg(short, long, env = "ETH_RPC_URL")]
    pub rpc_url: String,
}

#[derive(Args, Debug)]
pub struct TxArgs {
    /// Transaction hash, or block hash/number and index of the transaction in the block
    #[arg(required = true, num_args = 1..=2, value_name = "HASH | BLOCK INDEX")]
    pub args: Vec<String>,
    /// Print the signed RLP encoded transaction as hex (no 0x prefix)
    #[arg(long)]
    pub raw: bool,
    /// Print extensive transaction info with receipt
    #[arg(long)]
    pub full: bool,
    /// Get the specific field of a transaction
    #[arg(short, long)]
    pub field: Option<String>,
    /// Print the transaction as JSON
    #[arg(short, long)]
    pub json: bool,
    #[command(flatten)]
    pub rpc: RpcArgs,
}

#[derive(Args, Debug)]
pub struct BlockNumberArgs {
    #[command(flatten)]
    pub rpc: RpcArgs,
}

#[derive(Args, Debug)]
pub struct BlockArgs {
    /// Block height, tag (latest, earliest, pending, safe, finalized) or hash
    pub block: String,
    /// Include full transaction objects instead of hashes
    #[arg(long)]
    pub full: bool,
    /// Get the specific field of a block
    #[arg(short, long)]
    pub field: Option<String>,
    /// Print the block as JSON
    #[arg(short, long)]
    pub json: bool,
    #[command(flatten)]
    pub rpc: RpcArgs,
}

#[derive(Args, Debug)]
pub struct BalanceArgs {
    /// Account address
    pub address: String,
    /// Block height, tag or hash (default: latest)
    #[arg(short, long)]
    pub block: Option<String>,
    /// Print the balance in ether instead of wei
    #[arg(long)]
    pub ether: bool,
    #[command(flatten)]
    pub rpc: RpcArgs,
}

#[derive(Args, Debug)]
pub struct ArtifactsArgs {
    /// Path to truffle contract artifacts file (required)
    #[arg(long)]
    pub file: Option<PathBuf>,
    /// Print the abi
    #[arg(long)]
    pub abi: bool,
    /// Print the bytecode
    #[arg(long)]
    pub bytecode: bool,
    /// With --bytecode, print the deployed (runtime) bytecode
    #[arg(long)]
    pub deployed: bool,
}

impl From<TxArgs> for TxCommand {
    fn from(args: TxArgs) -> Self {
        TxCommand {
            args: args.args,
            rpc_url: args.rpc.rpc_url,
            raw: args.raw,
            full: args.full,
            field: args.field,
            json: args.json,
        }
    }
}

impl From<BlockNumberArgs> for BlockNumberCommand {
    fn from(args: BlockNumberArgs) -> Self {
        BlockNumberCommand {
            rpc_url: args.rpc.rpc_url,
        }
    }
}

impl From<BlockArgs> for BlockCommand {
    fn from(args: BlockArgs) -> Self {
        BlockCommand {
            block: args.block,
            rpc_url: args.rpc.rpc_url,
            full: args.full,
            field: args.field,
            json: args.json,
        }
    }
}

impl From<BalanceArgs> for BalanceCommand {
    fn from(args: BalanceArgs) -> Self {
        BalanceCommand {
            address: args.address,
            block: args.block,
            ether: args.ether,
            rpc_url: args.rpc.rpc_url,
        }
    }
}

impl From<ArtifactsArgs> for ArtifactsCommand {
    fn from(args: ArtifactsArgs) -> Self {
        ArtifactsCommand {
            file: args.file,
            abi: args.abi,
            bytecode: args.bytecode,
            deployed: args.deployed,
        }
    }
}
