pub mod artifact;
pub mod block;
pub mod client;
pub mod commands;
pub mod output;
pub mod printable;
pub mod query;
pub(crate) mod rpc;
pub mod transaction;
pub mod utils;
