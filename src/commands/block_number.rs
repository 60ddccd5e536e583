use std::io::Write;

use crate::client::NodeClient;

use super::CommandError;

/// Gets the latest block number of a network.
#[derive(Clone, Debug, Default)]
pub struct BlockNumberCommand {
    pub rpc_url: String,
}

impl BlockNumberCommand {
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<(), CommandError> {
        let client = NodeClient::new(&self.rpc_url)?;
        writeln!(out, "{}", client.block_number().await?)?;
        Ok(())
    }
}
