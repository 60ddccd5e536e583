use std::io::Write;

use ethers::utils::format_ether;

use crate::{
    client::NodeClient,
    query::{parse_address, BlockId},
};

use super::CommandError;

/// Gets the balance of an account, in wei unless `ether` is set.
#[derive(Clone, Debug, Default)]
pub struct BalanceCommand {
    pub address: String,
    /// Height, tag or hash. Latest block if absent.
    pub block: Option<String>,
    pub ether: bool,
    pub rpc_url: String,
}

impl BalanceCommand {
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<(), CommandError> {
        let client = NodeClient::new(&self.rpc_url)?;
        let address = parse_address(&self.address)?;
        let block = match &self.block {
            Some(block) => block.parse()?,
            None => BlockId::default(),
        };

        let balance = client.balance(&address, &block).await?;
        match self.ether {
            true => writeln!(out, "{}", format_ether(balance))?,
            false => writeln!(out, "{balance}")?,
        }
        Ok(())
    }
}
