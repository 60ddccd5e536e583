use std::io::Write;

use log::info;

use crate::{
    client::NodeClient,
    output::{write_record, OutputMode},
    query::TxQuery,
    transaction::Transaction,
};

use super::CommandError;

/// Gets information about a transaction, by hash or by position in a block.
#[derive(Clone, Debug, Default)]
pub struct TxCommand {
    /// `<hash>` or `<block hash or number> <index>` (either order).
    pub args: Vec<String>,
    pub rpc_url: String,
    /// Print the signed RLP encoded transaction as hex, without a 0x prefix.
    pub raw: bool,
    /// Include the receipt in the record.
    pub full: bool,
    pub field: Option<String>,
    pub json: bool,
}

impl TxCommand {
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<(), CommandError> {
        let client = NodeClient::new(&self.rpc_url)?;
        let query = TxQuery::from_args(self.args.as_slice())?;
        info!("Getting {query}");

        let mut tx = Transaction::from(client.transaction(&query).await?);
        // A transaction outside a block has no receipt yet.
        let receipt = match tx.block_number {
            Some(_) => client.transaction_receipt(&tx.hash).await?,
            None => None,
        };
        tx.apply_receipt(receipt.as_ref());
        if self.full {
            if let Some(receipt) = receipt {
                tx.with_receipt(receipt);
            }
        }

        match OutputMode::select(self.field.as_deref(), self.raw, self.json) {
            OutputMode::Raw => writeln!(out, "{}", hex::encode(tx.rlp()?))?,
            mode => write_record(out, &tx, &mode)?,
        }
        Ok(())
    }
}
