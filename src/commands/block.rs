use std::io::Write;

use crate::{
    block::BlockRecord,
    client::NodeClient,
    output::{write_record, OutputMode},
    query::BlockId,
};

use super::CommandError;

/// Gets a block by height, tag or hash.
#[derive(Clone, Debug, Default)]
pub struct BlockCommand {
    pub block: String,
    pub rpc_url: String,
    /// Include full transaction objects rather than hashes.
    pub full: bool,
    pub field: Option<String>,
    pub json: bool,
}

impl BlockCommand {
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<(), CommandError> {
        let client = NodeClient::new(&self.rpc_url)?;
        let block: BlockId = self.block.parse()?;
        let mode = OutputMode::select(self.field.as_deref(), false, self.json);

        if self.full {
            let record = BlockRecord::from(client.block_with_transactions(&block).await?);
            write_record(out, &record, &mode)?;
        } else {
            let record = BlockRecord::from(client.block(&block).await?);
            write_record(out, &record, &mode)?;
        }
        Ok(())
    }
}
