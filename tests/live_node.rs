//! Requires a mainnet node at ETH_RPC_URL.
//!
//! ```sh
//! ETH_RPC_URL=https://nodes.sequence.app/mainnet cargo test -- --ignored
//! ```
use ethkit::commands::{BlockNumberCommand, TxCommand};

fn rpc_url() -> anyhow::Result<String> {
    Ok(std::env::var("ETH_RPC_URL")?)
}

#[tokio::test]
#[ignore]
async fn test_live_block_number() -> anyhow::Result<()> {
    let command = BlockNumberCommand { rpc_url: rpc_url()? };
    let mut out = Vec::new();
    command.run(&mut out).await?;
    let number: u64 = String::from_utf8(out)?.trim().parse()?;
    assert!(number > 17_000_000);
    Ok(())
}

/// First transfer in block 46147.
#[tokio::test]
#[ignore]
async fn test_live_tx_either_order() -> anyhow::Result<()> {
    let hash = "0x5c504ed432cb51138bcf09aa5e8a410dd4a1e204ef84bfed1be16dfba1b22060";
    let mut by_hash = TxCommand {
        args: vec![hash.to_string()],
        rpc_url: rpc_url()?,
        field: Some("status".to_string()),
        ..Default::default()
    };
    let mut out = Vec::new();
    by_hash.run(&mut out).await?;
    assert_eq!(String::from_utf8(out)?, "TX_SUCCESS\n");

    by_hash.field = Some("hash".to_string());
    for args in [["46147", "0"], ["0", "46147"]] {
        let command = TxCommand {
            args: args.iter().map(|a| a.to_string()).collect(),
            ..by_hash.clone()
        };
        let mut out = Vec::new();
        command.run(&mut out).await?;
        assert_eq!(String::from_utf8(out)?, format!("{hash}\n"));
    }
    Ok(())
}
