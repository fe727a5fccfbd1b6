use std::env;

use dotenv::dotenv;
use ethereum_types::U256;
use eyre::Result;
use tracing::info;

use proof_generator::{generate, ProofRequest};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();
    dotenv().ok();

    let rpc_endpoint = env::var("ETH_RPC_URL").expect("ETH_RPC_URL must be set");

    // WETH total-supply slot at a fixed mainnet block.
    let request = ProofRequest {
        rpc_endpoint,
        account: "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2".parse()?,
        slot: U256::zero(),
        block_number: 20_673_165,
    };

    let result = generate(&request).await?;
    info!("Proof generated for block {}", result.block_number);

    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
