use snownode::{FileStorage, SnowNode, SnowNodeConfig};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // RUST_LOG=snownode=trace shows every borrowed millisecond
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let path = std::env::temp_dir().join("snownode-demo.time");

    // Node ID comes from SNOWFLAKE_NODE_ID, defaulting to 0
    let config = SnowNodeConfig::default();
    let node = SnowNode::with_storage(config, FileStorage::open(&path)?)?;

    // Logical time is written whenever the clock moves past it
    for _ in 0..5 {
        let id = node.generate()?;
        let (ts, _, node_id, step) = node.decompose(id);
        println!("{} ts={ts} node={node_id} step={step}", id.to_base32_lower());
        std::thread::sleep(std::time::Duration::from_millis(2));
    }

    println!(
        "\nLogical time {} persisted to {}",
        std::fs::read_to_string(&path)?,
        path.display()
    );
    Ok(())
}
