use chrono::{TimeZone, Utc};
use snownode::{SnowNode, SnowNodeConfig, SnowNodeError};

fn main() -> Result<(), SnowNodeError> {
    // 12 bits for node ID = 4096 nodes, leaving 9 step bits
    let config = SnowNodeConfig::builder()
        .node_bits(12)?
        .epoch(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
        .node(42)
        .global(true)
        .build();

    let node = SnowNode::new(config)?;

    println!("Allocator configuration:");
    println!("  Node bits: {}", node.node_bits());
    println!("  Step bits: {}", node.step_bits());
    println!("  Max node ID: {}", node.max_node_id());
    println!("  Max step per ms: {}", node.max_step());
    println!("  Epoch: {}", node.epoch());

    // Generate and analyze an ID
    let id = node.generate()?;
    let (ts, global, node_id, step) = node.decompose(id);

    println!("\nGenerated ID: {id}");
    println!("Components:");
    println!("  Timestamp: {ts} ms since epoch");
    println!("  Global: {global}");
    println!("  Node ID: {node_id} (of {})", node.max_node_id());
    println!("  Step: {step} (of {})", node.max_step());
    Ok(())
}
