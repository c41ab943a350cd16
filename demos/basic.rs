use snownode::{SnowID, SnowNode, SnowNodeConfig, SnowNodeError};

fn main() -> Result<(), SnowNodeError> {
    // Create an allocator for node 1
    let node = SnowNode::new(SnowNodeConfig::builder().node(1).build())?;

    // Generate some IDs
    let id1 = node.generate()?;
    let id2 = node.generate()?;
    let id3 = node.generate()?;

    println!("Generated IDs (ordered by time, then step):");
    print_id(id1, &node);
    print_id(id2, &node);
    print_id(id3, &node);

    // Reserve a block of 10 consecutive steps at once
    let block = node.alloc(10)?;
    println!("\nReserved block starting at step {}", block.step(node.layout()));

    // Text forms
    println!("\nText forms of {id3}:");
    println!("  Hex: {}", id3.to_hex());
    println!("  Base32: {}", id3.to_base32_lower());
    Ok(())
}

fn print_id(id: SnowID, node: &SnowNode) {
    let (ts, global, node_id, step) = node.decompose(id);
    let datetime = id.time(node.layout());

    println!("  ID: {id}, Timestamp: {ts}, Human date: {datetime}, Global: {global}, Node ID: {node_id}, Step: {step}");
}
