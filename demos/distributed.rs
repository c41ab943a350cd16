use rand::{rng, Rng};
use snownode::{SnowNode, SnowNodeConfig};
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

fn main() {
    // The allocator locks internally, so it is shared directly
    let node = Arc::new(SnowNode::new(SnowNodeConfig::builder().node(1).build()).unwrap());
    let mut handles = vec![];

    for thread_id in 0..4 {
        let node = Arc::clone(&node);
        handles.push(thread::spawn(move || {
            let mut ids = HashSet::new();
            let mut rng = rng();

            for i in 0..5 {
                // Random block sizes, as a batch writer would request
                let step = rng.random_range(1..=8);
                let id = node.alloc(step).unwrap();
                let (ts, _, node_id, start) = node.decompose(id);

                println!(
                    "Thread {thread_id} reserved block {i}: ID {id} (ts={ts}, node={node_id}, steps {start}..{})",
                    start + step
                );

                assert!(ids.insert(id), "Duplicate ID generated!");

                let delay = rng.random_range(0..=9);
                thread::sleep(Duration::from_millis(delay));
            }
            ids
        }));
    }

    let mut all_ids = HashSet::new();
    for handle in handles {
        all_ids.extend(handle.join().unwrap());
    }

    println!("\nTotal unique blocks reserved: {}", all_ids.len());

    let mut ids: Vec<_> = all_ids.into_iter().collect();
    ids.sort_unstable();
    assert!(ids.windows(2).all(|w| w[0] < w[1]));
    println!("All block starts are unique and sortable!");
}
