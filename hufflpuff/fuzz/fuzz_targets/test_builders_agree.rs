#![no_main]

use common::count;
use hufflpuff::build_tree;
use hufflpuff::build_tree_heap;
use hufflpuff::tree_to_table;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() == 0 {
        return;
    }
    let counts = count(data).unwrap();
    let linear = build_tree(&counts).unwrap();
    let heap = build_tree_heap(&counts).unwrap();
    assert_eq!(tree_to_table(&linear), tree_to_table(&heap));
});
