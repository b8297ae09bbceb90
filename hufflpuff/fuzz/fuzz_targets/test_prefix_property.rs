#![no_main]

use common::count;
use hufflpuff::build_tree;
use hufflpuff::tree::build_tree::test_prefix_property;
use hufflpuff::tree_to_table;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() == 0 {
        return;
    }
    let tree = build_tree(&count(data).unwrap()).unwrap();
    assert_eq!(tree.weight(), data.len());
    test_prefix_property(&tree_to_table(&tree));
});
