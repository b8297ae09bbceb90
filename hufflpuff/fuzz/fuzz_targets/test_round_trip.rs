#![no_main]

use common::count;
use hufflpuff::build_tree;
use hufflpuff::decode;
use hufflpuff::encode;
use hufflpuff::tree_to_table;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() == 0 {
        return;
    }
    let tree = build_tree(&count(data).unwrap()).unwrap();
    let table = tree_to_table(&tree);
    let bits = encode(data, &table).unwrap();
    assert_eq!(decode(&bits, &tree).unwrap(), data);
});
