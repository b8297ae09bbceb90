use huffcode::build_code;
use huffcode::decode;
use huffcode::encode;
use huffcode::HuffError;

fn main() -> Result<(), HuffError> {
    const RECORDS_JSON: &'static [u8] = include_bytes!("../../test_data/records.json");
    let mut len = 0;
    for _ in 0..10 {
        let (table, tree) = build_code(RECORDS_JSON)?;
        let bits = encode(RECORDS_JSON, &table)?;
        let decoded = decode(&bits, &tree)?;
        debug_assert_eq!(decoded.len(), RECORDS_JSON.len());
        len += bits.len();
    }
    println!("{:?}", len);
    Ok(())
}
