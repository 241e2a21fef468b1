/// 32-bit demo hash: `hash = hash * 31 + unit` over the UTF-16 code units
/// of the string, wrapping at every step. Deterministic, collision-prone,
/// not cryptographic. The empty string hashes to 0.
pub fn string_hash(value: &str) -> i32 {
    let mut hash: i32 = 0;
    for unit in value.encode_utf16() {
        // (hash << 5) - hash is the shift-and-subtract form of hash * 31
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit));
    }
    hash
}

/// Hash a comma-separated list of values, pairing each trimmed entry with
/// its stringified hash.
pub fn hash_values(input: &str) -> Vec<(String, String)> {
    input
        .split(',')
        .map(|value| {
            let value = value.trim();
            (value.to_string(), string_hash(value).to_string())
        })
        .collect()
}
