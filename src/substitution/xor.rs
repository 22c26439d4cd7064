/// XORs every byte with the same value.
pub fn xor_value(data: &[u8], value: u8) -> Vec<u8> {
    data.iter().map(|byte| byte ^ value).collect()
}

/// Pairwise XOR, truncated to the shorter input.
pub fn xor_strings(a: &[u8], b: &[u8]) -> Vec<u8> {
    a.iter().zip(b).map(|(x, y)| x ^ y).collect()
}
