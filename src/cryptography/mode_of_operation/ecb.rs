use crate::cryptography::aes;

/// Electronic codebook: each block runs through the cipher on its own.
pub fn encrypt_blocks(round_keys: &[u128], blocks: &[u128]) -> Vec<u128> {
    blocks
        .iter()
        .map(|&block| aes::encrypt_block(block, round_keys))
        .collect()
}

pub fn decrypt_blocks(round_keys: &[u128], blocks: &[u128]) -> Vec<u128> {
    blocks
        .iter()
        .map(|&block| aes::decrypt_block(block, round_keys))
        .collect()
}
