use crate::cryptography::aes;

/// Cipher block chaining: every plaintext block is XORed with the previous
/// ciphertext block before encryption, the very first one with the IV. A
/// single flipped input bit thereby changes every later ciphertext block.
pub fn encrypt_blocks(round_keys: &[u128], blocks: &[u128], iv: u128) -> Vec<u128> {
    let mut previous = iv;
    let mut encrypted = Vec::with_capacity(blocks.len());

    for &block in blocks {
        let cipher_block = aes::encrypt_block(block ^ previous, round_keys);
        encrypted.push(cipher_block);
        previous = cipher_block;
    }

    encrypted
}

pub fn decrypt_blocks(round_keys: &[u128], blocks: &[u128], iv: u128) -> Vec<u128> {
    let mut previous = iv;
    let mut decrypted = Vec::with_capacity(blocks.len());

    for &block in blocks {
        decrypted.push(aes::decrypt_block(block, round_keys) ^ previous);
        previous = block;
    }

    decrypted
}
