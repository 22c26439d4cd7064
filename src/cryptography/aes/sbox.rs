use crate::cryptography::gf256;
use once_cell::sync::Lazy;

/// Affine transformation finishing the S-box construction: the input is XORed
/// with its first four left rotations and the constant 0x63.
fn affine_transform(n: u8) -> u8 {
    let mut result = 0u8;
    let mut rotated = n;

    for _ in 0..5 {
        result ^= rotated;
        rotated = rotated.rotate_left(1);
    }

    result ^ 0x63
}

/// The sbox (substitution box) used in AES defines a swapping of elements: the
/// byte a<sub>i,j</sub> is replaced with S(a<sub>i,j</sub>).
///
/// Instead of a hard-coded table, entry `i` is derived on first use as the
/// affine transformation of the multiplicative inverse of `i` in GF(2^8)
/// (with 0, which has no inverse, mapping to 0 and therefore to 0x63).
pub static SBOX: Lazy<[u8; 256]> = Lazy::new(|| {
    let mut sbox = [0u8; 256];

    for (i, entry) in sbox.iter_mut().enumerate() {
        *entry = affine_transform(gf256::invert(i as u8));
    }

    sbox
});

/// The inverse permutation of [`SBOX`], so that
/// `INV_SBOX[SBOX[i]] == i` for every byte.
pub static INV_SBOX: Lazy<[u8; 256]> = Lazy::new(|| {
    let mut inverse = [0u8; 256];

    for (i, &substituted) in SBOX.iter().enumerate() {
        inverse[substituted as usize] = i as u8;
    }

    inverse
});
