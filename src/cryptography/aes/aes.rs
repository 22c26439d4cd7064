use crate::cryptography::aes::sbox;
use crate::cryptography::aes::state::State;
use crate::cryptography::gf256;

/// Mixing matrix of the MixColumns step: each state column is replaced by
/// `MDS * column` over GF(2^8).
pub(super) const MDS: [[u8; 4]; 4] = [
    [2, 3, 1, 1],
    [1, 2, 3, 1],
    [1, 1, 2, 3],
    [3, 1, 1, 2],
];

/// Inverse of [`MDS`], undoing the mixing when decrypting.
pub(super) const INV_MDS: [[u8; 4]; 4] = [
    [14, 11, 13, 9],
    [9, 14, 11, 13],
    [13, 9, 14, 11],
    [11, 13, 9, 14],
];

pub(super) fn add_round_key(state: &mut State, round_key: u128) {
    let rk_bytes = round_key.to_be_bytes();

    for (a, k) in state.bytes.iter_mut().zip(rk_bytes) {
        *a ^= k;
    }
}

/// Substitute each byte `b[i]` with the substitution `SBOX[b[i]]`
pub(super) fn sub_bytes(state: &mut State) {
    for byte in state.bytes.iter_mut() {
        *byte = sbox::SBOX[*byte as usize];
    }
}

/// Substitute each byte `b[i]` with the substitution `INV_SBOX[b[i]]`
pub(super) fn inv_sub_bytes(state: &mut State) {
    for byte in state.bytes.iter_mut() {
        *byte = sbox::INV_SBOX[*byte as usize];
    }
}

/// Shift the second row by an offset of 1 to the left.
/// The third and fourth row are offset by 2 and 3 to the left.
pub(super) fn shift_rows(state: &mut State) {
    // first row is left unchanged
    state.left_shift_row(1, 1);
    state.left_shift_row(2, 2);
    state.left_shift_row(3, 3);
}

/// Shifts the second row by an offset of 1 to the right. The third and fourth
/// row are offset by 2 and 3 respectively.
pub(super) fn inv_shift_rows(state: &mut State) {
    // first row is left unchanged
    state.left_shift_row(1, -1);
    state.left_shift_row(2, -2);
    state.left_shift_row(3, -3);
}

/// Replaces `column` with `matrix * column` over GF(2^8).
pub(super) fn mul_column(column: &mut [u8], matrix: &[[u8; 4]; 4]) {
    let mut product = [0u8; 4];

    for (row, entry) in matrix.iter().zip(product.iter_mut()) {
        for (&coefficient, &value) in row.iter().zip(column.iter()) {
            *entry = gf256::add(*entry, gf256::multiply(coefficient, value));
        }
    }

    column.copy_from_slice(&product);
}

pub(super) fn mix_columns(state: &mut State) {
    for column in state.columns() {
        mul_column(column, &MDS);
    }
}

pub(super) fn inv_mix_columns(state: &mut State) {
    for column in state.columns() {
        mul_column(column, &INV_MDS);
    }
}

/// Encrypts one 16-byte block with the round keys expanded by
/// [`AesKey::round_keys`](super::AesKey::round_keys).
pub fn encrypt_block(plain_block: u128, round_keys: &[u128]) -> u128 {
    let rounds = round_keys.len() - 1;
    let mut state = State::new(plain_block);

    // initial round key addition
    add_round_key(&mut state, round_keys[0]);

    for i in 1..=rounds {
        sub_bytes(&mut state);
        shift_rows(&mut state);

        // in the last round, mix_columns is skipped
        if i != rounds {
            mix_columns(&mut state);
        }

        add_round_key(&mut state, round_keys[i]);
    }

    state.into()
}

/// Inverse of [`encrypt_block`]: runs the rounds backwards with the inverse
/// transformations.
pub fn decrypt_block(cipher_block: u128, round_keys: &[u128]) -> u128 {
    let rounds = round_keys.len() - 1;
    let mut state = State::new(cipher_block);

    for i in (1..=rounds).rev() {
        add_round_key(&mut state, round_keys[i]);

        if i != rounds {
            inv_mix_columns(&mut state);
        }

        inv_shift_rows(&mut state);
        inv_sub_bytes(&mut state);
    }

    add_round_key(&mut state, round_keys[0]);

    state.into()
}
