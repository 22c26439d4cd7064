/// Current state of one 16-byte block while it moves through the rounds.
///
/// AES reads a block into a 4x4 matrix column by column: input byte `i` sits
/// at row `i % 4`, column `i / 4`. The matrix is kept flat, so the byte at
/// (`row`, `col`) lives at `bytes[4 * col + row]` and four consecutive bytes
/// form one column.
pub struct State {
    pub bytes: [u8; 16],
}

impl State {
    pub fn new(block: u128) -> Self {
        State {
            bytes: block.to_be_bytes(),
        }
    }

    /// Iterates over the four columns of the matrix.
    pub fn columns(&mut self) -> impl Iterator<Item = &mut [u8]> {
        self.bytes.chunks_exact_mut(4)
    }

    /// Rotates the bytes of row `row_index` `n` places to the left, wrapping
    /// around. A negative `n` rotates to the right instead.
    pub fn left_shift_row(&mut self, row_index: usize, n: i32) {
        let shift = n.rem_euclid(4) as usize;

        let mut buffer = [0u8; 4];
        for (i, byte) in buffer.iter_mut().enumerate() {
            *byte = self.bytes[4 * i + row_index];
        }
        for i in 0..4 {
            self.bytes[4 * i + row_index] = buffer[(i + shift) % 4];
        }
    }
}

impl From<State> for u128 {
    fn from(state: State) -> u128 {
        u128::from_be_bytes(state.bytes)
    }
}
