pub(crate) mod cbc;
pub(crate) mod ecb;
mod padding;


pub use padding::{Padding, PaddingError};

/// Block size of AES in bytes, shared by the modes, the padding schemes and
/// the wire format.
pub const BLOCK_SIZE: usize = 16;

/// How successive blocks are chained together.
///
/// ECB encrypts every block independently, so equal plaintext blocks leak as
/// equal ciphertext blocks. CBC XORs each plaintext block with the previous
/// ciphertext block (the IV for the very first one) before it enters the
/// block cipher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Ecb,
    Cbc,
}
