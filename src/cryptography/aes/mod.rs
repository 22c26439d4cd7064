mod aes;
mod aes_key;
mod sbox;
pub(crate) mod state;


pub use aes::*;
pub use aes_key::*;
