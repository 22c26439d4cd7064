pub mod aes;
pub mod block_cipher;
pub mod gf256;
pub mod mode_of_operation;
pub mod rng;
