pub mod caesar;
pub mod vigenere;
pub mod xor;
