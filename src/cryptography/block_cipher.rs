use crate::cryptography::aes::AesKey;
use crate::cryptography::mode_of_operation::{cbc, ecb, Mode, Padding, PaddingError, BLOCK_SIZE};
use std::fmt;

#[derive(Debug, PartialEq, Eq)]
pub enum AesError {
    InvalidKeyLength(usize),
    MissingIv,
    InvalidIvLength(usize),
    MalformedCiphertext(&'static str),
    Padding(PaddingError),
}

impl fmt::Display for AesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AesError::InvalidKeyLength(len) => {
                write!(f, "key must be 16, 24 or 32 bytes long, got {}", len)
            }
            AesError::MissingIv => write!(f, "CBC mode requires an initialization vector"),
            AesError::InvalidIvLength(len) => {
                write!(f, "initialization vector must be 16 bytes long, got {}", len)
            }
            AesError::MalformedCiphertext(reason) => write!(f, "malformed ciphertext: {}", reason),
            AesError::Padding(e) => write!(f, "{}", e),
        }
    }
}

impl From<PaddingError> for AesError {
    fn from(e: PaddingError) -> Self {
        AesError::Padding(e)
    }
}

/// AES in a chosen mode of operation with a chosen padding scheme.
///
/// Plaintext goes in as raw bytes and comes out as lowercase hex, the
/// ciphertext format used everywhere in this crate. The round keys are
/// expanded once at construction.
pub struct AesCipher {
    round_keys: Vec<u128>,
    mode: Mode,
    padding: Padding,
    iv: Option<u128>,
}

impl AesCipher {
    /// ECB ignores a given IV, CBC rejects a missing or mis-sized one.
    pub fn new(
        key: &[u8],
        mode: Mode,
        padding: Padding,
        iv: Option<&[u8]>,
    ) -> Result<Self, AesError> {
        let key = AesKey::from_bytes(key).ok_or(AesError::InvalidKeyLength(key.len()))?;

        let iv = match (mode, iv) {
            (Mode::Ecb, _) => None,
            (Mode::Cbc, None) => return Err(AesError::MissingIv),
            (Mode::Cbc, Some(bytes)) => {
                let bytes: [u8; BLOCK_SIZE] = bytes
                    .try_into()
                    .map_err(|_| AesError::InvalidIvLength(bytes.len()))?;
                Some(u128::from_be_bytes(bytes))
            }
        };

        Ok(Self {
            round_keys: key.round_keys(),
            mode,
            padding,
            iv,
        })
    }

    pub fn encrypt(&self, plaintext: &[u8]) -> Result<String, AesError> {
        let padded = self.padding.pad(plaintext)?;
        let blocks = bytes_to_blocks(&padded);

        let encrypted = match self.mode {
            Mode::Ecb => ecb::encrypt_blocks(&self.round_keys, &blocks),
            Mode::Cbc => {
                let iv = self.iv.ok_or(AesError::MissingIv)?;
                cbc::encrypt_blocks(&self.round_keys, &blocks, iv)
            }
        };

        Ok(hex::encode(blocks_to_bytes(&encrypted)))
    }

    pub fn decrypt(&self, ciphertext: &str) -> Result<Vec<u8>, AesError> {
        let bytes = hex::decode(ciphertext)
            .map_err(|_| AesError::MalformedCiphertext("not a hex string"))?;
        if bytes.len() % BLOCK_SIZE != 0 {
            return Err(AesError::MalformedCiphertext(
                "length is not a multiple of the block size",
            ));
        }
        let blocks = bytes_to_blocks(&bytes);

        let decrypted = match self.mode {
            Mode::Ecb => ecb::decrypt_blocks(&self.round_keys, &blocks),
            Mode::Cbc => {
                let iv = self.iv.ok_or(AesError::MissingIv)?;
                cbc::decrypt_blocks(&self.round_keys, &blocks, iv)
            }
        };

        Ok(self.padding.unpad(&blocks_to_bytes(&decrypted))?)
    }
}

fn bytes_to_blocks(bytes: &[u8]) -> Vec<u128> {
    bytes
        .chunks_exact(BLOCK_SIZE)
        .map(|chunk| u128::from_be_bytes(chunk.try_into().unwrap()))
        .collect()
}

fn blocks_to_bytes(blocks: &[u128]) -> Vec<u8> {
    blocks.iter().flat_map(|block| block.to_be_bytes()).collect()
}
