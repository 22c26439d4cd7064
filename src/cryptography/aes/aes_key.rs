use crate::cryptography::aes::sbox::SBOX;
use crate::cryptography::gf256;
use once_cell::sync::Lazy;

/// rc<sub>1</sub> through rc<sub>10</sub>: the successive powers of x (0x02)
/// in GF(2^8). AES-128 uses up to rc<sub>10</sub>, AES-192 up to
/// rc<sub>8</sub> & AES-256 up to rc<sub>7</sub>. Index 0 is rc<sub>1</sub>.
static RCON: Lazy<[u8; 10]> = Lazy::new(|| {
    let mut constants = [0u8; 10];
    let mut power = 1u8;

    for entry in constants.iter_mut() {
        *entry = power;
        power = gf256::multiply(power, 2);
    }

    constants
});

/// The round constant word rcon<sub>i</sub> = [rc<sub>i</sub>, 0x00 0x00 0x00].
/// `i` starts at 1; rcon<sub>0</sub> does not exist.
fn rcon_word(i: usize) -> u32 {
    (RCON[i - 1] as u32) << 24
}

/// Applies the S-box to each of the four bytes of a word.
fn sub_word(word: u32) -> u32 {
    let mut bytes = word.to_be_bytes();

    for byte in bytes.iter_mut() {
        *byte = SBOX[*byte as usize];
    }

    u32::from_be_bytes(bytes)
}

fn rot_word(word: u32) -> u32 {
    word.rotate_left(8)
}

/// An AES key of one of the three standardized sizes, stored as big-endian
/// 32-bit words. The variant decides the number of rounds the cipher runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AesKey {
    Aes128([u32; 4]),
    Aes192([u32; 6]),
    Aes256([u32; 8]),
}

impl AesKey {
    /// Builds a key from raw bytes. Any length other than 16, 24 or 32 bytes
    /// returns `None`.
    pub fn from_bytes(key: &[u8]) -> Option<AesKey> {
        match key.len() {
            16 => Some(AesKey::Aes128(key_words(key))),
            24 => Some(AesKey::Aes192(key_words(key))),
            32 => Some(AesKey::Aes256(key_words(key))),
            _ => None,
        }
    }

    /// Parses a big-endian hex string of 32, 48 or 64 digits.
    pub fn from_be_hex(key: &str) -> Option<AesKey> {
        AesKey::from_bytes(&hex::decode(key).ok()?)
    }

    pub fn num_rounds(&self) -> usize {
        match self {
            AesKey::Aes128(_) => 10,
            AesKey::Aes192(_) => 12,
            AesKey::Aes256(_) => 14,
        }
    }

    /// Generates all round keys based on the original key. The vec holds
    /// `num_rounds() + 1` entries.
    ///
    /// Word i of the expanded schedule is `w[i - N] ^ f(w[i - 1])`, where `f`
    /// rotates, substitutes and adds the round constant every N words, and for
    /// N = 8 additionally substitutes halfway through (i % N == 4), as
    /// FIPS-197 requires for 256-bit keys.
    pub fn round_keys(&self) -> Vec<u128> {
        let original_words: &[u32] = match self {
            AesKey::Aes128(words) => words,
            AesKey::Aes192(words) => words,
            AesKey::Aes256(words) => words,
        };

        let n = original_words.len();
        let total_words = 4 * (self.num_rounds() + 1);

        let mut w = vec![0u32; total_words];
        w[..n].copy_from_slice(original_words);

        for i in n..total_words {
            w[i] = if i % n == 0 {
                w[i - n] ^ sub_word(rot_word(w[i - 1])) ^ rcon_word(i / n)
            } else if n > 6 && i % n == 4 {
                w[i - n] ^ sub_word(w[i - 1])
            } else {
                w[i - n] ^ w[i - 1]
            };
        }

        w.chunks_exact(4)
            .map(|words| {
                (words[0] as u128) << 96
                    | (words[1] as u128) << 64
                    | (words[2] as u128) << 32
                    | (words[3] as u128)
            })
            .collect()
    }
}

/// Packs big-endian key bytes into `N` words.
fn key_words<const N: usize>(bytes: &[u8]) -> [u32; N] {
    let mut words = [0u32; N];

    for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
        *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    words
}
