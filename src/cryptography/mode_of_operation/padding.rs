use super::BLOCK_SIZE;
use std::fmt;

/// Error raised when the padding of a decrypted message is inconsistent with
/// the configured scheme, or when unpadded input is not block-aligned.
#[derive(Debug, PartialEq, Eq)]
pub struct PaddingError {
    pub reason: &'static str,
}

impl fmt::Display for PaddingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid padding: {}", self.reason)
    }
}

/// Scheme filling the last plaintext block up to the block size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Padding {
    /// No padding at all: input must already be block-aligned.
    None,
    /// Fill with 0x00; aligned input is left untouched. Unpadding strips
    /// every trailing zero byte, so plaintexts that end in 0x00 lose those
    /// bytes. Pick Ansi or Pkcs7 when that matters.
    Zero,
    /// ANSI X9.23: fill with 0x00, the final byte holds the padding length.
    Ansi,
    /// PKCS#7: n padding bytes, each of value n.
    Pkcs7,
}

impl Padding {
    /// Appends padding so the result is a whole number of blocks. Aligned
    /// input still grows by a full block under Ansi and Pkcs7, never under
    /// Zero and None.
    pub fn pad(&self, text: &[u8]) -> Result<Vec<u8>, PaddingError> {
        let pad_len = BLOCK_SIZE - text.len() % BLOCK_SIZE;
        let mut padded = text.to_vec();

        match self {
            Padding::None => {
                if pad_len != BLOCK_SIZE {
                    return Err(PaddingError {
                        reason: "input length must be a multiple of the block size",
                    });
                }
            }
            Padding::Zero => {
                if pad_len != BLOCK_SIZE {
                    padded.resize(text.len() + pad_len, 0);
                }
            }
            Padding::Ansi => {
                padded.resize(text.len() + pad_len - 1, 0);
                padded.push(pad_len as u8);
            }
            Padding::Pkcs7 => {
                padded.resize(text.len() + pad_len, pad_len as u8);
            }
        }

        Ok(padded)
    }

    /// Verifies and removes the padding again.
    ///
    /// Ansi and Pkcs7 check every pad byte: a claimed length outside 1..=16
    /// or beyond the message, a nonzero Ansi filler byte or a mismatched
    /// Pkcs7 byte are all rejected.
    pub fn unpad(&self, text: &[u8]) -> Result<Vec<u8>, PaddingError> {
        match self {
            Padding::None => Ok(text.to_vec()),
            Padding::Zero => {
                let end = text.iter().rposition(|&byte| byte != 0).map_or(0, |i| i + 1);
                Ok(text[..end].to_vec())
            }
            Padding::Ansi | Padding::Pkcs7 => {
                let &last = text.last().ok_or(PaddingError {
                    reason: "empty input cannot carry padding",
                })?;
                let pad_len = last as usize;

                if pad_len == 0 || pad_len > BLOCK_SIZE {
                    return Err(PaddingError {
                        reason: "padding length out of range",
                    });
                }
                if pad_len > text.len() {
                    return Err(PaddingError {
                        reason: "padding length exceeds the message",
                    });
                }

                let expected = match self {
                    Padding::Ansi => 0,
                    _ => last,
                };
                let filler = &text[text.len() - pad_len..text.len() - 1];
                if filler.iter().any(|&byte| byte != expected) {
                    return Err(PaddingError {
                        reason: "padding bytes do not match the scheme",
                    });
                }

                Ok(text[..text.len() - pad_len].to_vec())
            }
        }
    }
}
