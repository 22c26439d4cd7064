use crate::cryptography::block_cipher::{AesCipher, AesError};
use std::io::{Read, Result, Write};
use std::net::{SocketAddr, TcpListener, TcpStream, ToSocketAddrs};
use std::sync::atomic::{AtomicUsize, Ordering};

/// A deliberately leaky decryption service to practice the attack against.
///
/// Every connection carries one hex-encoded ciphertext; the response tells
/// the client whether the padding checked out, which is exactly the side
/// channel the attack needs.
pub struct OracleServer {
    listener: TcpListener,
    cipher: AesCipher,
    requests: AtomicUsize,
}

impl OracleServer {
    pub fn bind(addr: impl ToSocketAddrs, cipher: AesCipher) -> Result<Self> {
        Ok(Self {
            listener: TcpListener::bind(addr)?,
            cipher,
            requests: AtomicUsize::new(0),
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Number of connections accepted so far.
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::Relaxed)
    }

    /// Answers one request per connection until the listener fails.
    /// Intended to run on its own thread.
    pub fn run(&self) {
        for stream in self.listener.incoming() {
            match stream {
                Ok(stream) => {
                    self.requests.fetch_add(1, Ordering::Relaxed);
                    if let Err(e) = self.handle_request(stream) {
                        eprintln!("Error handling oracle request: {}", e);
                    }
                }
                Err(e) => eprintln!("connection failed: {}", e),
            }
        }
    }

    fn handle_request(&self, mut stream: TcpStream) -> Result<()> {
        let mut request = Vec::new();
        stream.read_to_end(&mut request)?;
        let ciphertext = String::from_utf8_lossy(&request);

        let response: &[u8] = match self.cipher.decrypt(ciphertext.trim()) {
            Ok(_) => b"ok\n",
            Err(AesError::Padding(_)) => b"invalid padding\n",
            Err(_) => b"bad request\n",
        };

        stream.write_all(response)
    }
}
