use crate::cryptography::block_cipher::AesCipher;
use crate::cryptography::mode_of_operation::{Mode, Padding};
use crate::cryptography::rng::rng;
use crate::padoracle::{attack, OracleEndpoint, OracleServer};
use rand::RngCore;
use std::sync::Arc;
use std::thread;

mod cryptography;
mod padoracle;
mod substitution;
mod util;

pub fn main() {
    let mut key = [0u8; 16];
    let mut iv = [0u8; 16];
    rng!().fill_bytes(&mut key);
    rng!().fill_bytes(&mut iv);

    let cipher = AesCipher::new(&key, Mode::Cbc, Padding::Pkcs7, Some(&iv)).unwrap();
    let secret = b"Intercepted: the fleet sails at midnight.";
    let ciphertext = cipher.encrypt(secret).unwrap();

    let oracle_cipher = AesCipher::new(&key, Mode::Cbc, Padding::Pkcs7, Some(&iv)).unwrap();
    let server = Arc::new(OracleServer::bind("127.0.0.1:0", oracle_cipher).unwrap());
    let addr = server.local_addr().unwrap();

    let runner = Arc::clone(&server);
    thread::spawn(move || runner.run());

    // the attacker sees the IV, the ciphertext and the oracle, never the key
    let wire = format!("{}{}", hex::encode(iv), ciphertext);
    let endpoint = OracleEndpoint::new("127.0.0.1", addr.port(), b"invalid padding");

    let recovered = util::print_time(|| attack(&wire, &endpoint)).unwrap();

    println!("Recovered: {:?}", String::from_utf8_lossy(&recovered));
    println!("Oracle queries: {}", server.request_count());
}
