use once_cell::sync::Lazy;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::sync::Mutex;

pub static RNG: Lazy<Mutex<ChaCha8Rng>> = Lazy::new(|| Mutex::new(ChaCha8Rng::from_entropy()));

// The guard lives until the end of the statement, so never invoke this
// twice within one expression.
macro_rules! rng {
    () => {
        *crate::cryptography::rng::RNG.lock().unwrap()
    };
}

pub(crate) use rng;
