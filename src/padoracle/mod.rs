pub mod attack;
pub mod server;

pub use attack::{attack, OracleEndpoint, OracleError};
pub use server::OracleServer;
