pub mod network;
pub mod params;

pub use network::BtcNetwork;
pub use params::{network_params, NetworkParams};

#[macro_use]
extern crate lazy_static;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, anyhow::Error>;

pub const MAINNET: &'static str = "MAINNET";
pub const TESTNET: &'static str = "TESTNET";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("unrecognized_xpub_prefix# prefix: {0}")]
    UnrecognizedXpubPrefix(String),
    #[error("unknown_network# network: {0}")]
    UnknownNetwork(String),
}
