use bitcoin::Network;

use crate::BtcNetwork;

/// Protocol constants address/key-encoding routines need for one network.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NetworkParams {
    pub network: BtcNetwork,

    pub hrp: &'static str,
    pub p2pkh_prefix: u8,
    pub p2sh_prefix: u8,
    pub private_prefix: u8,

    pub xpub_prefix: [u8; 4],
    pub xprv_prefix: [u8; 4],
}

// BTC prefixes: https://en.bitcoin.it/wiki/List_of_address_prefixes
// hrp: https://github.com/satoshilabs/slips/blob/master/slip-0173.md

lazy_static! {
    static ref MAINNET_PARAMS: NetworkParams = NetworkParams {
        network: BtcNetwork::Mainnet,
        hrp: "bc",
        p2pkh_prefix: 0x0,
        p2sh_prefix: 0x05,
        private_prefix: 0x80,
        xpub_prefix: [0x04, 0x88, 0xB2, 0x1E],
        xprv_prefix: [0x04, 0x88, 0xAD, 0xE4],
    };
    static ref TESTNET_PARAMS: NetworkParams = NetworkParams {
        network: BtcNetwork::Testnet,
        hrp: "tb",
        p2pkh_prefix: 0x6f,
        p2sh_prefix: 0xc4,
        private_prefix: 0xef,
        xpub_prefix: [0x04, 0x35, 0x87, 0xCF],
        xprv_prefix: [0x04, 0x35, 0x83, 0x94],
    };
}

pub fn network_params(network: BtcNetwork) -> &'static NetworkParams {
    match network {
        BtcNetwork::Mainnet => &MAINNET_PARAMS,
        BtcNetwork::Testnet => &TESTNET_PARAMS,
    }
}

impl From<BtcNetwork> for Network {
    fn from(network: BtcNetwork) -> Self {
        match network {
            BtcNetwork::Mainnet => Network::Bitcoin,
            BtcNetwork::Testnet => Network::Testnet,
        }
    }
}
