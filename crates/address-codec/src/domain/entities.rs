//! # Domain Entities
//!
//! Decoded forms of an address. All of them are built fresh per call and
//! dropped afterwards; nothing here is cached or shared.

use super::value_objects::{AddressFormat, Chain};
use serde::{Deserialize, Serialize};

const OP_0: u8 = 0x00;
const OP_1: u8 = 0x51;
const OP_DUP: u8 = 0x76;
const OP_HASH160: u8 = 0xa9;
const OP_EQUAL: u8 = 0x87;
const OP_EQUALVERIFY: u8 = 0x88;
const OP_CHECKSIG: u8 = 0xac;

/// Segwit witness version and program.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DecodedWitnessProgram {
    /// Witness version (0..=16).
    pub version: u8,
    /// Witness program (2..=40 bytes; 20 or 32 for version 0).
    pub program: Vec<u8>,
}

impl DecodedWitnessProgram {
    /// Address format implied by the witness version.
    pub fn format(&self) -> AddressFormat {
        if self.version == 0 {
            AddressFormat::SegwitV0
        } else {
            AddressFormat::SegwitV1Plus(self.version)
        }
    }
}

/// A decoded legacy Bitcoin address (exactly 25 bytes on the wire).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Base58CheckPayload {
    /// Network/type version byte.
    pub version_byte: u8,
    /// HASH160 of the public key or script.
    pub payload: [u8; 20],
    /// First four bytes of `sha256(sha256(version_byte ‖ payload))`.
    pub checksum: [u8; 4],
}

/// Bitcoin output script an address pays to.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ScriptPubkey {
    /// Pay to pubkey hash.
    P2pkh([u8; 20]),
    /// Pay to script hash.
    P2sh([u8; 20]),
    /// Witness v0 pubkey hash.
    P2wpkh([u8; 20]),
    /// Witness v0 script hash.
    P2wsh([u8; 32]),
    /// Witness v1 with a 32-byte program.
    Taproot([u8; 32]),
    /// Any other witness version/program combination.
    OtherSegwit {
        /// Witness version (1..=16).
        version: u8,
        /// Witness program.
        program: Vec<u8>,
    },
}

impl ScriptPubkey {
    /// Map a decoded witness program onto the matching script template.
    pub fn from_witness(witness: &DecodedWitnessProgram) -> Self {
        match (witness.version, witness.program.len()) {
            (0, 20) => Self::P2wpkh(to_array(&witness.program)),
            (0, 32) => Self::P2wsh(to_array(&witness.program)),
            (1, 32) => Self::Taproot(to_array(&witness.program)),
            _ => Self::OtherSegwit {
                version: witness.version,
                program: witness.program.clone(),
            },
        }
    }

    /// Address format of the script.
    pub fn format(&self) -> AddressFormat {
        match self {
            Self::P2pkh(_) => AddressFormat::P2pkh,
            Self::P2sh(_) => AddressFormat::P2sh,
            Self::P2wpkh(_) | Self::P2wsh(_) => AddressFormat::SegwitV0,
            Self::Taproot(_) => AddressFormat::SegwitV1Plus(1),
            Self::OtherSegwit { version, .. } => AddressFormat::SegwitV1Plus(*version),
        }
    }

    /// Witness version and program, for segwit scripts.
    pub fn witness(&self) -> Option<DecodedWitnessProgram> {
        let (version, program) = match self {
            Self::P2pkh(_) | Self::P2sh(_) => return None,
            Self::P2wpkh(hash) => (0, hash.to_vec()),
            Self::P2wsh(hash) => (0, hash.to_vec()),
            Self::Taproot(key) => (1, key.to_vec()),
            Self::OtherSegwit { version, program } => (*version, program.clone()),
        };
        Some(DecodedWitnessProgram { version, program })
    }

    /// Serialized output script.
    pub fn bytes(&self) -> Vec<u8> {
        match self {
            Self::P2pkh(hash) => {
                let mut script = vec![OP_DUP, OP_HASH160, 20];
                script.extend_from_slice(hash);
                script.extend_from_slice(&[OP_EQUALVERIFY, OP_CHECKSIG]);
                script
            }
            Self::P2sh(hash) => {
                let mut script = vec![OP_HASH160, 20];
                script.extend_from_slice(hash);
                script.push(OP_EQUAL);
                script
            }
            Self::P2wpkh(hash) => segwit_script(0, hash),
            Self::P2wsh(hash) => segwit_script(0, hash),
            Self::Taproot(key) => segwit_script(1, key),
            Self::OtherSegwit { version, program } => segwit_script(*version, program),
        }
    }
}

fn segwit_script(version: u8, program: &[u8]) -> Vec<u8> {
    let version_op = match version {
        0 => OP_0,
        v => OP_1 + v - 1,
    };
    let mut script = Vec::with_capacity(program.len() + 2);
    script.push(version_op);
    script.push(program.len() as u8);
    script.extend_from_slice(program);
    script
}

/// Result of a successful Bitcoin validation: the format and normalized bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidatedAddress {
    /// Detected address format.
    pub format: AddressFormat,
    /// Script the address pays to.
    pub script_pubkey: ScriptPubkey,
}

impl ValidatedAddress {
    /// Normalized bytes (the output script).
    pub fn normalized_bytes(&self) -> Vec<u8> {
        self.script_pubkey.bytes()
    }
}

/// Address in the binary form embedded into outbound swap requests.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CanonicalAddress {
    /// Ethereum account.
    Eth([u8; 20]),
    /// Polkadot account id.
    Dot([u8; 32]),
    /// Bitcoin output script.
    Btc(ScriptPubkey),
    /// Arbitrum account.
    Arb([u8; 20]),
    /// Solana public key.
    Sol([u8; 32]),
    /// Asset Hub account id.
    Hub([u8; 32]),
}

impl CanonicalAddress {
    /// Chain the address belongs to.
    pub fn chain(&self) -> Chain {
        match self {
            Self::Eth(_) => Chain::Ethereum,
            Self::Dot(_) => Chain::Polkadot,
            Self::Btc(_) => Chain::Bitcoin,
            Self::Arb(_) => Chain::Arbitrum,
            Self::Sol(_) => Chain::Solana,
            Self::Hub(_) => Chain::Assethub,
        }
    }

    /// Canonical bytes.
    pub fn raw_bytes(&self) -> Vec<u8> {
        match self {
            Self::Eth(bytes) | Self::Arb(bytes) => bytes.to_vec(),
            Self::Dot(bytes) | Self::Sol(bytes) | Self::Hub(bytes) => bytes.to_vec(),
            Self::Btc(script_pubkey) => script_pubkey.bytes(),
        }
    }
}

/// Copy a slice whose length the caller has already checked.
pub(crate) fn to_array<const N: usize>(bytes: &[u8]) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(&bytes[..N]);
    out
}
