//! # Known-Answer Vectors
//!
//! BIP-173 and BIP-350 Segwit vectors, legacy Base58Check addresses, SS58
//! accounts and Solana keys, checked through the public validator and
//! canonicalizer.

#[cfg(test)]
mod tests {
    use address_codec::algorithms::segwit;
    use address_codec::{
        AddressValidationApi, Asset, BitcoinAddressValidator, Canonicalizer, Chain, Network,
    };

    // =============================================================================
    // SEGWIT
    // =============================================================================

    /// (address, network, output script)
    const VALID_SEGWIT: &[(&str, Network, &str)] = &[
        (
            "BC1QW508D6QEJXTDG4Y5R3ZARVARY0C5XW7KV8F3T4",
            Network::Mainnet,
            "0014751e76e8199196d454941c45d1b3a323f1433bd6",
        ),
        (
            "tb1qrp33g0q5c5txsp9arysrx4k6zdkfs4nce4xj0gdcccefvpysxf3q0sl5k7",
            Network::Testnet,
            "00201863143c14c5166804bd19203356da136c985678cd4d27a1b8c6329604903262",
        ),
        (
            "bc1pw508d6qejxtdg4y5r3zarvary0c5xw7kw508d6qejxtdg4y5r3zarvary0c5xw7kt5nd6y",
            Network::Mainnet,
            "5128751e76e8199196d454941c45d1b3a323f1433bd6751e76e8199196d454941c45d1b3a323f1433bd6",
        ),
        ("BC1SW50QGDZ25J", Network::Mainnet, "6002751e"),
        (
            "bc1zw508d6qejxtdg4y5r3zarvaryvaxxpcs",
            Network::Mainnet,
            "5210751e76e8199196d454941c45d1b3a323",
        ),
        (
            "tb1qqqqqp399et2xygdj5xreqhjjvcmzhxw4aywxecjdzew6hylgvsesrxh6hy",
            Network::Testnet,
            "0020000000c4a5cad46221b2a187905e5266362b99d5e91c6ce24d165dab93e86433",
        ),
        (
            "tb1pqqqqp399et2xygdj5xreqhjjvcmzhxw4aywxecjdzew6hylgvsesf3hn0c",
            Network::Testnet,
            "5120000000c4a5cad46221b2a187905e5266362b99d5e91c6ce24d165dab93e86433",
        ),
        (
            "bc1p0xlxvlhemja6c4dqv22uapctqupfhlxm9h8z3k2e72q4k9hcz7vqzk5jj0",
            Network::Mainnet,
            "512079be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798",
        ),
    ];

    const INVALID_SEGWIT: &[&str] = &[
        // Unknown hrp
        "tc1p0xlxvlhemja6c4dqv22uapctqupfhlxm9h8z3k2e72q4k9hcz7vq5zuyut",
        // Bech32 checksum on witness v1+
        "bc1p0xlxvlhemja6c4dqv22uapctqupfhlxm9h8z3k2e72q4k9hcz7vqh2y7hd",
        "tb1z0xlxvlhemja6c4dqv22uapctqupfhlxm9h8z3k2e72q4k9hcz7vqglt7rf",
        "BC1S0XLXVLHEMJA6C4DQV22UAPCTQUPFHLXM9H8Z3K2E72Q4K9HCZ7VQ54WELL",
        // Bech32m checksum on witness v0
        "bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kemeawh",
        "tb1q0xlxvlhemja6c4dqv22uapctqupfhlxm9h8z3k2e72q4k9hcz7vq24jc47",
        // Character outside the charset
        "bc1p38j9r5y49hruaue7wxjce0updqjuyyx0kh56v8s25huc6995vvpql3jow4",
        // Witness version 17
        "BC130XLXVLHEMJA6C4DQV22UAPCTQUPFHLXM9H8Z3K2E72Q4K9HCZ7VQ7ZWS8R",
        // Program lengths
        "bc1pw5dgrnzv",
        "bc1p0xlxvlhemja6c4dqv22uapctqupfhlxm9h8z3k2e72q4k9hcz7v8n0nx0muaewav253zgeav",
        "BC1QR508D6QEJXTDG4Y5R3ZARVARYV98GJ9P",
        // Mixed case
        "tb1p0xlxvlhemja6c4dqv22uapctqupfhlxm9h8z3k2e72q4k9hcz7vq47Zagq",
        // Padding
        "bc1p0xlxvlhemja6c4dqv22uapctqupfhlxm9h8z3k2e72q4k9hcz7v07qwwzcrf",
        "tb1p0xlxvlhemja6c4dqv22uapctqupfhlxm9h8z3k2e72q4k9hcz7vpggkg4j",
        // Empty data section
        "bc1gmk9yu",
        // Unknown hrp, bad checksum
        "br1qxy2kgdygjrsqtzq2n0yrf249",
    ];

    #[test]
    fn test_valid_segwit_vectors() {
        let validator = BitcoinAddressValidator::new();
        for (address, network, script) in VALID_SEGWIT {
            let validated = validator
                .decode(address, *network)
                .unwrap_or_else(|e| panic!("{address}: {e}"));
            assert_eq!(hex::encode(validated.normalized_bytes()), *script, "{address}");
        }
    }

    #[test]
    fn test_invalid_segwit_vectors() {
        let validator = BitcoinAddressValidator::new();
        for address in INVALID_SEGWIT {
            for network in Network::ALL {
                assert!(
                    !validator.validate(address, network),
                    "{address} accepted on {network}"
                );
            }
        }
    }

    /// Hrp of a Bech32 string as written, without checking it.
    fn written_hrp(address: &str) -> String {
        address
            .rfind('1')
            .map(|sep| address[..sep].to_ascii_lowercase())
            .unwrap_or_default()
    }

    #[test]
    fn test_segwit_vectors_agree_with_bech32_crate() {
        for address in VALID_SEGWIT
            .iter()
            .map(|(address, _, _)| *address)
            .chain(INVALID_SEGWIT.iter().copied())
        {
            let ours = segwit::decode(&written_hrp(address), address)
                .ok()
                .map(|d| (d.version, d.program));
            let reference = ::bech32::segwit::decode(address)
                .ok()
                .map(|(_, version, program)| (version.to_u8(), program));
            assert_eq!(ours, reference, "{address}");
        }
    }

    #[test]
    fn test_segwit_encoding_agrees_with_bech32_crate() {
        for (address, network, script) in VALID_SEGWIT {
            let script = hex::decode(script).unwrap();
            let version = match script[0] {
                0 => 0,
                op => op - 0x50,
            };
            let program = &script[2..];

            let hrp = network.segwit_hrp();
            let ours = segwit::encode(hrp, version, program).unwrap();
            let reference = ::bech32::segwit::encode(
                ::bech32::Hrp::parse(hrp).unwrap(),
                ::bech32::Fe32::try_from(version).unwrap(),
                program,
            )
            .unwrap();
            assert_eq!(ours, reference);
            assert_eq!(ours, address.to_ascii_lowercase());
        }
    }

    #[test]
    fn test_taproot_encoding_scenario() {
        let program =
            hex::decode("67bfb30cec6254a7e39b6d4295fbdfa85b03d02baff43768831c708b9134b7fd")
                .unwrap();
        let mainnet = segwit::encode(Network::Mainnet.segwit_hrp(), 1, &program).unwrap();
        assert_eq!(
            mainnet,
            "bc1pv7lmxr8vvf220cumd4pft77l4pds85pt4l6rw6yrr3cghyf5kl7sq76puk"
        );

        let validator = BitcoinAddressValidator::new();
        let testnet = segwit::encode(Network::Testnet.segwit_hrp(), 1, &program).unwrap();
        assert!(validator.validate(&testnet, Network::Testnet));
        assert!(!validator.validate(&testnet, Network::Regtest));
        assert!(!validator.validate(&testnet, Network::Mainnet));

        let regtest = segwit::encode(Network::Regtest.segwit_hrp(), 1, &program).unwrap();
        assert!(validator.validate(&regtest, Network::Regtest));
        assert!(!validator.validate(&regtest, Network::Mainnet));
    }

    #[test]
    fn test_non_bitcoin_strings_rejected_by_bitcoin_validator() {
        let validator = BitcoinAddressValidator::new();
        for address in [
            "",
            "0x3232323232323232323232323232323232323232",
            "126PaS7kDWTdtiojd556gD4ZPcxj7KbjrMJj7xZ5i6XKfARE",
            "HGgUaHpsmZpB3pcYt8PE89imca6BQBRqYtbVQQqsso3o",
        ] {
            for network in Network::ALL {
                assert!(!validator.validate(address, network), "{address}");
            }
        }
    }

    // =============================================================================
    // LEGACY
    // =============================================================================

    #[test]
    fn test_legacy_vectors() {
        let canonicalizer = Canonicalizer::default();
        for (address, network, script) in [
            (
                "1AGNa15ZQXAZUgFiqJ2i7Z2DPU2J6hW62i",
                Network::Mainnet,
                "76a91465a16059864a2fdbc7c99a4723a8395bc6f188eb88ac",
            ),
            (
                "3P14159f73E4gFr7JterCCQh9QjiTjiZrG",
                Network::Mainnet,
                "a914e9c3dd0c07aac76179ebc76a6c78d4d67c6c160a87",
            ),
            (
                "1PfJpZsjreyVrqeoAfabrRwwjQyoSQMmHH",
                Network::Mainnet,
                "76a914f8917303bfa8ef24f292e8fa1419b20460ba064d88ac",
            ),
            (
                "mrCDrCybB6J1vRfbwM5hemdJz73FwDBC8r",
                Network::Testnet,
                "76a914751e76e8199196d454941c45d1b3a323f1433bd688ac",
            ),
            (
                "2N3vVYSK5XRgVSGWy21PnsRmBUywSQNdCsf",
                Network::Regtest,
                "a914751e76e8199196d454941c45d1b3a323f1433bd687",
            ),
        ] {
            assert!(BitcoinAddressValidator::new().validate(address, network));
            let bytes = canonicalizer
                .to_canonical_bytes(Chain::Bitcoin, address)
                .unwrap();
            assert_eq!(hex::encode(bytes), script, "{address}");
        }
    }

    // =============================================================================
    // OTHER CHAINS
    // =============================================================================

    #[test]
    fn test_substrate_vectors() {
        let dispatcher = address_codec::AddressDispatcher::default();
        for (address, network, account) in [
            (
                "126PaS7kDWTdtiojd556gD4ZPcxj7KbjrMJj7xZ5i6XKfARE",
                Network::Mainnet,
                "305875a3025d8be7f7048a280aba2bd571126fc171986adc1af58d1f4e02f15e",
            ),
            (
                "5E2WfQFeafdktJ5AAF6ZGZ71Yj4fiJnHWRomVmeoStMNhoZe",
                Network::Testnet,
                "56cc4af8ff9fb97c60320ae43d35bd831b14f0b7065f3385db0dbf4cb5d8766f",
            ),
        ] {
            let canonical = dispatcher.decode(Chain::Polkadot, network, address).unwrap();
            assert_eq!(hex::encode(canonical.raw_bytes()), account);
            assert!(dispatcher
                .validate(Chain::Assethub, Asset::HubDot, network, address)
                .unwrap());
        }

        assert!(!dispatcher
            .validate(
                Chain::Polkadot,
                Asset::Dot,
                Network::Mainnet,
                "126PaS7kDWTdtiojd556gD4ZPcxj7KbjrMJj7xZ5i6XKfARF",
            )
            .unwrap());
    }

    #[test]
    fn test_solana_vector() {
        let bytes = Canonicalizer::default()
            .to_canonical_bytes(Chain::Solana, "HGgUaHpsmZpB3pcYt8PE89imca6BQBRqYtbVQQqsso3o")
            .unwrap();
        assert_eq!(
            hex::encode(bytes),
            "f1bf5683e0bfb6fffacb2d8d3641faa0008b65cc296c26ec80aee5a71ddf294a"
        );
    }
}
