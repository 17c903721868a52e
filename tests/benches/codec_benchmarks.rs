//! # Address Codec Benchmarks
//!
//! Per-call cost of each decoder on the swap-request hot path:
//!
//! | Group | Operation |
//! |-------|-----------|
//! | segwit | Bech32/Bech32m decode and encode |
//! | base58 | Base58Check decode |
//! | ss58 | SS58 decode with blake2b checksum |
//! | dispatch | `validate` through the dispatcher, per chain |
//! | canonicalize | address to canonical bytes |

use address_codec::algorithms::{base58, segwit, ss58};
use address_codec::{
    AddressDispatcher, AddressValidationApi, Asset, Canonicalizer, Chain, Network,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::Rng;
use std::time::Duration;

const EVM: &str = "0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045";
const DOT: &str = "126PaS7kDWTdtiojd556gD4ZPcxj7KbjrMJj7xZ5i6XKfARE";
const SOL: &str = "HGgUaHpsmZpB3pcYt8PE89imca6BQBRqYtbVQQqsso3o";

fn random_bytes<const N: usize>() -> [u8; N] {
    rand::thread_rng().gen()
}

fn random_taproot(hrp: &str) -> String {
    segwit::encode(hrp, 1, &random_bytes::<32>()).unwrap()
}

// ============================================================================
// SEGWIT
// ============================================================================

fn bench_segwit(c: &mut Criterion) {
    let mut group = c.benchmark_group("segwit");
    group.measurement_time(Duration::from_secs(5));

    let hrp = Network::Mainnet.segwit_hrp();
    let p2wpkh = segwit::encode(hrp, 0, &random_bytes::<20>()).unwrap();
    let taproot = random_taproot(hrp);

    group.bench_function("decode_p2wpkh", |b| {
        b.iter(|| black_box(segwit::decode(hrp, black_box(&p2wpkh)).is_ok()))
    });
    group.bench_function("decode_taproot", |b| {
        b.iter(|| black_box(segwit::decode(hrp, black_box(&taproot)).is_ok()))
    });

    let program = random_bytes::<32>();
    group.bench_function("encode_taproot", |b| {
        b.iter(|| black_box(segwit::encode(hrp, 1, black_box(&program))))
    });

    group.finish();
}

// ============================================================================
// BASE58 / SS58
// ============================================================================

fn bench_base58(c: &mut Criterion) {
    let mut group = c.benchmark_group("base58");

    let version = Network::Mainnet.p2pkh_version();
    let address = base58::encode_payload(version, &random_bytes::<20>());
    group.bench_function("decode_checked", |b| {
        b.iter(|| black_box(base58::decode_checked(black_box(&address)).is_ok()))
    });

    group.finish();
}

fn bench_ss58(c: &mut Criterion) {
    let mut group = c.benchmark_group("ss58");

    for prefix in [0u16, 42, 2254] {
        let address = ss58::encode(prefix, &random_bytes::<32>()).unwrap();
        group.bench_with_input(BenchmarkId::new("decode", prefix), &address, |b, address| {
            b.iter(|| black_box(ss58::decode(black_box(address)).is_ok()))
        });
    }

    group.finish();
}

// ============================================================================
// DISPATCH
// ============================================================================

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");
    let dispatcher = AddressDispatcher::default();
    let taproot = random_taproot(Network::Mainnet.segwit_hrp());

    for (chain, asset, address) in [
        (Chain::Bitcoin, Asset::Btc, taproot.as_str()),
        (Chain::Ethereum, Asset::Eth, EVM),
        (Chain::Polkadot, Asset::Dot, DOT),
        (Chain::Solana, Asset::Sol, SOL),
    ] {
        group.bench_with_input(
            BenchmarkId::new("validate", chain),
            &address,
            |b, address| {
                b.iter(|| {
                    black_box(dispatcher.validate(chain, asset, Network::Mainnet, black_box(address)))
                })
            },
        );
    }

    // Mixed batch of valid and rejected destinations
    let batch_sizes = [10, 100, 1000];
    for size in batch_sizes {
        let addresses: Vec<String> = (0..size)
            .map(|i| {
                if i % 2 == 0 {
                    random_taproot(Network::Mainnet.segwit_hrp())
                } else {
                    random_taproot(Network::Testnet.segwit_hrp())
                }
            })
            .collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::new("validate_batch", size),
            &addresses,
            |b, addresses| {
                b.iter(|| {
                    addresses
                        .iter()
                        .filter(|a| {
                            dispatcher
                                .validate(Chain::Bitcoin, Asset::Btc, Network::Mainnet, a)
                                .unwrap_or(false)
                        })
                        .count()
                })
            },
        );
    }

    group.finish();
}

// ============================================================================
// CANONICALIZE
// ============================================================================

fn bench_canonicalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("canonicalize");
    let canonicalizer = Canonicalizer::default();

    let mainnet = random_taproot(Network::Mainnet.segwit_hrp());
    // Regtest is tried last, so this walks every network.
    let regtest = random_taproot(Network::Regtest.segwit_hrp());

    group.bench_function("bitcoin_mainnet", |b| {
        b.iter(|| black_box(canonicalizer.to_canonical_bytes(Chain::Bitcoin, black_box(&mainnet))))
    });
    group.bench_function("bitcoin_regtest", |b| {
        b.iter(|| black_box(canonicalizer.to_canonical_bytes(Chain::Bitcoin, black_box(&regtest))))
    });
    group.bench_function("ethereum", |b| {
        b.iter(|| black_box(canonicalizer.to_canonical_bytes(Chain::Ethereum, black_box(EVM))))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_segwit,
    bench_base58,
    bench_ss58,
    bench_dispatch,
    bench_canonicalize,
);
criterion_main!(benches);
