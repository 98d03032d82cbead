use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use veriform::core::varint;
use veriform::{Codec, CodecConfig, HashAlgorithm};
use veriform_testkit::{message_vectors, nest_chain};

fn credential() -> Vec<u8> {
    message_vectors()
        .into_iter()
        .find(|v| v.name == "credential")
        .map(|v| v.bytes())
        .unwrap_or_default()
}

fn bench_varint(c: &mut Criterion) {
    let values = [0u64, 127, 16_384, 1 << 40, u64::MAX];
    let encoded: Vec<Vec<u8>> = values.iter().map(|&n| varint::encode(n)).collect();

    c.bench_function("varint_encode", |b| {
        b.iter(|| {
            for &n in &values {
                black_box(varint::encode(black_box(n)));
            }
        })
    });
    c.bench_function("varint_decode", |b| {
        b.iter(|| {
            for bytes in &encoded {
                let _ = black_box(varint::decode(black_box(bytes)));
            }
        })
    });
}

fn bench_parse(c: &mut Criterion) {
    let codec = Codec::default();
    let credential = credential();
    let deep = nest_chain(8);

    c.bench_function("parse_credential", |b| {
        b.iter(|| codec.parse(black_box(&credential)))
    });
    c.bench_function("parse_max_depth", |b| b.iter(|| codec.parse(black_box(&deep))));
}

fn bench_digest(c: &mut Criterion) {
    let credential = credential();

    for algorithm in [
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha512_256,
        HashAlgorithm::Blake3,
    ] {
        let codec = Codec::new(CodecConfig {
            algorithm,
            ..Default::default()
        });
        let Ok(message) = codec.parse(&credential) else {
            continue;
        };
        c.bench_function(&format!("digest_credential_{}", algorithm), |b| {
            b.iter(|| codec.digest_message(black_box(&message)))
        });
    }
}

criterion_group!(benches, bench_varint, bench_parse, bench_digest);
criterion_main!(benches);
