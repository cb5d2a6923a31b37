use {
    criterion::{criterion_group, criterion_main, Criterion, Throughput},
    std::hint::black_box,
    voltwire::{Pool, Recycle, WireRead, WireSize, WireWrite},
    voltwire_testproto::sample::{Child, Sample, SampleShape},
};

fn bench_sample() -> Sample {
    let mut m = Sample {
        id: 0xDEADBEEF,
        name: "benchmark-sample".into(),
        values: (0..32).map(|i| i * 7919).collect(),
        rates: (0..16).map(|i| i as f64 * 0.5).collect(),
        labels: vec!["alpha".into(), "beta".into(), "gamma".into()],
        payload: vec![0xAB; 256],
        shape: Some(SampleShape::Label("active".into())),
        seq: (-16..16).collect(),
        scale: Some(1.25),
        ..Default::default()
    };
    m.nested = Some(Child {
        id: 7,
        payload: vec![1, 2, 3, 4],
        tags: vec!["x".into()],
        ..Default::default()
    });
    for i in 0..8 {
        m.children.push(Child {
            id: i,
            payload: vec![i as u8; 16],
            ..Default::default()
        });
    }
    m.metadata.insert("region".into(), 3);
    m.metadata.insert("zone".into(), 9);
    m
}

fn bench_codec(c: &mut Criterion) {
    let sample = bench_sample();
    let encoded = sample.encode();
    assert_eq!(encoded.len(), sample.encoded_len());

    let mut group = c.benchmark_group("sample");
    group.throughput(Throughput::Bytes(encoded.len() as u64));

    group.bench_function("encoded_len", |b| {
        b.iter(|| black_box(&sample).encoded_len());
    });

    group.bench_function("encode", |b| {
        b.iter(|| black_box(&sample).encode());
    });

    // In-place encoding into a reused, pre-sized buffer.
    group.bench_function("encode_to", |b| {
        let mut buf = vec![0u8; encoded.len()];
        b.iter(|| black_box(&sample).encode_to(black_box(&mut buf)).unwrap());
    });

    group.bench_function("decode_fresh", |b| {
        b.iter(|| {
            let mut m = Sample::default();
            m.decode(black_box(&encoded)).unwrap();
            m
        });
    });

    // Decode into a recycled instance: retained capacity makes repeated
    // fields allocation-free after warm-up.
    group.bench_function("decode_pooled", |b| {
        let pool: Pool<Sample> = Pool::new();
        pool.release(Sample::default());
        b.iter(|| {
            let mut m = pool.acquire();
            m.decode(black_box(&encoded)).unwrap();
            pool.release(m);
        });
    });

    group.bench_function("reset_for_reuse", |b| {
        b.iter(|| {
            let mut m = bench_sample();
            m.reset_for_reuse();
            m
        });
    });

    group.finish();
}

criterion_group!(benches, bench_codec);
criterion_main!(benches);
