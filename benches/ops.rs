use bckks_core::{BinaryCkks, SchemeParams};
use criterion::{criterion_group, criterion_main, Criterion};

fn criterion_ops(c: &mut Criterion) {
    let params = SchemeParams::new(128, 512);
    let mut scheme = BinaryCkks::with_seed(params, 7);
    let keys = scheme.key_gen();

    let m1 = scheme.encode(&[1, 0, 1, 1, 0, 1, 0, 0]);
    let m2 = scheme.encode(&[0, 1, 1, 0, 1, 0, 1, 1]);
    let ct1 = scheme.encrypt(&m1, &keys).unwrap();
    let ct2 = scheme.encrypt(&m2, &keys).unwrap();

    c.bench_function("encrypt", |b| {
        b.iter(|| scheme.encrypt(&m1, &keys).unwrap());
    });
    c.bench_function("add", |b| b.iter(|| scheme.add(&ct1, &ct2).unwrap()));
    c.bench_function("multiply", |b| {
        b.iter(|| scheme.multiply(&ct1, &ct2, &keys).unwrap());
    });
    c.bench_function("decrypt", |b| b.iter(|| scheme.decrypt(&ct1, &keys).unwrap()));
}

criterion_group!(benches, criterion_ops);
criterion_main!(benches);
