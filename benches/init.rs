use criterion::{criterion_group, criterion_main, Criterion};
use tensorgen::{Device, RandomState, Tensor};

const N: i64 = 256;

fn bench_full(c: &mut Criterion) {
    c.bench_function("full 256x256", |b| {
        b.iter(|| Tensor::<f32>::full(&[N, N], std::f32::consts::PI, &Device::Cpu).unwrap())
    });
}

fn bench_rand_uniform(c: &mut Criterion) {
    let mut state = RandomState::new(42);
    c.bench_function("rand_uniform 256x256", |b| {
        b.iter(|| Tensor::<f32>::rand_uniform(&[N, N], Some(&mut state), &Device::Cpu).unwrap())
    });
}

fn bench_rand_normal(c: &mut Criterion) {
    let mut state = RandomState::new(42);
    c.bench_function("rand_normal 256x256", |b| {
        b.iter(|| {
            Tensor::<f32>::rand_normal(&[N, N], 0.0, 1.0, Some(&mut state), &Device::Cpu).unwrap()
        })
    });
}

criterion_group!(benches, bench_full, bench_rand_uniform, bench_rand_normal);
criterion_main!(benches);
