use rand::{rngs::StdRng, SeedableRng};
use rand_distr::{Distribution, Normal};
use tensorgen::{Device, RandomState, Tensor, RAW_DRAW_MAX};

#[test]
fn uniform_scalar_draws_stay_in_unit_interval() {
    let mut state = RandomState::new(0xfeed);
    for _ in 0..100_000 {
        let u = state.uniform_f64();
        assert!((0.0..1.0).contains(&u), "draw {u} outside [0, 1)");
    }
}

#[test]
fn uniform_tensor_stays_in_unit_interval() {
    let mut state = RandomState::new(7);
    let a = Tensor::<f32>::rand_uniform(&[100, 100], Some(&mut state), &Device::Cpu).unwrap();
    for v in a.to_vec().unwrap() {
        assert!((0.0..1.0).contains(&v), "draw {v} outside [0, 1)");
    }
}

#[test]
fn raw_draws_are_nonnegative() {
    let mut state = RandomState::new(3);
    for v in state.raw_draws(10_000) {
        assert!((0..=RAW_DRAW_MAX).contains(&v));
    }
}

#[test]
fn discrete_uniform_tensor_holds_raw_draws() {
    let a = Tensor::<i32>::rand_uniform(&[1000], Some(&mut RandomState::new(11)), &Device::Cpu)
        .unwrap();
    let data = a.to_vec().unwrap();
    assert_eq!(data.len(), 1000);
    assert!(data.iter().all(|&v| v >= 0));
    // A thousand raw 31-bit draws collapsing to one value would mean the
    // generator is broken, not unlucky.
    assert!(data.iter().any(|&v| v != data[0]));
}

#[test]
fn explicit_state_is_deterministic() {
    let a = Tensor::<i32>::rand_uniform(&[1000], Some(&mut RandomState::new(42)), &Device::Cpu)
        .unwrap();
    let b = Tensor::<i32>::rand_uniform(&[1000], Some(&mut RandomState::new(42)), &Device::Cpu)
        .unwrap();
    assert_eq!(a.to_vec().unwrap(), b.to_vec().unwrap());

    let c = Tensor::<f64>::rand_normal(
        &[1000],
        0.0,
        1.0,
        Some(&mut RandomState::new(42)),
        &Device::Cpu,
    )
    .unwrap();
    let d = Tensor::<f64>::rand_normal(
        &[1000],
        0.0,
        1.0,
        Some(&mut RandomState::new(42)),
        &Device::Cpu,
    )
    .unwrap();
    assert_eq!(c.to_vec().unwrap(), d.to_vec().unwrap());
}

#[test]
fn different_seeds_differ() {
    let a = Tensor::<i32>::rand_uniform(&[1000], Some(&mut RandomState::new(1)), &Device::Cpu)
        .unwrap();
    let b = Tensor::<i32>::rand_uniform(&[1000], Some(&mut RandomState::new(2)), &Device::Cpu)
        .unwrap();
    assert_ne!(a.to_vec().unwrap(), b.to_vec().unwrap());
}

#[test]
fn global_state_fills_without_explicit_state() {
    let a = Tensor::<f32>::rand_uniform(&[100], None, &Device::Cpu).unwrap();
    assert_eq!(a.to_vec().unwrap().len(), 100);
    let b = Tensor::<f64>::rand_normal(&[100], 0.0, 1.0, None, &Device::Cpu).unwrap();
    assert!(b.to_vec().unwrap().iter().all(|v| v.is_finite()));
}

fn sample_moments(data: &[f64]) -> (f64, f64) {
    let n = data.len() as f64;
    let mean = data.iter().sum::<f64>() / n;
    let var = data.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n;
    (mean, var.sqrt())
}

#[test]
fn normal_moments_match_standard_normal() {
    let mut state = RandomState::new(0xabcd);
    let a = Tensor::<f64>::rand_normal(&[100_000], 0.0, 1.0, Some(&mut state), &Device::Cpu)
        .unwrap();
    let data = a.to_vec().unwrap();
    assert!(data.iter().all(|v| v.is_finite()));
    let (mean, stddev) = sample_moments(&data);
    assert!(mean.abs() < 0.05, "sample mean {mean} too far from 0");
    assert!(
        (stddev - 1.0).abs() < 0.05,
        "sample stddev {stddev} too far from 1"
    );
}

#[test]
fn normal_moments_track_reference_sampler() {
    let a = Tensor::<f64>::rand_normal(
        &[100_000],
        3.0,
        0.5,
        Some(&mut RandomState::new(9)),
        &Device::Cpu,
    )
    .unwrap();
    let (ours_mean, ours_std) = sample_moments(&a.to_vec().unwrap());

    let normal = Normal::new(3.0, 0.5).unwrap();
    let mut rng = StdRng::seed_from_u64(9);
    let reference: Vec<f64> = (0..100_000).map(|_| normal.sample(&mut rng)).collect();
    let (ref_mean, ref_std) = sample_moments(&reference);

    assert!((ours_mean - ref_mean).abs() < 0.05);
    assert!((ours_std - ref_std).abs() < 0.05);
}

#[test]
fn scalar_normal_draws_are_finite() {
    let mut state = RandomState::new(5);
    for _ in 0..100_000 {
        let v = state.normal_f64(0.0, 1.0);
        assert!(v.is_finite());
    }
}

#[test]
fn normal_rejects_integral_dtypes() {
    assert!(
        Tensor::<i32>::rand_normal(&[4], 0, 1, Some(&mut RandomState::new(0)), &Device::Cpu)
            .is_err()
    );
    assert!(
        Tensor::<i64>::rand_normal(&[4], 0, 1, Some(&mut RandomState::new(0)), &Device::Cpu)
            .is_err()
    );
}

#[test]
fn uniform_rejects_u8() {
    assert!(
        Tensor::<u8>::rand_uniform(&[4], Some(&mut RandomState::new(0)), &Device::Cpu).is_err()
    );
}

#[test]
fn rand_validates_shape_first() {
    let mut state = RandomState::new(0);
    assert!(Tensor::<f32>::rand_uniform(&[-1], Some(&mut state), &Device::Cpu).is_err());
    assert!(Tensor::<f32>::rand_normal(&[2, -2], 0.0, 1.0, Some(&mut state), &Device::Cpu)
        .is_err());
}
