// Optional half-precision types
#[cfg(feature = "bfloat")]
use half::bf16;
#[cfg(feature = "half")]
use half::f16;

use rayon::iter::{IndexedParallelIterator, IntoParallelIterator, ParallelIterator};

use crate::rng::{box_muller, RandomState};
use crate::Result;

/// Dispatch random fills based on the data type.
///
/// Draws come sequentially off `state` so a fill consumes a contiguous slice
/// of the generator's sequence; only the element-wise transform that follows
/// runs in parallel.
pub trait RandDispatch {
    /// Fill `len` values from the uniform distribution: `[0, 1)` for floating
    /// dtypes, raw nonnegative draws for integral dtypes that can hold them.
    fn fill_uniform(state: &mut RandomState, len: usize) -> Result<Vec<Self>>
    where
        Self: Sized;

    /// Fill `len` values from a normal distribution via Box-Muller.
    fn fill_normal(state: &mut RandomState, mean: f64, stddev: f64, len: usize) -> Result<Vec<Self>>
    where
        Self: Sized;
}

/// Two whole uniform buffers, transformed pairwise. The first buffer feeds
/// `ln` and is drawn with the nonzero guard.
fn normal_draws(state: &mut RandomState, mean: f64, stddev: f64, len: usize) -> Vec<f64> {
    let u1: Vec<f64> = (0..len).map(|_| state.uniform_nonzero_f64()).collect();
    let u2: Vec<f64> = (0..len).map(|_| state.uniform_f64()).collect();
    u1.into_par_iter()
        .zip(u2.into_par_iter())
        .map(|(u1, u2)| box_muller(u1, u2) * stddev + mean)
        .collect()
}

// Floating dtypes: support both uniform and normal.
macro_rules! rand_float {
    ($rt:ident) => {
        impl RandDispatch for $rt {
            fn fill_uniform(state: &mut RandomState, len: usize) -> Result<Vec<Self>> {
                Ok((0..len).map(|_| state.uniform_f64() as $rt).collect())
            }
            fn fill_normal(
                state: &mut RandomState,
                mean: f64,
                stddev: f64,
                len: usize,
            ) -> Result<Vec<Self>> {
                Ok(normal_draws(state, mean, stddev, len)
                    .into_iter()
                    .map(|x| x as $rt)
                    .collect())
            }
        }
    };
}

rand_float!(f32);
rand_float!(f64);

// Integral dtypes wide enough for a raw draw: uniform only.
macro_rules! rand_integral {
    ($rt:ident) => {
        impl RandDispatch for $rt {
            fn fill_uniform(state: &mut RandomState, len: usize) -> Result<Vec<Self>> {
                Ok(state.raw_draws(len).into_iter().map(|x| x as $rt).collect())
            }
            fn fill_normal(
                _state: &mut RandomState,
                _mean: f64,
                _stddev: f64,
                _len: usize,
            ) -> Result<Vec<Self>> {
                crate::bail!(
                    "Normal random fill is not supported for dtype {}",
                    stringify!($rt)
                )
            }
        }
    };
}

rand_integral!(i32);
rand_integral!(i64);
rand_integral!(u32);

// u8 cannot hold a raw draw: unsupported.
impl RandDispatch for u8 {
    fn fill_uniform(_state: &mut RandomState, _len: usize) -> Result<Vec<Self>> {
        crate::bail!("Uniform random fill is not supported for dtype u8")
    }
    fn fill_normal(
        _state: &mut RandomState,
        _mean: f64,
        _stddev: f64,
        _len: usize,
    ) -> Result<Vec<Self>> {
        crate::bail!("Normal random fill is not supported for dtype u8")
    }
}

// Half-precision floats go through f64 draws.
macro_rules! rand_half {
    ($rt:ident) => {
        impl RandDispatch for $rt {
            fn fill_uniform(state: &mut RandomState, len: usize) -> Result<Vec<Self>> {
                Ok((0..len)
                    .map(|_| $rt::from_f64(state.uniform_f64()))
                    .collect())
            }
            fn fill_normal(
                state: &mut RandomState,
                mean: f64,
                stddev: f64,
                len: usize,
            ) -> Result<Vec<Self>> {
                Ok(normal_draws(state, mean, stddev, len)
                    .into_iter()
                    .map($rt::from_f64)
                    .collect())
            }
        }
    };
}

#[cfg(feature = "half")]
rand_half!(f16);
#[cfg(feature = "bfloat")]
rand_half!(bf16);
