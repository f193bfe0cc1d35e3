use std::fmt::Debug;

// Optional half-precision types
#[cfg(feature = "bfloat")]
use half::bf16;
#[cfg(feature = "half")]
use half::f16;

pub use rand::RandDispatch;

mod rand;

/// Marker trait for tensor datatypes.
pub trait DType: Debug + Copy + PartialEq + Send + Sync + RandDispatch + 'static {
    const ZERO: Self;
    const ONE: Self;
    const NAME: &'static str;
    const INTEGRAL: bool;

    fn to_f64(&self) -> f64;
    fn from_f64(x: f64) -> Self;
}

macro_rules! dtype {
    ($rt:ident, $zero:expr, $one:expr, $integral:expr) => {
        impl DType for $rt {
            const ZERO: $rt = $zero;
            const ONE: $rt = $one;
            const NAME: &'static str = stringify!($rt);
            const INTEGRAL: bool = $integral;

            fn to_f64(&self) -> f64 {
                *self as f64
            }
            fn from_f64(x: f64) -> Self {
                x as $rt
            }
        }
    };
}

dtype!(u8, 0u8, 1u8, true);
dtype!(u32, 0u32, 1u32, true);
dtype!(i32, 0i32, 1i32, true);
dtype!(i64, 0i64, 1i64, true);
dtype!(f32, 0f32, 1f32, false);
dtype!(f64, 0f64, 1f64, false);

#[cfg(feature = "half")]
impl DType for f16 {
    const ZERO: f16 = f16::from_f64_const(0.0);
    const ONE: f16 = f16::from_f64_const(1.0);
    const NAME: &'static str = "f16";
    const INTEGRAL: bool = false;

    fn to_f64(&self) -> f64 {
        self.to_f64_const()
    }
    fn from_f64(x: f64) -> Self {
        Self::from_f64_const(x)
    }
}

#[cfg(feature = "bfloat")]
impl DType for bf16 {
    const ZERO: bf16 = bf16::from_f64_const(0.0);
    const ONE: bf16 = bf16::from_f64_const(1.0);
    const NAME: &'static str = "bf16";
    const INTEGRAL: bool = false;

    fn to_f64(&self) -> f64 {
        self.to_f64_const()
    }
    fn from_f64(x: f64) -> Self {
        Self::from_f64_const(x)
    }
}
