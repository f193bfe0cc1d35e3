//! Tensorgen constructs shaped, contiguous, row-major host buffers of numeric
//! scalars: constant fills, exact sequence copies, generator fills, and
//! pseudorandom initialization (uniform and Box-Muller normal).
//!
//! Shapes are validated up front and a buffer's length always equals the
//! element count its shape implies. Construction either returns a fully
//! populated [`Tensor`] or an error; there is no partial success.
//!
//! Random draws come from a [`RandomState`]. Passing the same seed replays the
//! same sequence, while passing `None` uses a lazily created process-wide
//! state whose output depends on global call order.
//!
//! ## What can you do with it?
//! ```
//! use tensorgen::{Device, RandomState, Tensor};
//!
//! let filled = Tensor::<f32>::full(&[2, 3], 7.0, &Device::Cpu).unwrap();
//! assert_eq!(filled.to_vec().unwrap(), vec![7.0; 6]);
//!
//! let mut state = RandomState::new(42);
//! let noise = Tensor::<f64>::rand_normal(&[4, 4], 0.0, 1.0, Some(&mut state), &Device::Cpu)
//!     .unwrap();
//! assert_eq!(noise.elem_count(), 16);
//! ```

mod cpu_storage;
mod device;
mod dtype;
mod error;
mod rng;
mod shape;
mod storage;
mod tensor;

pub use device::Device;
pub use dtype::DType;
pub use error::{Context, Error, Result};
pub use rng::{RandomState, RAW_DRAW_MAX};
pub use shape::Shape;
pub use tensor::Tensor;
