use std::{ops::Deref, sync::Arc};

use crate::{
    rng::{self, RandomState},
    storage::Storage,
    Device, DType, Error, Result, Shape,
};

#[derive(Debug)]
pub struct Tensor_<T: DType> {
    storage: Storage<T>,
    shape: Shape,
    device: Device,
}

/// A shaped, immutable buffer of scalars on some device.
///
/// Tensors are cheap to clone: the storage is shared. Only functions which
/// allocate, draw random values, or read data back return `Result`s.
#[derive(Clone, Debug)]
pub struct Tensor<T: DType>(Arc<Tensor_<T>>);

impl<T: DType> Deref for Tensor<T> {
    type Target = Tensor_<T>;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

pub(crate) fn from_storage<T: DType>(
    storage: Storage<T>,
    shape: Shape,
    device: &Device,
) -> Tensor<T> {
    Tensor(Arc::new(Tensor_ {
        storage,
        shape,
        device: device.clone(),
    }))
}

impl<T: DType> Tensor<T> {
    /// Create a tensor with the given shape and a single, repeated value.
    pub fn full(shape: &[i64], value: T, device: &Device) -> Result<Self> {
        let shape = Shape::new(shape)?;
        let storage = device.fill_impl(value, shape.elem_count())?;
        Ok(from_storage(storage, shape, device))
    }

    /// Create a tensor with all scalars set to zero.
    pub fn zeros(shape: &[i64], device: &Device) -> Result<Self> {
        Self::full(shape, T::ZERO, device)
    }

    /// Create a tensor with all scalars set to one.
    pub fn ones(shape: &[i64], device: &Device) -> Result<Self> {
        Self::full(shape, T::ONE, device)
    }

    /// Create a tensor from scalars in row-major order.
    ///
    /// The number of scalars must equal the element count of the shape, else
    /// this fails with [`Error::ShapeMismatch`].
    pub fn from_scalars(shape: &[i64], scalars: Vec<T>, device: &Device) -> Result<Self> {
        let shape = Shape::new(shape)?;
        let storage = device.from_scalars(scalars, shape.elem_count())?;
        Ok(from_storage(storage, shape, device))
    }

    /// Create a tensor by invoking `f` once per element, in row-major index
    /// order 0..N-1.
    pub fn from_fn(shape: &[i64], mut f: impl FnMut() -> T, device: &Device) -> Result<Self> {
        let shape = Shape::new(shape)?;
        let storage = device.from_fn(shape.elem_count(), &mut f)?;
        Ok(from_storage(storage, shape, device))
    }

    /// Create a 1-D tensor ranging from `start` to `stop` (exclusive),
    /// stepping by `step`. `step` must be positive.
    pub fn arange(start: T, stop: T, step: T, device: &Device) -> Result<Self> {
        if step.to_f64() <= 0.0 {
            crate::bail!("arange requires a positive step, got {step:?}");
        }
        let storage = device.arange(start, step, stop)?;
        let shape = Shape::from(vec![storage.len()]);
        Ok(from_storage(storage, shape, device))
    }

    /// Create a tensor sampled from the uniform distribution: `[0, 1)` for
    /// floating dtypes, raw draws in `[0, RAW_DRAW_MAX]` for integral dtypes.
    ///
    /// When `state` is `None` the process-wide state is used and the result
    /// depends on global draw order; pass an explicit [`RandomState`] for
    /// reproducible output.
    pub fn rand_uniform(
        shape: &[i64],
        state: Option<&mut RandomState>,
        device: &Device,
    ) -> Result<Self> {
        let shape = Shape::new(shape)?;
        let storage = rng::with_state(state, |s| device.rand_uniform(s, shape.elem_count()))?;
        Ok(from_storage(storage, shape, device))
    }

    /// Create a tensor sampled from a normal distribution via the Box-Muller
    /// transform. Fails for integral dtypes.
    pub fn rand_normal(
        shape: &[i64],
        mean: T,
        stddev: T,
        state: Option<&mut RandomState>,
        device: &Device,
    ) -> Result<Self> {
        let shape = Shape::new(shape)?;
        let storage = rng::with_state(state, |s| {
            device.rand_normal(s, mean.to_f64(), stddev.to_f64(), shape.elem_count())
        })?;
        Ok(from_storage(storage, shape, device))
    }

    /// Element-wise conversion to another dtype.
    pub fn cast<U: DType>(&self) -> Result<Tensor<U>> {
        let storage = self.storage.cast::<U>()?;
        Ok(from_storage(storage, self.shape.clone(), &self.device))
    }

    /// The shape of the tensor.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// The number of dimensions.
    pub fn rank(&self) -> usize {
        self.shape.rank()
    }

    /// The number of scalars.
    pub fn elem_count(&self) -> usize {
        self.shape.elem_count()
    }

    /// The device holding this tensor's storage.
    pub fn device(&self) -> &Device {
        &self.device
    }

    /// Read the data back as a flat row-major vector.
    pub fn to_vec(&self) -> Result<Vec<T>> {
        Ok(self.storage.to_cpu_storage()?.into_owned().0)
    }

    /// Read back the single value of a rank-0 tensor.
    pub fn to_scalar(&self) -> Result<T> {
        if self.rank() != 0 {
            crate::bail!("to_scalar requires a rank-0 tensor, shape is {}", self.shape);
        }
        let data = self.storage.to_cpu_storage()?;
        data.as_ref().0.first().copied().ok_or_else(|| {
            Error::ShapeMismatch {
                expected: 1,
                got: 0,
            }
            .bt()
        })
    }
}
