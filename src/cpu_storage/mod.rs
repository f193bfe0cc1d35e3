use std::borrow::Cow;

use crate::{
    rng::RandomState,
    storage::{BackendDevice, BackendStorage},
    DType, Error, Result,
};

pub struct CpuDevice;

/// A contiguous, row-major buffer of scalars on the host.
#[derive(Clone, Debug, PartialEq)]
pub struct CpuStorage<T: DType>(pub(crate) Vec<T>);

impl<T: DType> CpuStorage<T> {
    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }

    /// Element-wise conversion to another dtype.
    pub(crate) fn cast<U: DType>(&self) -> CpuStorage<U> {
        CpuStorage(self.0.iter().map(|x| U::from_f64(x.to_f64())).collect())
    }
}

impl<T: DType> BackendStorage<T> for CpuStorage<T> {
    fn to_cpu_storage(&self) -> Result<Cow<'_, CpuStorage<T>>> {
        Ok(Cow::Borrowed(self))
    }
}

impl BackendDevice for CpuDevice {
    type Storage<X: DType> = CpuStorage<X>;

    fn fill_impl<T: DType>(&self, v: T, count: usize) -> Result<CpuStorage<T>> {
        Ok(CpuStorage(vec![v; count]))
    }

    fn from_scalars<T: DType>(&self, scalars: Vec<T>, count: usize) -> Result<CpuStorage<T>> {
        // Exactly the expected count: never truncate or pad.
        if scalars.len() != count {
            return Err(Error::ShapeMismatch {
                expected: count,
                got: scalars.len(),
            }
            .bt());
        }
        Ok(CpuStorage(scalars))
    }

    fn from_fn<T: DType>(
        &self,
        count: usize,
        f: &mut dyn FnMut() -> T,
    ) -> Result<CpuStorage<T>> {
        Ok(CpuStorage((0..count).map(|_| f()).collect()))
    }

    fn arange<T: DType>(&self, start: T, step: T, stop: T) -> Result<CpuStorage<T>> {
        let mut buf = Vec::new();
        let mut x = start.to_f64();
        while x < stop.to_f64() {
            buf.push(T::from_f64(x));
            x += step.to_f64();
        }
        Ok(CpuStorage(buf))
    }

    fn rand_uniform<T: DType>(
        &self,
        state: &mut RandomState,
        count: usize,
    ) -> Result<CpuStorage<T>> {
        Ok(CpuStorage(T::fill_uniform(state, count)?))
    }

    fn rand_normal<T: DType>(
        &self,
        state: &mut RandomState,
        mean: f64,
        stddev: f64,
        count: usize,
    ) -> Result<CpuStorage<T>> {
        Ok(CpuStorage(T::fill_normal(state, mean, stddev, count)?))
    }
}
