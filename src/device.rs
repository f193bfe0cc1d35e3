use crate::{
    cpu_storage::CpuDevice,
    rng::RandomState,
    storage::{BackendDevice, Storage},
    DType, Result,
};

/// A concrete device.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Device {
    Cpu,
}

impl Device {
    pub(crate) fn fill_impl<T: DType>(&self, v: T, count: usize) -> Result<Storage<T>> {
        match self {
            Self::Cpu => Ok(Storage::Cpu(CpuDevice.fill_impl(v, count)?)),
        }
    }

    pub(crate) fn from_scalars<T: DType>(
        &self,
        scalars: Vec<T>,
        count: usize,
    ) -> Result<Storage<T>> {
        match self {
            Self::Cpu => Ok(Storage::Cpu(CpuDevice.from_scalars(scalars, count)?)),
        }
    }

    pub(crate) fn from_fn<T: DType>(
        &self,
        count: usize,
        f: &mut dyn FnMut() -> T,
    ) -> Result<Storage<T>> {
        match self {
            Self::Cpu => Ok(Storage::Cpu(CpuDevice.from_fn(count, f)?)),
        }
    }

    pub(crate) fn arange<T: DType>(&self, start: T, step: T, stop: T) -> Result<Storage<T>> {
        match self {
            Self::Cpu => Ok(Storage::Cpu(CpuDevice.arange(start, step, stop)?)),
        }
    }

    pub(crate) fn rand_uniform<T: DType>(
        &self,
        state: &mut RandomState,
        count: usize,
    ) -> Result<Storage<T>> {
        match self {
            Self::Cpu => Ok(Storage::Cpu(CpuDevice.rand_uniform(state, count)?)),
        }
    }

    pub(crate) fn rand_normal<T: DType>(
        &self,
        state: &mut RandomState,
        mean: f64,
        stddev: f64,
        count: usize,
    ) -> Result<Storage<T>> {
        match self {
            Self::Cpu => Ok(Storage::Cpu(CpuDevice.rand_normal(state, mean, stddev, count)?)),
        }
    }
}
