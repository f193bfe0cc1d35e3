use std::borrow::Cow;

use crate::{cpu_storage::CpuStorage, rng::RandomState, DType, Result};

/// Backing storage for a tensor. An accelerator backend would add its own
/// variant here; the core only ever reads back through `to_cpu_storage`.
#[derive(Debug)]
pub enum Storage<T: DType> {
    Cpu(CpuStorage<T>),
}

impl<T: DType> Storage<T> {
    pub(crate) fn to_cpu_storage(&self) -> Result<Cow<'_, CpuStorage<T>>> {
        match self {
            Self::Cpu(cpu) => cpu.to_cpu_storage(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        match self {
            Self::Cpu(cpu) => cpu.len(),
        }
    }

    pub(crate) fn cast<U: DType>(&self) -> Result<Storage<U>> {
        match self {
            Self::Cpu(cpu) => Ok(Storage::Cpu(cpu.cast::<U>())),
        }
    }
}

/// Read-back side of the opaque tensor handle contract.
pub trait BackendStorage<T: DType> {
    fn to_cpu_storage(&self) -> Result<Cow<'_, CpuStorage<T>>>;
}

/// Construction side of the opaque tensor handle contract. Every constructor
/// receives the element count already derived from a validated shape and must
/// return a buffer of exactly that length, or fail.
pub trait BackendDevice {
    type Storage<X: DType>: BackendStorage<X>;

    fn fill_impl<T: DType>(&self, v: T, count: usize) -> Result<Self::Storage<T>>;

    fn from_scalars<T: DType>(&self, scalars: Vec<T>, count: usize) -> Result<Self::Storage<T>>;

    fn from_fn<T: DType>(&self, count: usize, f: &mut dyn FnMut() -> T)
        -> Result<Self::Storage<T>>;

    fn arange<T: DType>(&self, start: T, step: T, stop: T) -> Result<Self::Storage<T>>;

    fn rand_uniform<T: DType>(
        &self,
        state: &mut RandomState,
        count: usize,
    ) -> Result<Self::Storage<T>>;

    fn rand_normal<T: DType>(
        &self,
        state: &mut RandomState,
        mean: f64,
        stddev: f64,
        count: usize,
    ) -> Result<Self::Storage<T>>;
}
