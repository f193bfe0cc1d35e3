use std::fmt;

use crate::{Error, Result};

/// The shape of a tensor: an ordered sequence of dimension sizes.
///
/// The empty shape describes a scalar and has exactly one element. A shape is
/// immutable once constructed, so the element count it implies can never drift
/// from the buffer it was used to build.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shape(Vec<usize>);

impl Shape {
    /// Validate a sequence of dimension sizes.
    ///
    /// Dimensions arrive signed so that any caller-supplied value is
    /// representable; a negative dimension fails with [`Error::InvalidShape`].
    pub fn new(dims: &[i64]) -> Result<Self> {
        if dims.iter().any(|&d| d < 0) {
            return Err(Error::InvalidShape {
                dims: dims.to_vec(),
            }
            .bt());
        }
        Ok(Self(dims.iter().map(|&d| d as usize).collect()))
    }

    /// The dimension sizes.
    pub fn dims(&self) -> &[usize] {
        &self.0
    }

    /// Number of dimensions. A scalar has rank 0.
    pub fn rank(&self) -> usize {
        self.0.len()
    }

    /// Total number of elements: the product of all dimensions.
    ///
    /// The empty product is 1, so the scalar shape `[]` holds one element. Any
    /// zero-sized dimension yields an empty tensor.
    pub fn elem_count(&self) -> usize {
        self.0.iter().product()
    }

    /// Compute default (contiguous, row-major) strides for this shape.
    ///
    /// The last dimension varies fastest: for `[2, 3, 4]` the strides are
    /// `[12, 4, 1]`.
    pub fn stride_contiguous(&self) -> Vec<usize> {
        let mut strides = Vec::with_capacity(self.0.len());
        let mut acc = 1;
        // Iterate dims in reverse to accumulate products
        for dim in self.0.iter().rev() {
            strides.push(acc);
            acc *= *dim;
        }
        strides.reverse();
        strides
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, d) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{d}")?;
        }
        write!(f, "]")
    }
}

impl From<Vec<usize>> for Shape {
    fn from(dims: Vec<usize>) -> Self {
        Self(dims)
    }
}

impl From<&[usize]> for Shape {
    fn from(dims: &[usize]) -> Self {
        Self(dims.to_vec())
    }
}
