use tensorgen::{Error, Shape};

fn root(err: Error) -> Error {
    match err {
        Error::WithBacktrace { inner, .. } => *inner,
        other => other,
    }
}

#[test]
fn scalar_shape() {
    let s = Shape::new(&[]).unwrap();
    assert_eq!(s.rank(), 0);
    assert_eq!(s.elem_count(), 1);
    assert_eq!(s.stride_contiguous(), Vec::<usize>::new());
}

#[test]
fn vector_shape() {
    let s = Shape::new(&[5]).unwrap();
    assert_eq!(s.rank(), 1);
    assert_eq!(s.elem_count(), 5);
    assert_eq!(s.stride_contiguous(), vec![1]);
}

#[test]
fn matrix_shape() {
    let s = Shape::new(&[3, 4]).unwrap();
    assert_eq!(s.rank(), 2);
    assert_eq!(s.elem_count(), 12);
    // Row-major: the last dimension varies fastest.
    assert_eq!(s.stride_contiguous(), vec![4, 1]);
}

#[test]
fn rank3_strides() {
    let s = Shape::new(&[2, 3, 4]).unwrap();
    assert_eq!(s.elem_count(), 24);
    assert_eq!(s.stride_contiguous(), vec![12, 4, 1]);
}

#[test]
fn zero_dimension() {
    let s = Shape::new(&[4, 0, 2]).unwrap();
    assert_eq!(s.elem_count(), 0);
}

#[test]
fn negative_dimension_rejected() {
    let err = Shape::new(&[3, -1, 4]).unwrap_err();
    match root(err) {
        Error::InvalidShape { dims } => assert_eq!(dims, vec![3, -1, 4]),
        other => panic!("expected InvalidShape, got {other:?}"),
    }
}

#[test]
fn display() {
    let s = Shape::new(&[3, 4]).unwrap();
    assert_eq!(format!("{s}"), "[3, 4]");
    let scalar = Shape::new(&[]).unwrap();
    assert_eq!(format!("{scalar}"), "[]");
}

#[test]
fn shape_is_value_equal() {
    let a = Shape::new(&[2, 3]).unwrap();
    let b = Shape::from(vec![2usize, 3]);
    assert_eq!(a, b);
}
