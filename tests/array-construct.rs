use defmac::defmac;
use cowarray::prelude::*;

#[test]
fn test_from_shape_fn()
{
    let step = 3.1;
    let h = Array::from_shape_fn((5, 5), |(i, j)| f64::sin(i as f64 / step) * f64::cos(j as f64 / step));
    assert_eq!(h.shape(), &[5, 5]);
    assert_eq!(h.strides(), &[5, 1]);
}

#[test]
fn test_from_fn_index_order()
{
    let a = Array::from_shape_fn((4, 7), |i| i);
    for (i, elt) in a.indexed_iter().unwrap() {
        assert_eq!(i, *elt);
    }
    let a = Array::from_shape_fn((4, 2, 7), |i| i);
    for (i, elt) in a.indexed_iter().unwrap() {
        assert_eq!(i, *elt);
    }
}

#[test]
fn test_zero_length_axis_is_rejected()
{
    defmac!(rejected shape => {
        let err = Array::from_shape_vec(shape, Vec::<f32>::new()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidShape);
    });
    rejected!([0]);
    rejected!([0, 1]);
    rejected!([2, 0]);
    rejected!([0, 1, 2]);
    rejected!([2, 0, 1]);
    rejected!([1, 2, 0]);
}

#[test]
fn test_strides_are_row_major()
{
    defmac!(strides shape, expected => {
        let a = Array::<u8, _>::zeros(shape);
        assert_eq!(a.strides(), &expected);
        assert_eq!(a.len(), a.shape().iter().product::<usize>());
    });
    strides!(7, [1]);
    strides!((3, 4), [4, 1]);
    strides!((2, 3, 4), [12, 4, 1]);
    strides!((5, 9, 7, 4), [252, 28, 4, 1]);
    strides!((2, 1, 2, 1, 2), [4, 4, 2, 2, 1]);
    strides!((1, 2, 3, 4, 5, 6), [720, 360, 120, 30, 6, 1]);
}

#[test]
fn test_from_shape_vec_length_mismatch()
{
    let err = Array3::from_shape_vec((2, 2, 2), vec![0; 7]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IncompatibleShapes);
    assert_eq!(
        err.to_string(),
        "ArrayError/IncompatibleShapes: incompatible shapes"
    );
}

#[test]
fn test_default_and_empty()
{
    let a = Array2::<String>::default((2, 2));
    assert!(a.is_valid());
    assert_eq!(a[(1, 1)], "");

    let e: Array2<String> = Default::default();
    assert!(!e.is_valid());
    assert_eq!(e.shape(), &[0, 0]);
    assert_eq!(e, Array2::empty());
}

#[test]
fn test_six_axes()
{
    let mut a = Array6::<i8>::zeros((2, 2, 2, 2, 2, 2));
    a[(1, 1, 1, 1, 1, 1)] = 1;
    assert_eq!(a.as_slice().unwrap()[63], 1);
    assert_eq!(a.index_of(63), Ok((1, 1, 1, 1, 1, 1)));
    assert_eq!(a.get([1, 0, 0, 0, 0, 2]).unwrap_err().kind(), ErrorKind::OutOfBounds);
}

#[test]
fn test_display_of_filled_array()
{
    let mut a = Array2::<f64>::zeros((2, 2));
    for ((i, j), x) in a.indexed_iter_mut().unwrap() {
        *x = (i * 2 + j) as f64;
    }
    assert_eq!(a.to_string(), "[[0, 1],\n [2, 3]]");
}
