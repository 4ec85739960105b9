use cowarray::prelude::*;
use itertools::iproduct;

#[test]
fn iter_visits_every_element_in_offset_order()
{
    let a = Array3::from_shape_fn((3, 4, 5), |(i, j, k)| 100 * i + 10 * j + k);
    let expected: Vec<_> = iproduct!(0..3, 0..4, 0..5)
        .map(|(i, j, k)| 100 * i + 10 * j + k)
        .collect();
    let got: Vec<_> = a.iter().unwrap().copied().collect();
    assert_eq!(got, expected);
    assert_eq!(a.iter().unwrap().len(), 60);
}

#[test]
fn indexed_iter_matches_fill_coordinates()
{
    let a = Array4::from_shape_fn((2, 3, 2, 3), |ix| ix);
    let mut n = 0;
    for ((idx, &elt), expected) in a.indexed_iter().unwrap().zip(iproduct!(0..2, 0..3, 0..2, 0..3)) {
        assert_eq!(idx, expected);
        assert_eq!(elt, expected);
        assert_eq!(a.offset_of(idx), Ok(n));
        assert_eq!(a.index_of(n), Ok(idx));
        n += 1;
    }
    assert_eq!(n, a.len());
}

#[test]
fn indexed_iter_rev()
{
    let a = Array2::from_shape_fn((2, 3), |(i, j)| 3 * i + j);
    let back: Vec<_> = a.indexed_iter().unwrap().rev().map(|(ix, _)| ix).collect();
    assert_eq!(back, vec![(1, 2), (1, 1), (1, 0), (0, 2), (0, 1), (0, 0)]);
}

#[test]
fn iter_mut_then_iter()
{
    let mut a = Array2::<i32>::zeros((4, 5));
    for (i, x) in a.iter_mut().unwrap().enumerate() {
        *x = i as i32;
    }
    assert_eq!(a[(3, 4)], 19);
    assert_eq!(a.iter().unwrap().rev().next(), Some(&19));
}

#[test]
fn cursor_positions()
{
    let a = Array2::from_shape_fn((2, 3), |(i, j)| 3 * i + j);
    let mut c = a.cursor().unwrap();
    let end = a.cursor_end().unwrap();
    assert_eq!(end.offset(), 6);
    assert_eq!(end.index(), None);
    let mut seen = Vec::new();
    while c != end {
        let (i, j) = c.index().unwrap();
        assert_eq!(*c.get().unwrap(), 3 * i + j);
        seen.push(c.offset());
        c.advance();
    }
    assert_eq!(seen, (0..6).collect::<Vec<_>>());
}

#[test]
fn iteration_of_empty_array_fails()
{
    let mut a = Array3::<f64>::empty();
    assert_eq!(a.iter().unwrap_err().kind(), ErrorKind::InvalidArray);
    assert_eq!(a.indexed_iter().unwrap_err().kind(), ErrorKind::InvalidArray);
    assert_eq!(a.iter_mut().unwrap_err().kind(), ErrorKind::InvalidArray);
    assert_eq!(a.indexed_iter_mut().unwrap_err().kind(), ErrorKind::InvalidArray);
    assert_eq!(a.cursor_end().unwrap_err().kind(), ErrorKind::InvalidArray);
}
