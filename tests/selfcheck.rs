//! Randomized fill-and-check driver: assignment, iteration, copy-on-write
//! and move checks for arrays of rank 1 to 4 over `i32`, `f32` and `f64`.

use std::fmt::Debug;
use std::ptr;

use cowarray::{Array, Dimension, ErrorKind, IntoDimension};
use rand::distr::{Distribution, StandardUniform};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

struct SelfCheck<A, D>
{
    array: Array<A, D>,
    values: Vec<A>,
}

impl<A, D> SelfCheck<A, D>
where
    A: Copy + Debug + Default + PartialEq,
    D: Dimension,
    StandardUniform: Distribution<A>,
{
    fn new<Sh>(shape: Sh) -> Self
    where Sh: IntoDimension<Dim = D>
    {
        let array = Array::default(shape);
        let values = Vec::with_capacity(array.len());
        SelfCheck { array, values }
    }

    /// Write a fresh random value at every index, visiting the indices in
    /// row-major order.
    fn fill(&mut self, rng: &mut SmallRng)
    {
        self.values.clear();
        let dim = self.array.raw_dim();
        let mut index = dim.first_index();
        while let Some(ix) = index {
            let value: A = rng.random();
            self.array[ix.clone()] = value;
            self.values.push(value);
            index = dim.next_for(ix);
        }
    }

    /// Read back every index in row-major order; return the number of
    /// indices visited.
    fn check(&self) -> usize
    {
        let dim = self.array.raw_dim();
        let mut n = 0;
        let mut index = dim.first_index();
        while let Some(ix) = index {
            assert_eq!(self.array[ix.clone()], self.values[n]);
            n += 1;
            index = dim.next_for(ix);
        }
        n
    }

    fn run(mut self, rng: &mut SmallRng)
    {
        let size = self.array.len();

        // assignment check
        self.fill(rng);
        assert_eq!(self.values.len(), size);
        assert_eq!(self.check(), size);

        // iterator check
        let mut vi = 0;
        let mut cursor = self.array.cursor().unwrap();
        while cursor != self.array.cursor_end().unwrap() {
            assert_eq!(cursor.get(), Some(&self.values[vi]));
            cursor.advance();
            vi += 1;
        }
        assert_eq!(vi, size);
        vi = 0;
        for elt in self.array.iter_mut().unwrap() {
            assert_eq!(*elt, self.values[vi]);
            vi += 1;
        }
        assert_eq!(vi, size);

        // copy check
        let copy = self.array.clone();
        let n = self
            .array
            .iter()
            .unwrap()
            .zip(copy.iter().unwrap())
            .inspect(|&(a, b)| assert!(ptr::eq(a, b)))
            .count();
        assert_eq!(n, size);
        let copy_values = self.values.clone();
        self.fill(rng);
        let n = self
            .array
            .iter()
            .unwrap()
            .zip(copy.iter().unwrap())
            .inspect(|&(a, b)| assert!(!ptr::eq(a, b)))
            .count();
        assert_eq!(n, size);
        assert!(self.array.iter().unwrap().eq(&self.values));
        assert!(copy.iter().unwrap().eq(&copy_values));

        // move check
        let moved = self.array.take();
        assert!(!self.array.is_valid());
        assert_eq!(self.array.iter().unwrap_err().kind(), ErrorKind::InvalidArray);
        assert!(moved.iter().unwrap().eq(&self.values));
    }
}

fn check_all<Sh>(shape: Sh, seed: u64)
where Sh: IntoDimension + Clone
{
    let mut rng = SmallRng::seed_from_u64(seed);
    SelfCheck::<i32, Sh::Dim>::new(shape.clone()).run(&mut rng);
    SelfCheck::<f64, Sh::Dim>::new(shape.clone()).run(&mut rng);
    SelfCheck::<f32, Sh::Dim>::new(shape).run(&mut rng);
}

#[test]
fn selfcheck_1d()
{
    check_all(100, 1);
}

#[test]
fn selfcheck_2d()
{
    check_all((30, 15), 2);
}

#[test]
fn selfcheck_3d()
{
    check_all((10, 20, 30), 3);
}

#[test]
fn selfcheck_4d()
{
    check_all((5, 9, 7, 4), 4);
}
