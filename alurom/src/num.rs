//! Type-level bit widths.

use std::fmt::Debug;
use std::marker::PhantomData;

use crate::clog2;

/// Type-level bit width.
pub trait Num: Debug + Clone + Copy + 'static {
    /// Width.
    const WIDTH: usize;
}

/// Usize number.
#[derive(Debug, Clone, Copy)]
pub struct U<const N: usize>;

impl<const N: usize> Num for U<N> {
    const WIDTH: usize = N;
}

/// Sum.
#[derive(Debug, Clone, Copy)]
pub struct Sum<L: Num, R: Num>(PhantomData<(L, R)>);

impl<L: Num, R: Num> Num for Sum<L, R> {
    const WIDTH: usize = L::WIDTH + R::WIDTH;
}

/// Log2.
#[derive(Debug, Clone, Copy)]
pub struct Log2<N: Num>(PhantomData<N>);

impl<N: Num> Num for Log2<N> {
    const WIDTH: usize = clog2(N::WIDTH);
}
