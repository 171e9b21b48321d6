#![allow(dead_code)]

use matrices::Matrix;
use rand::Rng;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub fn init_logger() {
    let _ = env_logger::try_init();
}

/// Seeded so that failures reproduce.
pub fn rng() -> StdRng {
    StdRng::seed_from_u64(0x5eed_4d47)
}

/// The matrix whose component at `(x, y)` is its row-major position `y * C + x`.
pub fn counting<const C: usize, const R: usize>() -> Matrix<C, R> {
    Matrix::from_fn(|x, y| (y * C + x) as f64)
}

pub fn random<const C: usize, const R: usize>(rng: &mut StdRng) -> Matrix<C, R> {
    Matrix::from_fn(|_, _| rng.gen_range(-10.0..10.0))
}

/// Calls `$f::<C, R>()` once for each of the 16 supported shapes.
macro_rules! for_each_shape {
    ($f:ident) => { for_each_shape!(@c $f [1 2 3 4]); };
    (@c $f:ident [$($c:tt)*]) => { $( for_each_shape!(@r $f $c [1 2 3 4]); )* };
    (@r $f:ident $c:tt [$($r:tt)*]) => { $( $f::<$c, $r>(); )* };
}

/// Calls `$f::<N>()` for each square shape.
macro_rules! for_each_square {
    ($f:ident) => { $f::<1>(); $f::<2>(); $f::<3>(); $f::<4>(); };
}

/// Calls `$f::<K, R, C>()` for every product `Matrix<K, R> * Matrix<C, K>`.
macro_rules! for_each_product {
    ($f:ident) => { for_each_product!(@k $f [1 2 3 4]); };
    (@k $f:ident [$($k:tt)*]) => { $( for_each_product!(@r $f $k [1 2 3 4]); )* };
    (@r $f:ident $k:tt [$($r:tt)*]) => { $( for_each_product!(@c $f $k $r [1 2 3 4]); )* };
    (@c $f:ident $k:tt $r:tt [$($c:tt)*]) => { $( $f::<$k, $r, $c>(); )* };
}
