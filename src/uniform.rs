use rand::Rng;

/// A source of uniformly distributed indexes. Every `rand` generator
/// is one.
pub trait UniformSource {
    /// Return an integer drawn uniformly from `[0, bound)`. `bound`
    /// must be greater than zero.
    fn uniform(&mut self, bound: usize) -> usize;
}

impl<R> UniformSource for R
where
    R: Rng + ?Sized,
{
    fn uniform(&mut self, bound: usize) -> usize {
        debug_assert!(0 < bound);
        self.gen_range(0..bound)
    }
}

/// Shuffle `items` in place so that every permutation is equally
/// likely. Element `i` is swapped with a uniform pick from `[0, i]`.
pub(crate) fn shuffle<T, S>(items: &mut [T], source: &mut S)
where
    S: UniformSource + ?Sized,
{
    for i in 0..items.len() {
        let r = source.uniform(i + 1);
        items.swap(i, r);
    }
}
