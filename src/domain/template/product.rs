// Cartesian product over per-placeholder value pools

/// Odometer over `lengths`: yields index tuples with the last position
/// turning fastest. Zero positions yield one empty tuple; any empty
/// position yields nothing.
#[derive(Debug, Clone)]
pub struct Odometer {
    lengths: Vec<usize>,
    current: Option<Vec<usize>>,
}

impl Odometer {
    pub fn new(lengths: Vec<usize>) -> Self {
        let current = if lengths.iter().any(|&len| len == 0) {
            None
        } else {
            Some(vec![0; lengths.len()])
        };
        Self { lengths, current }
    }

    /// Total number of tuples, or `None` on overflow
    pub fn total(&self) -> Option<u128> {
        self.lengths
            .iter()
            .try_fold(1u128, |acc, &len| acc.checked_mul(len as u128))
    }

    fn remaining(&self) -> Option<u128> {
        let current = self.current.as_ref()?;
        // mixed-radix position of `current`, subtracted from the total
        let mut consumed: u128 = 0;
        for (&idx, &len) in current.iter().zip(&self.lengths) {
            consumed = consumed.checked_mul(len as u128)?.checked_add(idx as u128)?;
        }
        Some(self.total()? - consumed)
    }

    fn advance(&mut self) {
        let Some(current) = self.current.as_mut() else {
            return;
        };
        for pos in (0..current.len()).rev() {
            current[pos] += 1;
            if current[pos] < self.lengths[pos] {
                return;
            }
            current[pos] = 0;
        }
        // every position wrapped (or there were none): exhausted
        self.current = None;
    }
}

impl Iterator for Odometer {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        let tuple = self.current.clone()?;
        self.advance();
        Some(tuple)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.current.is_none() {
            return (0, Some(0));
        }
        match self.remaining().and_then(|n| usize::try_from(n).ok()) {
            Some(n) => (n, Some(n)),
            None => (usize::MAX, None),
        }
    }
}

/// Cartesian product of owned value pools, yielding cloned tuples
#[derive(Debug, Clone)]
pub struct CartesianProduct<T> {
    pools: Vec<Vec<T>>,
    odometer: Odometer,
}

impl<T: Clone> CartesianProduct<T> {
    pub fn new(pools: Vec<Vec<T>>) -> Self {
        let odometer = Odometer::new(pools.iter().map(Vec::len).collect());
        Self { pools, odometer }
    }

    pub fn total(&self) -> Option<u128> {
        self.odometer.total()
    }
}

impl<T: Clone> Iterator for CartesianProduct<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        let indices = self.odometer.next()?;
        Some(
            indices
                .iter()
                .zip(&self.pools)
                .map(|(&i, pool)| pool[i].clone())
                .collect(),
        )
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.odometer.size_hint()
    }
}
