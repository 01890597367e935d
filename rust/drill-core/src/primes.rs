//! Sieve of Eratosthenes over the candidate range `2..=bound`.
//!
//! Candidates are tracked with one `composite` flag per value, stored at
//! offset `value - 2`. Sieving runs `i` from 2 while `i * i <= bound` and
//! marks `i*i, i*i + i, ...` for every unmarked `i`.

use tracing::debug;

use crate::error::{DrillError, Result};

/// A completed sieve that can be queried for primes up to its bound.
#[derive(Debug, Clone)]
pub struct Sieve {
    bound: u64,
    composite: Vec<bool>,
}

impl Sieve {
    /// Sieve every candidate in `2..=bound`.
    ///
    /// Fails with [`DrillError::InvalidArgument`] when `bound < 2` or when the
    /// candidate flags cannot be allocated.
    pub fn new(bound: u64) -> Result<Self> {
        if bound < 2 {
            return Err(DrillError::invalid_argument(format!(
                "bound must be at least 2, got {}",
                bound
            )));
        }
        let len = usize::try_from(bound - 1).map_err(|_| {
            DrillError::invalid_argument(format!(
                "bound {} exceeds the addressable range of this platform",
                bound
            ))
        })?;

        let mut composite = Vec::new();
        composite.try_reserve_exact(len).map_err(|_| {
            DrillError::invalid_argument(format!(
                "bound {} needs more memory than can be allocated",
                bound
            ))
        })?;
        composite.resize(len, false);
        let mut i: u64 = 2;
        while i <= bound / i {
            if !composite[slot(i)] {
                for j in (i * i..=bound).step_by(i as usize) {
                    composite[slot(j)] = true;
                }
            }
            i += 1;
        }

        let sieve = Sieve { bound, composite };
        debug!(bound, candidates = len, primes = sieve.count(), "sieve built");
        Ok(sieve)
    }

    pub fn bound(&self) -> u64 {
        self.bound
    }

    /// Whether `value` is a prime no greater than the bound.
    pub fn contains(&self, value: u64) -> bool {
        (2..=self.bound).contains(&value) && !self.composite[slot(value)]
    }

    /// Primes up to the bound, ascending.
    pub fn primes(&self) -> impl Iterator<Item = u64> + '_ {
        self.composite
            .iter()
            .enumerate()
            .filter(|(_, marked)| !**marked)
            .map(|(offset, _)| offset as u64 + 2)
    }

    /// Number of primes up to the bound.
    pub fn count(&self) -> usize {
        self.composite.iter().filter(|&&marked| !marked).count()
    }
}

#[inline]
fn slot(value: u64) -> usize {
    (value - 2) as usize
}

/// All primes `<= bound` in ascending order.
pub fn primes_up_to(bound: u64) -> Result<Vec<u64>> {
    Ok(Sieve::new(bound)?.primes().collect())
}

/// π(bound): how many primes are `<= bound`.
pub fn prime_count(bound: u64) -> Result<usize> {
    Ok(Sieve::new(bound)?.count())
}

/// Trial-division primality test, independent of the sieve.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    let mut i = 2;
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}
