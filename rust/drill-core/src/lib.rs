//! Drill Core
//!
//! Two textbook routines with typed failures: an adjacent-swap bubble sort
//! and a Sieve of Eratosthenes.
//!
//! ```
//! use drill_core::{primes_up_to, sorted};
//!
//! assert_eq!(sorted(vec![3, 1, 2]).unwrap(), vec![1, 2, 3]);
//! assert_eq!(primes_up_to(10).unwrap(), vec![2, 3, 5, 7]);
//! ```

pub mod error;
pub mod primes;
pub mod sort;
pub mod values;

pub use error::{DrillError, Result};
pub use primes::{is_prime, prime_count, primes_up_to, Sieve};
pub use sort::{bubble_sort, bubble_sort_by, is_sorted, sorted, SortStats};
pub use values::Value;
