//! Content hashing using FxHash.
//!
//! Used to tell whether a config file actually changed before
//! re-normalizing it.

use rustc_hash::FxHasher;
use std::hash::Hasher;

/// Compute 64-bit hash from byte data.
#[inline]
pub fn compute<T: AsRef<[u8]> + ?Sized>(data: &T) -> u64 {
    let mut hasher = FxHasher::default();
    hasher.write(data.as_ref());
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_deterministic() {
        assert_eq!(compute("title = \"a\""), compute("title = \"a\""));
        assert_ne!(compute("title = \"a\""), compute("title = \"b\""));
    }
}
