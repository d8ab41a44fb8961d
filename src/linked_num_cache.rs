use lazy_static::*;
use num_bigint::BigUint;

use crate::linked_num_constants::*;

lazy_static! {
    /// `RADIX_CACHE[r]` holds `r` as a `BigUint`, for every `r` up to `MAX_RADIX`.
    pub static ref RADIX_CACHE: [BigUint; MAX_RADIX as usize + 1] =
        std::array::from_fn(|radix: usize| BigUint::from(radix));
}

#[inline(always)]
pub fn radix_of(radix: u32) -> &'static BigUint {
    &RADIX_CACHE[radix as usize]
}

#[test]
fn test_radix_cache() {
    assert_eq!(radix_of(2), &BigUint::from(2u32));
    assert_eq!(radix_of(MAX_RADIX), &BigUint::from(36u32));
}
