//! Linked Num \
//! This crate provides:
//! - [`LinkedNumber`]: a number in any base from 2 to 36, kept as a doubly linked chain of digits.
//!   Digits can be inserted and removed at any position, and the whole number can be converted to another base.
//! - [`Digit`]: one digit symbol (`0-9`, `A-Z`, case-insensitive) and its value.
//!
//! Conversions go through an arbitrary-precision accumulator, so they are exact for any number of digits.

mod digit;
mod error;
mod linked_num_cache;
mod linked_num_constants;
mod linked_number;
mod node;

pub use digit::Digit;
pub use error::{LinkedNumberError, Result};
pub use linked_num_constants::{MAX_RADIX, MIN_RADIX};
pub use linked_number::{Iter, LinkedNumber};
pub use node::{Node, NodeId};

#[cfg(test)]
mod tests {
    use crate::{Digit, LinkedNumber};

    #[test]
    fn it_works() {
        let mut a = LinkedNumber::from_str_radix("FF", 16).unwrap();
        println!("a = {}", a);
        println!("a in base 10 = {}", a.convert_to(10).unwrap());
        println!("a in base 2 = {}", a.convert_to(2).unwrap());
        a.add_digit(Digit::new('1').unwrap(), 0).unwrap();
        println!("a after add = {}", a);
        println!("removed = {}", a.remove_digit(2).unwrap());
        println!("a after remove = {}", a);
        assert_eq!(LinkedNumber::from_integer(255).unwrap().convert_to(16).unwrap().to_text(), "FF");
    }
}
