//! # LinkedNumber
//! A number in any base from 2 to 36, stored as a doubly linked chain of [`Digit`]s.
//! The front of the chain is the most significant digit, the rear the least significant one.
//! Positions are counted from the rear: position 0 is the last digit.
//! # Example
//! ```
//! use linked_num::{Digit, LinkedNumber};
//!
//! let mut ff = LinkedNumber::from_str_radix("FF", 16).unwrap();
//! assert_eq!(ff.convert_to(10).unwrap().to_text(), "255");
//!
//! ff.add_digit(Digit::new('1').unwrap(), 2).unwrap();
//! assert_eq!(ff.to_text(), "1FF");
//! assert_eq!(ff.remove_digit(2).unwrap().to_string(), "256");
//! ```

use std::fmt::Display;
use std::hash::{Hash, Hasher};

use log::{debug, trace};
use num_bigint::BigUint;
use num_traits::Zero;

use crate::digit::Digit;
use crate::error::{LinkedNumberError, Result};
use crate::linked_num_cache::*;
use crate::linked_num_constants::*;
use crate::node::{Node, NodeId};

/// All nodes live in `nodes`; `NodeId`s are indices into it. Removal swaps the
/// last slot into the hole, so the arena always holds exactly the live digits.
#[derive(Debug, Clone)]
pub struct LinkedNumber {
    base: u32,
    nodes: Vec<Node>,
    front: Option<NodeId>,
    rear: Option<NodeId>,
}

fn check_radix(radix: u32) -> Result<()> {
    if (MIN_RADIX..=MAX_RADIX).contains(&radix) {
        Ok(())
    } else {
        Err(LinkedNumberError::InvalidBase(radix))
    }
}

// 构造
impl LinkedNumber {
    fn empty(base: u32) -> Self {
        LinkedNumber { base, nodes: Vec::new(), front: None, rear: None }
    }

    /// Reads `text` left to right, most significant digit first.
    ///
    /// Digits do not have to fit `base`; such a number is simply not
    /// [valid](LinkedNumber::is_valid) and cannot be converted.
    pub fn from_str_radix(text: &str, base: u32) -> Result<Self> {
        if text.is_empty() {
            return Err(LinkedNumberError::EmptyInput);
        }
        check_radix(base)?;

        let digits = text.chars()
            .map(Digit::new)
            .collect::<Result<Vec<Digit>>>()?;

        let mut number = LinkedNumber::empty(base);
        number.nodes.reserve(digits.len());
        for digit in digits {
            number.push_rear(digit);
        }
        Ok(number)
    }

    /// The decimal number spelling `value`.
    pub fn from_integer(value: i64) -> Result<Self> {
        if value < 0 {
            return Err(LinkedNumberError::NegativeInput(value));
        }
        LinkedNumber::from_str_radix(&value.to_string(), 10)
    }

    /// Writes `value` in `radix` by repeated division, least significant digit first.
    /// Zero is written as the single digit `0`.
    fn from_biguint(value: &BigUint, radix: u32) -> Self {
        let divisor = radix_of(radix);
        let mut number = LinkedNumber::empty(radix);
        let mut rest = value.clone();
        loop {
            let remainder = (&rest % divisor).to_u32_digits().first().copied().unwrap_or(0);
            number.push_front(Digit::canonical(remainder as u8));
            rest /= divisor;
            if rest.is_zero() {
                break;
            }
        }
        number
    }
}

macro_rules! impl_unsigned_to_linked_num {
    ($($u: ty),*) => {
    $(
    impl From<$u> for LinkedNumber {
        fn from(val: $u) -> Self {
            LinkedNumber::from_biguint(&BigUint::from(val), 10)
        }
    }
    )*
    };
}

macro_rules! impl_signed_to_linked_num {
    ($($i: ty),*) => {
    $(
    impl TryFrom<$i> for LinkedNumber {
        type Error = LinkedNumberError;

        fn try_from(val: $i) -> Result<Self> {
            LinkedNumber::from_integer(val as i64)
        }
    }
    )*
    };
}
impl_unsigned_to_linked_num!(u8, u16, u32, usize, u64, u128);
impl_signed_to_linked_num!(i8, i16, i32, isize, i64);

// 查询
impl LinkedNumber {
    #[inline]
    pub fn base(&self) -> u32 {
        self.base
    }

    #[inline]
    pub fn digit_count(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// True when every digit is smaller than the base. An empty number is valid.
    pub fn is_valid(&self) -> bool {
        self.iter().all(|digit| digit.fits(self.base))
    }

    pub fn to_text(&self) -> String {
        self.iter().map(Digit::symbol).collect()
    }

    /// Most significant digit.
    pub fn front(&self) -> Option<&Digit> {
        self.front.map(|id| self.nodes[id.0].digit())
    }

    /// Least significant digit.
    pub fn rear(&self) -> Option<&Digit> {
        self.rear.map(|id| self.nodes[id.0].digit())
    }

    pub fn front_id(&self) -> Option<NodeId> {
        self.front
    }

    pub fn rear_id(&self) -> Option<NodeId> {
        self.rear
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn digit_at(&self, position: usize) -> Option<&Digit> {
        self.node_at(position).map(|id| self.nodes[id.0].digit())
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            number: self,
            head: self.front,
            tail: self.rear,
            remaining: self.nodes.len(),
        }
    }

    /// Value of the number, accumulated front to rear as `acc * base + digit`.
    pub fn to_biguint(&self) -> Result<BigUint> {
        if !self.is_valid() {
            return Err(LinkedNumberError::InvalidNumber);
        }
        let radix = radix_of(self.base);
        Ok(self.iter().fold(BigUint::zero(), |acc, digit| acc * radix + digit.value()))
    }

    /// Contribution of `digit` when it sits at `position`: `digit * base^position`.
    fn positional_value(&self, digit: &Digit, position: usize) -> BigUint {
        BigUint::from(digit.value()) * num_traits::pow(radix_of(self.base).clone(), position)
    }

    /// Walks from whichever end is closer to `position`.
    fn node_at(&self, position: usize) -> Option<NodeId> {
        let size = self.digit_count();
        if position >= size {
            return None;
        }
        if position < size / 2 {
            (0..position).try_fold(self.rear?, |id, _| self.nodes[id.0].prev())
        } else {
            (0..size - 1 - position).try_fold(self.front?, |id, _| self.nodes[id.0].next())
        }
    }
}

// 转换
impl LinkedNumber {
    /// Re-expresses the number in `new_base`. `self` is left untouched.
    pub fn convert_to(&self, new_base: u32) -> Result<LinkedNumber> {
        check_radix(new_base)?;
        let value = self.to_biguint()?;
        trace!("converting {} (base {}) = {} to base {}", self, self.base, value, new_base);
        Ok(LinkedNumber::from_biguint(&value, new_base))
    }
}

// 增删
impl LinkedNumber {
    /// Inserts `digit` so that it ends up at `position`.
    /// `0` appends a new least significant digit, `digit_count()` a new most significant one.
    pub fn add_digit(&mut self, digit: Digit, position: usize) -> Result<()> {
        let size = self.digit_count();
        if position > size {
            return Err(LinkedNumberError::InvalidPosition { position, size });
        }

        if position == 0 {
            self.push_rear(digit);
        } else if position == size {
            self.push_front(digit);
        } else {
            // the digit now at `position - 1` becomes the new digit's rear neighbour
            let at = self.node_at(position - 1)
                .ok_or(LinkedNumberError::InvalidPosition { position, size })?;
            self.insert_before(at, digit);
        }
        debug!("added digit {} at position {}: {}", digit, position, self);
        Ok(())
    }

    /// Unlinks the digit at `position` and returns its positional value.
    pub fn remove_digit(&mut self, position: usize) -> Result<BigUint> {
        let size = self.digit_count();
        let id = self.node_at(position)
            .ok_or(LinkedNumberError::InvalidPosition { position, size })?;

        let digit = self.unlink(id).into_digit();
        let value = self.positional_value(&digit, position);
        debug!("removed digit {} at position {} worth {}: {}", digit, position, value, self);
        Ok(value)
    }

    fn alloc(&mut self, digit: Digit) -> NodeId {
        self.nodes.push(Node::new(digit));
        NodeId(self.nodes.len() - 1)
    }

    fn push_rear(&mut self, digit: Digit) {
        let id = self.alloc(digit);
        self.nodes[id.0].set_prev(self.rear);
        match self.rear {
            Some(rear) => self.nodes[rear.0].set_next(Some(id)),
            None => self.front = Some(id),
        }
        self.rear = Some(id);
    }

    fn push_front(&mut self, digit: Digit) {
        let id = self.alloc(digit);
        self.nodes[id.0].set_next(self.front);
        match self.front {
            Some(front) => self.nodes[front.0].set_prev(Some(id)),
            None => self.rear = Some(id),
        }
        self.front = Some(id);
    }

    fn insert_before(&mut self, at: NodeId, digit: Digit) {
        let prev = self.nodes[at.0].prev();
        let id = self.alloc(digit);
        self.nodes[id.0].set_prev(prev);
        self.nodes[id.0].set_next(Some(at));
        self.nodes[at.0].set_prev(Some(id));
        match prev {
            Some(prev) => self.nodes[prev.0].set_next(Some(id)),
            None => self.front = Some(id),
        }
    }

    fn unlink(&mut self, id: NodeId) -> Node {
        let (prev, next) = {
            let node = &self.nodes[id.0];
            (node.prev(), node.next())
        };
        match prev {
            Some(prev) => self.nodes[prev.0].set_next(next),
            None => self.front = next,
        }
        match next {
            Some(next) => self.nodes[next.0].set_prev(prev),
            None => self.rear = prev,
        }

        let removed = self.nodes.swap_remove(id.0);
        let last = NodeId(self.nodes.len());
        if id != last {
            self.relocate(last, id);
        }
        removed
    }

    /// The node stored under `from` now lives under `to`; point its neighbours at `to`.
    fn relocate(&mut self, from: NodeId, to: NodeId) {
        let (prev, next) = {
            let node = &self.nodes[to.0];
            (node.prev(), node.next())
        };
        match prev {
            Some(prev) => self.nodes[prev.0].set_next(Some(to)),
            None => self.front = Some(to),
        }
        match next {
            Some(next) => self.nodes[next.0].set_prev(Some(to)),
            None => self.rear = Some(to),
        }
        debug_assert!(self.front != Some(from) && self.rear != Some(from));
    }
}

/// Digits from front to rear; `.rev()` follows the `prev` links back.
pub struct Iter<'a> {
    number: &'a LinkedNumber,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Digit;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.number.nodes[self.head?.0];
        self.head = node.next();
        self.remaining -= 1;
        Some(node.digit())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a> DoubleEndedIterator for Iter<'a> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.number.nodes[self.tail?.0];
        self.tail = node.prev();
        self.remaining -= 1;
        Some(node.digit())
    }
}

impl<'a> ExactSizeIterator for Iter<'a> {}

impl<'a> IntoIterator for &'a LinkedNumber {
    type Item = &'a Digit;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// 实现打印
impl Display for LinkedNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl PartialEq for LinkedNumber {
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base
            && self.digit_count() == other.digit_count()
            && self.iter().eq(other.iter())
    }
}

impl Eq for LinkedNumber {}

impl Hash for LinkedNumber {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.base.hash(state);
        self.digit_count().hash(state);
        for digit in self {
            digit.hash(state);
        }
    }
}

#[cfg(test)]
fn assert_links(number: &LinkedNumber) {
    let mut count = 0;
    let mut prev = None;
    let mut cursor = number.front_id();
    while let Some(id) = cursor {
        let node = number.node(id).unwrap();
        assert_eq!(node.prev(), prev, "broken prev link at {:?}", id);
        prev = Some(id);
        cursor = node.next();
        count += 1;
    }
    assert_eq!(prev, number.rear_id());
    assert_eq!(count, number.digit_count());
}

#[test]
fn test_from_str_radix() {
    let a = LinkedNumber::from_str_radix("123", 10).unwrap();
    assert_eq!(a.to_text(), "123");
    assert_eq!(a.digit_count(), 3);
    assert_eq!(a.base(), 10);
    assert_eq!(a.front().unwrap().value(), 1);
    assert_eq!(a.rear().unwrap().value(), 3);
    assert_links(&a);

    let b = LinkedNumber::from_str_radix("7", 8).unwrap();
    assert_eq!(b.front_id(), b.rear_id());

    assert_eq!(LinkedNumber::from_str_radix("", 10), Err(LinkedNumberError::EmptyInput));
    assert_eq!(LinkedNumber::from_str_radix("12", 1), Err(LinkedNumberError::InvalidBase(1)));
    assert_eq!(LinkedNumber::from_str_radix("12", 37), Err(LinkedNumberError::InvalidBase(37)));
    assert_eq!(LinkedNumber::from_str_radix("1_2", 10), Err(LinkedNumberError::InvalidDigit('_')));
}

#[test]
fn test_from_integer() {
    let a = LinkedNumber::from_integer(255).unwrap();
    assert_eq!(a.to_text(), "255");
    assert_eq!(a.base(), 10);
    assert_eq!(LinkedNumber::from_integer(0).unwrap().to_text(), "0");
    assert_eq!(LinkedNumber::from_integer(-4), Err(LinkedNumberError::NegativeInput(-4)));

    assert_eq!(LinkedNumber::from(255u8), a);
    assert_eq!(LinkedNumber::from(0u64).to_text(), "0");
    assert_eq!(LinkedNumber::from(u128::MAX).to_text(), u128::MAX.to_string());
    assert_eq!(LinkedNumber::try_from(-1i32), Err(LinkedNumberError::NegativeInput(-1)));
    assert_eq!(LinkedNumber::try_from(1024isize).unwrap().to_text(), "1024");
}

#[test]
fn test_is_valid() {
    assert!(LinkedNumber::from_str_radix("1010", 2).unwrap().is_valid());
    assert!(!LinkedNumber::from_str_radix("1012", 2).unwrap().is_valid());
    assert!(LinkedNumber::from_str_radix("zZ", 36).unwrap().is_valid());
    assert!(!LinkedNumber::from_str_radix("G", 16).unwrap().is_valid());
}

#[test]
fn test_eq() {
    let a = LinkedNumber::from_str_radix("10", 10).unwrap();
    let b = LinkedNumber::from_str_radix("10", 2).unwrap();
    let c = LinkedNumber::from_str_radix("10", 10).unwrap();
    assert_eq!(a, a);
    assert_eq!(a, c);
    assert_eq!(c, a);
    assert_ne!(a, b);
    assert_ne!(a, LinkedNumber::from_str_radix("100", 10).unwrap());
    assert_eq!(
        LinkedNumber::from_str_radix("ff", 16).unwrap(),
        LinkedNumber::from_str_radix("FF", 16).unwrap()
    );
}

#[test]
fn test_convert_to() {
    let ff = LinkedNumber::from_str_radix("FF", 16).unwrap();
    let dec = ff.convert_to(10).unwrap();
    assert_eq!(dec.to_text(), "255");
    assert_eq!(dec.base(), 10);
    assert_eq!(ff.to_text(), "FF");

    assert_eq!(LinkedNumber::from_integer(255).unwrap().convert_to(16).unwrap().to_text(), "FF");
    assert_eq!(LinkedNumber::from_integer(5).unwrap().convert_to(2).unwrap().to_text(), "101");
    assert_eq!(LinkedNumber::from_str_radix("z", 36).unwrap().convert_to(10).unwrap().to_text(), "35");
    assert_eq!(LinkedNumber::from_str_radix("000", 7).unwrap().convert_to(3).unwrap().to_text(), "0");
    assert_eq!(LinkedNumber::from_str_radix("0012", 10).unwrap().convert_to(10).unwrap().to_text(), "12");

    let big = "123456789012345678901234567890123456789";
    let back = LinkedNumber::from_str_radix(big, 10).unwrap()
        .convert_to(36).unwrap()
        .convert_to(10).unwrap();
    assert_eq!(back.to_text(), big);

    let invalid = LinkedNumber::from_str_radix("19", 8).unwrap();
    assert_eq!(invalid.convert_to(10), Err(LinkedNumberError::InvalidNumber));
    assert_eq!(ff.convert_to(0), Err(LinkedNumberError::InvalidBase(0)));
}

#[test]
fn test_add_digit() {
    let mut a = LinkedNumber::from_str_radix("123", 10).unwrap();
    a.add_digit(Digit::new('4').unwrap(), 0).unwrap();
    assert_eq!(a.to_text(), "1234");
    a.add_digit(Digit::new('0').unwrap(), 4).unwrap();
    assert_eq!(a.to_text(), "01234");
    a.add_digit(Digit::new('9').unwrap(), 2).unwrap();
    assert_eq!(a.to_text(), "012934");
    assert_eq!(a.digit_at(2).unwrap().value(), 9);
    a.add_digit(Digit::new('8').unwrap(), 5).unwrap();
    assert_eq!(a.to_text(), "0812934");
    assert_links(&a);

    assert_eq!(
        a.add_digit(Digit::new('1').unwrap(), 8),
        Err(LinkedNumberError::InvalidPosition { position: 8, size: 7 })
    );
    assert_eq!(a.to_text(), "0812934");
}

#[test]
fn test_remove_digit() {
    let mut a = LinkedNumber::from_str_radix("123", 10).unwrap();
    assert_eq!(a.remove_digit(0).unwrap(), BigUint::from(3u32));
    assert_eq!(a.to_text(), "12");
    assert_links(&a);

    let mut b = LinkedNumber::from_str_radix("123", 10).unwrap();
    assert_eq!(b.remove_digit(2).unwrap(), BigUint::from(100u32));
    assert_eq!(b.to_text(), "23");
    assert_eq!(b.remove_digit(2), Err(LinkedNumberError::InvalidPosition { position: 2, size: 2 }));
    assert_links(&b);

    let mut c = LinkedNumber::from_str_radix("1F3", 16).unwrap();
    assert_eq!(c.remove_digit(1).unwrap(), BigUint::from(15u32 * 16));
    assert_eq!(c.to_text(), "13");
    assert_links(&c);
}

#[test]
fn test_remove_until_empty() {
    let mut a = LinkedNumber::from_str_radix("5", 10).unwrap();
    assert_eq!(a.remove_digit(0).unwrap(), BigUint::from(5u32));
    assert!(a.is_empty());
    assert_eq!(a.front_id(), None);
    assert_eq!(a.rear_id(), None);
    assert_eq!(a.to_text(), "");
    assert!(a.is_valid());

    a.add_digit(Digit::new('7').unwrap(), 0).unwrap();
    assert_eq!(a.front_id(), a.rear_id());
    assert!(a.front_id().is_some());
    assert_eq!(a.to_text(), "7");
}

#[test]
fn test_iter_rev() {
    let a = LinkedNumber::from_str_radix("ABC", 16).unwrap();
    let reversed: String = a.iter().rev().map(Digit::symbol).collect();
    assert_eq!(reversed, "CBA");
    assert_eq!(a.iter().len(), 3);
}

#[test]
fn test_large_positional_value() {
    let mut a = LinkedNumber::from_str_radix("1000000000000000000000000", 10).unwrap();
    let value = a.remove_digit(24).unwrap();
    assert_eq!(value.to_string(), "1000000000000000000000000");
}
