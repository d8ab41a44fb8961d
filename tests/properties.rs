use linked_num::{Digit, LinkedNumber, LinkedNumberError, MAX_RADIX, MIN_RADIX};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

const DIGITS: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

fn random_text(prng: &mut ChaCha20Rng, base: u32, len: usize) -> String {
    let mut text = String::with_capacity(len);
    // leading digit is non-zero so the text survives a round trip unchanged
    text.push(DIGITS[prng.gen_range(1..base) as usize] as char);
    for _ in 1..len {
        text.push(DIGITS[prng.gen_range(0..base) as usize] as char);
    }
    text
}

fn assert_links(number: &LinkedNumber) {
    let mut count = 0;
    let mut prev = None;
    let mut cursor = number.front_id();
    while let Some(id) = cursor {
        let node = number.node(id).expect("dangling node id");
        assert_eq!(node.prev(), prev);
        prev = Some(id);
        cursor = node.next();
        count += 1;
    }
    assert_eq!(prev, number.rear_id());
    assert_eq!(count, number.digit_count());

    let forward: Vec<&Digit> = number.iter().collect();
    let mut backward: Vec<&Digit> = number.iter().rev().collect();
    backward.reverse();
    assert_eq!(forward, backward);
}

#[test]
fn test_text_round_trip() {
    let mut prng = ChaCha20Rng::seed_from_u64(0);
    for _ in 0..200 {
        let base = prng.gen_range(MIN_RADIX..=MAX_RADIX);
        let len = prng.gen_range(1..40);
        let text = random_text(&mut prng, base, len);
        let number = LinkedNumber::from_str_radix(&text, base).unwrap();
        assert_eq!(number.to_text(), text);
        assert_eq!(number.digit_count(), len);
        assert!(number.is_valid());
        assert_links(&number);
    }
}

#[test]
fn test_convert_round_trip() {
    let mut prng = ChaCha20Rng::seed_from_u64(1);
    for _ in 0..200 {
        let from = prng.gen_range(MIN_RADIX..=MAX_RADIX);
        let to = prng.gen_range(MIN_RADIX..=MAX_RADIX);
        let len = prng.gen_range(1..60);
        let number = LinkedNumber::from_str_radix(&random_text(&mut prng, from, len), from).unwrap();

        let there = number.convert_to(to).unwrap();
        assert_eq!(there.base(), to);
        assert!(there.is_valid());
        assert_links(&there);

        let back = there.convert_to(from).unwrap();
        assert_eq!(back, number, "{} -> base {} -> base {}", number, to, from);
        assert_eq!(number.to_biguint().unwrap(), there.to_biguint().unwrap());
    }
}

#[test]
fn test_add_then_remove_restores() {
    let mut prng = ChaCha20Rng::seed_from_u64(2);
    for _ in 0..200 {
        let base = prng.gen_range(MIN_RADIX..=MAX_RADIX);
        let len = prng.gen_range(1..20);
        let text = random_text(&mut prng, base, len);
        let mut number = LinkedNumber::from_str_radix(&text, base).unwrap();

        let position = prng.gen_range(0..=len);
        let value = prng.gen_range(0..base);
        let digit = Digit::from_value(value).unwrap();
        number.add_digit(digit, position).unwrap();
        assert_eq!(number.digit_count(), len + 1);
        assert_eq!(number.digit_at(position), Some(&digit));
        assert_links(&number);

        let removed = number.remove_digit(position).unwrap();
        let expected = pow_u128(base, position) * value as u128;
        assert_eq!(removed.to_string(), expected.to_string());
        assert_eq!(number.to_text(), text);
        assert_eq!(number.digit_count(), len);
        assert_links(&number);
    }
}

fn pow_u128(base: u32, exp: usize) -> u128 {
    (0..exp).fold(1u128, |acc, _| acc * base as u128)
}

#[test]
fn test_random_mutations_keep_links() {
    let mut prng = ChaCha20Rng::seed_from_u64(3);
    let mut number = LinkedNumber::from_str_radix("1", 36).unwrap();
    let mut shadow: Vec<char> = vec!['1'];
    for _ in 0..500 {
        let size = number.digit_count();
        if size == 0 || prng.gen_bool(0.6) {
            let position = prng.gen_range(0..=size);
            let digit = Digit::from_value(prng.gen_range(0..36)).unwrap();
            number.add_digit(digit, position).unwrap();
            shadow.insert(size - position, digit.symbol());
        } else {
            let position = prng.gen_range(0..size);
            number.remove_digit(position).unwrap();
            shadow.remove(size - 1 - position);
        }
        assert_eq!(number.to_text(), shadow.iter().collect::<String>());
        assert_links(&number);
    }
}

#[test]
fn test_out_of_range_positions_leave_number_untouched() {
    let mut number = LinkedNumber::from_str_radix("42", 10).unwrap();
    assert_eq!(
        number.add_digit(Digit::new('1').unwrap(), 3),
        Err(LinkedNumberError::InvalidPosition { position: 3, size: 2 })
    );
    assert_eq!(
        number.remove_digit(2),
        Err(LinkedNumberError::InvalidPosition { position: 2, size: 2 })
    );
    assert_eq!(number.to_text(), "42");
    assert_links(&number);
}

#[test]
fn test_error_messages() {
    assert_eq!(LinkedNumberError::EmptyInput.to_string(), "no digits given");
    assert_eq!(LinkedNumberError::InvalidNumber.to_string(), "cannot convert invalid number");
    assert_eq!(
        LinkedNumberError::InvalidPosition { position: 5, size: 3 }.to_string(),
        "invalid position 5 for a number of 3 digits"
    );
}
