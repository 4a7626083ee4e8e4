//! Power-of-two radix codec: hex and binary formatting, hex parsing.
//!
//! Word boundaries align exactly with fixed digit-group widths, so
//! formatting needs no arithmetic: the most-significant non-zero word is
//! rendered at its natural length and every word below it as a zero-padded
//! group of `BITS / 4` (hex) or `BITS` (binary) digits.

use crate::{Limb, ParseError};

#[derive(Clone, Copy)]
enum Pow2 {
    Hex,
    Bin,
}

/// Formats `x` as hex into the tail of `buf`, optionally prefixed "0x".
///
/// Returns the written size, with the text occupying
/// `buf[buf.len() - size..]`; returns 0 when the text does not fit, in
/// which case `buf` is untouched.
pub fn array_to_hex<L: Limb>(buf: &mut [u8], x: &[L], with_prefix: bool) -> usize {
    format_pow2(buf, x, with_prefix, Pow2::Hex)
}

/// Formats `x` as binary into the tail of `buf`, optionally prefixed "0b".
///
/// Same buffer contract as [`array_to_hex`].
pub fn array_to_bin<L: Limb>(buf: &mut [u8], x: &[L], with_prefix: bool) -> usize {
    format_pow2(buf, x, with_prefix, Pow2::Bin)
}

fn format_pow2<L: Limb>(buf: &mut [u8], x: &[L], with_prefix: bool, radix: Pow2) -> usize {
    let n = x.len();

    // Index of the most significant non-zero word; 0 when the whole array
    // is zero so a single "0" group is still produced.
    let mut full_n = 0;
    if n > 1 {
        let mut pos = n - 1;
        while pos > 0 && x[pos].is_zero() {
            pos -= 1;
        }
        full_n = pos;
    }

    let top = if n == 0 { 0 } else { x[full_n].to_u64() };
    let (top_len, group_len, marker) = match radix {
        Pow2::Hex => (hex_len(top), L::BITS / 4, b'x'),
        Pow2::Bin => (bin_len(top), L::BITS, b'b'),
    };
    let prefix_len = if with_prefix { 2 } else { 0 };
    let total = prefix_len + full_n * group_len + top_len;
    if total > buf.len() {
        return 0;
    }

    let out = buf.len() - total;
    if with_prefix {
        buf[out] = b'0';
        buf[out + 1] = marker;
    }
    let digits = &mut buf[out + prefix_len..];
    write_group(&mut digits[..top_len], top, radix);
    for i in 0..full_n {
        let word = x[full_n - 1 - i].to_u64();
        let at = top_len + i * group_len;
        write_group(&mut digits[at..at + group_len], word, radix);
    }
    total
}

/// Parses a hex string into little-endian `x`, zero-filling the words above
/// the parsed count.
///
/// Digit groups are taken from the end of the string backwards, one word
/// each; a leftover prefix shorter than a full group fills the highest
/// parsed word.
pub fn from_hex_strict<L: Limb>(x: &mut [L], s: &[u8]) -> Result<(), ParseError> {
    if s.is_empty() {
        return Err(ParseError::InvalidLength);
    }
    let unit = L::BITS / 4;
    let q = s.len() / unit;
    let r = s.len() % unit;
    let required = q + usize::from(r != 0);
    if x.len() < required {
        return Err(ParseError::BufferTooSmall {
            required,
            capacity: x.len(),
        });
    }
    for i in 0..q {
        let group = &s[r + (q - 1 - i) * unit..][..unit];
        x[i] = L::from_hex_digits(group).ok_or_else(|| ParseError::invalid_digit(s))?;
    }
    if r != 0 {
        x[q] = L::from_hex_digits(&s[..r]).ok_or_else(|| ParseError::invalid_digit(s))?;
    }
    for w in &mut x[required..] {
        *w = L::ZERO;
    }
    Ok(())
}

/// Tolerant variant of [`from_hex_strict`]: returns the number of words
/// populated, or 0 on empty input, short capacity or a bad digit.
///
/// Unlike the strict variant this does NOT zero the words above the parsed
/// count; callers that need them cleared must do so themselves.
pub fn hex_to_array<L: Limb>(x: &mut [L], s: &[u8]) -> usize {
    if s.is_empty() {
        return 0;
    }
    let unit = L::BITS / 4;
    let q = s.len() / unit;
    let r = s.len() % unit;
    let required = q + usize::from(r != 0);
    if x.len() < required {
        return 0;
    }
    for i in 0..q {
        match L::from_hex_digits(&s[r + (q - 1 - i) * unit..][..unit]) {
            Some(word) => x[i] = word,
            None => return 0,
        }
    }
    if r != 0 {
        match L::from_hex_digits(&s[..r]) {
            Some(word) => x[q] = word,
            None => return 0,
        }
    }
    required
}

// Natural digit length of a single word, minimum 1.
fn hex_len(v: u64) -> usize {
    if v == 0 {
        1
    } else {
        (64 - v.leading_zeros() as usize + 3) / 4
    }
}

fn bin_len(v: u64) -> usize {
    if v == 0 {
        1
    } else {
        64 - v.leading_zeros() as usize
    }
}

fn write_group(out: &mut [u8], mut v: u64, radix: Pow2) {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    match radix {
        Pow2::Hex => {
            for b in out.iter_mut().rev() {
                *b = HEX[(v & 0xf) as usize];
                v >>= 4;
            }
        }
        Pow2::Bin => {
            for b in out.iter_mut().rev() {
                *b = b'0' + (v & 1) as u8;
                v >>= 1;
            }
        }
    }
}

pub(crate) fn parse_hex_u64(digits: &[u8]) -> Option<u64> {
    debug_assert!(!digits.is_empty() && digits.len() <= 16);
    let mut v = 0u64;
    for &c in digits {
        let d = match c {
            b'0'..=b'9' => c - b'0',
            b'a'..=b'f' => c - b'a' + 10,
            b'A'..=b'F' => c - b'A' + 10,
            _ => return None,
        };
        v = (v << 4) | u64::from(d);
    }
    Some(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex_string<L: Limb>(x: &[L], with_prefix: bool) -> String {
        let mut buf = [0u8; 256];
        let n = array_to_hex(&mut buf, x, with_prefix);
        assert!(n > 0, "formatting failed");
        String::from_utf8(buf[buf.len() - n..].to_vec()).unwrap()
    }

    fn bin_string<L: Limb>(x: &[L], with_prefix: bool) -> String {
        let mut buf = [0u8; 256];
        let n = array_to_bin(&mut buf, x, with_prefix);
        assert!(n > 0, "formatting failed");
        String::from_utf8(buf[buf.len() - n..].to_vec()).unwrap()
    }

    #[test]
    fn single_word_hex() {
        let mut buf = [0u8; 4];
        let n = array_to_hex(&mut buf, &[0x1234u32], false);
        assert_eq!(n, 4);
        assert_eq!(&buf, b"1234");

        let mut buf = [0u8; 6];
        let n = array_to_hex(&mut buf, &[0x1234u32], true);
        assert_eq!(n, 6);
        assert_eq!(&buf, b"0x1234");
    }

    #[test]
    fn lower_words_are_fixed_width() {
        assert_eq!(hex_string(&[0xabcu32, 0x1], false), "100000abc");
        assert_eq!(hex_string(&[0xabcu64, 0x1], false), "10000000000000abc");
    }

    #[test]
    fn leading_zero_words_are_trimmed() {
        assert_eq!(hex_string(&[0x1234u32, 0, 0], false), "1234");
        assert_eq!(bin_string(&[0b101u32, 0, 0], false), "101");
    }

    #[test]
    fn zero_arrays() {
        assert_eq!(hex_string(&[0u32], false), "0");
        assert_eq!(hex_string(&[0u32, 0, 0], true), "0x0");
        assert_eq!(hex_string::<u32>(&[], false), "0");
        assert_eq!(bin_string(&[0u64], true), "0b0");
    }

    #[test]
    fn capacity_is_exact() {
        // "deadbeef" + one full lower group: 16 digits
        let x = [0x01234567u32, 0xdeadbeef];
        let mut buf = [0u8; 16];
        assert_eq!(array_to_hex(&mut buf, &x, false), 16);

        let mut buf = [0u8; 15];
        let before = buf;
        assert_eq!(array_to_hex(&mut buf, &x, false), 0);
        assert_eq!(buf, before, "failed call must not touch the buffer");
    }

    #[test]
    fn binary_groups() {
        assert_eq!(bin_string(&[0b1111u32], false), "1111");
        let s = bin_string(&[0u32, 1], false);
        assert_eq!(s.len(), 1 + 32);
        assert_eq!(&s[..2], "10");
    }

    #[test]
    fn strict_parse_round_trip() {
        let mut x = [0u32; 4];
        from_hex_strict(&mut x, b"1fffAbCd00000002").unwrap();
        assert_eq!(x, [0x00000002, 0x1fffabcd, 0, 0]);

        // leftover prefix shorter than a group lands in the top word
        let mut x = [0u32; 3];
        from_hex_strict(&mut x, b"abc00000001").unwrap();
        assert_eq!(x, [0x00000001, 0xabc, 0]);
    }

    #[test]
    fn strict_parse_failures() {
        let mut x = [0u32; 4];
        assert_eq!(from_hex_strict(&mut x, b""), Err(ParseError::InvalidLength));

        let mut x = [0u32; 1];
        assert_eq!(
            from_hex_strict(&mut x, b"123456789"),
            Err(ParseError::BufferTooSmall {
                required: 2,
                capacity: 1
            })
        );

        let mut x = [0u32; 4];
        let err = from_hex_strict(&mut x, b"12g4").unwrap_err();
        assert_eq!(err, ParseError::InvalidDigit("12g4".to_string()));
    }

    #[test]
    fn tolerant_parse_returns_zero_on_failure() {
        let mut x = [0u32; 4];
        assert_eq!(hex_to_array(&mut x, b""), 0);
        assert_eq!(hex_to_array(&mut x, b"12g4"), 0);

        let mut x = [0u32; 1];
        assert_eq!(hex_to_array(&mut x, b"123456789"), 0);

        let mut x = [0u32; 4];
        assert_eq!(hex_to_array(&mut x, b"deadbeef01"), 2);
        assert_eq!(x[0], 0xadbeef01);
        assert_eq!(x[1], 0xde);
    }

    // The strict parser zeroes unused high words, the tolerant one leaves
    // them alone. Both behaviors are intentional and relied upon.
    #[test]
    fn zero_fill_asymmetry() {
        let mut x = [u32::MAX; 4];
        from_hex_strict(&mut x, b"ff").unwrap();
        assert_eq!(x, [0xff, 0, 0, 0]);

        let mut x = [u32::MAX; 4];
        assert_eq!(hex_to_array(&mut x, b"ff"), 1);
        assert_eq!(x, [0xff, u32::MAX, u32::MAX, u32::MAX]);
    }

    #[test]
    fn u64_words_parse_in_sixteen_digit_groups() {
        let mut x = [0u64; 2];
        from_hex_strict(&mut x, b"20000000000000001").unwrap();
        assert_eq!(x, [0x0000000000000001, 0x2]);

        let mut x = [0u64; 2];
        assert_eq!(hex_to_array(&mut x, b"20000000000000001"), 2);
        assert_eq!(x, [0x0000000000000001, 0x2]);
    }

    #[test]
    fn matches_byte_level_hex_when_top_digit_is_set() {
        // With the top hex digit non-zero there is no leading-zero trim,
        // so the output equals the big-endian byte encoding.
        let x = [0x89abcdefu32, 0xf1234567];
        let be_bytes = [0xf1u8, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef];
        assert_eq!(hex_string(&x, false), hex::encode(be_bytes));
    }

    #[test]
    fn format_parse_round_trip() {
        let x = [0x89abcdefu32, 0x01234567, 0xfee1];
        let s = hex_string(&x, false);
        assert_eq!(s, "fee10123456789abcdef");

        let mut back = [0u32; 3];
        assert_eq!(hex_to_array(&mut back, s.as_bytes()), 3);
        assert_eq!(back, x);
    }
}
