//! Least-significant-digit radix sort for `i32` keys.
//!
//! Keys are sign-flipped once up front so that two's-complement order matches
//! unsigned order, counting-sorted one 8-bit digit at a time, then flipped back.

const LG_RADIX: u32 = 8;
const RADIX: usize = 1 << LG_RADIX;
const MASK: u32 = (1 << LG_RADIX) - 1;
const WORD_BITS: u32 = i32::BITS;
const PASSES: u32 = WORD_BITS / LG_RADIX;
const SIGN_FLIP: i32 = i32::MIN;

const _: () = assert!(MASK as usize == RADIX - 1);
const _: () = assert!(WORD_BITS % LG_RADIX == 0);
const _: () = assert!(PASSES == 4);

#[inline(always)]
fn read_radix(word: i32, shift: u32) -> usize {
    (((word as u32) >> shift) & MASK) as usize
}

pub fn lsd_radix_sort(data: &mut [i32]) {
    let mut aux = vec![0i32; data.len()];

    for word in data.iter_mut() {
        *word ^= SIGN_FLIP;
    }

    // Each pass deals `from` into `to`, then the two swap roles.
    let mut from = &mut data[..];
    let mut to = &mut aux[..];
    for pass in 0..PASSES {
        let shift = pass * LG_RADIX;

        // counts[d + 1] holds the size of bucket d; after the scan counts[d]
        // is the first slot of bucket d.
        let mut counts = [0usize; RADIX + 1];
        for &word in from.iter() {
            counts[read_radix(word, shift) + 1] += 1;
        }
        for i in 0..RADIX {
            counts[i + 1] += counts[i];
        }

        for &word in from.iter() {
            let pos = &mut counts[read_radix(word, shift)];
            to[*pos] = word;
            *pos += 1;
        }
        std::mem::swap(&mut from, &mut to);
    }
    if PASSES % 2 == 1 {
        to.copy_from_slice(from);
    }

    for word in data.iter_mut() {
        *word ^= SIGN_FLIP;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_flip_orders_as_unsigned() {
        let flipped = |x: i32| (x ^ SIGN_FLIP) as u32;
        assert_eq!(flipped(i32::MIN), 0);
        assert_eq!(flipped(i32::MAX), u32::MAX);
        assert!(flipped(-1) < flipped(0));
        assert!(flipped(0) < flipped(1));
    }

    #[test]
    fn digits() {
        let word = 0x1234_56ABu32 as i32;
        assert_eq!(read_radix(word, 0), 0xAB);
        assert_eq!(read_radix(word, 8), 0x56);
        assert_eq!(read_radix(word, 16), 0x34);
        assert_eq!(read_radix(word, 24), 0x12);
        assert_eq!(read_radix(-1, 24), 0xFF);
    }

    #[test]
    fn arbitrary_array() {
        let mut data = [5, 3, 8, 1, 9, 2];
        lsd_radix_sort(&mut data);
        assert_eq!(data, [1, 2, 3, 5, 8, 9]);
    }

    #[test]
    fn negative_values() {
        let mut data = [-5, 3, -8, 1, 0, -2];
        lsd_radix_sort(&mut data);
        assert_eq!(data, [-8, -5, -2, 0, 1, 3]);
    }

    #[test]
    fn extremes() {
        let mut data = [i32::MAX, -1, i32::MIN, 0, i32::MIN + 1, 1, i32::MAX - 1];
        lsd_radix_sort(&mut data);
        assert_eq!(data, [i32::MIN, i32::MIN + 1, -1, 0, 1, i32::MAX - 1, i32::MAX]);
    }

    #[test]
    fn keys_differing_only_in_high_digits() {
        let mut data = [0x0300_0000, 0x0100_0000, -0x0100_0000, 0x0200_0000];
        lsd_radix_sort(&mut data);
        assert_eq!(data, [-0x0100_0000, 0x0100_0000, 0x0200_0000, 0x0300_0000]);
    }

    #[test]
    fn very_unsorted() {
        let mut data = (-70_000..70_000).rev().step_by(7).collect::<Vec<_>>();
        let mut expected = data.clone();
        expected.sort_unstable();
        lsd_radix_sort(&mut data);
        assert_eq!(data, expected);
    }

    #[test]
    fn simple_edge_cases() {
        let mut empty: [i32; 0] = [];
        lsd_radix_sort(&mut empty);
        assert_eq!(empty, []);

        let mut one = [-7];
        lsd_radix_sort(&mut one);
        assert_eq!(one, [-7]);

        let mut equal = [i32::MIN; 5];
        lsd_radix_sort(&mut equal);
        assert_eq!(equal, [i32::MIN; 5]);
    }
}
