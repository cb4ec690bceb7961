//! Utilities.

/// Returns ceiling log2.
pub const fn clog2(value: usize) -> usize {
    if value == 0 {
        0
    } else {
        (::std::mem::size_of::<usize>() * 8) - (value - 1).leading_zeros() as usize
    }
}

/// Returns bit-represented value of an integer, least significant bit first.
pub fn usize_to_bitvec(n: usize, value: usize) -> Vec<bool> {
    assert!(n >= clog2(value + 1), "Width ({}) is too small to be converted from the value '{}'", n, value);
    let size_of_usize = ::std::mem::size_of::<usize>();
    (0..n).map(|i| if i >= size_of_usize * 8 { false } else { (value & (1 << i)) != 0 }).collect::<Vec<_>>()
}

/// Renders bits given least significant bit first as a binary string, most significant bit first.
pub fn bitvec_to_string(bits: &[bool]) -> String { bits.iter().rev().map(|b| if *b { '1' } else { '0' }).collect() }

/// Indents every line in the string.
pub fn indent(str: String, indent: usize) -> String {
    str.lines().map(|l| format!("{}{}", " ".repeat(indent), l)).collect::<Vec<_>>().join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clog2_matches_address_widths() {
        assert_eq!(clog2(1), 0);
        assert_eq!(clog2(2), 1);
        assert_eq!(clog2(8), 3);
        assert_eq!(clog2(9), 4);
    }

    #[test]
    fn bitvec_is_lsb_first() {
        let bits = usize_to_bitvec(4, 0b0110);
        assert_eq!(bits, vec![false, true, true, false]);
        assert_eq!(bitvec_to_string(&bits), "0110");
    }

    #[test]
    #[should_panic]
    fn bitvec_rejects_narrow_width() { usize_to_bitvec(3, 8); }

    #[test]
    fn indent_every_line() { assert_eq!(indent("a\nb".to_string(), 2), "  a\n  b"); }
}
