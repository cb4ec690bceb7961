//! Datapath constants.

use static_assertions::*;

use crate::clog2;

/// Width of operand `A`, of the lookup table words and of the result in bits.
pub const DATA_WIDTH: usize = 8;

/// Number of words in the lookup table.
pub const ROM_DEPTH: usize = 8;

/// Width of the lookup table address in bits.
pub const ROM_ADDR_WIDTH: usize = clog2(ROM_DEPTH);

/// Width of the operation code in bits.
pub const OPCODE_WIDTH: usize = 2;

/// Width of the intermediate sum or product in bits.
pub const WIDE_WIDTH: usize = 2 * DATA_WIDTH;

/// Contents of the lookup table, indexed by address.
pub const ROM_CONTENTS: [u8; ROM_DEPTH] = [4, 8, 20, 35, 66, 100, 131, 132];

// Every address must select a word.
const_assert_eq!(ROM_DEPTH, 1 << ROM_ADDR_WIDTH);

const_assert_eq!(DATA_WIDTH, u8::BITS as usize);

// The intermediate must hold the full product of two data words.
const_assert!((u8::MAX as usize) * (u8::MAX as usize) < (1 << WIDE_WIDTH));

// Four operations fill the opcode.
const_assert_eq!(1 << OPCODE_WIDTH, 4);
