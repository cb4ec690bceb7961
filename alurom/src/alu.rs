//! Arithmetic unit.
//!
//! On every enabled clock edge, computes one operation over operand `A` and the registered lookup
//! table word `B`. Faults are encoded as values: the flag reports overflow for `ADD`/`MUL`,
//! underflow for `SUB` and a zero divisor for `DIV`.

use tracing::trace;

use crate::*;

/// Operation code as it appears on the input bus.
pub type OpCode = Bits<U<OPCODE_WIDTH>>;

/// Intermediate wide enough for the full sum or product of two data words.
type Wide = Bits<Sum<U<DATA_WIDTH>, U<DATA_WIDTH>>>;

/// Arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `A + B`, flag on carry out.
    Add,

    /// `A - B`, saturating at zero with the flag set on underflow.
    Sub,

    /// `A * B`, low byte of the product, flag if the high byte is nonzero.
    Mul,

    /// `A / B`, zero with the flag set if `B` is zero.
    Div,
}

impl Operation {
    /// All operations in encoding order.
    pub const ALL: [Operation; 4] = [Operation::Add, Operation::Sub, Operation::Mul, Operation::Div];

    /// Encodes the operation.
    pub fn encode(self) -> OpCode {
        OpCode::new(match self {
            Operation::Add => 0,
            Operation::Sub => 1,
            Operation::Mul => 2,
            Operation::Div => 3,
        })
    }

    /// Decodes an operation code. Returns `None` for codes with no operation assigned.
    pub fn decode(code: OpCode) -> Option<Self> { Self::ALL.into_iter().find(|op| op.encode() == code) }
}

impl From<Operation> for OpCode {
    fn from(op: Operation) -> OpCode { op.encode() }
}

/// Result and flag registers of the arithmetic unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AluOutput {
    /// Low byte of the computed value.
    pub result: u8,

    /// Status flag. Its meaning depends on the operation that produced `result`.
    pub flag: bool,
}

impl AluOutput {
    /// Creates a new output pair.
    pub const fn new(result: u8, flag: bool) -> Self { Self { result, flag } }
}

impl Signal for AluOutput {
    const WIDTH: usize = <u8 as Signal>::WIDTH + <bool as Signal>::WIDTH;

    fn transl(self) -> Vec<bool> { self.result.transl().into_iter().chain(self.flag.transl()).collect() }
}

/// Keeps the low data word and flags any bit above it.
fn truncate(full: Wide) -> AluOutput {
    let low = full.resize::<U<DATA_WIDTH>>();
    AluOutput::new(low.value() as u8, full.any_above(DATA_WIDTH))
}

/// Computes the value the result and flag registers take on an enabled clock edge.
///
/// `b` is the lookup table word registered before the edge. `None` stands for an operation code
/// with no operation assigned, which yields a zero result and a clear flag.
pub fn evaluate(op: Option<Operation>, a: u8, b: u8) -> AluOutput {
    match op {
        Some(Operation::Add) => truncate(Wide::new(u32::from(a) + u32::from(b))),
        Some(Operation::Sub) => {
            if a >= b {
                AluOutput::new(a - b, false)
            } else {
                AluOutput::new(0, true)
            }
        }
        Some(Operation::Mul) => truncate(Wide::new(u32::from(a) * u32::from(b))),
        Some(Operation::Div) => {
            if b != 0 {
                AluOutput::new(a / b, false)
            } else {
                AluOutput::new(0, true)
            }
        }
        // Unlike the other fault paths, this does not raise the flag.
        None => AluOutput::new(0, false),
    }
}

/// Arithmetic unit.
#[derive(Debug, Clone)]
pub struct ArithmeticUnit {
    state: Dff<AluOutput>,
}

impl Default for ArithmeticUnit {
    fn default() -> Self { Self { state: Dff::new(AluOutput::default()) } }
}

impl ArithmeticUnit {
    /// Creates the unit in its reset state.
    pub fn new() -> Self { Self::default() }

    /// Registered result and flag.
    pub fn q(&self) -> AluOutput { self.state.q() }

    /// Applies one rising clock edge. `b` must be the lookup table word registered before the edge.
    pub fn tick(&mut self, control: Control, op: OpCode, a: u8, b: u8) {
        let d = evaluate(Operation::decode(op), a, b);
        trace!(op = op.value(), a, b, result = d.result, flag = d.flag, "alu");
        self.state.clock(control, d);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoding_round_trips() {
        for op in Operation::ALL {
            assert_eq!(Operation::decode(op.encode()), Some(op));
        }
        assert_eq!(Operation::Div.encode().value(), 3);
    }

    #[test]
    fn add_sets_flag_on_carry() {
        assert_eq!(evaluate(Some(Operation::Add), 15, 8), AluOutput::new(23, false));
        assert_eq!(evaluate(Some(Operation::Add), 200, 100), AluOutput::new(44, true));
        assert_eq!(evaluate(Some(Operation::Add), 124, 132), AluOutput::new(0, true));
        assert_eq!(evaluate(Some(Operation::Add), 123, 132), AluOutput::new(255, false));
    }

    #[test]
    fn sub_saturates_at_zero() {
        assert_eq!(evaluate(Some(Operation::Sub), 20, 20), AluOutput::new(0, false));
        assert_eq!(evaluate(Some(Operation::Sub), 30, 8), AluOutput::new(22, false));
        assert_eq!(evaluate(Some(Operation::Sub), 16, 20), AluOutput::new(0, true));
    }

    #[test]
    fn mul_keeps_low_byte() {
        assert_eq!(evaluate(Some(Operation::Mul), 2, 35), AluOutput::new(70, false));
        assert_eq!(evaluate(Some(Operation::Mul), 2, 131), AluOutput::new(6, true));
        assert_eq!(evaluate(Some(Operation::Mul), 255, 0), AluOutput::new(0, false));
    }

    #[test]
    fn div_by_zero_sets_flag() {
        assert_eq!(evaluate(Some(Operation::Div), 16, 8), AluOutput::new(2, false));
        assert_eq!(evaluate(Some(Operation::Div), 7, 100), AluOutput::new(0, false));
        assert_eq!(evaluate(Some(Operation::Div), 16, 0), AluOutput::new(0, true));
    }

    #[test]
    fn unassigned_code_clears_both() {
        assert_eq!(evaluate(None, 255, 0), AluOutput::new(0, false));
    }

    #[test]
    fn tick_uses_given_b() {
        let mut alu = ArithmeticUnit::new();
        alu.tick(Control::RUN, Operation::Sub.encode(), 16, 20);
        assert_eq!(alu.q(), AluOutput::new(0, true));
        alu.tick(Control::STALL, Operation::Add.encode(), 1, 1);
        assert_eq!(alu.q(), AluOutput::new(0, true));
        alu.tick(Control::RESET, Operation::Add.encode(), 1, 1);
        assert_eq!(alu.q(), AluOutput::default());
    }
}
