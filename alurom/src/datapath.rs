//! The ALU + ROM datapath.

use crate::*;

/// Boundary inputs sampled at every rising clock edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CoreInput {
    /// Operation code.
    pub op: OpCode,

    /// Operand `A`.
    pub a: u8,

    /// Lookup table address.
    pub addr: RomAddress,
}

impl CoreInput {
    /// Creates new inputs.
    pub fn new(op: Operation, a: u8, addr: RomAddress) -> Self { Self { op: op.encode(), a, addr } }
}

impl Signal for CoreInput {
    const WIDTH: usize = <OpCode as Signal>::WIDTH + <u8 as Signal>::WIDTH + <RomAddress as Signal>::WIDTH;

    fn transl(self) -> Vec<bool> {
        ::std::iter::empty().chain(self.op.transl()).chain(self.a.transl()).chain(self.addr.transl()).collect()
    }
}

/// Register values of the datapath.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Registers {
    /// Registered lookup table word (`B`).
    pub rom: u8,

    /// Result and flag registers.
    pub alu: AluOutput,
}

/// Lookup table unit feeding the arithmetic unit.
#[derive(Debug, Clone, Default)]
pub struct AluRom {
    rom: LookupTable,
    alu: ArithmeticUnit,
}

impl AluRom {
    /// Creates the datapath in its reset state.
    pub fn new() -> Self { Self::default() }

    /// Current register values.
    pub fn registers(&self) -> Registers { Registers { rom: self.rom.q(), alu: self.alu.q() } }

    /// `Result` and `Flag` outputs.
    pub fn output(&self) -> AluOutput { self.alu.q() }

    /// Applies one rising clock edge and returns the outputs after it.
    ///
    /// The arithmetic unit sees the lookup table word registered before this edge, not the word
    /// selected by `input.addr`.
    pub fn tick(&mut self, control: Control, input: CoreInput) -> AluOutput {
        // All next values are computed from this snapshot.
        let q = self.registers();

        self.alu.tick(control, input.op, input.a, q.rom);
        self.rom.tick(control, input.addr);

        self.output()
    }
}
