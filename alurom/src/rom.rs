//! Lookup table unit.
//!
//! Registers the table word selected by the address on every enabled clock edge. The registered
//! word feeds the arithmetic unit, so a new address affects arithmetic one edge later.

use tracing::trace;

use crate::*;

/// Address into the lookup table.
pub type RomAddress = Bits<Log2<U<ROM_DEPTH>>>;

/// Reads the table word at `addr`.
pub fn lookup(addr: RomAddress) -> u8 { ROM_CONTENTS[addr.value() as usize] }

/// Lookup table unit.
#[derive(Debug, Clone)]
pub struct LookupTable {
    b: Dff<u8>,
}

impl Default for LookupTable {
    fn default() -> Self { Self { b: Dff::new(0) } }
}

impl LookupTable {
    /// Creates the unit in its reset state.
    pub fn new() -> Self { Self::default() }

    /// Registered table word.
    pub fn q(&self) -> u8 { self.b.q() }

    /// Applies one rising clock edge.
    pub fn tick(&mut self, control: Control, addr: RomAddress) {
        let d = lookup(addr);
        trace!(addr = addr.value(), d, "rom");
        self.b.clock(control, d);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_contents() {
        let words = (0..ROM_DEPTH as u32).map(|i| lookup(RomAddress::new(i))).collect::<Vec<_>>();
        assert_eq!(words, vec![4, 8, 20, 35, 66, 100, 131, 132]);
    }

    #[test]
    fn tick_latches_word() {
        let mut rom = LookupTable::new();
        assert_eq!(rom.q(), 0);
        rom.tick(Control::RUN, RomAddress::new(5));
        assert_eq!(rom.q(), 100);
        rom.tick(Control::STALL, RomAddress::new(7));
        assert_eq!(rom.q(), 100);
        rom.tick(Control::RESET, RomAddress::new(7));
        assert_eq!(rom.q(), 0);
    }
}
