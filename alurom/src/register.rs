//! Clocked registers.

use crate::*;

/// Control lines sampled at every rising clock edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Control {
    /// Synchronous reset. Overrides `enable`.
    pub reset: bool,

    /// Clock enable. Registers hold their value while it is deasserted.
    pub enable: bool,
}

impl Control {
    /// Enabled, not in reset.
    pub const RUN: Self = Self { reset: false, enable: true };

    /// Disabled, not in reset.
    pub const STALL: Self = Self { reset: false, enable: false };

    /// In reset.
    pub const RESET: Self = Self { reset: true, enable: false };
}

impl Signal for Control {
    const WIDTH: usize = 2;

    fn transl(self) -> Vec<bool> { vec![self.reset, self.enable] }
}

/// D flip-flop with synchronous reset and clock enable.
#[derive(Debug, Clone)]
pub struct Dff<V: Signal + Copy> {
    init: V,
    q: V,
}

impl<V: Signal + Copy> Dff<V> {
    /// Creates a flip-flop holding `init`, which is also its reset value.
    pub fn new(init: V) -> Self { Self { init, q: init } }

    /// Current output.
    pub fn q(&self) -> V { self.q }

    /// Applies one rising clock edge with `d` at the input.
    pub fn clock(&mut self, control: Control, d: V) {
        self.q = if control.reset {
            self.init
        } else if control.enable {
            d
        } else {
            self.q
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_dominates_enable() {
        let mut dff = Dff::new(0u8);
        dff.clock(Control::RUN, 42);
        assert_eq!(dff.q(), 42);
        dff.clock(Control { reset: true, enable: true }, 7);
        assert_eq!(dff.q(), 0);
    }

    #[test]
    fn stall_holds_value() {
        let mut dff = Dff::new(false);
        dff.clock(Control::RUN, true);
        dff.clock(Control::STALL, false);
        assert!(dff.q());
    }
}
