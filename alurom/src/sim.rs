//! Cycle-by-cycle simulation.

use std::iter::{self, Chain, Repeat, Take};
use std::slice;

use tracing::debug;

use crate::*;

/// Boundary signals for one clock cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stimulus {
    /// Reset and enable.
    pub control: Control,

    /// Data inputs.
    pub input: CoreInput,
}

impl Stimulus {
    /// Enabled cycle with the given inputs.
    pub fn run(input: CoreInput) -> Self { Self { control: Control::RUN, input } }

    /// Disabled cycle with the given inputs.
    pub fn stall(input: CoreInput) -> Self { Self { control: Control::STALL, input } }

    /// Reset cycle.
    pub fn reset() -> Self { Self { control: Control::RESET, input: CoreInput::default() } }
}

/// Stimulus stream extension.
pub trait StimulusExt: Iterator<Item = Stimulus> + Sized {
    /// Prepends `cycles` reset cycles.
    fn with_reset(self, cycles: usize) -> Chain<Take<Repeat<Stimulus>>, Self> {
        iter::repeat(Stimulus::reset()).take(cycles).chain(self)
    }
}

impl<I: Iterator<Item = Stimulus>> StimulusExt for I {}

/// One simulated clock edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    /// Index of the edge, starting at 0.
    pub cycle: usize,

    /// Signals sampled at the edge.
    pub stimulus: Stimulus,

    /// Register values after the edge.
    pub registers: Registers,
}

impl Sample {
    /// `Result` and `Flag` after the edge.
    pub fn output(&self) -> AluOutput { self.registers.alu }
}

/// Recorded simulation.
#[derive(Debug, Clone, Default)]
pub struct Trace {
    /// Register values before the first edge.
    initial: Registers,
    samples: Vec<Sample>,
}

impl Trace {
    /// Register values before the first edge.
    pub fn initial(&self) -> Registers { self.initial }

    /// Samples in cycle order.
    pub fn samples(&self) -> &[Sample] { &self.samples }

    /// Last sample.
    pub fn last(&self) -> Option<&Sample> { self.samples.last() }

    /// Outputs after every edge.
    pub fn outputs(&self) -> impl Iterator<Item = AluOutput> + '_ { self.samples.iter().map(Sample::output) }

    /// Number of simulated edges.
    pub fn len(&self) -> usize { self.samples.len() }

    /// Returns `true` if no edge was simulated.
    pub fn is_empty(&self) -> bool { self.samples.is_empty() }
}

impl<'a> IntoIterator for &'a Trace {
    type IntoIter = slice::Iter<'a, Sample>;
    type Item = &'a Sample;

    fn into_iter(self) -> Self::IntoIter { self.samples.iter() }
}

/// Clocks `core` once per stimulus and records every edge.
pub fn simulate<I: IntoIterator<Item = Stimulus>>(core: &mut AluRom, stimuli: I) -> Trace {
    let initial = core.registers();
    let mut samples = Vec::new();

    for (cycle, stimulus) in stimuli.into_iter().enumerate() {
        core.tick(stimulus.control, stimulus.input);
        let registers = core.registers();

        debug!(
            cycle,
            reset = stimulus.control.reset,
            enable = stimulus.control.enable,
            op = stimulus.input.op.value(),
            a = stimulus.input.a,
            addr = stimulus.input.addr.value(),
            rom = registers.rom,
            result = registers.alu.result,
            flag = registers.alu.flag,
            "clock edge"
        );

        samples.push(Sample { cycle, stimulus, registers });
    }

    Trace { initial, samples }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_reset_prepends_reset_cycles() {
        let input = CoreInput::new(Operation::Add, 1, RomAddress::new(0));
        let stimuli = iter::once(Stimulus::run(input)).with_reset(2).collect::<Vec<_>>();
        assert_eq!(stimuli, vec![Stimulus::reset(), Stimulus::reset(), Stimulus::run(input)]);
    }

    #[test]
    fn trace_records_every_edge() {
        let input = CoreInput::new(Operation::Sub, 30, RomAddress::new(1));
        let mut core = AluRom::new();
        let trace = simulate(&mut core, vec![Stimulus::run(input); 3].into_iter().with_reset(1));

        assert_eq!(trace.len(), 4);
        assert_eq!(trace.initial(), Registers::default());
        assert_eq!(trace.samples()[2].cycle, 2);
        assert_eq!(trace.outputs().collect::<Vec<_>>(), vec![
            AluOutput::new(0, false),
            AluOutput::new(30, false),
            AluOutput::new(22, false),
            AluOutput::new(22, false),
        ]);
        assert_eq!(trace.last().map(|s| s.registers), Some(core.registers()));
    }
}
