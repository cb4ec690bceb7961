//! End-to-end test vectors for the datapath.

use crate::*;

/// A named stimulus sequence and the outputs expected after its last edge.
#[derive(Debug, Clone)]
pub struct Scenario {
    /// Short description.
    pub name: &'static str,

    /// Stimuli, starting with a reset cycle.
    pub stimuli: Vec<Stimulus>,

    /// `Result` and `Flag` after the last edge.
    pub expected: AluOutput,
}

/// Observed outcome of a scenario.
#[derive(Debug, Clone)]
pub struct Outcome {
    /// Simulated edges.
    pub trace: Trace,

    /// Outputs after the last edge.
    pub observed: AluOutput,

    /// Expected outputs.
    pub expected: AluOutput,
}

impl Outcome {
    /// Returns `true` if the observed outputs match.
    pub fn passed(&self) -> bool { self.observed == self.expected }
}

impl Scenario {
    /// Resets, latches the table word at `addr`, then applies `op` to `a` and that word.
    pub fn latched(name: &'static str, op: Operation, a: u8, addr: u32, expected: AluOutput) -> Self {
        let input = CoreInput::new(op, a, RomAddress::new(addr));
        let stimuli = vec![Stimulus::run(input); 2].into_iter().with_reset(1).collect();
        Self { name, stimuli, expected }
    }

    /// Resets, then applies `op` to `a` in the first enabled cycle, while the table register still
    /// holds its reset value.
    pub fn after_reset(name: &'static str, op: Operation, a: u8, addr: u32, expected: AluOutput) -> Self {
        let input = CoreInput::new(op, a, RomAddress::new(addr));
        let stimuli = vec![Stimulus::run(input)].into_iter().with_reset(1).collect();
        Self { name, stimuli, expected }
    }

    /// Runs the scenario on a fresh datapath.
    pub fn run(&self) -> Outcome {
        let trace = simulate(&mut AluRom::new(), self.stimuli.iter().copied());
        let observed = trace.last().map(Sample::output).unwrap_or_default();
        Outcome { trace, observed, expected: self.expected }
    }
}

/// The reference test vectors.
pub fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario::latched("add", Operation::Add, 15, 1, AluOutput::new(23, false)),
        Scenario::latched("sub_underflow", Operation::Sub, 16, 2, AluOutput::new(0, true)),
        Scenario::latched("mul", Operation::Mul, 2, 3, AluOutput::new(70, false)),
        Scenario::latched("div", Operation::Div, 16, 1, AluOutput::new(2, false)),
        Scenario::after_reset("div_by_zero", Operation::Div, 16, 0, AluOutput::new(0, true)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_scenarios_pass() {
        for scenario in scenarios() {
            let outcome = scenario.run();
            assert!(outcome.passed(), "{}: {:?} != {:?}", scenario.name, outcome.observed, outcome.expected);
        }
    }

    #[test]
    fn latched_needs_two_enabled_edges() {
        let scenario = Scenario::latched("add", Operation::Add, 15, 1, AluOutput::new(23, false));
        let outcome = scenario.run();
        assert_eq!(outcome.trace.len(), 3);
        assert_eq!(outcome.trace.samples()[1].output(), AluOutput::new(15, false));
    }
}
