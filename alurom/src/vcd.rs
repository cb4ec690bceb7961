//! Value change dump of a simulation.
//!
//! Inputs change while the clock is low, at the start of each period; registers change on the
//! rising edge half a period later.

use std::fs;
use std::io;
use std::path::Path;

use linked_hash_map::LinkedHashMap;
use thiserror::Error;
use tracing::info;

use crate::*;

#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum VcdError {
    #[error("clock period must be a positive even number of nanoseconds, got {0}")]
    Period(u64),

    #[error("failed to write waveform: {0}")]
    Io(#[from] io::Error),
}

/// Probed signals and their widths, in declaration order.
const PROBES: [(&str, usize); 9] = [
    ("clk", 1),
    ("rst", 1),
    ("en", 1),
    ("op", <OpCode as Signal>::WIDTH),
    ("a", DATA_WIDTH),
    ("addr", <RomAddress as Signal>::WIDTH),
    ("rom_q", DATA_WIDTH),
    ("result", DATA_WIDTH),
    ("flag", 1),
];

#[derive(Debug)]
struct Var {
    code: char,
    width: usize,
    value: Option<String>,
}

#[derive(Debug)]
struct Dumper {
    vars: LinkedHashMap<&'static str, Var>,
    body: String,
}

impl Dumper {
    fn new() -> Self {
        let vars = PROBES
            .iter()
            .enumerate()
            .map(|(i, (name, width))| (*name, Var { code: char::from(b'!' + i as u8), width: *width, value: None }))
            .collect();
        Self { vars, body: String::new() }
    }

    fn header(&self) -> String {
        let decls = self
            .vars
            .iter()
            .map(|(name, var)| format!("$var wire {} {} {} $end\n", var.width, var.code, name))
            .collect::<String>();
        format!(
            "$version alurom $end\n$timescale 1ns $end\n$scope module alurom $end\n{}{}",
            decls, "$upscope $end\n$enddefinitions $end\n"
        )
    }

    /// Records `bits` for `name`, writing them out only if they changed.
    fn change(&mut self, name: &str, bits: Vec<bool>) {
        let var = self.vars.get_mut(name).expect("unknown probe");
        debug_assert_eq!(bits.len(), var.width);
        let value = bitvec_to_string(&bits);
        if var.value.as_ref() == Some(&value) {
            return;
        }
        if var.width == 1 {
            self.body.push_str(&format!("{}{}\n", value, var.code));
        } else {
            self.body.push_str(&format!("b{} {}\n", value, var.code));
        }
        var.value = Some(value);
    }

    fn inputs(&mut self, stimulus: Stimulus) {
        self.change("rst", stimulus.control.reset.transl());
        self.change("en", stimulus.control.enable.transl());
        self.change("op", stimulus.input.op.transl());
        self.change("a", stimulus.input.a.transl());
        self.change("addr", stimulus.input.addr.transl());
    }

    fn registers(&mut self, registers: Registers) {
        self.change("rom_q", registers.rom.transl());
        self.change("result", registers.alu.result.transl());
        self.change("flag", registers.alu.flag.transl());
    }

    fn time(&mut self, t: u64) { self.body.push_str(&format!("#{}\n", t)); }
}

impl Trace {
    /// Renders the trace as a value change dump with the given clock period in nanoseconds.
    pub fn to_vcd(&self, period: u64) -> Result<String, VcdError> {
        if period == 0 || period % 2 != 0 {
            return Err(VcdError::Period(period));
        }
        let half = period / 2;
        let mut dumper = Dumper::new();

        dumper.time(0);
        dumper.body.push_str("$dumpvars\n");
        dumper.change("clk", vec![false]);
        dumper.inputs(self.samples().first().map(|s| s.stimulus).unwrap_or_default());
        dumper.registers(self.initial());
        dumper.body.push_str("$end\n");

        for sample in self {
            let start = sample.cycle as u64 * period;
            if sample.cycle > 0 {
                dumper.time(start);
                dumper.change("clk", vec![false]);
                dumper.inputs(sample.stimulus);
            }
            dumper.time(start + half);
            dumper.change("clk", vec![true]);
            dumper.registers(sample.registers);
        }

        dumper.time(self.len() as u64 * period);
        dumper.change("clk", vec![false]);

        Ok(format!("{}{}", dumper.header(), dumper.body))
    }

    /// Writes the trace as a value change dump to `path`.
    pub fn dump_vcd<P: AsRef<Path>>(&self, path: P, period: u64) -> Result<(), VcdError> {
        let vcd = self.to_vcd(period)?;
        fs::write(path.as_ref(), vcd)?;
        info!(path = %path.as_ref().display(), cycles = self.len(), "wrote waveform");
        Ok(())
    }
}
