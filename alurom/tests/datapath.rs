use alurom::*;

fn input(op: Operation, a: u8, addr: u32) -> CoreInput { CoreInput::new(op, a, RomAddress::new(addr)) }

#[test]
fn reference_scenarios() {
    let expected = [
        ("add", AluOutput::new(23, false)),
        ("sub_underflow", AluOutput::new(0, true)),
        ("mul", AluOutput::new(70, false)),
        ("div", AluOutput::new(2, false)),
        ("div_by_zero", AluOutput::new(0, true)),
    ];
    let scenarios = scenarios();
    assert_eq!(scenarios.len(), expected.len());

    for (scenario, (name, output)) in scenarios.iter().zip(expected) {
        assert_eq!(scenario.name, name);
        let outcome = scenario.run();
        assert_eq!(outcome.observed, output, "{}", name);
        assert!(outcome.passed());
    }
}

#[test]
fn table_word_reaches_register_one_edge_after_address() {
    let mut core = AluRom::new();
    for addr in 0..ROM_DEPTH as u32 {
        core.tick(Control::RUN, input(Operation::Add, 0, addr));
        assert_eq!(core.registers().rom, ROM_CONTENTS[addr as usize]);
    }
    assert_eq!(ROM_CONTENTS, [4, 8, 20, 35, 66, 100, 131, 132]);
}

#[test]
fn address_change_is_seen_by_arithmetic_one_edge_later() {
    let mut core = AluRom::new();
    core.tick(Control::RUN, input(Operation::Add, 10, 0));
    assert_eq!(core.tick(Control::RUN, input(Operation::Add, 10, 7)), AluOutput::new(14, false));
    // Word 132 was latched on the previous edge, word 4 is being latched now.
    assert_eq!(core.tick(Control::RUN, input(Operation::Add, 10, 0)), AluOutput::new(142, false));
    assert_eq!(core.tick(Control::RUN, input(Operation::Add, 10, 0)), AluOutput::new(14, false));
}

#[test]
fn reset_dominates_enable_and_inputs() {
    let mut core = AluRom::new();
    core.tick(Control::RUN, input(Operation::Mul, 255, 7));
    core.tick(Control::RUN, input(Operation::Mul, 255, 7));
    assert_eq!(core.output(), AluOutput::new(0x7c, true));

    for control in [Control::RESET, Control { reset: true, enable: true }] {
        core.tick(Control::RUN, input(Operation::Sub, 0, 7));
        core.tick(control, input(Operation::Div, 9, 3));
        assert_eq!(core.registers(), Registers::default());
    }
}

#[test]
fn stall_holds_every_register() {
    let mut core = AluRom::new();
    core.tick(Control::RUN, input(Operation::Sub, 30, 1));
    core.tick(Control::RUN, input(Operation::Sub, 30, 1));
    let held = core.registers();
    assert_eq!(held, Registers { rom: 8, alu: AluOutput::new(22, false) });

    let trace = simulate(&mut core, Operation::ALL.map(|op| Stimulus::stall(input(op, 200, 6))));
    assert!(trace.samples().iter().all(|sample| sample.registers == held));
}

#[test]
fn divide_by_latched_zero_after_reset() {
    let stimuli = vec![Stimulus::run(input(Operation::Div, 16, 0))].into_iter().with_reset(3);
    let trace = simulate(&mut AluRom::new(), stimuli);
    assert_eq!(trace.len(), 4);
    assert_eq!(trace.last().map(Sample::output), Some(AluOutput::new(0, true)));
    assert_eq!(trace.last().map(|s| s.registers.rom), Some(4));
}

#[test]
fn waveform_of_reference_scenarios() {
    let stimuli = scenarios().into_iter().flat_map(|s| s.stimuli);
    let trace = simulate(&mut AluRom::new(), stimuli);
    let vcd = trace.to_vcd(10).unwrap();
    assert!(vcd.contains("$enddefinitions $end"));
    assert!(vcd.ends_with(&format!("#{}\n0!\n", trace.len() * 10)));
}
