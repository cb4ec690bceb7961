//! Generates the Verilog description of the datapath.
//!
//! The table words, operation encodings and widths come from the same definitions the simulator
//! uses, so the generated netlist and the model cannot drift apart.

use crate::vir::*;
use crate::*;

/// Name of the lookup table module.
pub const ROM_MODULE: &str = "alurom_rom";

/// Name of the arithmetic module.
pub const ALU_MODULE: &str = "alurom_alu";

/// Name of the top module.
pub const TOP_MODULE: &str = "alurom";

const EVENT: &str = "always @(posedge clk)";

fn ident(name: &str) -> Expression { Expression::ident(name) }

fn clock_ports() -> Vec<PortDeclaration> {
    vec![PortDeclaration::input(1, "clk"), PortDeclaration::input(1, "rst"), PortDeclaration::input(1, "en")]
}

fn assign(lvalue: &str, expr: Expression) -> Statement { Statement::nonblocking_assignment(ident(lvalue), expr) }

/// Wraps `update` in the reset-then-enable priority every register of the datapath follows.
fn clocked(reset: Vec<Statement>, update: Vec<Statement>) -> ModuleItem {
    ModuleItem::AlwaysConstruct(EVENT.to_string(), vec![Statement::Conditional(ident("rst"), reset, vec![
        Statement::Conditional(ident("en"), update, vec![]),
    ])])
}

/// Lookup table module: registers `ROM_CONTENTS[addr]` into `q`.
pub fn rom_module() -> Module {
    let table = ROM_CONTENTS
        .iter()
        .enumerate()
        .map(|(addr, word)| {
            let addr = Expression::sized(<RomAddress as Signal>::WIDTH, addr as u32);
            (addr, vec![assign("q_reg", Expression::sized(DATA_WIDTH, u32::from(*word)))])
        })
        .collect::<Vec<_>>();

    let mut port_decls = clock_ports();
    port_decls.push(PortDeclaration::input(<RomAddress as Signal>::WIDTH, "addr"));
    port_decls.push(PortDeclaration::output(DATA_WIDTH, "q"));

    Module {
        name: ROM_MODULE.to_string(),
        port_decls,
        module_items: vec![
            ModuleItem::Declarations(vec![Declaration::reg(DATA_WIDTH, "q_reg")]),
            ModuleItem::ContinuousAssigns(vec![ContinuousAssign::new(ident("q"), ident("q_reg"))]),
            clocked(vec![assign("q_reg", Expression::sized(DATA_WIDTH, 0))], vec![Statement::Case(
                ident("addr"),
                table,
                vec![],
            )]),
        ],
    }
}

/// Statements computing `op` into `result_reg` and `flag_reg`.
fn operation_stmts(op: Operation) -> Vec<Statement> {
    let zero = || Expression::sized(DATA_WIDTH, 0);
    let set = |flag: u32| assign("flag_reg", Expression::sized(1, flag));
    let slice = |base: usize, width: usize| {
        ident("full").with_range(Range::new_range(
            Expression::number(base.to_string()),
            Expression::number(width.to_string()),
        ))
    };
    let low = || slice(0, DATA_WIDTH);
    let high = || slice(DATA_WIDTH, WIDE_WIDTH - DATA_WIDTH);

    // Full-width sum or product, low byte out, flag if anything spilled over.
    let widened = |binop| {
        vec![
            Statement::blocking_assignment(ident("full"), Expression::binary(binop, ident("a"), ident("b"))),
            assign("result_reg", low()),
            assign("flag_reg", Expression::binary(BinaryOp::NeArithmetic, high(), zero())),
        ]
    };

    // Checked operation: exact result, or zero with the flag set.
    let checked = |cond, binop| {
        vec![Statement::Conditional(
            cond,
            vec![assign("result_reg", Expression::binary(binop, ident("a"), ident("b"))), set(0)],
            vec![assign("result_reg", zero()), set(1)],
        )]
    };

    match op {
        Operation::Add => widened(BinaryOp::Add),
        Operation::Sub => checked(Expression::binary(BinaryOp::GreaterEq, ident("a"), ident("b")), BinaryOp::Sub),
        Operation::Mul => widened(BinaryOp::Mul),
        Operation::Div => checked(Expression::binary(BinaryOp::NeArithmetic, ident("b"), zero()), BinaryOp::Div),
    }
}

/// Arithmetic module: applies `op` to `a` and the registered table word `b`.
pub fn alu_module() -> Module {
    let cases = Operation::ALL
        .into_iter()
        .map(|op| (Expression::sized(OPCODE_WIDTH, op.encode().value()), operation_stmts(op)))
        .collect::<Vec<_>>();
    let clear = || {
        vec![assign("result_reg", Expression::sized(DATA_WIDTH, 0)), assign("flag_reg", Expression::sized(1, 0))]
    };

    let mut port_decls = clock_ports();
    port_decls.extend([
        PortDeclaration::input(OPCODE_WIDTH, "op"),
        PortDeclaration::input(DATA_WIDTH, "a"),
        PortDeclaration::input(DATA_WIDTH, "b"),
        PortDeclaration::output(DATA_WIDTH, "result"),
        PortDeclaration::output(1, "flag"),
    ]);

    Module {
        name: ALU_MODULE.to_string(),
        port_decls,
        module_items: vec![
            ModuleItem::Declarations(vec![
                Declaration::reg(DATA_WIDTH, "result_reg"),
                Declaration::reg(1, "flag_reg"),
                Declaration::reg(WIDE_WIDTH, "full"),
            ]),
            ModuleItem::ContinuousAssigns(vec![
                ContinuousAssign::new(ident("result"), ident("result_reg")),
                ContinuousAssign::new(ident("flag"), ident("flag_reg")),
            ]),
            ModuleItem::Commented(
                "An unassigned operation code clears the flag as well as the result.".to_string(),
                vec![clocked(clear(), vec![Statement::Case(ident("op"), cases, clear())])],
            ),
        ],
    }
}

/// Connects every port of `module` to the net of the same name, except for the given overrides.
fn connect(module: &Module, overrides: &[(&str, &str)]) -> Vec<(String, Expression)> {
    module
        .port_decls
        .iter()
        .map(|port| {
            let name = port.ident();
            let net = overrides.iter().find(|(p, _)| *p == name).map_or(name, |(_, net)| *net);
            (name.to_string(), ident(net))
        })
        .collect()
}

/// Top module: the lookup table's registered word feeds the arithmetic module.
pub fn top_module() -> Module {
    let mut port_decls = clock_ports();
    port_decls.extend([
        PortDeclaration::input(OPCODE_WIDTH, "op"),
        PortDeclaration::input(DATA_WIDTH, "a"),
        PortDeclaration::input(<RomAddress as Signal>::WIDTH, "addr"),
        PortDeclaration::output(DATA_WIDTH, "result"),
        PortDeclaration::output(1, "flag"),
    ]);

    Module {
        name: TOP_MODULE.to_string(),
        port_decls,
        module_items: vec![
            ModuleItem::Declarations(vec![Declaration::net(DATA_WIDTH, "rom_q")]),
            ModuleItem::ModuleInstantiation(ModuleInstantiation::new(
                ROM_MODULE,
                "rom_inst",
                connect(&rom_module(), &[("q", "rom_q")]),
            )),
            ModuleItem::ModuleInstantiation(ModuleInstantiation::new(
                ALU_MODULE,
                "alu_inst",
                connect(&alu_module(), &[("b", "rom_q")]),
            )),
        ],
    }
}

/// Package with every module of the datapath.
pub fn package() -> Package {
    let mut package = Package::default();
    package.add(rom_module());
    package.add(alu_module());
    package.add(top_module());
    package
}
