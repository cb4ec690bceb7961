//! Verilog IR.

use itertools::Itertools;

use crate::utils::indent;

const INDENT: usize = 4;

/// Module.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Module {
    /// Module name.
    pub name: String,

    /// Port declarations.
    pub port_decls: Vec<PortDeclaration>,

    /// Module items.
    pub module_items: Vec<ModuleItem>,
}

impl ToString for Module {
    fn to_string(&self) -> String {
        format!(
            "`timescale 1ns / 1ps\n\nmodule {}\n(\n{}\n);\n\n{}\n\nendmodule",
            self.name,
            indent(self.port_decls.iter().map(|port_decl| port_decl.to_string()).join(",\n"), INDENT),
            self.module_items.iter().map(|item| item.to_string()).join("\n\n")
        )
    }
}

/// Module item.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ModuleItem {
    /// Declarations.
    Declarations(Vec<Declaration>),

    /// Continuous assignments.
    ContinuousAssigns(Vec<ContinuousAssign>),

    /// Module instantiation.
    ModuleInstantiation(ModuleInstantiation),

    /// Always construct: event control and body.
    AlwaysConstruct(String, Vec<Statement>),

    /// Comment before the items.
    Commented(String, Vec<ModuleItem>),
}

impl ToString for ModuleItem {
    fn to_string(&self) -> String {
        match self {
            ModuleItem::Declarations(decls) => decls.iter().map(|decl| decl.to_string()).join("\n"),
            ModuleItem::ContinuousAssigns(conts) => conts.iter().map(|cont| cont.to_string()).join("\n"),
            ModuleItem::ModuleInstantiation(module_inst) => module_inst.to_string(),
            ModuleItem::AlwaysConstruct(event, stmts) => {
                format!("{} begin\n{}\nend", event, gen_verilog_stmts(stmts))
            }
            ModuleItem::Commented(comment, items) => {
                format!("// {}\n{}", comment, items.iter().map(|item| item.to_string()).join("\n\n"))
            }
        }
    }
}

/// Port declaration.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum PortDeclaration {
    /// Input declaration.
    Input(usize, String),

    /// Output declaration.
    Output(usize, String),
}

fn width_prefix(width: usize) -> String {
    if width > 1 {
        format!("[{}-1:0] ", width)
    } else {
        "".to_string()
    }
}

impl ToString for PortDeclaration {
    fn to_string(&self) -> String {
        match self {
            Self::Input(width, ident) => format!("input wire {}{}", width_prefix(*width), ident),
            Self::Output(width, ident) => format!("output wire {}{}", width_prefix(*width), ident),
        }
    }
}

impl PortDeclaration {
    /// Creates new input port declaration.
    pub fn input(width: usize, ident: &str) -> Self { Self::Input(width, ident.to_string()) }

    /// Creates new output port declaration.
    pub fn output(width: usize, ident: &str) -> Self { Self::Output(width, ident.to_string()) }

    /// Port identifier.
    pub fn ident(&self) -> &str {
        match self {
            Self::Input(_, ident) | Self::Output(_, ident) => ident,
        }
    }
}

/// Declaration.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Declaration {
    /// Net declaration.
    Net(usize, String),

    /// Reg declaration.
    Reg(usize, String),
}

impl Declaration {
    /// Net declaration.
    #[inline]
    pub fn net(width: usize, ident: &str) -> Self { Declaration::Net(width, ident.to_string()) }

    /// Reg declaration.
    #[inline]
    pub fn reg(width: usize, ident: &str) -> Self { Declaration::Reg(width, ident.to_string()) }
}

impl ToString for Declaration {
    fn to_string(&self) -> String {
        match self {
            Self::Net(width, ident) => format!("wire {}{};", width_prefix(*width), ident),
            Self::Reg(width, ident) => format!("reg {}{};", width_prefix(*width), ident),
        }
    }
}

/// Continuous assign.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ContinuousAssign(pub Expression, pub Expression);

impl ToString for ContinuousAssign {
    fn to_string(&self) -> String { format!("assign {} = {};", self.0.to_string(), self.1.to_string()) }
}

impl ContinuousAssign {
    /// Creates new continuous assign.
    pub fn new(lvalue: Expression, expr: Expression) -> Self { Self(lvalue, expr) }
}

/// Module instantiation.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ModuleInstantiation {
    /// Module name.
    pub module_name: String,

    /// Inst name.
    pub inst_name: String,

    /// Port connections.
    pub port_connections: Vec<(String, Expression)>,
}

impl ToString for ModuleInstantiation {
    fn to_string(&self) -> String {
        format!(
            "{} {} (\n{}\n);",
            self.module_name,
            self.inst_name,
            self.port_connections
                .iter()
                .map(|(port_name, expr)| format!("    .{}({})", port_name, expr.to_string()))
                .join(",\n")
        )
    }
}

impl ModuleInstantiation {
    /// Creates new module instantiation.
    pub fn new(module_name: &str, inst_name: &str, port_connections: Vec<(String, Expression)>) -> Self {
        Self { module_name: module_name.to_string(), inst_name: inst_name.to_string(), port_connections }
    }
}

/// Statement.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Statement {
    /// Blocking assignment.
    BlockingAssignment(Expression, Expression),

    /// Nonblocking assignment.
    NonblockingAssignment(Expression, Expression),

    /// Conditional statement.
    Conditional(Expression, Vec<Statement>, Vec<Statement>),

    /// Case statement.
    Case(Expression, Vec<(Expression, Vec<Statement>)>, Vec<Statement>),
}

impl Statement {
    /// Blocking assignment.
    #[inline]
    pub fn blocking_assignment(lvalue: Expression, expr: Expression) -> Self {
        assert!(lvalue.is_identifier(), "lvalue should be identifier");
        Statement::BlockingAssignment(lvalue, expr)
    }

    /// Nonblocking assignment.
    #[inline]
    pub fn nonblocking_assignment(lvalue: Expression, expr: Expression) -> Self {
        assert!(lvalue.is_identifier(), "lvalue should be identifier");
        Statement::NonblockingAssignment(lvalue, expr)
    }
}

/// Generates Verilog code for statements, indented one level.
fn gen_verilog_stmts(stmts: &[Statement]) -> String {
    indent(stmts.iter().map(|stmt| stmt.to_string()).join("\n"), INDENT)
}

impl ToString for Statement {
    fn to_string(&self) -> String {
        match self {
            Self::BlockingAssignment(lvalue, expr) => {
                format!("{} = {};", lvalue.to_string(), expr.to_string())
            }
            Self::NonblockingAssignment(lvalue, expr) => {
                format!("{} <= {};", lvalue.to_string(), expr.to_string())
            }
            Self::Conditional(cond, then_stmt, else_stmt) if else_stmt.is_empty() => {
                format!("if ({}) begin\n{}\nend", cond.to_string(), gen_verilog_stmts(then_stmt))
            }
            Self::Conditional(cond, then_stmt, else_stmt) => {
                format!(
                    "if ({}) begin\n{}\nend else begin\n{}\nend",
                    cond.to_string(),
                    gen_verilog_stmts(then_stmt),
                    gen_verilog_stmts(else_stmt),
                )
            }
            Self::Case(case_expr, case_items, default) => {
                let case_items_code = case_items
                    .iter()
                    .map(|(cond, stmt)| format!("{}: begin\n{}\nend", cond.to_string(), gen_verilog_stmts(stmt)))
                    .join("\n");

                format!(
                    "case ({})\n{}{}\nendcase",
                    case_expr.to_string(),
                    indent(case_items_code, INDENT),
                    if default.is_empty() {
                        "".to_string()
                    } else {
                        format!("\n{}", indent(format!("default: begin\n{}\nend", gen_verilog_stmts(default)), INDENT))
                    }
                )
            }
        }
    }
}

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    /// Addition
    Add,

    /// Subtraction
    Sub,

    /// Multiplication
    Mul,

    /// Division
    Div,

    /// Eq (arithmetic, `a == b`)
    EqArithmetic,

    /// Not equal (arithmetic, `a != b`)
    NeArithmetic,

    /// Greater than or equal to
    GreaterEq,
}

impl ToString for BinaryOp {
    fn to_string(&self) -> String {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::EqArithmetic => "==",
            BinaryOp::NeArithmetic => "!=",
            BinaryOp::GreaterEq => ">=",
        }
        .to_string()
    }
}

/// Expression.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub enum Expression {
    /// Primary.
    Primary(Primary),

    /// Binary expression.
    Binary(Box<Expression>, BinaryOp, Box<Expression>),
}

/// Range.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub enum Range {
    /// Index: `[index]`
    Index(Box<Expression>),

    /// Range: `[base +: offset]`
    Range(Box<Expression>, Box<Expression>),
}

/// Primary.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub enum Primary {
    /// Number.
    Number(String),

    /// Hierarchical identifier.
    HierarchicalIdentifier(String, Option<Range>),

    /// Mintypmax expression.
    MintypmaxExpression(Box<Expression>),
}

impl ToString for Expression {
    fn to_string(&self) -> String {
        match self {
            Self::Primary(prim) => prim.to_string(),
            Self::Binary(lhs, op, rhs) => format!("{} {} {}", lhs.to_string(), op.to_string(), rhs.to_string()),
        }
    }
}

impl Expression {
    /// Number.
    pub fn number(num: String) -> Self { Self::Primary(Primary::Number(num)) }

    /// Sized decimal literal, e.g. `8'd4`.
    pub fn sized(width: usize, value: u32) -> Self { Self::number(format!("{}'d{}", width, value)) }

    /// Identifier.
    pub fn ident(ident: &str) -> Self { Self::Primary(Primary::HierarchicalIdentifier(ident.to_string(), None)) }

    /// Selects a range of an identifier.
    pub fn with_range(self, range: Range) -> Self {
        if let Expression::Primary(Primary::HierarchicalIdentifier(ident, None)) = self {
            Expression::Primary(Primary::HierarchicalIdentifier(ident, Some(range)))
        } else {
            panic!("with_range: self is not an identifier")
        }
    }

    /// Mintypmax expression.
    pub fn mintypmax_expr(expr: Expression) -> Self { Self::Primary(Primary::MintypmaxExpression(Box::new(expr))) }

    /// Binary operation.
    pub fn binary(op: BinaryOp, mut lhs: Expression, mut rhs: Expression) -> Self {
        // Operands of binary operation should be primary.
        if !lhs.is_primary() {
            lhs = Expression::mintypmax_expr(lhs);
        }

        if !rhs.is_primary() {
            rhs = Expression::mintypmax_expr(rhs);
        }

        Self::Binary(Box::new(lhs), op, Box::new(rhs))
    }

    /// Returns `true` if the expression is primary.
    pub fn is_primary(&self) -> bool { matches!(self, Self::Primary(_)) }

    /// Returns `true` if the expression is identifier.
    pub fn is_identifier(&self) -> bool { matches!(self, Self::Primary(Primary::HierarchicalIdentifier(_, None))) }
}

impl ToString for Range {
    fn to_string(&self) -> String {
        match self {
            Self::Index(index) => index.to_string(),
            Self::Range(base, offset) => {
                format!("{} +: {}", base.to_string(), offset.to_string())
            }
        }
    }
}

impl Range {
    /// Creates new index.
    pub fn new_index(index: Expression) -> Self { Self::Index(Box::new(index)) }

    /// Creates new range.
    pub fn new_range(base: Expression, offset: Expression) -> Self { Self::Range(Box::new(base), Box::new(offset)) }
}

impl ToString for Primary {
    fn to_string(&self) -> String {
        match self {
            Self::Number(num) => num.clone(),
            Self::HierarchicalIdentifier(ident, Some(range)) => {
                format!("{}[{}]", ident.clone(), range.to_string())
            }
            Self::HierarchicalIdentifier(ident, None) => ident.clone(),
            Self::MintypmaxExpression(expr) => format!("({})", expr.to_string()),
        }
    }
}
