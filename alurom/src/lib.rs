//! ALU + ROM: a cycle-accurate model of a small synchronous datapath, where a fixed lookup table
//! feeds an 8-bit arithmetic unit, together with its Verilog description.

// # Tries to deny all lints (`rustc -W help`).
#![deny(absolute_paths_not_starting_with_crate)]
#![deny(anonymous_parameters)]
#![deny(deprecated_in_future)]
#![deny(explicit_outlives_requirements)]
#![deny(keyword_idents)]
#![deny(macro_use_extern_crate)]
#![deny(missing_debug_implementations)]
#![deny(non_ascii_idents)]
#![deny(rust_2018_idioms)]
#![deny(trivial_numeric_casts)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(unused_extern_crates)]
#![deny(unused_import_braces)]
//
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::missing_crate_level_docs)]
#![deny(rustdoc::invalid_codeblock_attributes)]
#![deny(rustdoc::invalid_html_tags)]
#![deny(rustdoc::invalid_rust_codeblocks)]
#![deny(rustdoc::bare_urls)]
#![deny(unreachable_pub)]
//
#![allow(elided_lifetimes_in_paths)]

pub mod alu;
pub mod codegen;
pub mod constants;
pub mod datapath;
pub mod num;
pub mod package;
pub mod register;
pub mod rom;
pub mod scenario;
pub mod signal;
pub mod sim;
pub mod utils;
pub mod vcd;
pub mod vir;

pub use alu::*;
pub use constants::*;
pub use datapath::*;
pub use num::*;
pub use package::*;
pub use register::*;
pub use rom::*;
pub use scenario::*;
pub use signal::*;
pub use sim::*;
pub use utils::*;
pub use vcd::VcdError;
