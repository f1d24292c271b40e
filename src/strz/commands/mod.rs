//! One module per command family. Every command takes the merged operand
//! list and returns its output as lines; the binary is the only place that
//! touches stdout or exit codes.

pub mod case;
pub mod join;
pub mod length;
pub mod pad;
pub mod quote;
pub mod split;
pub mod sub;
pub mod trim;
