//! Process exit codes shared by the binary and the help text.

pub const NORMAL: i32 = 0;
pub const ERROR: i32 = 1;
pub const FILE: i32 = 2;
pub const FATAL: i32 = 3;
