pub mod check;
mod command_result;
pub mod frameworks;
pub mod helper;
pub mod init;
pub mod usages;

pub use command_result::*;
