mod args;
mod commands;
mod print;

pub use commands::run;
pub use print::print_error;
