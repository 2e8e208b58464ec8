/// The built-in constant table consulted when a variable is unbound.
pub mod constants;
/// The stack machine that executes postfix programs.
pub mod core;
