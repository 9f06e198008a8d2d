
pub mod command;
pub mod logging;
pub mod parsing;
pub mod stack;
pub mod state;
pub mod steps;
pub mod works;
