pub mod cli;
pub mod cmd;
pub mod document;
pub mod logging;
