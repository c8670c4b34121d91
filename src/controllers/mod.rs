pub mod animation;
pub mod cli;
pub mod ports;
