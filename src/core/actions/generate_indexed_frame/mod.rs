pub mod generate_indexed_frame;
pub mod ports;
