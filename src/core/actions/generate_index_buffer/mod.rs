pub mod generate_index_buffer;
pub mod ports;
