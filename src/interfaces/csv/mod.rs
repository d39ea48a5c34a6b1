pub mod action_reader;
pub mod cart_writer;
