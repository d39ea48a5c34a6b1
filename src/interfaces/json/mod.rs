pub mod action_reader;
