pub mod network;
pub mod output;
pub mod parser;
pub mod stats;
