pub mod config;
pub mod csv;
pub mod encoding;
pub mod storage;
pub mod transport;
