//! Expose wxmd's command layer for use in integration tests and the `xtask`
//! crate. The stable library surface lives in `wxmd-layout`.
pub mod cli;
pub mod commands;
pub mod error;
