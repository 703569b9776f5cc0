//! Backend worker: owns the tokio runtime and the advisory service client.

pub mod commands;
pub mod runtime;
