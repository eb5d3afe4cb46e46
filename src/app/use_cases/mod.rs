//! Use-Cases der Application-Layer-Orchestrierung.

pub mod editing;
pub mod export;
pub mod file_io;
pub mod gesture;
pub mod selection;
