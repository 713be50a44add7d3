//! CLI Commands

pub mod contacts;
pub mod interchange;
pub mod shell;
