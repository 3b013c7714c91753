pub mod common;
pub mod error;
pub mod export;
pub mod figma;
pub mod generate_commands;
pub mod naming;
pub mod pipeline;
pub mod plan;
pub mod plan_execution;
pub mod tokens;
