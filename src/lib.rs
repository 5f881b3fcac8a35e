//! shopfloor - manufacturing data service
//!
//! Articles declare ordered field schemas; shop floor entries are accepted
//! only when the field validator reports no problems.

pub mod catalog;
pub mod cli;
pub mod http_server;
pub mod observability;
pub mod schema;
