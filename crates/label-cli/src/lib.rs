//! Library side of the `labelmaker` command.

pub mod confirm;
pub mod export;
pub mod logging;
pub mod params;
