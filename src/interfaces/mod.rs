//! Writers that turn events into output streams.

pub mod csv;
pub mod json;
pub mod text;
