//! Application services composed from the core building blocks.

pub mod interpret;
