//! Model Gateway implementations.

pub mod openai_compat;
