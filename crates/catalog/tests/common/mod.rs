/// Tracing setup and definition builders.
pub mod harness;
