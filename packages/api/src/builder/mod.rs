//! Fluent interceptor construction

pub mod core;

pub use core::InterceptorBuilder;
