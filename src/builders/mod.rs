//! Builders to construct allocators from configuration.

pub mod allocator_builder;

pub use allocator_builder::AllocatorBuilder;
