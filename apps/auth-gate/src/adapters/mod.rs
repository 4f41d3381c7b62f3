//! Concrete implementations of the ports in `crate::ports`.

pub mod users_memory;

pub use users_memory::InMemoryUserStore;
