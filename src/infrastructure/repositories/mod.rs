//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod records;

pub use records::TomlRecordRepository;
