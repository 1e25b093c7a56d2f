//! Domain Layer
//!
//! This is the core of Trellis - traversal and layout resolution without
//! direct I/O dependencies.
//!
//! ## Structure
//!
//! - `ports/` - Interface definitions for infrastructure (EntrySource)
//! - `value_objects/` - Immutable value types (LayoutQuery, WalkOrder, LayoutGroups)
//! - `services/` - Walker and layout resolver strategies
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer only reads entries through the `EntrySource` port
//! 2. **Single-use state** - Resolver state lives for one resolution run
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod ports;
pub mod services;
pub mod value_objects;
