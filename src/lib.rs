//! # Path-Following Validation Patterns
//!
//! This crate contains a small path-following validator and runnable examples
//! demonstrating typed-error design around it.
//!
//! ## Patterns Covered
//!
//! 1. **Typed Failure Enums** - A two-variant error type with diagnostic payloads
//! 2. **The Validator as a State Machine** - A cursor that only moves on success
//! 3. **Propagation and Safe Execution** - `?`, closures, and outcome reporting
//! 4. **Building Paths from JSON** - Derived serde on the step vocabulary
//!
//! ## Running Examples
//!
//! ```bash
//! # Pattern 1: Typed Failure Enums
//! cargo run --example p1_typed_failures
//!
//! # Pattern 2: The Validator as a State Machine
//! cargo run --example p2_guided_traversal
//!
//! # Pattern 3: Propagation and Safe Execution
//! cargo run --example p3_safe_execution
//!
//! # Pattern 4: Building Paths from JSON
//! cargo run --example p4_path_from_json
//! ```
//!
//! ## Key Dependencies
//!
//! - `thiserror` - Derive macro for the validation error type
//! - `anyhow` - Flexible error handling in example binaries
//! - `serde` / `serde_json` - Derived (de)serialization of steps and paths

pub mod path;
pub mod runner;
pub mod step;
pub mod validator;

pub use path::Path;
pub use runner::{move_safely, perform};
pub use step::Step;
pub use validator::{PathValidator, ValidationError};
