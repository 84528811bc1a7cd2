//! nestcheck-core: serialization depth analysis for engine object graphs.
//!
//! This library classifies which types in a frozen metadata universe
//! participate in a host engine's object-graph serializer, builds the
//! field-level dependency graph between them, and exhaustively walks that
//! graph from every engine-object root to find member chains that reach
//! the serializer's fixed depth bound - including unbounded cycles, which
//! run into the bound like any other over-deep chain.
//!
//! # Quick Start
//!
//! Use the [`prelude`] module for convenient imports:
//!
//! ```rust,ignore
//! use nestcheck_core::prelude::*;
//!
//! let loaded = load_universe("universe.json".as_ref())?;
//! let result = NestCheck::new(loaded.universe)
//!     .extend_builtins(loaded.builtins)
//!     .analyze();
//!
//! for violation in &result.violations {
//!     println!("{:?}", violation.root());
//! }
//! ```
//!
//! # Module Organization
//!
//! - [`universe`]: Type, field and attribute records; the frozen universe
//! - [`builtins`]: The built-in serializable value-type set
//! - [`classify`]: Serializability classification
//! - [`graph`]: Dependency graph construction
//! - [`root`]: Traversal root discovery
//! - [`walk`]: Depth-bounded path enumeration
//! - [`load`]: Universe file loading
//! - [`builder`]: Fluent builder API
//! - [`error`]: Typed error handling
//!
//! # Cargo Features
//!
//! - `dot` (default): Graphviz DOT export of the dependency graph

// Core modules (always available)
pub mod builder;
pub mod builtins;
pub mod classify;
pub mod config;
pub mod error;
pub mod graph;
pub mod load;
pub mod logging;
pub mod prelude;
pub mod report;
pub mod root;
pub mod universe;
pub mod walk;

// Feature-gated modules
#[cfg(feature = "dot")]
pub mod visualize;

// ============================================================================
// Explicit Re-exports (avoiding glob imports for clear API surface)
// ============================================================================

// Error types
pub use error::{IoResultExt, NestcheckError, NestcheckResult};

// Data model
pub use universe::{FieldDef, TypeDef, TypeShape, TypeUniverse};

// Built-in serializable set
pub use builtins::BuiltinSet;

// Classification
pub use classify::Classifier;

// Graph building
pub use graph::{build_graph, DependencyEdge, DependencyGraph};

// Root discovery
pub use root::find_root_types;

// Path walking
pub use walk::{walk_from_root, walk_from_roots, Violation, DEFAULT_MAX_DEPTH};

// Universe loading
pub use load::{load_universe, LoadedUniverse, UniverseFile};

// Configuration
pub use config::{load_config, NestcheckConfig, OutputConfig};

// Builder API
pub use builder::{AnalysisResult, NestCheck};

// Logging
pub use logging::{init_structured_logging, log_error, log_info, log_warn};

// Reporting
pub use report::{format_chain, print_json, print_plain};

// Feature-gated re-exports
#[cfg(feature = "dot")]
pub use visualize::generate_dot;

#[cfg(test)]
mod tests;
