//! Prelude module for convenient imports.
//!
//! Import commonly used types with a single line:
//!
//! ```rust,ignore
//! use nestcheck_core::prelude::*;
//! ```

// Core analysis types
pub use crate::error::{NestcheckError, NestcheckResult};
pub use crate::universe::{FieldDef, TypeDef, TypeShape, TypeUniverse};

// Built-in serializable set
pub use crate::builtins::BuiltinSet;

// Classification
pub use crate::classify::Classifier;

// Graph building and traversal
pub use crate::graph::{build_graph, DependencyEdge, DependencyGraph};
pub use crate::walk::{walk_from_root, walk_from_roots, Violation, DEFAULT_MAX_DEPTH};

// Root discovery
pub use crate::root::find_root_types;

// Universe loading
pub use crate::load::{load_universe, LoadedUniverse};

// Configuration
pub use crate::config::{load_config, NestcheckConfig};

// Builder API
pub use crate::builder::{AnalysisResult, NestCheck};
