//! nestcheck CLI - serialization depth checker for engine object graphs.
//!
//! Features:
//! - Loads a pre-extracted type universe (JSON) and checks every engine
//!   object root for over-deep or cyclic serialization chains
//! - Optional nestcheck.toml next to the universe file for defaults
//! - Plain or JSON reports, Graphviz DOT export of the dependency graph
//! - CI-friendly exit codes (0 clean, 1 violations found)

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};

use nestcheck_core::{
    generate_dot, init_structured_logging, load_config, load_universe, log_info, print_plain,
    NestCheck, DEFAULT_MAX_DEPTH,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Serialization depth checker for engine object graphs")]
pub struct Cli {
    /// Path to the type universe JSON file
    universe: String,

    /// Maximum allowed serialization depth
    #[arg(long)]
    max_depth: Option<usize>,

    /// Output results in JSON format
    #[arg(long)]
    json: bool,

    /// Root type names or patterns to ignore
    #[arg(long, num_args = 1..)]
    ignore: Vec<String>,

    /// Extra value types to append to the built-in serializable set
    #[arg(long, num_args = 1..)]
    builtin: Vec<String>,

    /// Generate Graphviz DOT output of the dependency graph
    #[arg(long)]
    dot: bool,

    /// Write DOT output to a specified file instead of stdout
    #[arg(long)]
    dot_file: Option<String>,
}

/// Security: Validates output file paths to prevent path traversal attacks.
///
/// Rejects:
/// - Absolute paths (must be relative to current directory)
/// - Paths containing `..` (parent directory traversal)
/// - Paths with null bytes (injection attacks)
fn validate_output_path(path: &str) -> Result<PathBuf> {
    if path.contains('\0') {
        return Err(anyhow!("Output path contains null bytes"));
    }

    let p = PathBuf::from(path);

    if p.is_absolute() {
        return Err(anyhow!(
            "Output path must be relative, not absolute: {}",
            path
        ));
    }

    for component in p.components() {
        if matches!(component, std::path::Component::ParentDir) {
            return Err(anyhow!(
                "Path traversal (..) not allowed in output paths: {}",
                path
            ));
        }
    }

    Ok(p)
}

fn main() -> Result<()> {
    // Global panic guard - the tool must exit cleanly even on internal bugs
    std::panic::set_hook(Box::new(|info| {
        eprintln!("[PANIC] nestcheck internal error: {}", info);
        eprintln!("[PANIC] The process will exit safely with code 2.");
    }));

    // Initialize structured logging (JSON to stderr, respects RUST_LOG)
    init_structured_logging();

    let cli = Cli::parse();

    // 1. Load the universe file
    let universe_path = Path::new(&cli.universe);
    let loaded = load_universe(universe_path)
        .with_context(|| format!("Failed to load universe: {}", cli.universe))?;

    // 2. Load config from nestcheck.toml next to the universe file
    //    (safe - don't fail the run on config errors)
    let config_dir = universe_path.parent().unwrap_or(Path::new("."));
    let mut ignore = cli.ignore.clone();
    let mut builtins = loaded.builtins;
    builtins.extend(cli.builtin.iter().cloned());
    let mut max_depth = cli.max_depth;
    let mut json = cli.json;

    match load_config(config_dir) {
        Ok(Some(cfg)) => {
            if let Some(list) = cfg.ignore {
                ignore.extend(list);
            }
            if let Some(list) = cfg.builtins {
                builtins.extend(list);
            }
            if max_depth.is_none() {
                max_depth = cfg.max_depth;
            }
            if !json {
                json = cfg
                    .output
                    .and_then(|o| o.format)
                    .is_some_and(|f| f == "json");
            }
        }
        Ok(None) => {} // No config file - that's fine
        Err(e) => {
            eprintln!("[WARN] config load failed: {}", e);
        }
    }

    let max_depth = max_depth.unwrap_or(DEFAULT_MAX_DEPTH);

    // 3. Run the analysis
    let result = NestCheck::new(loaded.universe)
        .max_depth(max_depth)
        .extend_builtins(builtins)
        .ignore_roots(ignore)
        .analyze();

    log_info(&format!(
        "checked {} roots over {} serializable types ({} edges), depth bound {}",
        result.roots.len(),
        result.serializable_types,
        result.edge_count,
        result.max_depth
    ));

    // 4. DOT/Graphviz output (safe - don't crash on write errors)
    if cli.dot || cli.dot_file.is_some() {
        let dot = generate_dot(&result.graph);
        if let Some(ref file) = cli.dot_file {
            match validate_output_path(file) {
                Ok(safe_path) => {
                    if let Err(e) = fs::write(&safe_path, &dot) {
                        eprintln!("[WARN] DOT write failed to {}: {}", safe_path.display(), e);
                    } else {
                        eprintln!("DOT graph saved to: {}", safe_path.display());
                    }
                }
                Err(e) => {
                    eprintln!("[ERROR] Invalid output path: {}", e);
                    std::process::exit(2);
                }
            }
        } else {
            println!("{}", dot);
        }
        std::process::exit(if result.has_violations() { 1 } else { 0 });
    }

    // 5. Report results
    if json {
        let json_output = serde_json::json!({
            "total_types": result.total_types,
            "serializable_types": result.serializable_types,
            "edges": result.edge_count,
            "max_depth": result.max_depth,
            "roots": result.roots,
            "violation_count": result.violation_count(),
            "violations": result.violations,
        });
        println!("{}", serde_json::to_string_pretty(&json_output)?);
    } else {
        print_plain(&result.violations);
    }

    // 6. Exit code (CI-friendly)
    std::process::exit(if result.has_violations() { 1 } else { 0 });
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- validate_output_path TESTS ---

    #[test]
    fn test_validate_output_path_relative_ok() {
        assert!(validate_output_path("graph.dot").is_ok());
        assert!(validate_output_path("out/graph.dot").is_ok());
    }

    #[test]
    fn test_validate_output_path_rejects_absolute() {
        assert!(validate_output_path("/etc/passwd").is_err());
    }

    #[test]
    fn test_validate_output_path_rejects_traversal() {
        assert!(validate_output_path("../graph.dot").is_err());
        assert!(validate_output_path("out/../../graph.dot").is_err());
    }

    #[test]
    fn test_validate_output_path_rejects_null_bytes() {
        assert!(validate_output_path("graph\0.dot").is_err());
    }
}
