//! Output formatting - plaintext and JSON.

use crate::walk::Violation;
use serde_json::json;
use std::fmt::Write;

/// Renders one violation as an indented member chain, root to leaf.
pub fn format_chain(violation: &Violation) -> String {
    let mut out = String::new();
    match violation.root() {
        Some(root) => {
            let _ = writeln!(out, "{} exceeds the serialization depth bound:", root);
        }
        None => {
            let _ = writeln!(out, "(empty chain at depth bound 0)");
        }
    }
    for (i, edge) in violation.chain.iter().enumerate() {
        let _ = writeln!(
            out,
            "  {}. {} (field `{}` of {})",
            i + 1,
            edge.to,
            edge.field,
            edge.from
        );
    }
    out
}

/// Prints violations in plain text format.
pub fn print_plain(violations: &[Violation]) {
    if violations.is_empty() {
        println!("No serialization depth violations found.");
    } else {
        println!("DEPTH VIOLATIONS ({}):", violations.len());
        for v in violations {
            print!("- {}", format_chain(v));
        }
    }
}

/// Prints violations in JSON format.
///
/// Falls back to a count-only line if serialization fails (should never
/// happen with these structures, but the tool must not crash on output).
pub fn print_json(violations: &[Violation]) {
    let payload = json!({
        "count": violations.len(),
        "violations": violations,
    });
    match serde_json::to_string_pretty(&payload) {
        Ok(text) => println!("{}", text),
        Err(e) => {
            eprintln!("[WARN] JSON serialization failed: {}", e);
            println!("{{\"count\": {}}}", violations.len());
        }
    }
}
