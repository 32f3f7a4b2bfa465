//! Import extraction: heuristic per-file scan for static, CommonJS,
//! and dynamic import sites.

pub mod patterns;
pub mod resolver;

use rayon::prelude::*;
use regex::Regex;

use weft_core::types::source::{DependencyEdge, EdgeKind, FileRecord};

pub use resolver::canonicalize;

/// Extract every import edge from one file.
///
/// All three patterns run over the whole content and every match is
/// kept, pattern-major order (static imports, then requires, then
/// dynamic imports), each in source order. Never fails: a file without
/// imports yields an empty list and a malformed relative specifier
/// degrades to an unresolved edge.
pub fn extract_file(record: &FileRecord) -> Vec<DependencyEdge> {
    let from = canonicalize(&record.path);
    let mut edges = Vec::new();
    scan(&patterns::STATIC_IMPORT, EdgeKind::Import, record, &from, &mut edges);
    scan(&patterns::REQUIRE_CALL, EdgeKind::Require, record, &from, &mut edges);
    scan(&patterns::DYNAMIC_IMPORT, EdgeKind::Dynamic, record, &from, &mut edges);
    edges
}

/// Extract edges for a whole file set, one rayon job per file.
/// Output order matches input order.
pub fn extract_all(files: &[FileRecord]) -> Vec<Vec<DependencyEdge>> {
    files.par_iter().map(extract_file).collect()
}

fn scan(
    pattern: &Regex,
    kind: EdgeKind,
    record: &FileRecord,
    from: &str,
    out: &mut Vec<DependencyEdge>,
) {
    for caps in pattern.captures_iter(&record.content) {
        let (Some(site), Some(spec)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let specifier = spec.as_str();
        let line = line_of(&record.content, site.start());

        let resolved = match resolver::resolve_specifier(specifier, from, line) {
            Ok(resolved) => resolved,
            Err(err) => {
                tracing::debug!(file = %from, %err, "specifier degraded to unresolved");
                None
            }
        };

        out.push(DependencyEdge {
            kind,
            from: from.to_string(),
            specifier: specifier.to_string(),
            resolved,
            line,
        });
    }
}

/// 1-based line number of a byte offset.
fn line_of(content: &str, index: usize) -> usize {
    1 + content[..index].bytes().filter(|&b| b == b'\n').count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_without_imports_yields_nothing() {
        let record = FileRecord::new("a.js", "const x = 1;\nconsole.log(x);\n");
        assert!(extract_file(&record).is_empty());
    }

    #[test]
    fn all_three_kinds_are_extracted() {
        let record = FileRecord::new(
            "src/a.js",
            concat!(
                "import x from \"./b\";\n",
                "const y = require(\"./c\");\n",
                "const z = () => import(\"./d\");\n",
            ),
        );
        let edges = extract_file(&record);
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[0].kind, EdgeKind::Import);
        assert_eq!(edges[0].resolved.as_deref(), Some("src/b"));
        assert_eq!(edges[1].kind, EdgeKind::Require);
        assert_eq!(edges[1].resolved.as_deref(), Some("src/c"));
        assert_eq!(edges[2].kind, EdgeKind::Dynamic);
        assert_eq!(edges[2].resolved.as_deref(), Some("src/d"));
    }

    #[test]
    fn every_match_is_kept_not_just_the_first() {
        let record = FileRecord::new(
            "a.js",
            "import x from \"./b\";\nimport y from \"./c\";\nimport z from \"./b\";\n",
        );
        let edges = extract_file(&record);
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[2].resolved.as_deref(), Some("b"));
    }

    #[test]
    fn line_numbers_are_one_based() {
        let record = FileRecord::new(
            "a.js",
            "// header\n\nimport x from \"./b\";\nconst y = require(\"./c\");\n",
        );
        let edges = extract_file(&record);
        assert_eq!(edges[0].line, 3);
        assert_eq!(edges[1].line, 4);
    }

    #[test]
    fn bare_specifiers_stay_unresolved() {
        let record = FileRecord::new("a.js", "import React from \"react\";\n");
        let edges = extract_file(&record);
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].resolved, None);
        assert_eq!(edges[0].specifier, "react");
        assert_eq!(edges[0].target(), "react");
    }

    #[test]
    fn malformed_relative_specifier_degrades_instead_of_failing() {
        let record = FileRecord::new("a.js", "import x from \"./..\";\n");
        let edges = extract_file(&record);
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].resolved, None);
    }

    #[test]
    fn extractor_canonicalizes_the_source_path() {
        let record = FileRecord::new("./src/./a.js", "import x from \"./b\";\n");
        let edges = extract_file(&record);
        assert_eq!(edges[0].from, "src/a.js");
        assert_eq!(edges[0].resolved.as_deref(), Some("src/b"));
    }

    #[test]
    fn extract_all_preserves_input_order() {
        let files = vec![
            FileRecord::new("a.js", "import x from \"./b\";"),
            FileRecord::new("b.js", ""),
            FileRecord::new("c.js", "const b = require(\"./b\");"),
        ];
        let extracted = extract_all(&files);
        assert_eq!(extracted.len(), 3);
        assert_eq!(extracted[0].len(), 1);
        assert!(extracted[1].is_empty());
        assert_eq!(extracted[2][0].kind, EdgeKind::Require);
    }
}
