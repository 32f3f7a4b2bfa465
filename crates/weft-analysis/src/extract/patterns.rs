//! Compiled import patterns.
//!
//! Three independent heuristic patterns: static ES imports, CommonJS
//! require calls, and dynamic imports. This is pattern matching, not
//! parsing: commented-out imports and string literals that look like
//! imports will match.

use std::sync::LazyLock;

use regex::Regex;

/// Static ES import: `import x from "spec"`, `import { a } from "spec"`,
/// or a bare side-effect `import "spec"`.
pub static STATIC_IMPORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"import\s+(?:.*\s+from\s+)?['"`]([^'"`]+)['"`]"#)
        .expect("static import pattern is valid")
});

/// CommonJS require call: `require("spec")`.
pub static REQUIRE_CALL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"require\s*\(\s*['"`]([^'"`]+)['"`]\s*\)"#)
        .expect("require pattern is valid")
});

/// Dynamic import expression: `import("spec")`.
pub static DYNAMIC_IMPORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"import\s*\(\s*['"`]([^'"`]+)['"`]\s*\)"#)
        .expect("dynamic import pattern is valid")
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_import_forms() {
        for line in [
            r#"import x from "./a""#,
            r#"import { a, b } from './a'"#,
            r#"import * as ns from `./a`"#,
            r#"import "./a""#,
        ] {
            let caps = STATIC_IMPORT.captures(line).unwrap();
            assert_eq!(&caps[1], "./a", "pattern missed: {line}");
        }
    }

    #[test]
    fn require_forms() {
        let caps = REQUIRE_CALL.captures(r#"const x = require( "./lib" );"#).unwrap();
        assert_eq!(&caps[1], "./lib");
        assert!(REQUIRE_CALL.captures("requireSomething('./lib')").is_none());
    }

    #[test]
    fn dynamic_import_forms() {
        let caps = DYNAMIC_IMPORT.captures(r#"await import("./lazy")"#).unwrap();
        assert_eq!(&caps[1], "./lazy");
    }
}
