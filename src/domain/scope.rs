//! Dependency scopes

use serde::{Deserialize, Serialize};

/// Which classpaths a dependency belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scope {
    /// Needed to compile and to run
    #[serde(rename = "implementation", alias = "compile-and-run")]
    Implementation,

    /// Needed only at run time (native libraries and the like)
    #[serde(rename = "runtime-only", alias = "runtimeOnly", alias = "run-only")]
    RuntimeOnly,
}

impl Scope {
    /// Whether the dependency belongs on the compile classpath
    pub fn on_compile_classpath(self) -> bool {
        matches!(self, Scope::Implementation)
    }

    /// Combine two declarations of the same artifact.
    ///
    /// The broader scope wins: an artifact declared once as implementation
    /// stays on the compile classpath.
    #[must_use]
    pub fn widen(self, other: Scope) -> Scope {
        if self.on_compile_classpath() || other.on_compile_classpath() {
            Scope::Implementation
        } else {
            Scope::RuntimeOnly
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Scope::Implementation => "implementation",
            Scope::RuntimeOnly => "runtime-only",
        }
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widen() {
        assert_eq!(
            Scope::RuntimeOnly.widen(Scope::RuntimeOnly),
            Scope::RuntimeOnly
        );
        assert_eq!(
            Scope::RuntimeOnly.widen(Scope::Implementation),
            Scope::Implementation
        );
        assert_eq!(
            Scope::Implementation.widen(Scope::RuntimeOnly),
            Scope::Implementation
        );
    }

    #[test]
    fn test_deserialize_aliases() {
        for (input, expected) in [
            ("implementation", Scope::Implementation),
            ("compile-and-run", Scope::Implementation),
            ("runtime-only", Scope::RuntimeOnly),
            ("runtimeOnly", Scope::RuntimeOnly),
            ("run-only", Scope::RuntimeOnly),
        ] {
            let scope: Scope = serde_yaml::from_str(input).unwrap();
            assert_eq!(scope, expected, "input: {input}");
        }
    }

    #[test]
    fn test_deserialize_unknown_scope() {
        let result: std::result::Result<Scope, _> = serde_yaml::from_str("compileOnly");
        assert!(result.is_err());
    }
}
