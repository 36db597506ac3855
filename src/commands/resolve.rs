//! Resolve command implementation
//!
//! Prints the compile and/or runtime classpath, joined with the platform
//! path separator, or a JSON document describing both.

use std::path::PathBuf;

use serde::Serialize;

use crate::cli::{ClasspathKind, OutputFormat, ResolveArgs};
use crate::commands::helpers;
use crate::domain::{Classpaths, ProjectIdentity, ResolvedArtifact};
use crate::error::Result;
use crate::resolver;

/// JSON document printed by `resolve --format json`
#[derive(Debug, Serialize)]
struct ResolveOutput<'a> {
    project: ProjectIdentity,
    #[serde(skip_serializing_if = "Option::is_none")]
    compile: Option<&'a [PathBuf]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    runtime: Option<&'a [PathBuf]>,
    artifacts: &'a [ResolvedArtifact],
}

/// Run resolve command
pub fn run(file: Option<PathBuf>, args: ResolveArgs) -> Result<()> {
    let descriptor = helpers::load_descriptor(file)?;
    let classpaths = resolver::resolve(&descriptor)?;

    let output = render(&descriptor.identity(), &classpaths, args.scope, args.format)?;
    println!("{output}");
    Ok(())
}

/// Render classpaths for printing
fn render(
    project: &ProjectIdentity,
    classpaths: &Classpaths,
    kind: ClasspathKind,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let output = ResolveOutput {
                project: project.clone(),
                compile: matches!(kind, ClasspathKind::Compile | ClasspathKind::Both)
                    .then_some(classpaths.compile.as_slice()),
                runtime: matches!(kind, ClasspathKind::Runtime | ClasspathKind::Both)
                    .then_some(classpaths.runtime.as_slice()),
                artifacts: &classpaths.artifacts,
            };
            Ok(serde_json::to_string_pretty(&output)?)
        }
        OutputFormat::Text => {
            let compile = classpaths.compile_string()?.to_string_lossy().into_owned();
            let runtime = classpaths.runtime_string()?.to_string_lossy().into_owned();
            Ok(match kind {
                ClasspathKind::Compile => compile,
                ClasspathKind::Runtime => runtime,
                ClasspathKind::Both => format!("compile: {compile}\nruntime: {runtime}"),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Scope;

    fn project() -> ProjectIdentity {
        ProjectIdentity {
            group: "io.github.heathensoft".to_string(),
            version: "1.0-SNAPSHOT".to_string(),
        }
    }

    fn classpaths() -> Classpaths {
        Classpaths::from_artifacts(vec![
            ResolvedArtifact {
                name: "jlib".to_string(),
                path: PathBuf::from("/p/libs/jlib.jar"),
                scope: Scope::Implementation,
            },
            ResolvedArtifact {
                name: "natives".to_string(),
                path: PathBuf::from("/p/libs/natives.jar"),
                scope: Scope::RuntimeOnly,
            },
        ])
    }

    #[test]
    fn test_render_compile_text() {
        let out = render(
            &project(),
            &classpaths(),
            ClasspathKind::Compile,
            OutputFormat::Text,
        )
        .unwrap();
        assert_eq!(out, "/p/libs/jlib.jar");
    }

    #[test]
    fn test_render_runtime_text() {
        let out = render(
            &project(),
            &classpaths(),
            ClasspathKind::Runtime,
            OutputFormat::Text,
        )
        .unwrap();
        let paths: Vec<PathBuf> = std::env::split_paths(&out).collect();
        assert_eq!(
            paths,
            vec![
                PathBuf::from("/p/libs/jlib.jar"),
                PathBuf::from("/p/libs/natives.jar")
            ]
        );
    }

    #[test]
    fn test_render_both_text() {
        let out = render(
            &project(),
            &classpaths(),
            ClasspathKind::Both,
            OutputFormat::Text,
        )
        .unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("compile: "));
        assert!(lines[1].starts_with("runtime: "));
    }

    #[test]
    fn test_render_json() {
        let out = render(
            &project(),
            &classpaths(),
            ClasspathKind::Both,
            OutputFormat::Json,
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["project"]["group"], "io.github.heathensoft");
        assert_eq!(value["compile"].as_array().unwrap().len(), 1);
        assert_eq!(value["runtime"].as_array().unwrap().len(), 2);
        assert_eq!(value["artifacts"][1]["scope"], "runtime-only");
    }

    #[test]
    fn test_render_json_single_scope() {
        let out = render(
            &project(),
            &classpaths(),
            ClasspathKind::Compile,
            OutputFormat::Json,
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert!(value.get("runtime").is_none());
    }

    #[test]
    fn test_render_empty() {
        let out = render(
            &project(),
            &Classpaths::default(),
            ClasspathKind::Compile,
            OutputFormat::Text,
        )
        .unwrap();
        assert!(out.is_empty());
    }
}
