//! Repository coordinates (`group:name:version`)

use std::path::PathBuf;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{KilnError, artifact};

/// Coordinate of an artifact held by a repository
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Coordinate {
    pub group: String,
    pub name: String,
    pub version: String,
}

impl Coordinate {
    /// Logical identifier of the artifact, without its version
    pub fn identity(&self) -> String {
        format!("{}:{}", self.group, self.name)
    }

    /// Archive file name, e.g. `lwjgl-3.3.1.jar`
    pub fn file_name(&self) -> String {
        format!("{}-{}.jar", self.name, self.version)
    }

    /// Relative location in a Maven-layout repository
    pub fn maven_path(&self) -> PathBuf {
        let mut path: PathBuf = self.group.split('.').collect();
        path.push(&self.name);
        path.push(&self.version);
        path.push(self.file_name());
        path
    }
}

impl FromStr for Coordinate {
    type Err = KilnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').map(str::trim).collect();
        let [group, name, version] = parts.as_slice() else {
            return Err(artifact::invalid_coordinate(
                s,
                format!("expected group:name:version, found {} part(s)", parts.len()),
            ));
        };

        if let Some(empty) = [("group", group), ("name", name), ("version", version)]
            .into_iter()
            .find(|(_, value)| value.is_empty())
        {
            return Err(artifact::invalid_coordinate(
                s,
                format!("{} is empty", empty.0),
            ));
        }

        if [group, name, version]
            .iter()
            .any(|part| part.contains(['/', '\\']))
        {
            return Err(artifact::invalid_coordinate(
                s,
                "coordinate parts must not contain path separators",
            ));
        }

        if group
            .split('.')
            .any(|segment| segment.is_empty() || segment == "..")
        {
            return Err(artifact::invalid_coordinate(
                s,
                "group segments must be non-empty and not '..'",
            ));
        }

        if [name, version].iter().any(|part| matches!(**part, "." | "..")) {
            return Err(artifact::invalid_coordinate(
                s,
                "name and version must not be '.' or '..'",
            ));
        }

        Ok(Self {
            group: (*group).to_string(),
            name: (*name).to_string(),
            version: (*version).to_string(),
        })
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.name, self.version)
    }
}
