//! Provenance metadata stamped into generated files.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize, Serializer};

/// Semantic version of the generating tool.
///
/// Serialized as a `"X.Y.Z"` string so provenance survives a trip through
/// orchestrator manifests unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Version {
    major: u32,
    minor: u32,
    patch: u32,
}

impl Version {
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl TryFrom<String> for Version {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Version {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('.').collect();
        let [major, minor, patch] = parts[..] else {
            return Err(format!("invalid version '{}', expected 'X.Y.Z'", s));
        };
        let parse = |part: &str, what: &str| -> Result<u32, String> {
            part.parse()
                .map_err(|_| format!("invalid {} in version '{}'", what, s))
        };
        Ok(Self {
            major: parse(major, "major")?,
            minor: parse(minor, "minor")?,
            patch: parse(patch, "patch")?,
        })
    }
}

/// Identity of the tool that produced a generated file.
///
/// Backends stamp the marker into every file they emit, so readers and
/// build tooling can tell generated sources from handwritten ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provenance {
    generator: String,
    version: Version,
}

impl Provenance {
    pub fn new(generator: impl Into<String>, version: Version) -> Self {
        Self {
            generator: generator.into(),
            version,
        }
    }

    /// The marker string recorded in generated files, `"<generator> <version>"`.
    pub fn marker(&self) -> String {
        format!("{} {}", self.generator, self.version)
    }
}
