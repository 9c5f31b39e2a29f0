//! Compiler configuration consulted while building IR.

use serde::Deserialize;

/// The kind of program being compiled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgramKind {
    #[default]
    Fragment,
    Vertex,
    RuntimeEffect,
}

/// Per-compilation settings. Missing fields fall back to their defaults.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Enables construction-time simplifications beyond literal folding.
    pub optimize: bool,
    /// Restrict runtime effects to the GLSL ES 1.00 feature set.
    pub enforce_es2_restrictions: bool,
    pub kind: ProgramKind,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            optimize: true,
            enforce_es2_restrictions: true,
            kind: ProgramKind::default(),
        }
    }
}

impl Settings {
    /// Whether the restricted ES2 dialect is in effect for this program.
    pub fn strict_es2_mode(&self) -> bool {
        self.enforce_es2_restrictions && self.kind == ProgramKind::RuntimeEffect
    }
}
