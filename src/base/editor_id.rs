use std::fmt;

use smol_str::SmolStr;

/// Identity of one editable surface (a policy block or the verifier block).
///
/// Cheap to clone. Compared by value.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EditorId(SmolStr);

impl EditorId {
    pub fn new(id: impl Into<SmolStr>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EditorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EditorId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for EditorId {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

impl AsRef<str> for EditorId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
