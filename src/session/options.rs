//! Host options

/// Options for an [`EditorHost`](super::EditorHost)
#[derive(Debug, Clone)]
pub struct HostOptions {
    /// Prefix of identities minted by `EditorHost::add_editor`
    pub id_prefix: String,
    /// Columns per nesting level in indentation hints
    pub indent_unit: usize,
}

impl Default for HostOptions {
    fn default() -> Self {
        Self {
            id_prefix: "block-code-".to_string(),
            indent_unit: 2,
        }
    }
}
