//! State handed down through one validation pass.

/// Context for a single validation pass over the configuration tree.
///
/// Entities receive it from whoever owns them and pass it on to their
/// children. It records where in the tree validation currently is, which is
/// only used for diagnostics; cross-entity checks (such as unique role names)
/// are performed by the owning collections themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationContext {
    path: Vec<String>,
}

impl ValidationContext {
    /// Context for the top of the configuration document.
    pub fn root() -> Self {
        Self::default()
    }

    /// Child context for an entity nested under `label`.
    pub fn with_parent(&self, label: impl Into<String>) -> Self {
        let mut path = self.path.clone();
        path.push(label.into());
        Self { path }
    }

    /// Slash-separated location, empty at the root.
    pub fn path(&self) -> String {
        self.path.join("/")
    }

    pub fn depth(&self) -> usize {
        self.path.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_has_empty_path() {
        let ctx = ValidationContext::root();
        assert_eq!(ctx.path(), "");
        assert_eq!(ctx.depth(), 0);
    }

    #[test]
    fn child_contexts_extend_the_path_without_touching_the_parent() {
        let root = ValidationContext::root();
        let roles = root.with_parent("roles");
        let role = roles.with_parent("ReleaseManagers");

        assert_eq!(role.path(), "roles/ReleaseManagers");
        assert_eq!(role.depth(), 2);
        assert_eq!(roles.path(), "roles");
    }
}
