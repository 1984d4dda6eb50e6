use thiserror::Error;

use crate::base::EditorId;

/// Lifecycle errors raised by the session registry and the overlay stores.
///
/// Both variants indicate an integration bug in the caller and are never
/// retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("editor '{0}' already exists")]
    DuplicateIdentity(EditorId),

    #[error("no live editor named '{0}'")]
    UnknownIdentity(EditorId),
}

pub type SessionResult<T> = Result<T, SessionError>;
