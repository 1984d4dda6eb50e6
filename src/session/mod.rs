//! Editor sessions and their overlays.
//!
//! ## Key Types
//!
//! - [`EditorHost`] - owns everything below; one per application
//! - [`EditorSessionRegistry`] - live editors, cascades destruction to the stores
//! - [`DiagnosticStore`] - per-editor lint lists, replaced whole on revalidation
//! - [`MarkRegistry`] - per-editor visual highlights
//! - [`Evaluator`] - the external evaluator seam

mod diagnostics;
mod error;
mod evaluator;
mod host;
mod marks;
mod options;
mod registry;

pub use diagnostics::{Diagnostic, DiagnosticStore, Severity};
pub use error::{SessionError, SessionResult};
pub use evaluator::{EvaluationContext, Evaluator};
pub use host::{EditorHost, Revalidation, SharedEditorHost};
pub use marks::{Mark, MarkHandle, MarkRegistry, MarkStyle};
pub use options::HostOptions;
pub use registry::{EditorSession, EditorSessionRegistry};
