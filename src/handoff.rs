//! Immutable conversion results handed from the upload step to viewers.
//!
//! The conversion pipeline returns one [`DiagramSet`] per run and the
//! viewer receives it by value, so the flow between the two steps stays
//! visible in the call graph instead of going through shared session
//! state.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Diagram categories produced by the conversion pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagramKind {
    /// Class diagram.
    Class,
    /// Use-case diagram.
    Usecase,
    /// Flow diagram.
    Flow,
}

impl DiagramKind {
    /// All kinds, in the order the viewer presents them.
    pub const ALL: [DiagramKind; 3] =
        [DiagramKind::Class, DiagramKind::Usecase, DiagramKind::Flow];

    /// Human-readable name for tab labels.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Class => "Classes",
            Self::Usecase => "Use Cases",
            Self::Flow => "Flow",
        }
    }
}

/// A source file that went into the conversion.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFile {
    /// Name the file was uploaded under.
    pub filename: String,
    /// Full file contents, shown on the source tab.
    pub code: String,
}

/// Complete output of one conversion run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagramSet {
    /// Diagram source text per kind; a kind the pipeline produced nothing
    /// for is simply absent.
    #[serde(default)]
    pub diagrams: BTreeMap<DiagramKind, String>,

    /// Source listing shown alongside the diagrams.
    #[serde(default)]
    pub sources: Vec<SourceFile>,

    /// Non-fatal conversion warnings surfaced to the user.
    #[serde(default)]
    pub warnings: Vec<String>,
}

impl DiagramSet {
    /// Diagram source for one kind, if the pipeline produced it.
    ///
    /// Feeds directly into [`RenderLifecycle::set_source`]: a missing kind
    /// is the absent-input case and the view shows "no diagram available".
    ///
    /// [`RenderLifecycle::set_source`]: crate::lifecycle::RenderLifecycle::set_source
    pub fn diagram(&self, kind: DiagramKind) -> Option<&str> {
        self.diagrams.get(&kind).map(String::as_str)
    }
}
