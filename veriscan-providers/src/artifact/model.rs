use strum::Display;

/// How a printable artifact's location was determined.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Display)]
pub enum ArtifactProvenance {
    /// The descriptor carried an explicit final-document path.
    Explicit,
    /// Found as a "final document" attachment on the detail record.
    Attachment,
    /// Constructed from document fields following the storage naming
    /// convention. Works only as long as that convention holds; callers
    /// should prefer the other sources and may warn when this one is used.
    ConstructedPath,
}

/// A printable rendition of a document, ready to preview or download.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PrintableArtifact {
    pub path: String,
    pub provenance: ArtifactProvenance,
}
