//! Opaque reference to an uploaded document.
//!
//! File upload is handled by an external collaborator; the checkout core
//! only ever sees the resulting handle. A job cannot be added to the cart
//! without one.

use core::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Handle to a document uploaded through the file-upload collaborator.
///
/// The core never dereferences this - it is carried on the cart line so the
/// fulfillment side can locate the file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentRef {
    /// Upload identifier assigned by the upload collaborator.
    id: Uuid,
    /// Original file name, kept for display (e.g., "thesis.pdf").
    file_name: String,
}

impl DocumentRef {
    /// Create a document reference for an uploaded file.
    #[must_use]
    pub const fn new(id: Uuid, file_name: String) -> Self {
        Self { id, file_name }
    }

    /// The upload identifier.
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// The original file name.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}

impl fmt::Display for DocumentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.file_name, self.id)
    }
}
