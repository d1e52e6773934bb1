use serde::{Deserialize, Serialize};
#[cfg(feature = "validation")]
use validator::Validate;

use crate::analysis::{DocumentType, LegalDocument};

/// Request DTO for registering a document before analysis completes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct CreateDocumentRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, max = 128, message = "Document ID is required"))
    )]
    pub document_id: String,
    #[serde(default)]
    pub file_name: Option<String>,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Client name is required"))
    )]
    pub client_name: String,
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Client email must be a valid email address"))
    )]
    pub client_email: String,
    /// `"contract"` or `"case_law"`; other values are stored as given.
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Document type is required"))
    )]
    pub document_type: String,
}

impl From<CreateDocumentRequest> for LegalDocument {
    fn from(req: CreateDocumentRequest) -> Self {
        Self {
            document_id: req.document_id,
            file_name: req.file_name.filter(|name| !name.is_empty()),
            client_name: req.client_name,
            client_email: req.client_email,
            document_type: DocumentType::from(req.document_type),
            results: None,
        }
    }
}

/// Lightweight row for document list views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DocumentSummary {
    pub document_id: String,
    pub title: String,
    pub client_name: String,
    pub document_type: String,
    pub has_results: bool,
}

impl From<&LegalDocument> for DocumentSummary {
    fn from(doc: &LegalDocument) -> Self {
        Self {
            document_id: doc.document_id.clone(),
            title: doc.display_title().to_string(),
            client_name: doc.client_name.clone(),
            document_type: doc.document_type.to_string(),
            has_results: doc.has_results(),
        }
    }
}
