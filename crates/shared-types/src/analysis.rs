use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Document type
// ---------------------------------------------------------------------------

/// Kind of legal document submitted for analysis.
///
/// The wire form is a plain string. `"contract"` and `"case_law"` map to the
/// two known variants; any other value is kept verbatim in `Unrecognized` so
/// it survives a round trip and every consumer has to handle it explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DocumentType {
    Contract,
    CaseLaw,
    Unrecognized(String),
}

impl DocumentType {
    /// Wire representation.
    pub fn as_str(&self) -> &str {
        match self {
            DocumentType::Contract => "contract",
            DocumentType::CaseLaw => "case_law",
            DocumentType::Unrecognized(raw) => raw,
        }
    }

    pub fn is_contract(&self) -> bool {
        matches!(self, DocumentType::Contract)
    }

    /// Label shown in the dashboard subtitle.
    ///
    /// Only contracts read "Contract"; every other value, including
    /// unrecognized ones, reads "Case Law".
    pub fn display_label(&self) -> &'static str {
        match self {
            DocumentType::Contract => "Contract",
            DocumentType::CaseLaw | DocumentType::Unrecognized(_) => "Case Law",
        }
    }
}

impl From<String> for DocumentType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "contract" => DocumentType::Contract,
            "case_law" => DocumentType::CaseLaw,
            _ => DocumentType::Unrecognized(s),
        }
    }
}

impl From<&str> for DocumentType {
    fn from(s: &str) -> Self {
        DocumentType::from(s.to_string())
    }
}

impl From<DocumentType> for String {
    fn from(t: DocumentType) -> Self {
        match t {
            DocumentType::Unrecognized(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Result item enums
// ---------------------------------------------------------------------------

/// Severity of a compliance flag. Unknown values parse as `Medium`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Severity {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "low" => Severity::Low,
            "high" => Severity::High,
            "critical" => Severity::Critical,
            _ => Severity::Medium,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::Critical => "Critical",
        }
    }
}

impl From<String> for Severity {
    fn from(s: String) -> Self {
        Severity::from_str_or_default(&s)
    }
}

impl From<Severity> for String {
    fn from(s: Severity) -> Self {
        s.as_str().to_string()
    }
}

/// Risk level assigned to an extracted clause. Unknown values parse as `Medium`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RiskLevel {
    Low,
    #[default]
    Medium,
    High,
}

impl RiskLevel {
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "low" => RiskLevel::Low,
            "high" => RiskLevel::High,
            _ => RiskLevel::Medium,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low Risk",
            RiskLevel::Medium => "Medium Risk",
            RiskLevel::High => "High Risk",
        }
    }
}

impl From<String> for RiskLevel {
    fn from(s: String) -> Self {
        RiskLevel::from_str_or_default(&s)
    }
}

impl From<RiskLevel> for String {
    fn from(r: RiskLevel) -> Self {
        r.as_str().to_string()
    }
}

// ---------------------------------------------------------------------------
// Result items
// ---------------------------------------------------------------------------

/// A regulatory or policy concern raised against a contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ComplianceFlag {
    pub regulation: String,
    pub description: String,
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(value_type = String, example = "high"))]
    pub severity: Severity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
}

/// A clause pulled out of a contract by the analysis pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ExtractedClause {
    /// Clause category (e.g. "Indemnification", "Termination").
    pub clause_type: String,
    pub text: String,
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(value_type = String, example = "medium"))]
    pub risk_level: RiskLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A prior decision relevant to the analysed contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PrecedentCase {
    pub case_name: String,
    pub citation: String,
    /// Relevance to the document, 0-100.
    #[serde(default)]
    pub relevance: f64,
    #[serde(default)]
    pub summary: String,
}

// ---------------------------------------------------------------------------
// Analysis results & document
// ---------------------------------------------------------------------------

/// Output of the external analysis pipeline, attached once per document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AnalysisResults {
    pub executive_summary: String,
    pub risk_score: f64,
    pub confidence_score: f64,
    #[serde(default)]
    pub compliance_flags: Vec<ComplianceFlag>,
    #[serde(default)]
    pub extracted_clauses: Vec<ExtractedClause>,
    #[serde(default)]
    pub precedent_cases: Vec<PrecedentCase>,
    #[serde(default)]
    pub recommended_actions: Vec<String>,
}

/// A document submitted for legal analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct LegalDocument {
    pub document_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    pub client_name: String,
    pub client_email: String,
    #[cfg_attr(feature = "openapi", schema(value_type = String, example = "contract"))]
    pub document_type: DocumentType,
    /// Absent until the analysis pipeline has finished.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<AnalysisResults>,
}

impl LegalDocument {
    /// Title shown for the document: the file name when present and
    /// non-empty, otherwise the document id.
    pub fn display_title(&self) -> &str {
        match self.file_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.document_id,
        }
    }

    pub fn has_results(&self) -> bool {
        self.results.is_some()
    }
}
