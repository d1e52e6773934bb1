//! Layout policy for the analysis dashboard.
//!
//! `plan_dashboard` turns a [`LegalDocument`] into an ordered list of section
//! descriptors. It performs no rendering; UI layers map each descriptor to a
//! component.

use serde::Serialize;

use crate::analysis::{ComplianceFlag, DocumentType, ExtractedClause, LegalDocument, PrecedentCase};

/// Message shown when a document has no analysis results yet.
pub const EMPTY_STATE_MESSAGE: &str = "No results available for this document.";

pub const EXECUTIVE_SUMMARY_TITLE: &str = "Executive Summary";
pub const RESEARCH_SUMMARY_TITLE: &str = "Research Summary";

/// Separator between the parts of the header subtitle.
pub const SUBTITLE_SEPARATOR: &str = " • ";

/// What the dashboard should show for a document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DashboardView {
    /// Results are absent; only the empty-state notice is shown.
    Empty,
    Report(DashboardReport),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardReport {
    pub header: DashboardHeader,
    pub sections: Vec<DashboardSection>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardHeader {
    pub title: String,
    pub subtitle: String,
}

/// One section of the dashboard body, carrying the slice of the results its
/// renderer needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DashboardSection {
    Summary {
        title: &'static str,
        body: String,
    },
    Score {
        risk_score: f64,
        confidence_score: f64,
        document_type: DocumentType,
    },
    ComplianceFlags(Vec<ComplianceFlag>),
    ExtractedClauses(Vec<ExtractedClause>),
    PrecedentCases(Vec<PrecedentCase>),
    RecommendedActions(Vec<String>),
}

/// Discriminant of a [`DashboardSection`], for ordering checks and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SectionKind {
    Summary,
    Score,
    ComplianceFlags,
    ExtractedClauses,
    PrecedentCases,
    RecommendedActions,
}

impl DashboardSection {
    pub fn kind(&self) -> SectionKind {
        match self {
            DashboardSection::Summary { .. } => SectionKind::Summary,
            DashboardSection::Score { .. } => SectionKind::Score,
            DashboardSection::ComplianceFlags(_) => SectionKind::ComplianceFlags,
            DashboardSection::ExtractedClauses(_) => SectionKind::ExtractedClauses,
            DashboardSection::PrecedentCases(_) => SectionKind::PrecedentCases,
            DashboardSection::RecommendedActions(_) => SectionKind::RecommendedActions,
        }
    }
}

impl DashboardReport {
    pub fn section_kinds(&self) -> Vec<SectionKind> {
        self.sections.iter().map(DashboardSection::kind).collect()
    }
}

/// Summary card title: "Research Summary" for case law, "Executive Summary"
/// for everything else.
pub fn summary_title(document_type: &DocumentType) -> &'static str {
    match document_type {
        DocumentType::CaseLaw => RESEARCH_SUMMARY_TITLE,
        DocumentType::Contract | DocumentType::Unrecognized(_) => EXECUTIVE_SUMMARY_TITLE,
    }
}

/// Header subtitle: `client_name • client_email • <type label>`.
pub fn header_subtitle(document: &LegalDocument) -> String {
    [
        document.client_name.as_str(),
        document.client_email.as_str(),
        document.document_type.display_label(),
    ]
    .join(SUBTITLE_SEPARATOR)
}

/// Build the dashboard plan for a document.
pub fn plan_dashboard(document: &LegalDocument) -> DashboardView {
    let Some(results) = &document.results else {
        return DashboardView::Empty;
    };

    let header = DashboardHeader {
        title: document.display_title().to_string(),
        subtitle: header_subtitle(document),
    };

    let mut sections = vec![
        DashboardSection::Summary {
            title: summary_title(&document.document_type),
            body: results.executive_summary.clone(),
        },
        DashboardSection::Score {
            risk_score: results.risk_score,
            confidence_score: results.confidence_score,
            document_type: document.document_type.clone(),
        },
    ];

    if document.document_type.is_contract() {
        sections.push(DashboardSection::ComplianceFlags(
            results.compliance_flags.clone(),
        ));
        sections.push(DashboardSection::ExtractedClauses(
            results.extracted_clauses.clone(),
        ));
        sections.push(DashboardSection::PrecedentCases(
            results.precedent_cases.clone(),
        ));
    }

    sections.push(DashboardSection::RecommendedActions(
        results.recommended_actions.clone(),
    ));

    DashboardView::Report(DashboardReport { header, sections })
}

// ---------------------------------------------------------------------------
// Score presentation
// ---------------------------------------------------------------------------

/// How the score card reads a document's primary score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreKind {
    /// Contract risk: higher is worse.
    Risk,
    /// Case-law applicability: higher is more relevant.
    Applicability,
}

impl ScoreKind {
    pub fn for_document_type(document_type: &DocumentType) -> Self {
        match document_type {
            DocumentType::Contract => ScoreKind::Risk,
            DocumentType::CaseLaw | DocumentType::Unrecognized(_) => ScoreKind::Applicability,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ScoreKind::Risk => "Risk Score",
            ScoreKind::Applicability => "Applicability Score",
        }
    }
}

/// Coarse band for a 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Low,
    Medium,
    High,
}

impl ScoreBand {
    pub fn from_score(score: f64) -> Self {
        let score = clamp_percent(score);
        if score < 40.0 {
            ScoreBand::Low
        } else if score < 70.0 {
            ScoreBand::Medium
        } else {
            ScoreBand::High
        }
    }

    pub fn label(&self, kind: ScoreKind) -> &'static str {
        match (kind, self) {
            (ScoreKind::Risk, ScoreBand::Low) => "Low Risk",
            (ScoreKind::Risk, ScoreBand::Medium) => "Medium Risk",
            (ScoreKind::Risk, ScoreBand::High) => "High Risk",
            (ScoreKind::Applicability, ScoreBand::Low) => "Low",
            (ScoreKind::Applicability, ScoreBand::Medium) => "Moderate",
            (ScoreKind::Applicability, ScoreBand::High) => "Strong",
        }
    }
}

/// Clamp a score into 0-100. NaN maps to 0.
pub fn clamp_percent(score: f64) -> f64 {
    if score.is_nan() {
        0.0
    } else {
        score.clamp(0.0, 100.0)
    }
}

/// Format a score to one decimal place, dropping a trailing `.0`.
pub fn format_score(score: f64) -> String {
    // `+ 0.0` folds -0.0 into 0.0
    let rounded = (score * 10.0).round() / 10.0 + 0.0;
    if rounded.fract() == 0.0 {
        format!("{:.0}", rounded)
    } else {
        format!("{:.1}", rounded)
    }
}
