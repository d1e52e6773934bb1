use dioxus::prelude::*;
use shared_types::{clamp_percent, format_score, DocumentType, ScoreBand, ScoreKind};

use crate::components::{Badge, ScoreBar, SectionCard, Tone};

/// Primary score and analysis confidence.
///
/// Contracts read the score as risk; every other document type reads it as
/// applicability of the researched authority.
#[component]
pub fn RiskScoreCard(
    risk_score: f64,
    confidence_score: f64,
    document_type: DocumentType,
) -> Element {
    let kind = ScoreKind::for_document_type(&document_type);
    let band = ScoreBand::from_score(risk_score);
    let title = kind.title();
    let band_label = band.label(kind);
    let tone = Tone::for_score(kind, band);
    let score_text = format_score(risk_score);
    let confidence_text = format!("{}%", format_score(clamp_percent(confidence_score)));
    let description = match kind {
        ScoreKind::Risk => "Overall contractual risk on a 0-100 scale.",
        ScoreKind::Applicability => "How closely the authority applies, on a 0-100 scale.",
    };

    rsx! {
        SectionCard {
            class: "score-card",
            title: title.to_string(),
            description: description.to_string(),
            div { class: "score-headline",
                span { class: "score-value", "{score_text}" }
                span { class: "score-scale", "/ 100" }
                Badge { tone, "{band_label}" }
            }
            ScoreBar {
                label: title.to_string(),
                value_text: score_text.clone(),
                percent: clamp_percent(risk_score),
            }
            ScoreBar {
                label: "Confidence".to_string(),
                value_text: confidence_text,
                percent: clamp_percent(confidence_score),
            }
        }
    }
}
