use dioxus::prelude::*;
use shared_types::{RiskLevel, ScoreBand, ScoreKind, Severity};

/// Colour tone of a [`Badge`], derived from what the badge labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Neutral,
    Caution,
    Danger,
    Favorable,
    Faint,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Neutral => "neutral",
            Tone::Caution => "caution",
            Tone::Danger => "danger",
            Tone::Favorable => "favorable",
            Tone::Faint => "faint",
        }
    }

    /// High risk is bad news; high applicability is good news.
    pub fn for_score(kind: ScoreKind, band: ScoreBand) -> Self {
        match (kind, band) {
            (ScoreKind::Risk, ScoreBand::Low) => Tone::Neutral,
            (ScoreKind::Risk, ScoreBand::Medium) => Tone::Caution,
            (ScoreKind::Risk, ScoreBand::High) => Tone::Danger,
            (ScoreKind::Applicability, ScoreBand::Low) => Tone::Faint,
            (ScoreKind::Applicability, ScoreBand::Medium) => Tone::Neutral,
            (ScoreKind::Applicability, ScoreBand::High) => Tone::Favorable,
        }
    }
}

impl From<Severity> for Tone {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Low => Tone::Neutral,
            Severity::Medium => Tone::Caution,
            Severity::High | Severity::Critical => Tone::Danger,
        }
    }
}

impl From<RiskLevel> for Tone {
    fn from(level: RiskLevel) -> Self {
        match level {
            RiskLevel::Low => Tone::Neutral,
            RiskLevel::Medium => Tone::Caution,
            RiskLevel::High => Tone::Danger,
        }
    }
}

/// Pill label for severities, risk levels and score bands.
#[component]
pub fn Badge(
    #[props(default)] tone: Tone,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "badge", None, false),
        Attribute::new("data-tone", tone.as_str(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            ..merged,
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn critical_and_high_share_danger() {
        assert_eq!(Tone::from(Severity::Critical), Tone::Danger);
        assert_eq!(Tone::from(Severity::High), Tone::Danger);
        assert_eq!(Tone::from(RiskLevel::High), Tone::Danger);
    }

    #[test]
    fn applicability_reads_high_as_favorable() {
        assert_eq!(
            Tone::for_score(ScoreKind::Applicability, ScoreBand::High),
            Tone::Favorable
        );
        assert_eq!(Tone::for_score(ScoreKind::Risk, ScoreBand::High), Tone::Danger);
    }
}
