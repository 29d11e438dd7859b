use crate::api::models::ParticipantDto;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectorKind {
    Boosted,
    Smurf,
}

impl fmt::Display for DetectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetectorKind::Boosted => write!(f, "boosted"),
            DetectorKind::Smurf => write!(f, "smurf"),
        }
    }
}

/// Decision rule applied to a candidate's recent KDA. Both variants are rough
/// heuristics with no confidence bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DetectionRule {
    /// Suspicious when the short-window average reaches `factor` times the
    /// long-window average.
    Boosted {
        short_window: usize,
        long_window: usize,
        factor: f64,
    },
    /// Suspicious when an account at or below `level_ceiling` averages at
    /// least `threshold` over `window` matches.
    Smurf {
        window: usize,
        threshold: f64,
        level_ceiling: i64,
    },
}

impl DetectionRule {
    pub fn kind(&self) -> DetectorKind {
        match self {
            DetectionRule::Boosted { .. } => DetectorKind::Boosted,
            DetectionRule::Smurf { .. } => DetectorKind::Smurf,
        }
    }

    /// Cheap pre-filter applied before any lookup is spent on a participant.
    pub fn is_candidate(&self, participant: &ParticipantDto) -> bool {
        match self {
            DetectionRule::Boosted { .. } => true,
            DetectionRule::Smurf { level_ceiling, .. } => {
                participant.summoner_level <= *level_ceiling
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipelineSettings {
    pub rule: DetectionRule,
    /// Top-level matches listed for the target summoner.
    pub match_count: usize,
    /// Weekdays kept in the report, busiest first.
    pub weekday_limit: usize,
}

impl PipelineSettings {
    pub fn boosted() -> Self {
        PipelineSettings {
            rule: DetectionRule::Boosted {
                short_window: 10,
                long_window: 50,
                factor: 2.0,
            },
            match_count: 5,
            weekday_limit: 3,
        }
    }

    pub fn smurf() -> Self {
        PipelineSettings {
            rule: DetectionRule::Smurf {
                window: 10,
                threshold: 4.0,
                level_ceiling: 70,
            },
            match_count: 20,
            weekday_limit: 7,
        }
    }

    pub fn with_match_count(mut self, match_count: usize) -> Self {
        self.match_count = match_count;
        self
    }

    pub fn kind(&self) -> DetectorKind {
        self.rule.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::participant;

    #[test]
    fn test_smurf_level_ceiling() {
        let rule = PipelineSettings::smurf().rule;
        assert!(rule.is_candidate(&participant("a", "a", 50, 0, 0, 0)));
        assert!(rule.is_candidate(&participant("b", "b", 70, 0, 0, 0)));
        assert!(!rule.is_candidate(&participant("c", "c", 80, 0, 0, 0)));
    }

    #[test]
    fn test_boosted_has_no_level_filter() {
        let rule = PipelineSettings::boosted().rule;
        assert!(rule.is_candidate(&participant("a", "a", 1, 0, 0, 0)));
        assert!(rule.is_candidate(&participant("b", "b", 900, 0, 0, 0)));
    }

    #[test]
    fn test_defaults() {
        let boosted = PipelineSettings::boosted();
        assert_eq!(boosted.kind(), DetectorKind::Boosted);
        assert_eq!(boosted.match_count, 5);
        assert_eq!(boosted.weekday_limit, 3);

        let smurf = PipelineSettings::smurf().with_match_count(40);
        assert_eq!(smurf.kind(), DetectorKind::Smurf);
        assert_eq!(smurf.match_count, 40);
        assert_eq!(smurf.weekday_limit, 7);
    }
}
