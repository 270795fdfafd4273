//! Value types produced by the evaluator.

use std::fmt;

/// Coarse strength tier of a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
}

impl PasswordStrength {
    /// Tier for a password given its length check and the number of
    /// satisfied character classes (0-4).
    pub fn from_criteria(length_ok: bool, class_count: usize) -> Self {
        if !length_ok {
            return PasswordStrength::Weak;
        }
        match class_count {
            0 | 1 => PasswordStrength::Weak,
            2 | 3 => PasswordStrength::Medium,
            _ => PasswordStrength::Strong,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PasswordStrength::Weak => "WEAK",
            PasswordStrength::Medium => "MEDIUM",
            PasswordStrength::Strong => "STRONG",
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One composition rule, listed in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Criterion {
    Length,
    Upper,
    Lower,
    Digit,
    Special,
}

impl Criterion {
    pub const ALL: [Criterion; 5] = [
        Criterion::Length,
        Criterion::Upper,
        Criterion::Lower,
        Criterion::Digit,
        Criterion::Special,
    ];

    /// Name of the check as it appears in the report.
    pub fn label(&self) -> &'static str {
        match self {
            Criterion::Length => "Length >= 8",
            Criterion::Upper => "Contains UPPERCASE letter",
            Criterion::Lower => "Contains lowercase letter",
            Criterion::Digit => "Contains digit",
            Criterion::Special => "Contains special character",
        }
    }

    /// Advice shown when this criterion is not met.
    pub fn suggestion(&self) -> &'static str {
        match self {
            Criterion::Length => "Make it at least 8 characters long (12+ recommended).",
            Criterion::Upper => "Add at least one UPPERCASE letter (A-Z).",
            Criterion::Lower => "Add at least one lowercase letter (a-z).",
            Criterion::Digit => "Add at least one digit (0-9).",
            Criterion::Special => "Add at least one special character (e.g. !@#$%^&*).",
        }
    }
}

/// Outcome of the five composition checks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Criteria {
    pub length: bool,
    pub upper: bool,
    pub lower: bool,
    pub digit: bool,
    pub special: bool,
}

impl Criteria {
    pub fn is_met(&self, criterion: Criterion) -> bool {
        match criterion {
            Criterion::Length => self.length,
            Criterion::Upper => self.upper,
            Criterion::Lower => self.lower,
            Criterion::Digit => self.digit,
            Criterion::Special => self.special,
        }
    }

    pub(crate) fn set(&mut self, criterion: Criterion, met: bool) {
        match criterion {
            Criterion::Length => self.length = met,
            Criterion::Upper => self.upper = met,
            Criterion::Lower => self.lower = met,
            Criterion::Digit => self.digit = met,
            Criterion::Special => self.special = met,
        }
    }

    /// Number of satisfied character classes (upper, lower, digit, special).
    pub fn class_count(&self) -> usize {
        [self.upper, self.lower, self.digit, self.special]
            .iter()
            .filter(|&&b| b)
            .count()
    }

    /// Number of satisfied criteria, length included.
    pub fn met_count(&self) -> usize {
        usize::from(self.length) + self.class_count()
    }

    pub fn all_met(&self) -> bool {
        self.met_count() == Criterion::ALL.len()
    }
}

/// Strength assessment of a single password.
///
/// Built by [`evaluate_password_strength`](crate::evaluate_password_strength);
/// it holds no trace of the password itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assessment {
    criteria: Criteria,
    strength: PasswordStrength,
    score_points: u8,
    score_percent: u8,
    suggestions: Vec<String>,
}

impl Assessment {
    pub(crate) fn new(
        criteria: Criteria,
        strength: PasswordStrength,
        score_points: u8,
        score_percent: u8,
        suggestions: Vec<String>,
    ) -> Self {
        Self {
            criteria,
            strength,
            score_points,
            score_percent,
            suggestions,
        }
    }

    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    pub fn strength(&self) -> PasswordStrength {
        self.strength
    }

    /// Points scored, 0 to [`MAX_POINTS`](crate::MAX_POINTS).
    pub fn score_points(&self) -> u8 {
        self.score_points
    }

    pub fn score_percent(&self) -> u8 {
        self.score_percent
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }
}
