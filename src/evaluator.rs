//! Password strength evaluator - main evaluation logic.

use secrecy::SecretString;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::sections::{
    digit_section, length_section, lowercase_section, special_section, uppercase_section,
    SectionResult,
};
use crate::types::{Assessment, Criteria, Criterion, PasswordStrength};

/// Highest score a password can reach: one point per criterion.
pub const MAX_POINTS: u8 = 5;

/// Shown alone when every criterion is met.
pub const ALL_MET_SUGGESTION: &str =
    "Good! For stronger security, use a passphrase or 16+ characters.";

/// Evaluates password strength against the five composition criteria.
///
/// Pure and deterministic: any string, including the empty one, yields an
/// assessment.
pub fn evaluate_password_strength(password: &SecretString) -> Assessment {
    let mut criteria = Criteria::default();
    let mut suggestions = Vec::new();

    // Orchestrator: execute sections in report order
    let sections: [(Criterion, fn(&SecretString) -> SectionResult); 5] = [
        (Criterion::Length, length_section),
        (Criterion::Upper, uppercase_section),
        (Criterion::Lower, lowercase_section),
        (Criterion::Digit, digit_section),
        (Criterion::Special, special_section),
    ];

    for (criterion, section_fn) in sections {
        match section_fn(password) {
            Some(suggestion) => {
                criteria.set(criterion, false);
                suggestions.push(suggestion.to_string());
            }
            None => criteria.set(criterion, true),
        }
    }

    if suggestions.is_empty() {
        suggestions.push(ALL_MET_SUGGESTION.to_string());
    }

    let strength = PasswordStrength::from_criteria(criteria.length, criteria.class_count());
    let score_points = criteria.met_count() as u8;
    let score_percent = score_percent(score_points);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        strength = %strength,
        score_points,
        unmet = Criterion::ALL.len() - criteria.met_count(),
        "password evaluated"
    );

    Assessment::new(criteria, strength, score_points, score_percent, suggestions)
}

/// `round(points / MAX_POINTS * 100)`, in integer arithmetic.
fn score_percent(points: u8) -> u8 {
    let points = u32::from(points.min(MAX_POINTS));
    let max = u32::from(MAX_POINTS);
    ((points * 100 + max / 2) / max) as u8
}

/// Async version that sends the assessment via channel.
///
/// Nothing is sent if `token` is cancelled before evaluation starts.
#[cfg(feature = "async")]
pub async fn evaluate_password_strength_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<Assessment>,
) {
    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::info!("evaluation cancelled before start");
        return;
    }

    let assessment = evaluate_password_strength(password);

    if let Err(e) = tx.send(assessment).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password assessment: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluate(s: &str) -> Assessment {
        evaluate_password_strength(&SecretString::new(s.to_string().into()))
    }

    #[test]
    fn test_evaluate_all_criteria_met() {
        let assessment = evaluate("Password1!");
        let c = assessment.criteria();
        assert!(c.length && c.upper && c.lower && c.digit && c.special);
        assert_eq!(assessment.strength(), PasswordStrength::Strong);
        assert_eq!(assessment.score_points(), 5);
        assert_eq!(assessment.score_percent(), 100);
        assert_eq!(assessment.suggestions(), [ALL_MET_SUGGESTION.to_string()]);
    }

    #[test]
    fn test_evaluate_lowercase_only() {
        let assessment = evaluate("password");
        assert_eq!(
            *assessment.criteria(),
            Criteria {
                length: true,
                upper: false,
                lower: true,
                digit: false,
                special: false,
            }
        );
        // Length passes but a single class keeps it WEAK.
        assert_eq!(assessment.strength(), PasswordStrength::Weak);
        assert_eq!(assessment.score_points(), 2);
        assert_eq!(assessment.score_percent(), 40);
    }

    #[test]
    fn test_evaluate_short_lowercase() {
        let assessment = evaluate("passwor");
        assert_eq!(assessment.strength(), PasswordStrength::Weak);
        assert_eq!(assessment.score_points(), 1);
        assert_eq!(assessment.score_percent(), 20);
    }

    #[test]
    fn test_evaluate_medium_password() {
        let assessment = evaluate("PASSWORD1");
        let c = assessment.criteria();
        assert!(c.length && c.upper && c.digit);
        assert!(!c.lower && !c.special);
        assert_eq!(assessment.strength(), PasswordStrength::Medium);
        assert_eq!(assessment.score_points(), 3);
        assert_eq!(assessment.score_percent(), 60);
        assert_eq!(
            assessment.suggestions(),
            [
                Criterion::Lower.suggestion().to_string(),
                Criterion::Special.suggestion().to_string(),
            ]
        );
    }

    #[test]
    fn test_evaluate_short_strong_classes_is_weak() {
        let assessment = evaluate("Aa1!");
        assert_eq!(assessment.criteria().class_count(), 4);
        assert_eq!(assessment.strength(), PasswordStrength::Weak);
        assert_eq!(assessment.score_points(), 4);
        assert_eq!(assessment.score_percent(), 80);
        assert_eq!(
            assessment.suggestions(),
            [Criterion::Length.suggestion().to_string()]
        );
    }

    #[test]
    fn test_evaluate_empty_password() {
        let assessment = evaluate("");
        assert_eq!(assessment.strength(), PasswordStrength::Weak);
        // No characters at all, so not even the special class is satisfied.
        assert_eq!(*assessment.criteria(), Criteria::default());
        assert_eq!(assessment.score_points(), 0);
        assert_eq!(assessment.score_percent(), 0);
        assert_eq!(assessment.suggestions().len(), 5);
    }

    #[test]
    fn test_suggestions_follow_fixed_order() {
        let assessment = evaluate("");
        let expected: Vec<String> = Criterion::ALL
            .iter()
            .map(|c| c.suggestion().to_string())
            .collect();
        assert_eq!(assessment.suggestions(), expected.as_slice());
    }

    #[test]
    fn test_score_percent_rounding() {
        assert_eq!(score_percent(0), 0);
        assert_eq!(score_percent(1), 20);
        assert_eq!(score_percent(4), 80);
        assert_eq!(score_percent(5), 100);
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;

    #[tokio::test]
    async fn test_evaluate_with_cancellation() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();

        let pwd = SecretString::new("SomePassword123!".to_string().into());
        evaluate_password_strength_tx(&pwd, token, tx).await;

        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_evaluate_password_strength_tx() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();

        let pwd = SecretString::new("TestPass123!".to_string().into());
        evaluate_password_strength_tx(&pwd, token, tx).await;

        let assessment = rx.recv().await.expect("Should receive assessment");
        assert_eq!(assessment.strength(), PasswordStrength::Strong);
    }
}
