//! Plain-text rendering of an [`Assessment`].

use std::io::{self, Write};

use crate::evaluator::MAX_POINTS;
use crate::types::{Assessment, Criterion};

fn yes_no(met: bool) -> &'static str {
    if met { "YES" } else { "NO" }
}

/// Writes the strength report for `assessment` to `out`.
pub fn print_report<W: Write + ?Sized>(assessment: &Assessment, out: &mut W) -> io::Result<()> {
    let c = assessment.criteria();

    writeln!(out)?;
    writeln!(out, "Password Strength Report")?;
    writeln!(out, "------------------------")?;
    writeln!(out, "Strength : {}", assessment.strength())?;
    writeln!(
        out,
        "Score    : {}/{} ({}%)",
        assessment.score_points(),
        MAX_POINTS,
        assessment.score_percent()
    )?;

    writeln!(out)?;
    writeln!(out, "Checks:")?;
    for criterion in Criterion::ALL {
        let met = c.is_met(criterion);
        match criterion {
            Criterion::Length => {
                writeln!(out, " - {} : {}", criterion.label(), if met { "OK" } else { "NO" })?
            }
            _ => writeln!(out, " - {:<27}: {}", criterion.label(), yes_no(met))?,
        }
    }
    writeln!(out)?;
    writeln!(out, "Suggestions:")?;
    for suggestion in assessment.suggestions() {
        writeln!(out, " * {}", suggestion)?;
    }
    writeln!(out)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluate_password_strength;
    use secrecy::SecretString;

    fn render(password: &str) -> String {
        let assessment =
            evaluate_password_strength(&SecretString::new(password.to_string().into()));
        let mut out = Vec::new();
        print_report(&assessment, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_report_strong_password() {
        let expected = "\n\
Password Strength Report\n\
------------------------\n\
Strength : STRONG\n\
Score    : 5/5 (100%)\n\
\n\
Checks:\n \
- Length >= 8 : OK\n \
- Contains UPPERCASE letter  : YES\n \
- Contains lowercase letter  : YES\n \
- Contains digit             : YES\n \
- Contains special character : YES\n\
\n\
Suggestions:\n \
* Good! For stronger security, use a passphrase or 16+ characters.\n\
\n";
        assert_eq!(render("Password1!"), expected);
    }

    #[test]
    fn test_report_medium_password() {
        let report = render("PASSWORD1");
        assert!(report.contains("Strength : MEDIUM\n"));
        assert!(report.contains("Score    : 3/5 (60%)\n"));
        assert!(report.contains(" - Contains lowercase letter  : NO\n"));
        assert!(report.contains(" * Add at least one lowercase letter (a-z).\n"));
        assert!(report.contains(" * Add at least one special character (e.g. !@#$%^&*).\n"));
    }

    #[test]
    fn test_report_never_contains_password() {
        let report = render("Tr0ub4dor&3");
        assert!(!report.contains("Tr0ub4dor&3"));
    }

    #[test]
    fn test_report_short_password_marks_length() {
        let report = render("abc");
        assert!(report.contains(" - Length >= 8 : NO\n"));
        assert!(report.contains("Strength : WEAK\n"));
    }
}
