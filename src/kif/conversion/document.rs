//! TPTP document assembly
//!
//!     A document is laid out as:
//!
//!         header      `%` lines naming the knowledge base, the generation time, the dialect
//!                     and the symbol prefixes
//!         axioms      one `dialect(name, axiom, (body)).` line each, in input order,
//!                     optionally preceded by the source formula as a comment
//!         goal        the conjecture or question line, when one was given
//!         footer      statistics and the enumerated skip reasons
//!
//!     Everything but the formula lines is a TPTP comment, so provers ignore it.

use super::outcome::{BatchStats, SkipReason, SkippedFormula};
use crate::kif::translation::symbols::{
    MENTION_SUFFIX, NUMBER_PREFIX, STRING_PREFIX, TERM_PREFIX, VARIABLE_PREFIX,
};
use crate::kif::translation::Dialect;
use chrono::{DateTime, SecondsFormat, Utc};

/// TPTP formula role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Axiom,
    Conjecture,
    Question,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Axiom => "axiom",
            Role::Conjecture => "conjecture",
            Role::Question => "question",
        }
    }
}

/// One annotated formula line
pub fn formula_line(dialect: Dialect, name: &str, role: Role, body: &str) -> String {
    format!("{}({}, {}, ({})).", dialect, name, role.as_str(), body)
}

/// The source formula as a single comment line
pub fn source_comment(source: &str) -> String {
    let collapsed: Vec<&str> = source.split_whitespace().collect();
    format!("% {}", collapsed.join(" "))
}

pub fn header(kb_name: &str, generated_at: &DateTime<Utc>, dialect: Dialect) -> Vec<String> {
    vec![
        format!("% Knowledge base: {}", kb_name),
        format!(
            "% Generated: {}",
            generated_at.to_rfc3339_opts(SecondsFormat::Secs, true)
        ),
        format!("% Dialect: {}", dialect),
        format!(
            "% Prefixes: {} symbols, {} variables, {} numbers, {} strings, {} mentions",
            TERM_PREFIX, VARIABLE_PREFIX, NUMBER_PREFIX, STRING_PREFIX, MENTION_SUFFIX
        ),
    ]
}

pub fn footer(
    stats: &BatchStats,
    skipped: &[SkippedFormula],
    goal_failure: Option<&SkipReason>,
) -> Vec<String> {
    let mut lines = vec![
        format!("% Formulas read: {}", stats.total),
        format!("% Axioms written: {}", stats.axioms_written),
        format!("% Filtered: {}", stats.filtered),
        format!("% Duplicates: {}", stats.duplicates),
        format!("% Skipped: {}", stats.skipped),
    ];

    if !skipped.is_empty() {
        lines.push("% Skipped formulas:".to_string());
        lines.extend(
            skipped
                .iter()
                .map(|entry| format!("%   [{}] {}", entry.index, entry.reason)),
        );
    }

    if let Some(reason) = goal_failure {
        lines.push(format!("% Goal not emitted: {}", reason));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_formula_line() {
        assert_eq!(
            formula_line(Dialect::Fof, "axiom_1", Role::Axiom, "s__p(s__A)"),
            "fof(axiom_1, axiom, (s__p(s__A)))."
        );
        assert_eq!(
            formula_line(Dialect::Thf, "goal", Role::Conjecture, "$true"),
            "thf(goal, conjecture, ($true))."
        );
    }

    #[test]
    fn test_source_comment_is_one_line() {
        assert_eq!(
            source_comment("(=> (p ?X)\n    (q ?X))"),
            "% (=> (p ?X) (q ?X))"
        );
    }

    #[test]
    fn test_header_timestamp() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
        let lines = header("SUMO", &at, Dialect::Tff);
        assert_eq!(lines[0], "% Knowledge base: SUMO");
        assert_eq!(lines[1], "% Generated: 2024-05-01T12:30:00Z");
        assert_eq!(lines[2], "% Dialect: tff");
    }

    #[test]
    fn test_footer_lists_skips() {
        let stats = BatchStats {
            total: 3,
            axioms_written: 1,
            filtered: 0,
            duplicates: 0,
            skipped: 2,
        };
        let skipped = vec![
            SkippedFormula {
                index: 1,
                reason: SkipReason::ParseFailure("no formula found".into()),
            },
            SkippedFormula {
                index: 2,
                reason: SkipReason::Filtered,
            },
        ];
        let lines = footer(&stats, &skipped, None);
        assert_eq!(lines[5], "% Skipped formulas:");
        assert_eq!(lines[6], "%   [1] parse failed: no formula found");
        assert_eq!(lines[7], "%   [2] filtered");
    }
}
