//! Batch converter
//!
//!     Each input string moves through one pipeline and ends in exactly one state:
//!
//!         pending -> filtered      head is an excluded predicate
//!                 -> skipped       parse or translation failure
//!                 -> duplicate     same translated body as an earlier input
//!                 -> emitted       named and written as an axiom
//!
//!     A failure stays local to its input. The converter owns its dedup set and name counter
//!     per call, so one converter can run any number of batches.

use super::document::{self, Role};
use super::naming::AxiomNamer;
use super::outcome::{
    BatchResult, BatchStats, FormulaOutcome, GoalOutcome, SkipReason, SkippedFormula,
};
use crate::kif::formula::{text, Formula};
use crate::kif::translation::symbols::is_excluded;
use crate::kif::translation::{TranslationOptions, Translator};
use chrono::{DateTime, Utc};
use std::collections::HashSet;

pub const DEFAULT_KB_NAME: &str = "KB";

/// A conjecture to prove or a question to answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Goal {
    pub text: String,
    pub is_question: bool,
}

impl Goal {
    pub fn conjecture(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_question: false,
        }
    }

    pub fn question(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_question: true,
        }
    }

    fn name_and_role(&self) -> (&'static str, Role) {
        if self.is_question {
            ("query", Role::Question)
        } else {
            ("goal", Role::Conjecture)
        }
    }
}

#[derive(Debug, Clone)]
pub struct BatchConverter {
    options: TranslationOptions,
    kb_name: String,
    generated_at: Option<DateTime<Utc>>,
}

impl BatchConverter {
    pub fn new(options: TranslationOptions) -> Self {
        Self {
            options,
            kb_name: DEFAULT_KB_NAME.to_string(),
            generated_at: None,
        }
    }

    pub fn kb_name(mut self, kb_name: impl Into<String>) -> Self {
        self.kb_name = kb_name.into();
        self
    }

    /// Pin the header timestamp instead of using the current time
    pub fn generated_at(mut self, at: DateTime<Utc>) -> Self {
        self.generated_at = Some(at);
        self
    }

    pub fn options(&self) -> &TranslationOptions {
        &self.options
    }

    pub fn convert<S: AsRef<str>>(&self, formulas: &[S], goal: Option<&Goal>) -> BatchResult {
        let translator = Translator::new(self.options);
        let dialect = self.options.output_dialect;
        let mut namer = AxiomNamer::new();
        let mut seen: HashSet<String> = HashSet::new();

        let mut stats = BatchStats {
            total: formulas.len(),
            ..Default::default()
        };
        let mut outcomes = Vec::with_capacity(formulas.len());
        let mut skipped = Vec::new();
        let mut body_lines = Vec::new();

        for (index, source) in formulas.iter().enumerate() {
            let source = source.as_ref();
            let outcome = match self.translate_one(&translator, source) {
                Ok((formula, body)) => {
                    if seen.insert(body.clone()) {
                        let name = namer.next_name(formula.node());
                        log::trace!("formula {} emitted as {}", index, name);
                        if self.options.include_source_comments {
                            body_lines.push(document::source_comment(source));
                        }
                        body_lines.push(document::formula_line(dialect, &name, Role::Axiom, &body));
                        stats.axioms_written += 1;
                        FormulaOutcome::Emitted { name }
                    } else {
                        log::debug!("formula {} duplicates an earlier axiom", index);
                        stats.duplicates += 1;
                        FormulaOutcome::Skipped(SkipReason::DuplicateOfExisting)
                    }
                }
                Err(SkipReason::Filtered) => {
                    log::debug!("formula {} filtered", index);
                    stats.filtered += 1;
                    FormulaOutcome::Skipped(SkipReason::Filtered)
                }
                Err(reason) => {
                    log::debug!("formula {} skipped: {}", index, reason);
                    stats.skipped += 1;
                    skipped.push(SkippedFormula {
                        index,
                        reason: reason.clone(),
                    });
                    FormulaOutcome::Skipped(reason)
                }
            };
            outcomes.push(outcome);
        }

        let goal = goal.map(|goal| self.translate_goal(&translator, goal));
        let goal_failure = match &goal {
            Some(GoalOutcome::Failed(reason)) => {
                log::warn!("goal not emitted: {}", reason);
                Some(reason)
            }
            _ => None,
        };

        log::info!(
            "{}: {} formulas, {} axioms, {} filtered, {} duplicates, {} skipped",
            self.kb_name,
            stats.total,
            stats.axioms_written,
            stats.filtered,
            stats.duplicates,
            stats.skipped
        );

        let generated_at = self.generated_at.unwrap_or_else(Utc::now);
        let mut lines = document::header(&self.kb_name, &generated_at, dialect);
        lines.push(String::new());
        lines.extend(body_lines);
        if let Some(GoalOutcome::Emitted { name, role, body }) = &goal {
            lines.push(String::new());
            lines.push(document::formula_line(dialect, name, *role, body));
        }
        lines.push(String::new());
        lines.extend(document::footer(&stats, &skipped, goal_failure));

        let mut document = lines.join("\n");
        document.push('\n');

        BatchResult {
            document,
            axiom_count: stats.axioms_written,
            skipped,
            outcomes,
            stats,
            goal,
        }
    }

    fn translate_one(
        &self,
        translator: &Translator,
        source: &str,
    ) -> Result<(Formula, String), SkipReason> {
        if text::head_symbol(source).is_some_and(is_excluded) {
            return Err(SkipReason::Filtered);
        }

        let formula =
            Formula::parse(source).map_err(|error| SkipReason::ParseFailure(error.to_string()))?;
        if formula.head_symbol().is_some_and(is_excluded) {
            return Err(SkipReason::Filtered);
        }

        let body = translator.translate_formula(formula.node())?;
        Ok((formula, body))
    }

    fn translate_goal(&self, translator: &Translator, goal: &Goal) -> GoalOutcome {
        let (name, role) = goal.name_and_role();
        let translated = Formula::parse(&goal.text)
            .map_err(|error| SkipReason::ParseFailure(error.to_string()))
            .and_then(|formula| {
                translator
                    .translate_query(formula.node())
                    .map_err(SkipReason::from)
            });

        match translated {
            Ok(body) => GoalOutcome::Emitted {
                name: name.to_string(),
                role,
                body,
            },
            Err(reason) => GoalOutcome::Failed(reason),
        }
    }
}

/// Convert a knowledge base in one call
///
/// `conjecture`, when given, becomes the goal; `is_question` selects the `question` role
/// instead of `conjecture`.
pub fn convert_batch<S: AsRef<str>>(
    formulas: &[S],
    kb_name: &str,
    options: &TranslationOptions,
    conjecture: Option<&str>,
    is_question: bool,
) -> BatchResult {
    let goal = conjecture.map(|text| Goal {
        text: text.to_string(),
        is_question,
    });
    BatchConverter::new(*options)
        .kb_name(kb_name)
        .convert(formulas, goal.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kif::translation::TranslationError;
    use chrono::TimeZone;

    fn converter() -> BatchConverter {
        BatchConverter::new(TranslationOptions::default())
            .kb_name("Test")
            .generated_at(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
    }

    #[test]
    fn test_outcomes_in_input_order() {
        let result = converter().convert(
            &[
                "(subclass Dog Animal)",
                "(documentation Dog EnglishLanguage \"A dog.\")",
                "(subclass Dog Animal)",
                "(believes John (and (p A) (q A)))",
                "(p A",
            ],
            None,
        );

        assert_eq!(result.axiom_count, 1);
        assert_eq!(
            result.outcomes[0],
            FormulaOutcome::Emitted {
                name: "subclass_Dog_1".into()
            }
        );
        assert_eq!(result.outcomes[1], FormulaOutcome::Skipped(SkipReason::Filtered));
        assert_eq!(
            result.outcomes[2],
            FormulaOutcome::Skipped(SkipReason::DuplicateOfExisting)
        );
        assert_eq!(
            result.outcomes[3],
            FormulaOutcome::Skipped(SkipReason::HigherOrderConstruct(
                TranslationError::FormulaAsTerm { head: "and".into() }
            ))
        );
        assert!(matches!(
            result.outcomes[4],
            FormulaOutcome::Skipped(SkipReason::ParseFailure(_))
        ));

        assert_eq!(
            result.stats,
            BatchStats {
                total: 5,
                axioms_written: 1,
                filtered: 1,
                duplicates: 1,
                skipped: 2,
            }
        );
        assert_eq!(
            result.skipped.iter().map(|s| s.index).collect::<Vec<_>>(),
            vec![3, 4]
        );
    }

    #[test]
    fn test_filter_sees_past_comments() {
        let result = converter().convert(&["( ;\n documentation Dog \"x\")"], None);
        assert_eq!(result.stats.filtered, 1);
    }

    #[test]
    fn test_empty_batch() {
        let empty: [&str; 0] = [];
        let result = converter().convert(&empty, None);
        assert_eq!(result.axiom_count, 0);
        assert!(result.document.starts_with("% Knowledge base: Test\n"));
        assert!(result.document.contains("% Axioms written: 0"));
    }

    #[test]
    fn test_goal_lines() {
        let conjecture = Goal::conjecture("(instance ?X Animal)");
        let result = converter().convert(&["(instance Fido Dog)"], Some(&conjecture));
        assert!(result
            .document
            .contains("fof(goal, conjecture, (( ? [V__X] : (s__instance(V__X,s__Animal)) )))."));

        let question = Goal::question("(instance Fido ?C)");
        let result = converter().convert(&["(instance Fido Dog)"], Some(&question));
        assert!(result.document.contains("fof(query, question, "));
    }

    #[test]
    fn test_goal_failure_is_reported_not_fatal() {
        let goal = Goal::conjecture("(p (and A B))");
        let result = converter().convert(&["(subclass Dog Animal)"], Some(&goal));
        assert_eq!(result.axiom_count, 1);
        assert!(matches!(result.goal, Some(GoalOutcome::Failed(_))));
        assert!(result.document.contains("% Goal not emitted: higher-order"));
    }

    #[test]
    fn test_source_comments() {
        let options = TranslationOptions {
            include_source_comments: true,
            ..Default::default()
        };
        let result = BatchConverter::new(options).convert(&["(subclass Dog\n  Animal)"], None);
        assert!(result.document.contains(
            "% (subclass Dog Animal)\nfof(subclass_Dog_1, axiom, (s__subclass(s__Dog,s__Animal)))."
        ));
    }

    #[test]
    fn test_convert_batch_free_function() {
        let result = convert_batch(
            &["(subclass Dog Animal)".to_string()],
            "SUMO",
            &TranslationOptions::default(),
            Some("(subclass Dog ?X)"),
            true,
        );
        assert_eq!(result.axiom_count, 1);
        assert!(matches!(result.goal, Some(GoalOutcome::Emitted { .. })));
        assert!(result.document.contains("% Knowledge base: SUMO"));
    }
}
