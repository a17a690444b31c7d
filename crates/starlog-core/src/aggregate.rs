//! Corpus-wide statistics over the full record collections.
//!
//! Three independent read-only reports, each a single scan:
//!
//! - the error-type histogram (classified errors only -- unmatched
//!   descriptions are dropped, not bucketed);
//! - the `VariableHasNoValue` ranking, keyed on the full matched
//!   substring and sorted by descending count;
//! - editor adoption, the share of known users with at least one
//!   editor save.
//!
//! The user-id universe derives from command records only. A user who
//! only triggered errors or only saved editor content never issued a
//! command and is excluded from the adoption denominator, keeping
//! adoption numbers comparable across report runs.

use std::collections::{BTreeMap, BTreeSet};

use starlog_types::{ErrorInstance, ReplCommand};

use crate::classify::{ErrorCategory, ErrorPatterns};

/// Tally every classifiable error description by category.
///
/// Descriptions matching no pattern contribute to no bucket, so the sum
/// over all buckets equals the number of matched errors only. The
/// result is a `BTreeMap` so iteration order is deterministic.
pub fn error_type_histogram(
    patterns: &ErrorPatterns,
    errors: &[ErrorInstance],
) -> BTreeMap<ErrorCategory, u64> {
    let mut histogram = BTreeMap::new();

    for error in errors {
        if let Some(category) = patterns.classify(&error.description) {
            histogram
                .entry(category)
                .and_modify(|count: &mut u64| *count = count.saturating_add(1))
                .or_insert(1);
        }
    }

    histogram
}

/// One entry of the `VariableHasNoValue` ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableNoValueCount {
    /// The full matched substring, e.g. `Variable fuel has no value`.
    pub variable: String,
    /// How many error records produced this match.
    pub count: u64,
}

/// Rank `VariableHasNoValue` matches by frequency.
///
/// Sorted by descending count; ties break ascending by match text so
/// repeated runs over identical input produce identical output.
pub fn variable_no_value_ranking(
    patterns: &ErrorPatterns,
    errors: &[ErrorInstance],
) -> Vec<VariableNoValueCount> {
    let mut tallies: BTreeMap<&str, u64> = BTreeMap::new();

    for error in errors {
        if let Some(matched) = patterns.variable_no_value_match(&error.description) {
            tallies
                .entry(matched)
                .and_modify(|count| *count = count.saturating_add(1))
                .or_insert(1);
        }
    }

    let mut ranking: Vec<VariableNoValueCount> = tallies
        .into_iter()
        .map(|(variable, count)| VariableNoValueCount {
            variable: variable.to_owned(),
            count,
        })
        .collect();

    ranking.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.variable.cmp(&b.variable))
    });

    ranking
}

/// Collect the distinct user ids seen in command records.
///
/// This is the known-user universe for the adoption report: users who
/// never issued a REPL command are deliberately not part of it.
pub fn distinct_uids(commands: &[ReplCommand]) -> BTreeSet<String> {
    commands.iter().map(|cmd| cmd.uid.clone()).collect()
}

/// Editor adoption across the known-user universe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorAdoption {
    /// Users with at least one editor save.
    pub users_with_editor: u64,
    /// All known users (the adoption denominator).
    pub total_users: u64,
}

/// Compute editor adoption: how many known users saved the editor at
/// least once, out of all known users.
pub fn editor_adoption(
    known_uids: &BTreeSet<String>,
    uids_with_saves: &BTreeSet<String>,
) -> EditorAdoption {
    let users_with_editor = known_uids
        .iter()
        .filter(|uid| uids_with_saves.contains(*uid))
        .count();

    EditorAdoption {
        users_with_editor: u64::try_from(users_with_editor).unwrap_or(u64::MAX),
        total_users: u64::try_from(known_uids.len()).unwrap_or(u64::MAX),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn patterns() -> ErrorPatterns {
        ErrorPatterns::new().unwrap()
    }

    fn error(uid: &str, description: &str) -> ErrorInstance {
        ErrorInstance {
            uid: uid.to_owned(),
            timestamp: 0,
            description: description.to_owned(),
        }
    }

    fn command(uid: &str) -> ReplCommand {
        ReplCommand {
            uid: uid.to_owned(),
            timestamp: 0,
            command: "(help)".to_owned(),
        }
    }

    #[test]
    fn histogram_counts_matched_errors_only() {
        let errors = [
            error("u-1", "Too many arguments"),
            error("u-1", "Too many arguments"),
            error("u-2", "Variable fuel has no value"),
            error("u-2", "a completely unrelated failure"),
        ];

        let histogram = error_type_histogram(&patterns(), &errors);
        assert_eq!(
            histogram.get(&ErrorCategory::TooManyArguments).copied(),
            Some(2)
        );
        assert_eq!(
            histogram.get(&ErrorCategory::VariableHasNoValue).copied(),
            Some(1)
        );
        // Unmatched errors are dropped, so the total equals the number
        // of matched errors.
        let total: u64 = histogram.values().sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn histogram_of_unmatched_errors_is_empty() {
        let errors = [error("u-1", "a completely unrelated failure")];
        assert!(error_type_histogram(&patterns(), &errors).is_empty());
    }

    #[test]
    fn ranking_sorts_by_descending_count() {
        let errors = [
            error("u-1", "Variable alpha has no value"),
            error("u-2", "Variable beta has no value"),
            error("u-3", "Variable beta has no value"),
        ];

        let ranking = variable_no_value_ranking(&patterns(), &errors);
        let order: Vec<(&str, u64)> = ranking
            .iter()
            .map(|entry| (entry.variable.as_str(), entry.count))
            .collect();
        assert_eq!(
            order,
            vec![
                ("Variable beta has no value", 2),
                ("Variable alpha has no value", 1),
            ]
        );
    }

    #[test]
    fn ranking_ties_break_lexicographically() {
        let errors = [
            error("u-1", "Variable zeta has no value"),
            error("u-2", "Variable alpha has no value"),
        ];

        let ranking = variable_no_value_ranking(&patterns(), &errors);
        let order: Vec<&str> = ranking.iter().map(|e| e.variable.as_str()).collect();
        assert_eq!(
            order,
            vec![
                "Variable alpha has no value",
                "Variable zeta has no value",
            ]
        );
    }

    #[test]
    fn ranking_keys_on_full_match_within_longer_text() {
        let errors = [
            error("u-1", "eval: Variable fuel has no value (line 2)"),
            error("u-2", "Variable fuel has no value"),
        ];

        let ranking = variable_no_value_ranking(&patterns(), &errors);
        assert_eq!(ranking.len(), 1);
        let top = ranking.first().unwrap();
        assert_eq!(top.variable, "Variable fuel has no value");
        assert_eq!(top.count, 2);
    }

    #[test]
    fn uid_universe_derives_from_commands_only() {
        let commands = [command("u-1"), command("u-2"), command("u-1")];
        let uids = distinct_uids(&commands);
        assert_eq!(uids.len(), 2);
        assert!(uids.contains("u-1"));
        assert!(uids.contains("u-2"));
    }

    #[test]
    fn adoption_excludes_users_outside_the_universe() {
        // u-3 only saved editor content and never issued a command, so
        // it is outside the universe entirely: neither numerator nor
        // denominator.
        let known: BTreeSet<String> = ["u-1", "u-2"].iter().map(|s| (*s).to_owned()).collect();
        let with_saves: BTreeSet<String> =
            ["u-2", "u-3"].iter().map(|s| (*s).to_owned()).collect();

        let adoption = editor_adoption(&known, &with_saves);
        assert_eq!(adoption.users_with_editor, 1);
        assert_eq!(adoption.total_users, 2);
    }

    #[test]
    fn adoption_of_empty_universe_is_zero_over_zero() {
        let adoption = editor_adoption(&BTreeSet::new(), &BTreeSet::new());
        assert_eq!(adoption.users_with_editor, 0);
        assert_eq!(adoption.total_users, 0);
    }
}
