//! Ordered pattern classification of scripting-engine error text.
//!
//! The interpreter reports errors as free text. [`ErrorPatterns`] holds
//! an ordered table of (category, regex) pairs; classification walks the
//! table top to bottom and stops at the first match. Order is part of
//! the contract -- a description matching two patterns belongs to
//! whichever is tested first. Descriptions matching no pattern are not
//! an error: they are simply excluded from the histogram.
//!
//! The table is an immutable value constructed once per run and passed
//! to whoever needs it, never process-wide hidden state.

use regex::Regex;

/// A fixed category of scripting-engine error.
///
/// Variants are listed in table order. The `Display` form is the stable
/// label used in logs and reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorCategory {
    /// A call to a name the interpreter does not know.
    UnknownCallable,
    /// A variable was referenced before being given a value.
    VariableHasNoValue,
    /// A callable was invoked with the wrong number of arguments.
    InvalidNumberOfArgs,
    /// The head of a call form was not a symbol.
    CallableMustBeSymbol,
    /// A switch ID that does not exist on the ship.
    NoSwitchWithId,
    /// Propellant was routed to the backup generator.
    PropellantGenerator,
    /// Lights were routed to the backup generator.
    LightGenerator,
    /// A thruster ID that does not exist on the ship.
    NoThrusterWithId,
    /// An argument had the wrong type.
    ArgumentMustBeOfType,
    /// More arguments than the callable accepts.
    TooManyArguments,
    /// A numeric operator was given a non-number argument.
    ArgsMustBeNumbers,
}

impl ErrorCategory {
    /// Return the stable label for this category.
    pub const fn label(self) -> &'static str {
        match self {
            Self::UnknownCallable => "UnknownCallable",
            Self::VariableHasNoValue => "VariableHasNoValue",
            Self::InvalidNumberOfArgs => "InvalidNumberOfArgs",
            Self::CallableMustBeSymbol => "CallableMustBeSymbol",
            Self::NoSwitchWithId => "NoSwitchWithID",
            Self::PropellantGenerator => "PropellantGenerator",
            Self::LightGenerator => "LightGenerator",
            Self::NoThrusterWithId => "NoThrusterWithID",
            Self::ArgumentMustBeOfType => "ArgumentMustBeOfType",
            Self::TooManyArguments => "TooManyArguments",
            Self::ArgsMustBeNumbers => "ArgsMustBeNumbers",
        }
    }
}

impl core::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// Errors that can occur while building the pattern table.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    /// A pattern in the table failed to compile.
    #[error("pattern for {category} failed to compile: {source}")]
    Compile {
        /// The category whose pattern is broken.
        category: ErrorCategory,
        /// The underlying regex error.
        source: regex::Error,
    },
}

/// The ordered classification table.
///
/// Construct once with [`ErrorPatterns::new`] and share by reference.
#[derive(Debug, Clone)]
pub struct ErrorPatterns {
    table: Vec<(ErrorCategory, Regex)>,
}

/// The table source: category plus pattern text, in evaluation order.
const PATTERN_TABLE: [(ErrorCategory, &str); 11] = [
    (ErrorCategory::UnknownCallable, "Unknown callable '(.*)'"),
    (
        ErrorCategory::VariableHasNoValue,
        r"Variable ([^\s]+) has no value",
    ),
    (ErrorCategory::InvalidNumberOfArgs, "Invalid number of args"),
    (
        ErrorCategory::CallableMustBeSymbol,
        "Callable name must be a symbol",
    ),
    (
        ErrorCategory::NoSwitchWithId,
        r"No such switch with ID ([^\s]+) exists",
    ),
    (
        ErrorCategory::PropellantGenerator,
        "Propellant cannot be powered with backup generator",
    ),
    (
        ErrorCategory::LightGenerator,
        "Light cannot be powered with backup generator",
    ),
    (
        ErrorCategory::NoThrusterWithId,
        r"No thruster with ID ([^\s]+) exists",
    ),
    (
        ErrorCategory::ArgumentMustBeOfType,
        r"Argument ([^\s]+) must be of type ([^\s]+), got ([^\s]+)",
    ),
    (ErrorCategory::TooManyArguments, "Too many arguments"),
    (
        ErrorCategory::ArgsMustBeNumbers,
        "All arguments to (.) must be numbers",
    ),
];

impl ErrorPatterns {
    /// Compile the classification table.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::Compile`] if any pattern fails to compile.
    /// The patterns are fixed literals, so this only fires if the table
    /// itself is edited incorrectly.
    pub fn new() -> Result<Self, PatternError> {
        let mut table = Vec::with_capacity(PATTERN_TABLE.len());
        for (category, pattern) in PATTERN_TABLE {
            let regex = Regex::new(pattern).map_err(|source| PatternError::Compile {
                category,
                source,
            })?;
            table.push((category, regex));
        }
        Ok(Self { table })
    }

    /// Classify an error description.
    ///
    /// Returns the first category whose pattern matches, or `None` when
    /// no pattern matches (the description is then excluded from all
    /// tallies).
    pub fn classify(&self, text: &str) -> Option<ErrorCategory> {
        self.table
            .iter()
            .find(|(_, regex)| regex.is_match(text))
            .map(|(category, _)| *category)
    }

    /// Extract the [`ErrorCategory::VariableHasNoValue`] match from a
    /// description, if present.
    ///
    /// Returns the full matched substring (`Variable <name> has no
    /// value`), not the bare variable token. The ranking keys on this
    /// full match; distinct variables still produce distinct keys.
    pub fn variable_no_value_match<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.table
            .iter()
            .find(|(category, _)| *category == ErrorCategory::VariableHasNoValue)
            .and_then(|(_, regex)| regex.find(text))
            .map(|m| m.as_str())
    }

    /// Return the categories in evaluation order.
    pub fn categories(&self) -> impl Iterator<Item = ErrorCategory> + '_ {
        self.table.iter().map(|(category, _)| *category)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn patterns() -> ErrorPatterns {
        ErrorPatterns::new().unwrap()
    }

    #[test]
    fn every_category_classifies_a_sample() {
        let cases = [
            ("Unknown callable 'warp-drive'", ErrorCategory::UnknownCallable),
            ("Variable fuel has no value", ErrorCategory::VariableHasNoValue),
            ("Invalid number of args", ErrorCategory::InvalidNumberOfArgs),
            (
                "Callable name must be a symbol",
                ErrorCategory::CallableMustBeSymbol,
            ),
            (
                "No such switch with ID 9 exists",
                ErrorCategory::NoSwitchWithId,
            ),
            (
                "Propellant cannot be powered with backup generator",
                ErrorCategory::PropellantGenerator,
            ),
            (
                "Light cannot be powered with backup generator",
                ErrorCategory::LightGenerator,
            ),
            (
                "No thruster with ID 2 exists",
                ErrorCategory::NoThrusterWithId,
            ),
            (
                "Argument power must be of type number, got string",
                ErrorCategory::ArgumentMustBeOfType,
            ),
            ("Too many arguments", ErrorCategory::TooManyArguments),
            (
                "All arguments to + must be numbers",
                ErrorCategory::ArgsMustBeNumbers,
            ),
        ];

        let patterns = patterns();
        for (text, expected) in cases {
            assert_eq!(patterns.classify(text), Some(expected), "text: {text}");
        }
    }

    #[test]
    fn unmatched_text_classifies_to_none() {
        assert_eq!(
            patterns().classify("a completely unrelated failure"),
            None
        );
    }

    #[test]
    fn first_match_wins_in_table_order() {
        // Matches both VariableHasNoValue and TooManyArguments;
        // VariableHasNoValue sits earlier in the table.
        let text = "Variable x has no value: Too many arguments";
        assert_eq!(
            patterns().classify(text),
            Some(ErrorCategory::VariableHasNoValue)
        );
    }

    #[test]
    fn table_order_is_fixed() {
        let order: Vec<ErrorCategory> = patterns().categories().collect();
        assert_eq!(
            order,
            vec![
                ErrorCategory::UnknownCallable,
                ErrorCategory::VariableHasNoValue,
                ErrorCategory::InvalidNumberOfArgs,
                ErrorCategory::CallableMustBeSymbol,
                ErrorCategory::NoSwitchWithId,
                ErrorCategory::PropellantGenerator,
                ErrorCategory::LightGenerator,
                ErrorCategory::NoThrusterWithId,
                ErrorCategory::ArgumentMustBeOfType,
                ErrorCategory::TooManyArguments,
                ErrorCategory::ArgsMustBeNumbers,
            ]
        );
    }

    #[test]
    fn variable_match_is_the_full_substring() {
        let patterns = patterns();
        let text = "evaluation failed: Variable fuel-level has no value (line 3)";
        assert_eq!(
            patterns.variable_no_value_match(text),
            Some("Variable fuel-level has no value")
        );
        assert_eq!(patterns.variable_no_value_match("Too many arguments"), None);
    }

    #[test]
    fn labels_are_stable() {
        assert_eq!(ErrorCategory::NoSwitchWithId.label(), "NoSwitchWithID");
        assert_eq!(
            ErrorCategory::VariableHasNoValue.to_string(),
            "VariableHasNoValue"
        );
    }
}
