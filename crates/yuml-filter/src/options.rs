//! Header option parsing and validation.
//!
//! Parses the `[yuml key:value ...` header line against the static [`SCHEMA`]
//! and fills in defaults.

use std::collections::HashMap;

use crate::consts::{END_TOKEN, START_TOKEN};
use crate::problem::{Problem, ProblemSink};
use crate::schema::{self, SCHEMA};

/// Validated options for one block, keyed by option name.
///
/// # Example
///
/// ```
/// use yuml_filter::{OptionSet, Validated};
///
/// let mut problems = Vec::new();
/// let parsed = OptionSet::parse_header("[yuml diagram:class dir:TD", &mut problems);
/// let Validated::Complete(options) = parsed.validate(&mut problems) else {
///     panic!("diagram is set");
/// };
/// assert_eq!(options.get("dir"), Some("TD"));
/// assert_eq!(options.get("style"), Some("plain"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionSet {
    values: HashMap<&'static str, String>,
}

/// Outcome of validating parsed header options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validated {
    /// Every schema option has a value.
    Complete(OptionSet),
    /// A required option was missing. The block is not rendered.
    Invalid,
}

impl OptionSet {
    /// Parse a block header line into recognized, allowed assignments.
    ///
    /// The start token is stripped, along with one trailing `]` for headers written
    /// as `[yuml ...]`. The rest is split on single spaces. Tokens without `:`
    /// and unknown keys are skipped silently. Values outside the allowed set are
    /// reported and dropped.
    #[must_use]
    pub fn parse_header(header: &str, sink: &mut impl ProblemSink) -> Self {
        let mut set = Self::default();

        let line = header.trim();
        let line = line.strip_prefix(START_TOKEN).unwrap_or(line).trim();
        let line = line.strip_suffix(END_TOKEN).unwrap_or(line).trim_end();

        for token in line.split(' ') {
            let Some((key, value)) = split_assignment(token) else {
                continue;
            };
            let Some(spec) = schema::find(key) else {
                continue;
            };

            if spec.allows(value) {
                set.values.insert(spec.name, value.to_owned());
            } else {
                sink.report(Problem::InvalidOptionValue {
                    key: spec.name.to_owned(),
                    value: value.to_owned(),
                    allowed: spec.values.join(", "),
                });
            }
        }

        set
    }

    /// Fill defaults and check required options.
    ///
    /// Every missing required option is reported, even after the first one has
    /// already made the result [`Validated::Invalid`].
    #[must_use]
    pub fn validate(mut self, sink: &mut impl ProblemSink) -> Validated {
        let mut invalid = false;

        for spec in SCHEMA {
            if self.values.contains_key(spec.name) {
                continue;
            }
            match spec.default {
                Some(default) => {
                    self.values.insert(spec.name, default.to_owned());
                }
                None if spec.required => {
                    sink.report(Problem::MissingRequiredOption {
                        key: spec.name.to_owned(),
                    });
                    invalid = true;
                }
                None => {}
            }
        }

        if invalid {
            Validated::Invalid
        } else {
            Validated::Complete(self)
        }
    }

    /// Value for an option, if set.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Whether debug output is requested (`debug` set and not `0`).
    #[must_use]
    pub fn is_debug(&self) -> bool {
        self.get("debug").is_some_and(|v| !v.is_empty() && v != "0")
    }

    /// Number of options set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no options are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Split `key:value`. Anything after a second `:` is ignored.
fn split_assignment(token: &str) -> Option<(&str, &str)> {
    let mut parts = token.split(':');
    let key = parts.next()?;
    let value = parts.next()?;
    Some((key, value))
}
