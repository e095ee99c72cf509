//! Static option schema for `[yuml` block headers.
//!
//! Every recognized option has an ordered set of allowed values, a required flag,
//! an optional default and an optional display format used by the help text.

/// Validation rules for a single header option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionSpec {
    /// Option name as written in the header (`diagram`, `style`, ...).
    pub name: &'static str,
    /// Allowed values, in display order.
    pub values: &'static [&'static str],
    /// Whether the option must be present when no default exists.
    pub required: bool,
    /// Value used when the option is absent or rejected.
    pub default: Option<&'static str>,
    /// Display format for help output, with `%s` standing in for the value.
    pub format: Option<&'static str>,
}

impl OptionSpec {
    /// Whether `value` is one of the allowed values.
    #[must_use]
    pub fn allows(&self, value: &str) -> bool {
        self.values.contains(&value)
    }

    /// Render a value using the display format, or as `name:value` when none is set.
    #[must_use]
    pub fn display(&self, value: &str) -> String {
        match self.format {
            Some(format) => format.replacen("%s", value, 1),
            None => format!("{}:{value}", self.name),
        }
    }
}

/// Option table, in the order options are validated and documented.
pub static SCHEMA: &[OptionSpec] = &[
    OptionSpec {
        name: "debug",
        values: &["0", "1"],
        required: false,
        default: Some("0"),
        format: None,
    },
    OptionSpec {
        name: "diagram",
        values: &["class", "activity", "usecase"],
        required: true,
        default: None,
        format: None,
    },
    OptionSpec {
        name: "scale",
        values: &["180", "120", "100", "80", "60"],
        required: false,
        default: Some("100"),
        format: None,
    },
    OptionSpec {
        name: "dir",
        values: &["LR", "TD", "RL"],
        required: false,
        default: Some("LR"),
        format: Some("dir:%s"),
    },
    OptionSpec {
        name: "style",
        values: &["nofunky", "plain", "scruffy"],
        required: false,
        default: Some("plain"),
        format: Some("style:%s"),
    },
];

/// Look up an option by name.
///
/// Returns None for names the schema does not know.
#[must_use]
pub fn find(name: &str) -> Option<&'static OptionSpec> {
    SCHEMA.iter().find(|spec| spec.name == name)
}
