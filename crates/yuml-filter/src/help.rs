//! Help text generated from the option schema.

use crate::schema::{OptionSpec, SCHEMA};

/// Example block shown in the options reference.
pub const EXAMPLE_BLOCK: &str = "[yuml diagram:usecase style:scruffy
[Text editor]-(Writes article)
(Writes article)>(Publishing)
(Publishing)>(Uses yUML)
]";

/// One-line usage tip.
#[must_use]
pub fn short_tip() -> &'static str {
    "Use yUML to generate inline UML Diagrams."
}

/// Full tip with the HTML options reference.
#[must_use]
pub fn long_tip() -> String {
    format!(
        "With yUML Format you can create inline UML Diagrams.<br/>{}<br/>For more info <a href=\"http://yuml.me\">yUML format</a>.",
        options_reference_html()
    )
}

/// Description lines for one option: required flag, valid values and default.
fn describe(spec: &OptionSpec) -> Vec<String> {
    let mut lines = Vec::new();
    if spec.required {
        lines.push("Required".to_owned());
    }
    lines.push(format!("Valid values are: {}", spec.values.join(", ")));
    if let Some(default) = spec.default {
        lines.push(format!("Default value: {default}."));
    }
    lines
}

/// Options reference as an HTML definition list followed by an example block.
#[must_use]
pub fn options_reference_html() -> String {
    let mut html = String::from("<dl>");

    for spec in SCHEMA {
        html.push_str(&format!(
            "<dt>{}</dt><dd>{}</dd>",
            spec.name,
            describe(spec).join("<br/>")
        ));
    }

    html.push_str("</dl>");
    html.push_str("Place this between &lt;pre&gt; tags <pre>\n");
    html.push_str(EXAMPLE_BLOCK);
    html.push_str("</pre>");
    html
}

/// Options reference as plain text, for terminals.
#[must_use]
pub fn options_reference_text() -> String {
    let mut text = String::new();

    for spec in SCHEMA {
        let value = spec.default.or_else(|| spec.values.first().copied());
        let example = spec.display(value.unwrap_or_default());
        text.push_str(&format!("{} (e.g. {example})\n", spec.name));
        for line in describe(spec) {
            text.push_str(&format!("    {line}\n"));
        }
    }

    text.push_str("\nExample:\n");
    text.push_str(EXAMPLE_BLOCK);
    text.push('\n');
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::YumlFilter;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_short_tip() {
        assert_eq!(short_tip(), "Use yUML to generate inline UML Diagrams.");
    }

    #[test]
    fn test_long_tip_embeds_reference() {
        let tip = long_tip();
        assert!(tip.starts_with("With yUML Format"));
        assert!(tip.contains(&options_reference_html()));
        assert!(tip.ends_with("yUML format</a>."));
    }

    #[test]
    fn test_describe_required_option() {
        let spec = crate::schema::find("diagram").unwrap();
        assert_eq!(
            describe(spec),
            vec![
                "Required".to_owned(),
                "Valid values are: class, activity, usecase".to_owned(),
            ]
        );
    }

    #[test]
    fn test_describe_option_with_default() {
        let spec = crate::schema::find("scale").unwrap();
        assert_eq!(
            describe(spec),
            vec![
                "Valid values are: 180, 120, 100, 80, 60".to_owned(),
                "Default value: 100.".to_owned(),
            ]
        );
    }

    #[test]
    fn test_html_reference_lists_every_option() {
        let html = options_reference_html();
        assert!(html.starts_with("<dl>"));
        for spec in SCHEMA {
            assert!(
                html.contains(&format!("<dt>{}</dt>", spec.name)),
                "Missing option: {}",
                spec.name
            );
        }
        assert!(html.contains("<dd>Valid values are: LR, TD, RL<br/>Default value: LR.</dd>"));
        assert!(html.ends_with(&format!("{EXAMPLE_BLOCK}</pre>")));
    }

    #[test]
    fn test_text_reference() {
        let text = options_reference_text();
        assert!(text.starts_with("debug (e.g. debug:0)\n"));
        assert!(text.contains("diagram (e.g. diagram:class)\n    Required\n"));
        assert!(text.contains("dir (e.g. dir:LR)\n"));
        assert!(text.contains("style (e.g. style:plain)\n"));
        assert!(text.ends_with(&format!("Example:\n{EXAMPLE_BLOCK}\n")));
    }

    #[test]
    fn test_example_block_renders() {
        let output = YumlFilter::default().filter(&format!("\n{EXAMPLE_BLOCK}\n"));

        assert!(output.problems.is_empty());
        assert_eq!(
            output.text,
            "\n<img src=\"http://yuml.me/diagram/scruffy;dir:LR;scale:100/usecase/[Text editor]-(Writes article),(Writes article)>(Publishing),(Publishing)>(Uses yUML)\" />\n"
        );
    }
}
