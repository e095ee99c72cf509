//! Image reference generation.
//!
//! Builds the yUML service URL from validated options and content lines and
//! wraps it in an `<img>` tag.

use crate::options::OptionSet;

/// Style segment of the URL: `<style>;dir:<dir>;scale:<scale>`.
fn style_descriptor(options: &OptionSet) -> String {
    format!(
        "{};dir:{};scale:{}",
        options.get("style").unwrap_or_default(),
        options.get("dir").unwrap_or_default(),
        options.get("scale").unwrap_or_default(),
    )
}

/// Build the diagram URL.
///
/// A `url` header option overrides `service_url`. Content lines are joined
/// with commas and inserted as-is.
///
/// # Example
///
/// ```
/// use yuml_filter::{OptionSet, Validated, diagram_url};
///
/// let mut problems = Vec::new();
/// let Validated::Complete(options) =
///     OptionSet::parse_header("[yuml diagram:class", &mut problems).validate(&mut problems)
/// else {
///     panic!("diagram is set");
/// };
/// assert_eq!(
///     diagram_url("http://yuml.me", &options, &["[A]", "[B]"]),
///     "http://yuml.me/diagram/plain;dir:LR;scale:100/class/[A],[B]"
/// );
/// ```
#[must_use]
pub fn diagram_url(service_url: &str, options: &OptionSet, lines: &[&str]) -> String {
    let service_url = options
        .get("url")
        .unwrap_or(service_url)
        .trim_end_matches('/');

    format!(
        "{service_url}/diagram/{}/{}/{}",
        style_descriptor(options),
        options.get("diagram").unwrap_or_default(),
        lines.join(",")
    )
}

/// Render the replacement markup for a block.
///
/// With `debug` set, the tag is followed by a literal copy inside `<xmp>`.
#[must_use]
pub fn render_markup(service_url: &str, options: &OptionSet, lines: &[&str]) -> String {
    let tag = format!(r#"<img src="{}" />"#, diagram_url(service_url, options, lines));

    if options.is_debug() {
        format!("{tag}<xmp>{tag}</xmp>")
    } else {
        tag
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Validated;
    use pretty_assertions::assert_eq;

    fn options(header: &str) -> OptionSet {
        let mut problems = Vec::new();
        match OptionSet::parse_header(header, &mut problems).validate(&mut problems) {
            Validated::Complete(options) => options,
            Validated::Invalid => panic!("invalid header: {header}"),
        }
    }

    #[test]
    fn test_style_descriptor_defaults() {
        assert_eq!(
            style_descriptor(&options("[yuml diagram:class")),
            "plain;dir:LR;scale:100"
        );
    }

    #[test]
    fn test_style_descriptor_custom() {
        assert_eq!(
            style_descriptor(&options("[yuml diagram:class style:scruffy dir:TD scale:180")),
            "scruffy;dir:TD;scale:180"
        );
    }

    #[test]
    fn test_diagram_url() {
        let url = diagram_url(
            "http://yuml.me",
            &options("[yuml diagram:class"),
            &["[A]->[B]"],
        );
        assert_eq!(url, "http://yuml.me/diagram/plain;dir:LR;scale:100/class/[A]->[B]");
    }

    #[test]
    fn test_diagram_url_joins_lines_with_commas() {
        let url = diagram_url(
            "http://yuml.me",
            &options("[yuml diagram:usecase"),
            &["[User]-(Login)", "(Login)>(Check)"],
        );
        assert!(url.ends_with("/usecase/[User]-(Login),(Login)>(Check)"));
    }

    #[test]
    fn test_diagram_url_no_lines() {
        let url = diagram_url("http://yuml.me", &options("[yuml diagram:activity"), &[]);
        assert_eq!(url, "http://yuml.me/diagram/plain;dir:LR;scale:100/activity/");
    }

    #[test]
    fn test_diagram_url_trailing_slash_service() {
        let url = diagram_url("https://yuml.example.com/", &options("[yuml diagram:class"), &["[A]"]);
        assert_eq!(
            url,
            "https://yuml.example.com/diagram/plain;dir:LR;scale:100/class/[A]"
        );
    }

    #[test]
    fn test_render_markup() {
        let markup = render_markup("http://yuml.me", &options("[yuml diagram:class"), &["[A]"]);
        assert_eq!(
            markup,
            r#"<img src="http://yuml.me/diagram/plain;dir:LR;scale:100/class/[A]" />"#
        );
    }

    #[test]
    fn test_render_markup_debug_echo() {
        let markup = render_markup(
            "http://yuml.me",
            &options("[yuml diagram:class debug:1"),
            &["[A]"],
        );
        let tag = r#"<img src="http://yuml.me/diagram/plain;dir:LR;scale:100/class/[A]" />"#;
        assert_eq!(markup, format!("{tag}<xmp>{tag}</xmp>"));
    }
}
