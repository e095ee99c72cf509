//! Body line collection.
//!
//! Body lines before a `#` separator describe diagram elements and are kept.
//! Lines after it form a links section, which is currently discarded.

use crate::consts::LINKS_SEPARATOR;

/// Section of the block body being read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Nodes,
    Links,
}

/// Collect trimmed content lines from raw body lines.
///
/// Blank lines are skipped. A raw line that is exactly empty (no whitespace at
/// all) ends collection, even if more lines follow it.
pub(crate) fn collect_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
    let mut section = Section::Nodes;
    let mut collected = Vec::new();

    for raw in lines {
        if raw.is_empty() {
            break;
        }
        let line = raw.trim();
        if line == LINKS_SEPARATOR {
            section = Section::Links;
        } else if section == Section::Nodes && !line.is_empty() {
            collected.push(line);
        }
    }

    collected
}
