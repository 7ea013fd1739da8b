//! Front matter detection and generation

use chrono::{DateTime, Local, NaiveDate};
use std::fs;
use std::io;
use std::path::Path;
use std::time::SystemTime;

/// Line that opens and closes a front matter block
pub const DELIMITER: &str = "---";

/// How far into the trimmed content the closing delimiter is searched for
pub const LOOKAHEAD_CHARS: usize = 200;

/// Fields written into a generated header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontMatter {
    pub layout: String,
    pub title: String,
    pub date: NaiveDate,
    pub categories: Vec<String>,
}

impl FrontMatter {
    /// Render the header block, including the trailing blank line
    pub fn render(&self) -> String {
        let mut yaml = String::from("---\n");
        yaml.push_str(&format!("layout: {}\n", self.layout));
        yaml.push_str(&format!("title: \"{}\"\n", self.title));
        yaml.push_str(&format!("date: {}\n", self.date.format("%Y-%m-%d")));
        yaml.push_str(&format!("categories: {}\n", render_categories(&self.categories)));
        yaml.push_str("---\n\n");
        yaml
    }
}

fn render_categories(categories: &[String]) -> String {
    let quoted: Vec<String> = categories.iter().map(|c| format!("\"{}\"", c)).collect();
    format!("[{}]", quoted.join(", "))
}

/// Check whether content already opens with a front matter block.
///
/// Only the first [`LOOKAHEAD_CHARS`] characters of the trimmed content are
/// searched for the closing delimiter.
pub fn has_front_matter(content: &str) -> bool {
    let trimmed = content.trim();
    if !trimmed.starts_with(DELIMITER) {
        return false;
    }

    let head: String = trimmed.chars().take(LOOKAHEAD_CHARS).collect();
    head.contains("\n---")
}

/// Title from a file name: `my_first-post.md` -> "My First Post"
pub fn derive_title(path: &Path) -> String {
    let stem = path.file_stem().map(|s| s.to_string_lossy()).unwrap_or_default();
    title_case(&stem.replace(['_', '-'], " "))
}

/// Upper-case the first letter of each run of cased letters, lower-case the
/// rest. Uncased characters (digits, punctuation, Hangul, CJK) end a run.
pub fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut in_word = false;

    for c in text.chars() {
        if c.is_lowercase() || c.is_uppercase() {
            if in_word {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            result.push(c);
            in_word = false;
        }
    }

    result
}

/// Local calendar date of a timestamp
pub fn date_from_mtime(mtime: SystemTime) -> NaiveDate {
    DateTime::<Local>::from(mtime).date_naive()
}

/// Publication date from the file's last-modified time
pub fn derive_date(path: &Path) -> io::Result<NaiveDate> {
    let mtime = fs::metadata(path)?.modified()?;
    Ok(date_from_mtime(mtime))
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn title_case_preserves_char_count(s in "[a-zA-Z0-9 ]*") {
            prop_assert_eq!(title_case(&s).chars().count(), s.chars().count());
        }

        #[test]
        fn title_case_is_idempotent(s in "[a-zA-Z _-]*") {
            let once = title_case(&s);
            let twice = title_case(&once);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn rendered_header_is_detected(title in "[a-zA-Z ]{0,40}", body in "\\PC*") {
            let fm = FrontMatter {
                layout: "post".to_string(),
                title,
                date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                categories: vec!["dev".to_string()],
            };
            let content = format!("{}{}", fm.render(), body);
            prop_assert!(has_front_matter(&content));
        }

        #[test]
        fn content_without_leading_delimiter_never_matches(s in "[a-zA-Z#][\\PC\\n]*") {
            prop_assert!(!has_front_matter(&s));
        }
    }
}
