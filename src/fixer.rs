//! Include fixer: conditionally rewrites broken local `#include "..."` lines.
//!
//! A directive is rewritten only when its quoted target is missing from the
//! scanned directory AND the fallback header is present there. Everything
//! else in the file, including line terminators, is preserved byte-for-byte.

use anyhow::{Context, Result};
use regex::Regex;
use std::fs;
use std::path::Path;

/// Header substituted in place of any missing quoted include target.
pub const FALLBACK_HEADER: &str = "element.h";

/// Matches a quoted include directive and captures the quoted filename.
/// Tolerates leading whitespace before `#` and whitespace around `include`.
const INCLUDE_PATTERN: &str = r#"^\s*#\s*include\s*"([^"]*)""#;

/// Rewrites broken local includes in a single file.
pub struct IncludeFixer {
    pattern: Regex,
}

impl IncludeFixer {
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(INCLUDE_PATTERN).context("invalid include pattern")?;
        Ok(Self { pattern })
    }

    /// Fix one file: read it, rewrite qualifying include lines, and write it
    /// back only if something changed. Returns the number of rewritten lines.
    ///
    /// `filename` is resolved against `dir`, and so are the existence checks
    /// for the quoted include target and the fallback header. Checks are
    /// performed fresh per directive; nothing is cached across lines.
    pub fn fix_file(&self, dir: &Path, filename: &str) -> Result<usize> {
        let path = dir.join(filename);
        let data = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let mut changes = 0;
        let mut rebuilt = String::with_capacity(data.len());

        for line in data.split_inclusive('\n') {
            let included = self.pattern.captures(line).map(|caps| caps[1].to_owned());
            match included {
                Some(incf) if self.should_redirect(dir, &incf) => {
                    rebuilt.push_str(&format!("#include {:?}", FALLBACK_HEADER));
                    rebuilt.push_str(line_terminator(line));
                    changes += 1;
                }
                _ => rebuilt.push_str(line),
            }
        }

        if changes > 0 {
            fs::write(&path, rebuilt)
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }

        Ok(changes)
    }

    /// True when the quoted target is missing but the fallback header exists,
    /// both checked as regular files relative to `dir`.
    fn should_redirect(&self, dir: &Path, included: &str) -> bool {
        !dir.join(included).is_file() && dir.join(FALLBACK_HEADER).is_file()
    }
}

/// The terminator of a line produced by `split_inclusive('\n')`: `\r\n`,
/// `\n`, or empty for an unterminated final line.
fn line_terminator(line: &str) -> &str {
    if line.ends_with("\r\n") {
        "\r\n"
    } else if line.ends_with('\n') {
        "\n"
    } else {
        ""
    }
}
