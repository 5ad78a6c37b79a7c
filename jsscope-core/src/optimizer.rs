//! # Code Optimizer
//!
//! A narrow, syntax-unaware text transform:
//!
//! 1. every `console.log(...)` call (with an optional trailing `;`) is
//!    removed, repeatedly, until none is left
//! 2. lines that are empty after trimming are dropped
//!
//! Arguments are matched non-greedily up to the first `)`, so a `)` inside a
//! string argument ends the match early. Both steps only ever delete text,
//! which keeps the output no longer than the input, and running the optimizer
//! on its own output changes nothing.

use lazy_static::lazy_static;
use regex::Regex;

const DEBUG_CALL_PATTERN: &str = r"console\.log\((?s).*?\);?";

/// How far before a removal a newly spliced call can start: `console.log`.
const SPLICE_REWIND: usize = "console.log".len();

lazy_static! {
    static ref DEFAULT_OPTIMIZER: Optimizer = Optimizer::new();
}

#[derive(Debug, Clone)]
pub struct Optimizer {
    debug_call: Option<Regex>,
}

impl Default for Optimizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Optimizer {
    pub fn new() -> Self {
        Self::with_pattern(DEBUG_CALL_PATTERN)
    }

    /// Builds an optimizer that strips `pattern` instead of `console.log`.
    /// An invalid pattern disables stripping.
    pub fn with_pattern(pattern: &str) -> Self {
        let debug_call = match Regex::new(pattern) {
            Ok(regex) => Some(regex),
            Err(e) => {
                tracing::warn!("Debug call pattern rejected, stripping disabled: {}", e);
                None
            }
        };
        Self { debug_call }
    }

    #[tracing::instrument(level = "debug", skip(self, code))]
    pub fn optimize(&self, code: &str) -> String {
        let Some(debug_call) = &self.debug_call else {
            return code.to_string();
        };
        let stripped = strip_debug_calls(debug_call, code);
        collapse_blank_lines(&stripped)
    }
}

/// Removes matches until a fixpoint, so calls spliced together by an earlier
/// removal are removed as well.
///
/// After a removal the search resumes just before the cut, where a spliced
/// `console.log(` can start, instead of from the top. Passes repeat until one
/// removes nothing, which keeps the fixpoint for custom patterns that can
/// splice further back. Empty matches are skipped.
fn strip_debug_calls(pattern: &Regex, code: &str) -> String {
    let mut output = code.to_string();
    loop {
        let mut removed = false;
        let mut start = 0;
        while let Some(found) = pattern.find_at(&output, start) {
            if found.is_empty() {
                match output[found.end()..].chars().next() {
                    Some(c) => start = found.end() + c.len_utf8(),
                    None => break,
                }
                continue;
            }
            let cut = found.start();
            output.replace_range(cut..found.end(), "");
            removed = true;
            start = cut.saturating_sub(SPLICE_REWIND);
            while !output.is_char_boundary(start) {
                start -= 1;
            }
        }
        if !removed {
            return output;
        }
    }
}

fn collapse_blank_lines(code: &str) -> String {
    code.split('\n')
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Optimizes `code` with the default `console.log` pattern.
pub fn optimize(code: &str) -> String {
    DEFAULT_OPTIMIZER.optimize(code)
}
