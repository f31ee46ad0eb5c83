//! Invocation parsing.
//!
//! - `classifier` walks the tokens and sorts them into commands, flags and
//!   named options.
//! - `named_value` turns the token following a named option into a value.
//! - `matcher` is the find-all-matches capability the composite grammar runs
//!   on; callers may swap it out through [`ArgParser::with_matcher`].
use regex::Regex;
use std::sync::LazyLock;

use crate::args::CmdArgs;
use crate::value::OptionValue;

mod classifier;
mod matcher;
mod named_value;

pub use matcher::{MatchAll, MatchRecord, RegexMatcher};

/// Escape introducer for the reserved delimiters.
const ESCAPE_CHAR: char = '\\';
/// Separates pairs in a composite value.
pub const PAIR_SEPARATOR: char = ',';
/// Separates a pair's name from its value.
pub const VALUE_SEPARATOR: char = ':';

static ESCAPED_DELIMITER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\([,:])").expect("static regex must compile"));

/// Replaces `\,` with `,` and `\:` with `:`; other backslashes stay literal.
pub fn unescape_value(text: &str) -> String {
    ESCAPED_DELIMITER.replace_all(text, "$1").into_owned()
}

/// Drops every escaped delimiter, leaving only structural ones behind.
pub(crate) fn strip_escaped_delimiters(text: &str) -> String {
    ESCAPED_DELIMITER.replace_all(text, "").into_owned()
}

/// Writes the reserved delimiters back in escaped form.
pub fn escape_value(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch == PAIR_SEPARATOR || ch == VALUE_SEPARATOR {
            out.push(ESCAPE_CHAR);
        }
        out.push(ch);
    }
    out
}

/// Invocation parser bound to a pattern matcher.
#[derive(Debug, Clone, Default)]
pub struct ArgParser<M = RegexMatcher> {
    matcher: M,
}

impl ArgParser {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<M: MatchAll> ArgParser<M> {
    pub fn with_matcher(matcher: M) -> Self {
        ArgParser { matcher }
    }

    /// Parse a full invocation: token 0 is the executable, token 1 the script.
    ///
    /// Never fails; every token sequence maps to some `CmdArgs`.
    pub fn parse<I, S>(&self, args: I) -> CmdArgs
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        classifier::classify(args, |text| self.parse_value(text))
    }

    /// Parse one named-option value token.
    pub fn parse_value(&self, text: &str) -> OptionValue {
        named_value::parse_named_value(text, &self.matcher)
    }
}
