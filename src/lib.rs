//! Command-line invocation parser.
//!
//! Splits a raw process invocation into its executable, script, leading
//! command, single-character flags and `--named` options. Named option values
//! may be plain scalars, the literals `true`/`false`/`null`/`undefined`, or
//! composite `name[:value]` lists; `,` and `:` are reserved and written as
//! `\,` and `\:` when meant literally.
//!
//! Parsing is total: every token sequence produces a [`CmdArgs`], so none of
//! the entry points return a `Result`.

mod args;
mod parse;
mod value;

pub use args::CmdArgs;
pub use parse::{
    escape_value, unescape_value, ArgParser, MatchAll, MatchRecord, RegexMatcher, PAIR_SEPARATOR,
    VALUE_SEPARATOR,
};
pub use value::{CompositeValue, OptionValue, Pair};

/// Parse a full invocation (executable, script, then arguments).
pub fn parse_args<I, S>(args: I) -> CmdArgs
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    ArgParser::new().parse(args)
}

/// Parse a single named-option value token.
pub fn parse_named_value(text: &str) -> OptionValue {
    ArgParser::new().parse_value(text)
}

/// Fuzz helper: NUL-separated tokens through the whole parser.
pub fn fuzz_parse_bytes(data: &[u8]) {
    let input = String::from_utf8_lossy(data);
    let parsed = parse_args(input.split('\0'));
    for (_, value) in parsed.named_values() {
        let _ = value.to_string();
    }
}
