//! Grammar for the value token that follows a named option.
//!
//! In order: a token with no structural `,`/`:` is a scalar (unescaped, then
//! literal-coerced); a path-shaped token is returned verbatim; anything else
//! is split into `name[:value]` pairs.
use log::trace;
use regex::Regex;
use std::sync::LazyLock;

use super::matcher::MatchAll;
use super::{strip_escaped_delimiters, unescape_value, PAIR_SEPARATOR, VALUE_SEPARATOR};
use crate::value::{CompositeValue, OptionValue};

// Key run, then an optional `:` and value run. Runs admit escaped delimiters.
static NAME_VALUE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"((?:\\,|\\:|[^,:])+)(?::((?:\\,|\\:|[^,:])+))?")
        .expect("static regex must compile")
});

// Optional drive prefix, one or more separator-led segments, optional trailing
// separator. `[A-z]` also spans the six punctuation characters between the
// two letter ranges.
static PATH_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[A-z]:)?(?:[/\\][^/\\]+)+[/\\]?$").expect("static regex must compile")
});

pub(super) fn parse_named_value<M: MatchAll>(text: &str, matcher: &M) -> OptionValue {
    if is_plain(text) {
        let value = unescape_value(text);
        trace!("value event=scalar len={}", value.len());
        return coerce_literal(value);
    }
    if PATH_PATTERN.is_match(text) {
        trace!("value event=path len={}", text.len());
        return OptionValue::Str(text.to_string());
    }

    let mut composite = CompositeValue::new();
    for record in matcher.match_all(&NAME_VALUE_PATTERN, text) {
        let Some(name) = record.group(1) else {
            continue;
        };
        let value = record.group(2).map(unescape_value);
        composite.insert(name, value);
    }
    trace!("value event=composite pairs={}", composite.len());
    OptionValue::Composite(composite)
}

fn is_plain(text: &str) -> bool {
    !strip_escaped_delimiters(text).contains([PAIR_SEPARATOR, VALUE_SEPARATOR])
}

fn coerce_literal(value: String) -> OptionValue {
    match value.as_str() {
        "true" => OptionValue::Bool(true),
        "false" => OptionValue::Bool(false),
        "null" => OptionValue::Null,
        "undefined" => OptionValue::Undefined,
        _ => OptionValue::Str(value),
    }
}
