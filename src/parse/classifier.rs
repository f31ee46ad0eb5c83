//! Token classifier.
//!
//! Tokens 0 and 1 are the executable and script. From index 2 on, each token
//! is a command, a `--name` marker, a `-flags` bundle, or a bare token. The
//! only state carried between tokens is the named option still waiting for
//! its value.
use log::{debug, trace};

use crate::args::{CmdArgs, CmdArgsBuilder};
use crate::value::OptionValue;

const FIRST_PARSED_INDEX: usize = 2;

pub(super) fn classify<I, S, F>(args: I, parse_value: F) -> CmdArgs
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    F: Fn(&str) -> OptionValue,
{
    let mut tokens = args.into_iter();
    let executable = tokens.next().map(|t| t.as_ref().to_string());
    let script = tokens.next().map(|t| t.as_ref().to_string());
    let mut builder = CmdArgsBuilder::new(executable, script);
    let mut pending: Option<String> = None;
    let mut count = 0usize;

    for (offset, token) in tokens.enumerate() {
        let token = token.as_ref();
        let index = offset + FIRST_PARSED_INDEX;
        count += 1;

        if index == FIRST_PARSED_INDEX && !token.contains('-') {
            trace!("token event=command index={} token={:?}", index, token);
            builder.set_command(token);
        } else if let Some(name) = token.strip_prefix("--") {
            trace!("token event=named index={} name={:?}", index, name);
            builder.open_named(name);
            // An empty name never claims a value.
            pending = (!name.is_empty()).then(|| name.to_string());
        } else if let Some(bundle) = token.strip_prefix('-') {
            trace!("token event=flags index={} count={}", index, bundle.chars().count());
            pending = None;
            for flag in bundle.chars() {
                builder.push_flag(flag);
            }
        } else if let Some(name) = pending.take() {
            let value = parse_value(token);
            trace!(
                "token event=value index={} name={:?} kind={}",
                index,
                name,
                value.type_name()
            );
            builder.set_named(&name, value);
        } else {
            trace!("token event=bare index={} token={:?}", index, token);
            builder.push_command(token);
        }
    }

    let parsed = builder.build();
    debug!(
        "args event=parse tokens={} commands={} flags={} named={}",
        count,
        parsed.commands().len(),
        parsed.flags().len(),
        parsed.ordinals().len()
    );
    parsed
}
