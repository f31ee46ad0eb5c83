//! Read-only parse result and the builder that fills it.
use std::collections::HashMap;

use crate::value::OptionValue;

/// Parsed view of a process invocation.
///
/// Built once by the parser and read-only afterwards: all fields are private
/// and only borrowed views are handed out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdArgs {
    executable: Option<String>,
    script: Option<String>,
    command: Option<String>,
    commands: Vec<String>,
    flags: Vec<char>,
    arguments: HashMap<String, OptionValue>,
    ordinals: Vec<String>,
}

impl CmdArgs {
    /// Token 0 of the invocation.
    pub fn executable(&self) -> Option<&str> {
        self.executable.as_deref()
    }

    /// Token 1 of the invocation.
    pub fn script(&self) -> Option<&str> {
        self.script.as_deref()
    }

    /// Hyphen-free token at index 2, if there was one.
    pub fn command(&self) -> Option<&str> {
        self.command.as_deref()
    }

    /// Every bare token not consumed as a named option's value, in order.
    pub fn commands(&self) -> &[String] {
        &self.commands
    }

    pub fn flags(&self) -> &[char] {
        &self.flags
    }

    pub fn has_flag(&self, flag: char) -> bool {
        self.flags.contains(&flag)
    }

    pub fn flag_count(&self, flag: char) -> usize {
        self.flags.iter().filter(|f| **f == flag).count()
    }

    pub fn arguments(&self) -> &HashMap<String, OptionValue> {
        &self.arguments
    }

    pub fn argument(&self, name: &str) -> Option<&OptionValue> {
        self.arguments.get(name)
    }

    /// Named options in order of appearance, repeats included.
    pub fn ordinals(&self) -> &[String] {
        &self.ordinals
    }

    /// `(name, current value)` for each ordinal entry.
    pub fn named_values(&self) -> impl Iterator<Item = (&str, &OptionValue)> + '_ {
        self.ordinals.iter().filter_map(|name| {
            self.arguments
                .get(name)
                .map(|value| (name.as_str(), value))
        })
    }
}

/// Per-call accumulator; consumed by `build`.
#[derive(Debug, Default)]
pub(crate) struct CmdArgsBuilder {
    executable: Option<String>,
    script: Option<String>,
    command: Option<String>,
    commands: Vec<String>,
    flags: Vec<char>,
    arguments: HashMap<String, OptionValue>,
    ordinals: Vec<String>,
}

impl CmdArgsBuilder {
    pub(crate) fn new(executable: Option<String>, script: Option<String>) -> Self {
        Self {
            executable,
            script,
            ..Self::default()
        }
    }

    pub(crate) fn set_command(&mut self, command: &str) {
        self.command = Some(command.to_string());
        self.commands.push(command.to_string());
    }

    pub(crate) fn push_command(&mut self, command: &str) {
        self.commands.push(command.to_string());
    }

    pub(crate) fn push_flag(&mut self, flag: char) {
        self.flags.push(flag);
    }

    /// Registers `--name` with a null value until a value token arrives.
    pub(crate) fn open_named(&mut self, name: &str) {
        self.arguments.insert(name.to_string(), OptionValue::Null);
        self.ordinals.push(name.to_string());
    }

    pub(crate) fn set_named(&mut self, name: &str, value: OptionValue) {
        self.arguments.insert(name.to_string(), value);
    }

    pub(crate) fn build(self) -> CmdArgs {
        CmdArgs {
            executable: self.executable,
            script: self.script,
            command: self.command,
            commands: self.commands,
            flags: self.flags,
            arguments: self.arguments,
            ordinals: self.ordinals,
        }
    }
}
