use std::{collections::HashMap, io};

use caseless::{CaselessMap, Folding, Object, PropertyDescriptor, PropertyKey, Symbol, Value};

use crate::command::{Command, KeyArgument};

/// One map plus the symbols the user created so far
pub struct Session {
    map: CaselessMap,
    symbols: HashMap<String, Symbol>,
}

impl Session {
    #[must_use]
    pub fn new(folding: Folding) -> Self {
        Self {
            map: CaselessMap::with_folding(Object::new(), folding),
            symbols: HashMap::default(),
        }
    }

    #[must_use]
    pub fn folding(&self) -> Folding {
        self.map.folding()
    }

    /// Parses and runs a single line of input, writing the result to `out`
    ///
    /// Malformed commands and rejected operations are reported to `out`, only
    /// failing to write is an error.
    pub fn run_line<W: io::Write>(&mut self, line: &str, out: &mut W) -> io::Result<()> {
        if line.trim().is_empty() {
            return Ok(());
        }

        match line.parse::<Command>() {
            Ok(command) => self.execute(command, out),
            Err(error) => {
                log::debug!("Could not parse {line:?}");
                writeln!(out, "error: {error}")
            },
        }
    }

    fn execute<W: io::Write>(&mut self, command: Command, out: &mut W) -> io::Result<()> {
        let result = match command {
            Command::Get(key) => {
                let key = self.key(key);
                return writeln!(out, "{}", self.map.get(key));
            },
            Command::Has(key) => {
                let key = self.key(key);
                return writeln!(out, "{}", self.map.has(key));
            },
            Command::Describe(key) => {
                let key = self.key(key);
                return match self.map.get_own_property(key) {
                    Some(desc) => writeln!(out, "{}", describe(&desc)),
                    None => writeln!(out, "undefined"),
                };
            },
            Command::Set(key, value) => {
                let key = self.key(key);
                self.map.set(key, value)
            },
            Command::Delete(key) => {
                let key = self.key(key);
                self.map.delete(key)
            },
            Command::Define(key, value, attributes) => {
                let key = self.key(key);
                let desc = PropertyDescriptor::data(value)
                    .with_writable(!attributes.readonly)
                    .with_enumerable(!attributes.hidden)
                    .with_configurable(!attributes.fixed);
                self.map.define_property(key, desc)
            },
            Command::Keys => return writeln!(out, "{}", self.map.keys().join(" ")),
            Command::Names => return writeln!(out, "{}", self.map.property_names().join(" ")),
            Command::Symbols => {
                let symbols: Vec<String> =
                    self.map.symbols().iter().map(ToString::to_string).collect();
                return writeln!(out, "{}", symbols.join(" "));
            },
            Command::Entries => {
                for (key, value) in self.map.entries() {
                    writeln!(out, "{key}: {value}")?;
                }
                return Ok(());
            },
            Command::Seal => {
                self.map.prevent_extensions();
                Ok(())
            },
            Command::Help => return writeln!(out, "{}", Command::HELP),
        };

        match result {
            Ok(()) => Ok(()),
            Err(error) => writeln!(out, "error: {error}"),
        }
    }

    /// Turns `@name` into the same symbol every time it is used
    fn key(&mut self, key: KeyArgument) -> PropertyKey {
        match key {
            KeyArgument::Text(text) => PropertyKey::String(text),
            KeyArgument::Symbol(name) => self
                .symbols
                .entry(name)
                .or_insert_with_key(|name| Symbol::new(Some(name.clone())))
                .clone()
                .into(),
        }
    }
}

fn describe(desc: &PropertyDescriptor) -> String {
    let flag = |value: Option<bool>| value.unwrap_or(false);

    let kind = if desc.is_accessor_descriptor() {
        format!(
            "get: {}, set: {}",
            desc.getter().is_some(),
            desc.setter().is_some()
        )
    } else {
        format!(
            "value: {}, writable: {}",
            desc.value().unwrap_or(&Value::Undefined),
            flag(desc.writable())
        )
    };

    format!(
        "{{ {kind}, enumerable: {}, configurable: {} }}",
        flag(desc.enumerable()),
        flag(desc.configurable())
    )
}
