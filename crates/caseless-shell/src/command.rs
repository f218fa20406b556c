use std::str::FromStr;

use caseless::Value;
use error_derive::Error;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum CommandError {
    #[msg = "empty command"]
    Empty,

    #[msg = "unknown command {name:?}, try \"help\""]
    UnknownCommand { name: String },

    #[msg = "{command} expects a key"]
    MissingKey { command: &'static str },

    #[msg = "{command} expects a value"]
    MissingValue { command: &'static str },

    #[msg = "unexpected argument {argument:?}"]
    UnexpectedArgument { argument: String },
}

/// A key as typed by the user, `@name` refers to a symbol
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyArgument {
    Text(String),
    Symbol(String),
}

/// Attributes for `define`, everything not listed is `true`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Attributes {
    pub readonly: bool,
    pub hidden: bool,
    pub fixed: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Get(KeyArgument),
    Set(KeyArgument, Value),
    Has(KeyArgument),
    Delete(KeyArgument),
    Describe(KeyArgument),
    Define(KeyArgument, Value, Attributes),
    Keys,
    Names,
    Symbols,
    Entries,
    Seal,
    Help,
}

impl Command {
    pub const HELP: &'static str = "\
get KEY                  read a property
set KEY VALUE            assign a property
has KEY                  check whether a property exists
delete KEY               remove a property
describe KEY             show the property's attributes
define KEY VALUE [readonly] [hidden] [fixed]
                         define a data property with the given attributes
keys                     list enumerable keys
names                    list all textual keys
symbols                  list all symbol keys
entries                  list enumerable keys and their values
seal                     prevent new properties from being added
help                     show this message

Keys starting with '@' are symbols. Values are undefined, null, true, false,
numbers or text.";
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let name = words.next().ok_or(CommandError::Empty)?;

        let key = |words: &mut std::str::SplitWhitespace<'_>, command| {
            words
                .next()
                .map(parse_key)
                .ok_or(CommandError::MissingKey { command })
        };
        let value = |words: &mut std::str::SplitWhitespace<'_>, command| {
            words
                .next()
                .map(parse_value)
                .ok_or(CommandError::MissingValue { command })
        };

        let command = match name {
            "get" => Self::Get(key(&mut words, "get")?),
            "set" => Self::Set(key(&mut words, "set")?, value(&mut words, "set")?),
            "has" => Self::Has(key(&mut words, "has")?),
            "delete" => Self::Delete(key(&mut words, "delete")?),
            "describe" => Self::Describe(key(&mut words, "describe")?),
            "define" => {
                let key = key(&mut words, "define")?;
                let value = value(&mut words, "define")?;

                let mut attributes = Attributes::default();
                for word in words.by_ref() {
                    match word {
                        "readonly" => attributes.readonly = true,
                        "hidden" => attributes.hidden = true,
                        "fixed" => attributes.fixed = true,
                        other => {
                            return Err(CommandError::UnexpectedArgument {
                                argument: other.to_string(),
                            })
                        },
                    }
                }

                Self::Define(key, value, attributes)
            },
            "keys" => Self::Keys,
            "names" => Self::Names,
            "symbols" => Self::Symbols,
            "entries" => Self::Entries,
            "seal" => Self::Seal,
            "help" => Self::Help,
            other => {
                return Err(CommandError::UnknownCommand {
                    name: other.to_string(),
                })
            },
        };

        if let Some(extra) = words.next() {
            return Err(CommandError::UnexpectedArgument {
                argument: extra.to_string(),
            });
        }

        Ok(command)
    }
}

fn parse_key(word: &str) -> KeyArgument {
    match word.strip_prefix('@') {
        Some(name) if !name.is_empty() => KeyArgument::Symbol(name.to_string()),
        _ => KeyArgument::Text(word.to_string()),
    }
}

fn parse_value(word: &str) -> Value {
    match word {
        "undefined" => Value::Undefined,
        "null" => Value::Null,
        "true" => Value::Boolean(true),
        "false" => Value::Boolean(false),
        _ => {
            // Rust accepts "inf" and "NaN" as numbers, the shell treats them as text
            let is_numeric = word
                .trim_start_matches(|c: char| c == '+' || c == '-')
                .starts_with(|c: char| c.is_ascii_digit() || c == '.');

            match word.parse::<f64>() {
                Ok(n) if is_numeric => Value::Number(n),
                _ => Value::String(word.to_string()),
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::{Attributes, Command, CommandError, KeyArgument};
    use caseless::Value;

    fn text(key: &str) -> KeyArgument {
        KeyArgument::Text(key.to_string())
    }

    #[test]
    fn parse_commands() {
        assert_eq!("get Name".parse(), Ok(Command::Get(text("Name"))));
        assert_eq!(
            "set @id 5".parse(),
            Ok(Command::Set(
                KeyArgument::Symbol("id".to_string()),
                Value::Number(5.0)
            ))
        );
        assert_eq!("  keys  ".parse(), Ok(Command::Keys));
        assert_eq!(
            "define Name x hidden fixed".parse(),
            Ok(Command::Define(
                text("Name"),
                Value::from("x"),
                Attributes {
                    readonly: false,
                    hidden: true,
                    fixed: true,
                }
            ))
        );
    }

    #[test]
    fn parse_values() {
        assert_eq!(
            "set a null".parse(),
            Ok(Command::Set(text("a"), Value::Null))
        );
        assert_eq!(
            "set a false".parse(),
            Ok(Command::Set(text("a"), Value::Boolean(false)))
        );
        assert_eq!(
            "set a -1.5".parse(),
            Ok(Command::Set(text("a"), Value::Number(-1.5)))
        );
        assert_eq!(
            "set a infinity".parse(),
            Ok(Command::Set(text("a"), Value::from("infinity")))
        );
        assert_eq!(
            "set @ text".parse(),
            Ok(Command::Set(text("@"), Value::from("text")))
        );
    }

    #[test]
    fn parse_errors() {
        assert_eq!("".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!(
            "get".parse::<Command>(),
            Err(CommandError::MissingKey { command: "get" })
        );
        assert_eq!(
            "set key".parse::<Command>(),
            Err(CommandError::MissingValue { command: "set" })
        );
        assert_eq!(
            "keys now".parse::<Command>(),
            Err(CommandError::UnexpectedArgument {
                argument: "now".to_string()
            })
        );
        assert_eq!(
            "define a 1 frozen".parse::<Command>(),
            Err(CommandError::UnexpectedArgument {
                argument: "frozen".to_string()
            })
        );

        let error = "frobnicate".parse::<Command>().unwrap_err();
        assert_eq!(
            error.to_string(),
            "unknown command \"frobnicate\", try \"help\""
        );
    }
}
