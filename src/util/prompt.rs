//! Interactive input providers.
//!
//! A [`Prompt`] produces one answer on demand. The create workflow receives
//! its four prompts as a [`Prompts`] configuration keyed by field name; the
//! terminal implementations read from stdin and ask on stderr so that stdout
//! only ever carries the report.

use std::collections::HashMap;
use std::fmt;
use std::io::{self, BufRead, Write};

use tracing::{event, Level};

use crate::error::{Error, Result};

pub const PUBLIC: &str = "public";
pub const DESCRIPTION: &str = "description";
pub const GRANT_TYPES: &str = "grant-types";
pub const REDIRECT_URI: &str = "redirect-uri";

const KEYS: [&str; 4] = [PUBLIC, DESCRIPTION, GRANT_TYPES, REDIRECT_URI];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Text(String),
    Flag(bool),
    Empty,
}

impl Answer {
    pub fn truthy(&self) -> bool {
        match self {
            Answer::Flag(b) => *b,
            Answer::Text(s) => {
                let s = s.trim().to_ascii_lowercase();
                !matches!(s.as_str(), "" | "0" | "n" | "no" | "false")
            }
            Answer::Empty => false,
        }
    }

    pub fn into_text(self) -> Option<String> {
        match self {
            Answer::Text(s) if !s.is_empty() => Some(s),
            Answer::Flag(true) => Some("1".to_string()),
            _ => None,
        }
    }
}

pub trait Prompt {
    fn show(&mut self) -> Result<Answer>;
}

impl<F> Prompt for F
where
    F: FnMut() -> Result<Answer>,
{
    fn show(&mut self) -> Result<Answer> {
        self()
    }
}

/// Reads one line of free text.
#[derive(Debug, Clone)]
pub struct LinePrompt {
    message: String,
    max_length: usize,
}

impl LinePrompt {
    pub fn new(message: impl Into<String>, max_length: usize) -> Self {
        Self {
            message: message.into(),
            max_length,
        }
    }

    pub fn read<R: BufRead, W: Write>(&self, input: &mut R, output: &mut W) -> Result<Answer> {
        write!(output, "{} ", self.message)?;
        output.flush()?;

        let line = read_line(input)?;
        let answer: String = line.chars().take(self.max_length).collect();
        if answer.is_empty() {
            Ok(Answer::Empty)
        } else {
            Ok(Answer::Text(answer))
        }
    }
}

impl Prompt for LinePrompt {
    fn show(&mut self) -> Result<Answer> {
        self.read(&mut io::stdin().lock(), &mut io::stderr())
    }
}

/// Asks a yes/no question, re-asking until the answer is recognised.
#[derive(Debug, Clone)]
pub struct ConfirmPrompt {
    message: String,
}

impl ConfirmPrompt {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn read<R: BufRead, W: Write>(&self, input: &mut R, output: &mut W) -> Result<Answer> {
        loop {
            write!(output, "{} [y/n] ", self.message)?;
            output.flush()?;

            match read_line(input)?.trim().to_ascii_lowercase().as_str() {
                "y" | "yes" => return Ok(Answer::Flag(true)),
                "n" | "no" => return Ok(Answer::Flag(false)),
                "" => return Ok(Answer::Empty),
                other => event!(Level::DEBUG, answer = other, "Unrecognised confirmation"),
            }
        }
    }
}

impl Prompt for ConfirmPrompt {
    fn show(&mut self) -> Result<Answer> {
        self.read(&mut io::stdin().lock(), &mut io::stderr())
    }
}

fn read_line<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(Error::Cancelled);
    }
    Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
}

/// The prompts consulted by the create workflow, one per resolvable field.
pub struct Prompts {
    pub(crate) public: Box<dyn Prompt>,
    pub(crate) description: Box<dyn Prompt>,
    pub(crate) grant_types: Box<dyn Prompt>,
    pub(crate) redirect_uri: Box<dyn Prompt>,
}

impl Prompts {
    /// Builds the configuration from `(key, prompt)` pairs. Every recognised
    /// key must be given exactly once and nothing else may be given.
    pub fn from_entries<I, K>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, Box<dyn Prompt>)>,
        K: Into<String>,
    {
        let mut map: HashMap<String, Box<dyn Prompt>> = HashMap::new();
        for (key, prompt) in entries {
            let key = key.into();
            if !KEYS.contains(&key.as_str()) {
                return Err(Error::Configuration(format!(
                    "unrecognised prompt '{}', expected one of: {}",
                    key,
                    KEYS.join(", ")
                )));
            }
            if map.insert(key.clone(), prompt).is_some() {
                return Err(Error::Configuration(format!(
                    "prompt '{}' configured more than once",
                    key
                )));
            }
        }

        let mut take = |key: &str| {
            map.remove(key)
                .ok_or_else(|| Error::Configuration(format!("missing prompt '{}'", key)))
        };

        Ok(Self {
            public: take(PUBLIC)?,
            description: take(DESCRIPTION)?,
            grant_types: take(GRANT_TYPES)?,
            redirect_uri: take(REDIRECT_URI)?,
        })
    }

    /// Terminal prompts reading from stdin.
    pub fn interactive() -> Self {
        Self {
            public: Box::new(ConfirmPrompt::new("Is the client public?")),
            description: Box::new(LinePrompt::new(
                "Please enter a client description: []",
                255,
            )),
            grant_types: Box::new(LinePrompt::new(
                "Please enter a comma separated list of client grant types (leave empty to allow any): []",
                255,
            )),
            redirect_uri: Box::new(LinePrompt::new("Please enter a redirect URI: []", 2000)),
        }
    }
}

impl fmt::Debug for Prompts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(KEYS.iter()).finish()
    }
}
