use crate::error::Result;
use crate::util::prompt::{Prompt, Prompts};

/// Values given explicitly on the command line.
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    pub public: bool,
    pub description: Option<String>,
    pub grant_types: Option<String>,
    pub redirect_uri: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedInput {
    pub is_public: bool,
    pub description: Option<String>,
    pub grant_types: Option<String>,
    pub redirect_uri: Option<String>,
}

/// Resolves every field on its own: a non-empty explicit value wins, then the
/// field's prompt, then the empty value.
pub fn resolve(args: &CreateArgs, prompts: &mut Prompts) -> Result<ResolvedInput> {
    Ok(ResolvedInput {
        is_public: resolve_flag(args.public, &mut prompts.public)?,
        description: resolve_text(args.description.as_deref(), &mut prompts.description)?,
        grant_types: resolve_text(args.grant_types.as_deref(), &mut prompts.grant_types)?,
        redirect_uri: resolve_text(args.redirect_uri.as_deref(), &mut prompts.redirect_uri)?,
    })
}

fn resolve_flag(explicit: bool, prompt: &mut Box<dyn Prompt>) -> Result<bool> {
    if explicit {
        return Ok(true);
    }
    Ok(prompt.show()?.truthy())
}

fn resolve_text(explicit: Option<&str>, prompt: &mut Box<dyn Prompt>) -> Result<Option<String>> {
    match explicit {
        Some(value) if !value.is_empty() => Ok(Some(value.to_string())),
        _ => Ok(prompt.show()?.into_text()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::util::prompt::{Answer, DESCRIPTION, GRANT_TYPES, PUBLIC, REDIRECT_URI};
    use std::cell::Cell;
    use std::rc::Rc;

    struct Counting {
        answer: Answer,
        calls: Rc<Cell<usize>>,
    }

    impl Prompt for Counting {
        fn show(&mut self) -> Result<Answer> {
            self.calls.set(self.calls.get() + 1);
            Ok(self.answer.clone())
        }
    }

    fn prompts(answers: [Answer; 4]) -> (Prompts, Rc<Cell<usize>>) {
        let calls = Rc::new(Cell::new(0));
        let keys = [PUBLIC, DESCRIPTION, GRANT_TYPES, REDIRECT_URI];
        let entries = keys.iter().zip(answers.iter()).map(|(key, answer)| {
            let prompt: Box<dyn Prompt> = Box::new(Counting {
                answer: answer.clone(),
                calls: Rc::clone(&calls),
            });
            (*key, prompt)
        });
        (Prompts::from_entries(entries).unwrap(), calls)
    }

    fn text(s: &str) -> Answer {
        Answer::Text(s.to_string())
    }

    #[test]
    fn explicit_values_win_without_prompting() {
        let (mut prompts, calls) = prompts([
            Answer::Flag(false),
            text("prompted"),
            text("prompted"),
            text("prompted"),
        ]);
        let args = CreateArgs {
            public: true,
            description: Some("desc".into()),
            grant_types: Some("code".into()),
            redirect_uri: Some("https://a/cb".into()),
        };

        let resolved = resolve(&args, &mut prompts).unwrap();
        assert_eq!(
            resolved,
            ResolvedInput {
                is_public: true,
                description: Some("desc".into()),
                grant_types: Some("code".into()),
                redirect_uri: Some("https://a/cb".into()),
            }
        );
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn prompts_fill_missing_values() {
        let (mut prompts, calls) = prompts([
            text("y"),
            text("desc"),
            text("code"),
            text("https://a/cb"),
        ]);

        let resolved = resolve(&CreateArgs::default(), &mut prompts).unwrap();
        assert!(resolved.is_public);
        assert_eq!(resolved.description.as_deref(), Some("desc"));
        assert_eq!(resolved.grant_types.as_deref(), Some("code"));
        assert_eq!(resolved.redirect_uri.as_deref(), Some("https://a/cb"));
        assert_eq!(calls.get(), 4);
    }

    #[test]
    fn empty_explicit_value_falls_back_to_prompt() {
        let (mut prompts, _) = prompts([
            Answer::Empty,
            text("from prompt"),
            Answer::Empty,
            Answer::Empty,
        ]);
        let args = CreateArgs {
            description: Some(String::new()),
            ..CreateArgs::default()
        };

        let resolved = resolve(&args, &mut prompts).unwrap();
        assert_eq!(resolved.description.as_deref(), Some("from prompt"));
    }

    #[test]
    fn nothing_given_resolves_to_empty_values() {
        let (mut prompts, _) =
            prompts([Answer::Empty, Answer::Empty, Answer::Empty, Answer::Empty]);

        let resolved = resolve(&CreateArgs::default(), &mut prompts).unwrap();
        assert_eq!(
            resolved,
            ResolvedInput {
                is_public: false,
                description: None,
                grant_types: None,
                redirect_uri: None,
            }
        );
    }

    #[test]
    fn every_combination_of_explicit_and_prompted() {
        for explicit in [false, true].iter().copied() {
            for prompted in [false, true].iter().copied() {
                let answer = if prompted { text("prompt") } else { Answer::Empty };
                let (mut prompts, _) = prompts([
                    if prompted { Answer::Flag(true) } else { Answer::Empty },
                    answer.clone(),
                    answer.clone(),
                    answer,
                ]);
                let value = if explicit { Some("explicit".to_string()) } else { None };
                let args = CreateArgs {
                    public: explicit,
                    description: value.clone(),
                    grant_types: value.clone(),
                    redirect_uri: value,
                };

                let resolved = resolve(&args, &mut prompts).unwrap();
                let expected = match (explicit, prompted) {
                    (true, _) => Some("explicit"),
                    (false, true) => Some("prompt"),
                    (false, false) => None,
                };
                assert_eq!(resolved.is_public, explicit || prompted);
                assert_eq!(resolved.description.as_deref(), expected);
                assert_eq!(resolved.grant_types.as_deref(), expected);
                assert_eq!(resolved.redirect_uri.as_deref(), expected);
            }
        }
    }

    #[test]
    fn redirect_uri_does_not_read_description() {
        let (mut prompts, _) = prompts([
            Answer::Empty,
            Answer::Empty,
            Answer::Empty,
            text("https://b/cb"),
        ]);
        let args = CreateArgs {
            description: Some("only a description".into()),
            ..CreateArgs::default()
        };

        let resolved = resolve(&args, &mut prompts).unwrap();
        assert_eq!(resolved.redirect_uri.as_deref(), Some("https://b/cb"));
    }

    #[test]
    fn prompt_failure_propagates() {
        let failing: Box<dyn Prompt> = Box::new(|| -> Result<Answer> { Err(Error::Cancelled) });
        let ok = || -> Box<dyn Prompt> { Box::new(|| -> Result<Answer> { Ok(Answer::Empty) }) };
        let mut prompts = Prompts::from_entries(vec![
            (PUBLIC, ok()),
            (DESCRIPTION, failing),
            (GRANT_TYPES, ok()),
            (REDIRECT_URI, ok()),
        ])
        .unwrap();

        let err = resolve(&CreateArgs::default(), &mut prompts).unwrap_err();
        assert!(matches!(err, Error::Cancelled));
    }
}
