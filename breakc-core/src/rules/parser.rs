//! Line-oriented parser for the rule language

use super::{BreakAction, Pattern, Rule, RuleKind, RuleSet, ARROW, COMMENT, LABEL_MARKER, WILDCARD};
use crate::error::{ParseError, ParseErrorKind};

/// Words that can never name a token or a state
const RESERVED: [&str; 4] = ["-", "x", ARROW, ":"];

/// Parse rule-language source into an immutable [`RuleSet`]
pub fn parse(source: &str) -> Result<RuleSet, ParseError> {
    let mut context = ParseContext::default();
    for (index, text) in source.lines().enumerate() {
        context.line_number = index + 1;
        context
            .line(text)
            .map_err(|kind| ParseError::new(index + 1, text, kind))?;
    }
    Ok(context.finish())
}

/// Accumulated parser state, consumed by [`ParseContext::finish`]
#[derive(Debug, Default)]
struct ParseContext {
    line_number: usize,
    group: Option<String>,
    tokens: Vec<String>,
    rules: Vec<Rule>,
    start: Option<String>,
}

impl ParseContext {
    fn line(&mut self, text: &str) -> Result<(), ParseErrorKind> {
        let content = match text.find(COMMENT) {
            Some(index) => &text[..index],
            None => text,
        };

        let words: Vec<&str> = content.split_whitespace().collect();
        let Some(&first) = words.first() else {
            return Ok(());
        };

        if words.last().is_some_and(|w| w.ends_with(LABEL_MARKER)) {
            return self.label(&words);
        }

        if first == ARROW {
            return match words.as_slice() {
                [_, start] => {
                    let start = state_name(start)?;
                    if let Some(previous) = self.start.replace(start) {
                        log::debug!(
                            "start state `{previous}` replaced on line {}",
                            self.line_number
                        );
                    }
                    Ok(())
                }
                _ => Err(ParseErrorKind::MalformedArrow),
            };
        }

        if words.len() == 1 && BreakAction::from_symbol(first).is_none() {
            self.tokens.push(state_name(first)?);
            return Ok(());
        }

        let kind = if words.contains(&ARROW) {
            arrow_rule(&words)?
        } else {
            break_rule(&words)?
        };
        self.rules.push(Rule {
            kind,
            group: self.group.clone(),
            line: self.line_number,
        });
        Ok(())
    }

    fn label(&mut self, words: &[&str]) -> Result<(), ParseErrorKind> {
        let joined = words.join(" ");
        let name = joined.trim_end_matches(LABEL_MARKER).trim();
        if name.is_empty() {
            return Err(ParseErrorKind::EmptyLabel);
        }
        self.group = Some(name.to_string());
        Ok(())
    }

    fn finish(self) -> RuleSet {
        log::debug!(
            "parsed {} tokens and {} rules, start {:?}",
            self.tokens.len(),
            self.rules.len(),
            self.start
        );
        RuleSet::new(self.tokens, self.rules, self.start)
    }
}

/// `A -> B` or `A token -> C`
fn arrow_rule(words: &[&str]) -> Result<RuleKind, ParseErrorKind> {
    match *words {
        [source, ARROW, target] => Ok(RuleKind::Alias {
            source: state_name(source)?,
            target: state_name(target)?,
        }),
        [lhs, token, ARROW, next] => Ok(RuleKind::Transition {
            lhs: pattern(lhs)?,
            token: pattern(token)?,
            next: state_name(next)?,
        }),
        _ => Err(ParseErrorKind::MalformedArrow),
    }
}

/// `[lhs] action [rhs]`
fn break_rule(words: &[&str]) -> Result<RuleKind, ParseErrorKind> {
    let (lhs, rest) = match words.split_first() {
        Some((&first, rest)) if BreakAction::from_symbol(first).is_none() => {
            (pattern(first)?, rest)
        }
        _ => (Pattern::Any, words),
    };

    let (action, rest) = match rest.split_first() {
        Some((&symbol, rest)) => match BreakAction::from_symbol(symbol) {
            Some(action) => (action, rest),
            None => return Err(ParseErrorKind::InvalidAction(symbol.to_string())),
        },
        None => return Err(ParseErrorKind::InvalidAction(String::new())),
    };

    let rhs = match rest {
        [] => Pattern::Any,
        [word] => pattern(word)?,
        _ => return Err(ParseErrorKind::TooManyWords),
    };

    Ok(RuleKind::Break { lhs, action, rhs })
}

/// A concrete token or state name
fn state_name(word: &str) -> Result<String, ParseErrorKind> {
    if RESERVED.contains(&word) {
        return Err(ParseErrorKind::ReservedSymbol(word.to_string()));
    }
    if word == WILDCARD {
        return Err(ParseErrorKind::MisplacedWildcard);
    }
    Ok(word.to_string())
}

/// A name or the wildcard
fn pattern(word: &str) -> Result<Pattern, ParseErrorKind> {
    if word == WILDCARD {
        Ok(Pattern::Any)
    } else {
        state_name(word).map(Pattern::Name)
    }
}
