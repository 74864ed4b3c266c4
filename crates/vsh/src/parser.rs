//! Command-line tokenizer.
//!
//! Thin lexer for one input line: whitespace-separated tokens, with single
//! or double quotes grouping a span (quotes stripped, no escape
//! processing). All real argument handling lives in the builtins.

/// A parsed command line: the verb and its raw arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub name: String,
    pub args: Vec<String>,
}

/// Parse one input line. Blank lines parse to `None`.
pub fn parse_line(input: &str) -> Option<Command> {
    let mut tokens = tokenize(input).into_iter();
    let name = tokens.next()?;
    Some(Command {
        name,
        args: tokens.collect(),
    })
}

fn tokenize(input: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut started = false;
    let mut quote: Option<char> = None;

    for c in input.chars() {
        match quote {
            Some(q) => {
                if c == q {
                    quote = None;
                } else {
                    current.push(c);
                }
            }
            None => match c {
                '\'' | '"' => {
                    quote = Some(c);
                    started = true;
                }
                c if c.is_whitespace() => {
                    if started {
                        tokens.push(std::mem::take(&mut current));
                        started = false;
                    }
                }
                c => {
                    current.push(c);
                    started = true;
                }
            },
        }
    }
    if started {
        tokens.push(current);
    }
    tokens
}
