//! Parsing of the list-valued CSV columns.
//!
//! The `clubs` and `friends` columns hold list literals serialised as text,
//! e.g. `['Fitness Club', "Book Club"]` and `[1, 2, 3]`. Strings may use single
//! or double quotes with backslash escapes. Whitespace between tokens and a
//! trailing comma are accepted. An empty cell is an empty list.
use crate::errors::LiteralError;

/// Parses a list literal of strings.
pub fn parse_string_list(input: &str) -> Result<Vec<String>, LiteralError> {
    parse_list(input, Cursor::string)
}

/// Parses a list literal of integers.
pub fn parse_int_list(input: &str) -> Result<Vec<i64>, LiteralError> {
    parse_list(input, Cursor::integer)
}

fn parse_list<T>(
    input: &str,
    mut element: impl FnMut(&mut Cursor) -> Result<T, LiteralError>,
) -> Result<Vec<T>, LiteralError> {
    let mut cursor = Cursor::new(input);
    cursor.skip_whitespace();
    let Some(first) = cursor.peek() else {
        return Ok(Vec::new());
    };
    if first != '[' {
        return Err(LiteralError::MissingOpeningBracket(first));
    }
    cursor.bump();

    let mut items = Vec::new();
    loop {
        cursor.skip_whitespace();
        match cursor.peek() {
            Some(']') => {
                cursor.bump();
                break;
            }
            Some(_) => items.push(element(&mut cursor)?),
            None => return Err(LiteralError::UnexpectedEnd),
        }

        cursor.skip_whitespace();
        match cursor.peek() {
            Some(',') => cursor.bump(),
            Some(']') => {
                cursor.bump();
                break;
            }
            Some(found) => {
                return Err(LiteralError::UnexpectedChar {
                    found,
                    position: cursor.position,
                });
            }
            None => return Err(LiteralError::UnexpectedEnd),
        }
    }

    cursor.skip_whitespace();
    match cursor.peek() {
        None => Ok(items),
        Some(found) => Err(LiteralError::UnexpectedChar {
            found,
            position: cursor.position,
        }),
    }
}

struct Cursor {
    chars: Vec<char>,
    position: usize,
}

impl Cursor {
    fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            position: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.position).copied()
    }

    fn bump(&mut self) {
        self.position += 1;
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    fn string(&mut self) -> Result<String, LiteralError> {
        let start = self.position;
        let quote = match self.peek() {
            Some(c @ ('\'' | '"')) => c,
            Some(found) => {
                return Err(LiteralError::UnexpectedChar {
                    found,
                    position: start,
                });
            }
            None => return Err(LiteralError::UnexpectedEnd),
        };
        self.bump();

        let mut value = String::new();
        loop {
            let Some(c) = self.peek() else {
                return Err(LiteralError::UnterminatedString(start));
            };
            self.bump();
            match c {
                '\\' => {
                    let Some(escaped) = self.peek() else {
                        return Err(LiteralError::UnterminatedString(start));
                    };
                    self.bump();
                    match escaped {
                        'n' => value.push('\n'),
                        't' => value.push('\t'),
                        '\\' | '\'' | '"' => value.push(escaped),
                        other => {
                            value.push('\\');
                            value.push(other);
                        }
                    }
                }
                c if c == quote => return Ok(value),
                c => value.push(c),
            }
        }
    }

    fn integer(&mut self) -> Result<i64, LiteralError> {
        let start = self.position;
        if matches!(self.peek(), Some('-' | '+')) {
            self.bump();
        }
        while self.peek().is_some_and(|c| c.is_ascii_digit() || c == '_') {
            self.bump();
        }

        let text: String = self.chars[start..self.position].iter().collect();
        if self.position == start {
            return match self.peek() {
                Some(found) => Err(LiteralError::UnexpectedChar {
                    found,
                    position: start,
                }),
                None => Err(LiteralError::UnexpectedEnd),
            };
        }
        text.replace('_', "")
            .parse::<i64>()
            .map_err(|_| LiteralError::InvalidInteger(text))
    }
}
