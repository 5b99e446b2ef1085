//! Cycle notation.
//!
//! A cycle string is a sequence of parenthesized cycles such as `(1 5)(2 3)`. Inside a cycle,
//! elements are separated by any run of spaces and commas, so `(1,5)`, `(1, 5)` and `( 1  5 )`
//! all denote the same cycle. Separators between cycles are ignored.
use log::trace;

use crate::error::ParseError;
use crate::El;

/// A lexical token of cycle notation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token<'a> {
    /// `(`, starting a cycle.
    Open,
    /// `)`, ending a cycle.
    Close,
    /// A candidate element, not yet checked to be a number.
    Element(&'a str),
}

fn is_separator(c: char) -> bool {
    c == ' ' || c == ','
}

fn is_delimiter(c: char) -> bool {
    is_separator(c) || c == '(' || c == ')'
}

/// Iterator over the tokens of a cycle string, paired with their byte offsets.
///
/// Separators are skipped. Any maximal run of characters that are neither separators nor
/// parentheses is an [`Token::Element`], whether or not it is a valid number.
#[derive(Clone, Debug)]
pub struct Tokens<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Tokens<'a> {
    /// Tokenize `src` from the start.
    pub fn new(src: &'a str) -> Tokens<'a> {
        Tokens { src, pos: 0 }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = (usize, Token<'a>);

    fn next(&mut self) -> Option<(usize, Token<'a>)> {
        let rest = &self.src[self.pos..];
        let skipped = rest.len() - rest.trim_start_matches(is_separator).len();
        self.pos += skipped;

        let start = self.pos;
        let rest = &self.src[start..];
        let token = match rest.chars().next()? {
            '(' => {
                self.pos += 1;
                Token::Open
            }
            ')' => {
                self.pos += 1;
                Token::Close
            }
            _ => {
                let len = rest.find(is_delimiter).unwrap_or(rest.len());
                self.pos += len;
                Token::Element(&rest[..len])
            }
        };
        Some((start, token))
    }
}

fn parse_element(token: &str, offset: usize) -> Result<El, ParseError> {
    // `str::parse` would also accept a leading '+'
    let invalid = || ParseError::InvalidToken {
        token: token.to_owned(),
        offset,
    };
    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    token.parse().map_err(|_| invalid())
}

/// Parse a cycle string into its list of cycles, in textual order.
///
/// Empty cycles `()` are dropped. Elements are not range checked and cycles are not checked for
/// disjointness; see [`Perm::from_cycles`](crate::perm::Perm::from_cycles) for how they are
/// applied.
pub fn parse_cycles(notation: &str) -> Result<Vec<Vec<El>>, ParseError> {
    let mut cycles = vec![];
    // Offset of the currently open '(' together with the elements read so far
    let mut open: Option<(usize, Vec<El>)> = None;

    for (offset, token) in Tokens::new(notation) {
        match token {
            Token::Open => {
                if open.is_some() {
                    return Err(ParseError::NestedCycle { offset });
                }
                open = Some((offset, vec![]));
            }
            Token::Close => {
                let (_, cycle) = open.take().ok_or(ParseError::UnmatchedClose { offset })?;
                if !cycle.is_empty() {
                    trace!("parsed cycle {:?}", cycle);
                    cycles.push(cycle);
                }
            }
            Token::Element(token) => match open.as_mut() {
                Some((_, cycle)) => cycle.push(parse_element(token, offset)?),
                None => return Err(ParseError::ElementOutsideCycle { offset }),
            },
        }
    }

    match open {
        Some((offset, _)) => Err(ParseError::UnterminatedCycle { offset }),
        None => Ok(cycles),
    }
}
