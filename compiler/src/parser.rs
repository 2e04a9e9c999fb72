use parcel::parsers::character::expect_character;
use parcel::prelude::v1::*;

use super::ast;

/// Characters reserved by the pattern syntax. There is no escape mechanism,
/// so these can never appear as literal symbols.
pub const OPERATORS: [char; 5] = ['(', ')', '|', '*', '+'];

/// The deepest group nesting accepted. Parsing and compilation recurse once
/// per level, so deeper patterns are rejected up front.
pub const MAX_GROUP_DEPTH: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    EmptyPattern,
    /// A `(` that is never closed.
    UnclosedGroup,
    /// A `)` with no matching `(`.
    UnmatchedCloseGroup,
    /// A `*` or `+` with nothing repeatable to its left.
    MissingOperand,
    /// An alternative with no content, e.g. `a|`, `|a`, `(|a)` or `()`.
    EmptyAlternative,
    /// A `(` opening a group beyond [MAX_GROUP_DEPTH].
    NestingTooDeep,
    Undefined,
}

/// A malformed pattern, localized to a character offset within it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    kind: SyntaxErrorKind,
    position: usize,
    /// Additional error data.
    data: Option<String>,
}

impl SyntaxError {
    pub fn new(kind: SyntaxErrorKind, position: usize) -> Self {
        Self {
            kind,
            position,
            data: None,
        }
    }

    /// Associates additional data with the error, returning the modified error.
    pub fn with_data(mut self, data: String) -> Self {
        self.data = Some(data);
        self
    }

    pub fn kind(&self) -> SyntaxErrorKind {
        self.kind
    }

    /// The character offset the error was detected at. For errors detected at
    /// the end of input this is the pattern's length in characters.
    pub fn position(&self) -> usize {
        self.position
    }
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let pos = self.position;
        match self.kind {
            SyntaxErrorKind::EmptyPattern => write!(f, "pattern is empty"),
            SyntaxErrorKind::UnclosedGroup => {
                write!(f, "group opened at position {} is never closed", pos)
            }
            SyntaxErrorKind::UnmatchedCloseGroup => {
                write!(f, "unmatched ')' at position {}", pos)
            }
            SyntaxErrorKind::MissingOperand => {
                write!(f, "repetition operator at position {} has no operand", pos)
            }
            SyntaxErrorKind::EmptyAlternative => {
                write!(f, "empty alternative at position {}", pos)
            }
            SyntaxErrorKind::NestingTooDeep => write!(
                f,
                "group at position {} exceeds the maximum nesting depth of {}",
                pos, MAX_GROUP_DEPTH
            ),
            SyntaxErrorKind::Undefined => write!(f, "undefined parse error at position {}", pos),
        }?;

        match &self.data {
            Some(data) => write!(f, ": {}", data),
            None => Ok(()),
        }
    }
}

impl std::error::Error for SyntaxError {}

/// Parses a pattern into its syntax tree.
///
/// # Example
///
/// ```
/// use fa_regex_compiler::ast::*;
/// use fa_regex_compiler::{parse, SyntaxErrorKind};
///
/// assert_eq!(
///     Ok(Expression(vec![
///         Term(vec![Factor::WithoutQuantifier { atom: Atom::Char(Char('a')) }]),
///         Term(vec![Factor::WithQuantifier {
///             atom: Atom::Char(Char('b')),
///             quantifier: Quantifier::ZeroOrMore,
///         }]),
///     ])),
///     parse("a|b*")
/// );
///
/// let err = parse("a|").unwrap_err();
/// assert_eq!(SyntaxErrorKind::EmptyAlternative, err.kind());
/// assert_eq!(2, err.position());
/// ```
pub fn parse(pattern: &str) -> Result<ast::Expression, SyntaxError> {
    let input = pattern.chars().enumerate().collect::<Vec<(usize, char)>>();
    validate(&input)?;

    expression()
        .parse(&input[..])
        .map_err(|err| {
            SyntaxError::new(SyntaxErrorKind::Undefined, 0).with_data(format!("{}", err))
        })
        .and_then(|ms| match ms {
            MatchStatus::Match {
                remainder, inner, ..
            } if remainder.is_empty() => Ok(inner),
            MatchStatus::Match { remainder, .. } | MatchStatus::NoMatch(remainder) => {
                let position = remainder.first().map_or(input.len(), |&(pos, _)| pos);
                Err(SyntaxError::new(SyntaxErrorKind::Undefined, position))
            }
        })
}

// Validation

/// The class of the token to the left of the scan position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Preceding {
    Start,
    OpenGroup,
    Alternation,
    Operand,
    Quantifier,
}

impl Preceding {
    fn closes_term(self) -> bool {
        matches!(self, Preceding::Operand | Preceding::Quantifier)
    }
}

/// Scans the pattern once, left to right, returning the first malformation.
fn validate(input: &[(usize, char)]) -> Result<(), SyntaxError> {
    if input.is_empty() {
        return Err(SyntaxError::new(SyntaxErrorKind::EmptyPattern, 0));
    }

    let mut open_groups = vec![];
    let mut preceding = Preceding::Start;

    for &(pos, c) in input {
        preceding = match c {
            '(' if open_groups.len() == MAX_GROUP_DEPTH => {
                return Err(SyntaxError::new(SyntaxErrorKind::NestingTooDeep, pos))
            }
            '(' => {
                open_groups.push(pos);
                Preceding::OpenGroup
            }
            ')' => {
                if open_groups.pop().is_none() {
                    return Err(SyntaxError::new(SyntaxErrorKind::UnmatchedCloseGroup, pos));
                } else if !preceding.closes_term() {
                    return Err(SyntaxError::new(SyntaxErrorKind::EmptyAlternative, pos));
                }
                Preceding::Operand
            }
            '|' if preceding.closes_term() => Preceding::Alternation,
            '|' => return Err(SyntaxError::new(SyntaxErrorKind::EmptyAlternative, pos)),
            // at most one repetition operator per atom.
            '*' | '+' if preceding == Preceding::Operand => Preceding::Quantifier,
            '*' | '+' => return Err(SyntaxError::new(SyntaxErrorKind::MissingOperand, pos)),
            _ => Preceding::Operand,
        };
    }

    if let Some(pos) = open_groups.pop() {
        Err(SyntaxError::new(SyntaxErrorKind::UnclosedGroup, pos))
    } else if !preceding.closes_term() {
        Err(SyntaxError::new(SyntaxErrorKind::EmptyAlternative, input.len()))
    } else {
        Ok(())
    }
}

// Expression

fn expression<'a>() -> impl Parser<'a, &'a [(usize, char)], ast::Expression> {
    parcel::join(
        term(),
        parcel::zero_or_more(parcel::right(parcel::join(expect_character('|'), term()))),
    )
    .map(|(head, tail)| vec![head].into_iter().chain(tail).collect())
    .map(ast::Expression)
}

fn term<'a>() -> impl Parser<'a, &'a [(usize, char)], ast::Term> {
    parcel::one_or_more(factor()).map(ast::Term)
}

fn factor<'a>() -> impl Parser<'a, &'a [(usize, char)], ast::Factor> {
    parcel::join(atom(), parcel::optional(quantifier())).map(|(atom, quantifier)| {
        match quantifier {
            Some(quantifier) => ast::Factor::WithQuantifier { atom, quantifier },
            None => ast::Factor::WithoutQuantifier { atom },
        }
    })
}

fn atom<'a>() -> impl Parser<'a, &'a [(usize, char)], ast::Atom> {
    parcel::or(group().map(Into::into), || literal().map(Into::into))
}

// Group

fn group<'a>() -> impl Parser<'a, &'a [(usize, char)], ast::Expression> {
    expect_character('(')
        .and_then(|_| parcel::left(parcel::join(expression(), expect_character(')'))))
}

// Quantifiers

fn quantifier<'a>() -> impl Parser<'a, &'a [(usize, char)], ast::Quantifier> {
    parcel::or(
        expect_character('*').map(|_| ast::Quantifier::ZeroOrMore),
        || expect_character('+').map(|_| ast::Quantifier::OneOrMore),
    )
}

// Terminals

fn literal<'a>() -> impl Parser<'a, &'a [(usize, char)], ast::Char> {
    move |input: &'a [(usize, char)]| match input.first() {
        Some(&(pos, next)) if !OPERATORS.contains(&next) => Ok(MatchStatus::Match {
            span: pos..pos + 1,
            remainder: &input[1..],
            inner: ast::Char(next),
        }),
        _ => Ok(MatchStatus::NoMatch(input)),
    }
}
