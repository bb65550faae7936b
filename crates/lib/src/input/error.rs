use core::fmt;
use core::ops::Range;

use crate::env::Size;

/// The kind of an input error.
#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
    NotInteger(&'static str),
    NotUtf8,
    ExpectedChar,
    ExpectedLine,
    ExpectedTuple(usize),
    UnexpectedEof,
    BadArray(usize, usize),
    StringCapacity(usize),
    ArrayCapacity(usize),
    Custom(anyhow::Error),
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::NotInteger(n) => write!(f, "not an integer or integer overflow `{n}`"),
            ErrorKind::NotUtf8 => write!(f, "not utf-8"),
            ErrorKind::ExpectedChar => write!(f, "expected character"),
            ErrorKind::ExpectedLine => write!(f, "expected line"),
            ErrorKind::ExpectedTuple(n) => write!(f, "expected tuple of length `{n}`"),
            ErrorKind::UnexpectedEof => write!(f, "unexpected eof"),
            ErrorKind::BadArray(expected, actual) => {
                write!(f, "bad array; expected {expected}, but got {actual}")
            }
            ErrorKind::StringCapacity(cap) => write!(f, "string out of capacity ({cap})"),
            ErrorKind::ArrayCapacity(cap) => write!(f, "array out of capacity ({cap})"),
            ErrorKind::Custom(error) => error.fmt(f),
        }
    }
}

/// Error raised through input processing.
#[derive(Debug)]
pub struct IStrError {
    pub(crate) span: Range<Size>,
    pub(crate) kind: ErrorKind,
}

impl IStrError {
    /// Construct a new input error.
    #[inline]
    pub fn new(span: Range<Size>, kind: ErrorKind) -> Self {
        Self { span, kind }
    }

    /// Construct a custom input error, as raised by [crate::from_input!]
    /// blocks.
    #[inline]
    pub fn custom(span: Range<Size>, error: anyhow::Error) -> Self {
        Self::new(span, ErrorKind::Custom(error))
    }

    /// The kind of the error.
    #[inline]
    pub fn kind(self) -> ErrorKind {
        self.kind
    }
}

impl fmt::Display for IStrError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (at {:?})", self.kind, self.span)
    }
}

impl std::error::Error for IStrError {}
