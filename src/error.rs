use thiserror::Error;

/// Crate specific Errors implementation.
///
/// Every variant carries the byte offset into the parsed expression
/// of the character which made parsing fail.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CronError {
    /// Expression is empty.
    #[error("invalid argument: empty expression")]
    InvalidArgument(usize),
    /// Unexpected character inside a field.
    #[error("invalid field format at offset {0}")]
    FieldFormat(usize),
    /// Number (or name) expected but not found.
    #[error("number expected at offset {0}")]
    NumberExpected(usize),
    /// Number is out of the field range, range bounds are reversed or step is zero.
    #[error("number out of range at offset {0}")]
    NumberRange(usize),
    /// Unknown month or day of week name.
    #[error("invalid name at offset {0}")]
    InvalidName(usize),
    /// Expression ended before all required fields were found.
    #[error("expression too short, field expected at offset {0}")]
    ExprShort(usize),
    /// Unexpected data after the last field.
    #[error("expression too long, unexpected data at offset {0}")]
    ExprLong(usize),
    /// Expression never matches any calendar date, e.g. `31 APR` or `30 FEB`.
    #[error("impossible date in expression, detected at offset {0}")]
    ImpossibleDate(usize),
}

/// Kind of the [`CronError`] without its location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorKind {
    /// See [`CronError::InvalidArgument`].
    InvalidArgument,
    /// See [`CronError::FieldFormat`].
    FieldFormat,
    /// See [`CronError::NumberExpected`].
    NumberExpected,
    /// See [`CronError::NumberRange`].
    NumberRange,
    /// See [`CronError::InvalidName`].
    InvalidName,
    /// See [`CronError::ExprShort`].
    ExprShort,
    /// See [`CronError::ExprLong`].
    ExprLong,
    /// See [`CronError::ImpossibleDate`].
    ImpossibleDate,
}

impl CronError {
    /// Byte offset of the failing character in the source expression.
    pub fn offset(&self) -> usize {
        match *self {
            Self::InvalidArgument(offset)
            | Self::FieldFormat(offset)
            | Self::NumberExpected(offset)
            | Self::NumberRange(offset)
            | Self::InvalidName(offset)
            | Self::ExprShort(offset)
            | Self::ExprLong(offset)
            | Self::ImpossibleDate(offset) => offset,
        }
    }

    /// Kind of the error, convenient for matching.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::FieldFormat(_) => ErrorKind::FieldFormat,
            Self::NumberExpected(_) => ErrorKind::NumberExpected,
            Self::NumberRange(_) => ErrorKind::NumberRange,
            Self::InvalidName(_) => ErrorKind::InvalidName,
            Self::ExprShort(_) => ErrorKind::ExprShort,
            Self::ExprLong(_) => ErrorKind::ExprLong,
            Self::ImpossibleDate(_) => ErrorKind::ImpossibleDate,
        }
    }

    /// Renders the error with the expression and a caret under the failing character:
    ///
    /// ```text
    /// error: number out of range at offset 0
    ///   60 * * * *
    ///   ^
    /// ```
    pub fn caret(&self, expression: &str) -> String {
        let mut out = format!("error: {self}\n");
        out.push_str(&format!("  {expression}\n"));
        // offsets are bytes, the caret column is counted in chars
        let column = expression
            .char_indices()
            .take_while(|(i, _)| *i < self.offset())
            .count();
        out.push_str(&" ".repeat(column + 2));
        out.push('^');
        out
    }
}
