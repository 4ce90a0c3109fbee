use thiserror::Error;

/// Errors returned by the fallible list and ring buffer operations.
///
/// Operations that can only come back empty-handed for one reason (popping an
/// empty stack, searching a slice) return `None` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// The index lies outside `0..len`.
    #[error("index {index} is out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    /// The structure holds no element.
    #[error("the structure is empty")]
    Empty,
    /// No element matches the requested value.
    #[error("no element matches the requested value")]
    NotFound,
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn error_messages() {
        let err = Error::IndexOutOfRange { index: 7, len: 3 };
        assert_eq!(err.to_string(), "index 7 is out of range for length 3");
        assert_eq!(Error::Empty.to_string(), "the structure is empty");
        assert_eq!(
            Error::NotFound.to_string(),
            "no element matches the requested value"
        );
    }
}
