/// Outcome wrapper for mappers that can reject a parse
///
/// `Maybe` looks like an optional but is its own type, never an alias of
/// `Option` and not convertible from one. A mapper given to [`map_maybe`]
/// returns `Maybe` to signal "reject this parse" with [`Absent`], and
/// [`opt`] yields it to report whether its inner parser matched; a
/// grammar whose legitimate values are `Option`-shaped keeps using
/// `Option` without ever being mistaken for either.
///
/// [`opt`]: crate::opt::opt
///
/// [`map_maybe`]: crate::map_maybe::map_maybe
/// [`Absent`]: Maybe::Absent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Maybe<T> {
    /// The mapper produced a value; the parse succeeds with it.
    Present(T),
    /// The mapper rejects the parse.
    Absent,
}

impl<T> Maybe<T> {
    pub fn is_present(&self) -> bool {
        matches!(self, Maybe::Present(_))
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Maybe::Absent)
    }

    /// The contained value, or `default` when absent.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Maybe::Present(value) => value,
            Maybe::Absent => default,
        }
    }

    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Present(value) => Maybe::Present(value),
            Maybe::Absent => Maybe::Absent,
        }
    }

    /// Explicit conversion for callers leaving the engine's domain.
    pub fn into_option(self) -> Option<T> {
        match self {
            Maybe::Present(value) => Some(value),
            Maybe::Absent => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presence_checks() {
        assert!(Maybe::Present(3).is_present());
        assert!(!Maybe::Present(3).is_absent());
        assert!(Maybe::<i32>::Absent.is_absent());
    }

    #[test]
    fn test_unwrap_or() {
        assert_eq!(Maybe::Present(7).unwrap_or(0), 7);
        assert_eq!(Maybe::Absent.unwrap_or(0), 0);
    }

    #[test]
    fn test_as_ref() {
        let present = Maybe::Present("hi".to_string());
        assert_eq!(present.as_ref(), Maybe::Present(&"hi".to_string()));
        assert_eq!(Maybe::<String>::Absent.as_ref(), Maybe::Absent);
    }

    #[test]
    fn test_into_option() {
        assert_eq!(Maybe::Present('x').into_option(), Some('x'));
        assert_eq!(Maybe::<char>::Absent.into_option(), None);
    }

    #[test]
    fn test_option_values_stay_distinct() {
        // A grammar value that is itself an Option nests unchanged; the
        // sentinel wraps around it rather than merging with it.
        let wrapped: Maybe<Option<u8>> = Maybe::Present(None);
        assert!(wrapped.is_present());
        assert_eq!(wrapped.unwrap_or(Some(9)), None);
    }
}
