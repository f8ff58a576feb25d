use crate::row::Row;

/// Builds a mapper that reduces a `(first, rest)` row left to right
///
/// Intended for rows produced by `seq((element, rep(tail)))`: the folder
/// is applied as `folder(accumulator, element)` over the collected tail,
/// starting from the first element. Reducing repeated binary-operator
/// applications this way yields a left-associative result.
pub fn foldl<A, T, F>(folder: F) -> impl Fn(Row<(A, Vec<T>)>) -> A + Copy
where
    F: Fn(A, T) -> A + Copy,
{
    move |Row((first, rest))| {
        let mut accumulator = first;
        for element in rest {
            accumulator = folder(accumulator, element);
        }
        accumulator
    }
}

/// Builds a mapper that reduces a `(rest, last)` row right to left
///
/// Intended for rows produced by `seq((rep(head), element))`: the folder
/// is applied as `folder(element, accumulator)` over the collected heads
/// in reverse, starting from the final element. Reducing repeated
/// binary-operator applications this way yields a right-associative
/// result.
pub fn foldr<T, A, F>(folder: F) -> impl Fn(Row<(Vec<T>, A)>) -> A + Copy
where
    F: Fn(T, A) -> A + Copy,
{
    move |Row((rest, last))| {
        let mut accumulator = last;
        for element in rest.into_iter().rev() {
            accumulator = folder(element, accumulator);
        }
        accumulator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursors::SliceCursor;
    use crate::filter::FilterExt;
    use crate::map::MapExt;
    use crate::map_maybe::MapMaybeExt;
    use crate::maybe::Maybe;
    use crate::parser::Parser;
    use crate::primitive::one;
    use crate::rep::rep;
    use crate::seq::seq;

    fn digit_value(byte: u8) -> Maybe<i64> {
        if byte.is_ascii_digit() {
            Maybe::Present(i64::from(byte - b'0'))
        } else {
            Maybe::Absent
        }
    }

    #[test]
    fn test_foldl_sums_left_to_right() {
        let data = b"1+2+3";
        let cursor = SliceCursor::new(data);

        let tail = rep(seq((one().filter(|byte: &u8| *byte == b'+'), one().map_maybe(digit_value))));
        let parser = seq((one().map_maybe(digit_value), tail))
            .map(foldl(|accumulator, Row((_op, rhs))| accumulator + rhs));

        let (value, _) = parser.parse(cursor).unwrap();
        assert_eq!(value, 6);
    }

    #[test]
    fn test_foldl_is_left_associative() {
        let data = b"9-2-3";
        let cursor = SliceCursor::new(data);

        let tail = rep(seq((one().filter(|byte: &u8| *byte == b'-'), one().map_maybe(digit_value))));
        let parser = seq((one().map_maybe(digit_value), tail))
            .map(foldl(|accumulator, Row((_op, rhs))| accumulator - rhs));

        let (value, _) = parser.parse(cursor).unwrap();
        assert_eq!(value, 4);
    }

    #[test]
    fn test_foldl_with_empty_tail() {
        let data = b"7";
        let cursor = SliceCursor::new(data);

        let tail = rep(seq((one().filter(|byte: &u8| *byte == b'+'), one().map_maybe(digit_value))));
        let parser = seq((one().map_maybe(digit_value), tail))
            .map(foldl(|accumulator, Row((_op, rhs))| accumulator + rhs));

        let (value, _) = parser.parse(cursor).unwrap();
        assert_eq!(value, 7);
    }

    #[test]
    fn test_foldr_is_right_associative() {
        let data = b"2^3^2";
        let cursor = SliceCursor::new(data);

        let heads = rep(seq((one().map_maybe(digit_value), one().filter(|byte: &u8| *byte == b'^'))));
        let parser = seq((heads, one().map_maybe(digit_value)))
            .map(foldr(|Row((base, _op)): Row<(i64, u8)>, accumulator| base.pow(accumulator as u32)));

        let (value, _) = parser.parse(cursor).unwrap();
        assert_eq!(value, 512);
    }

    #[test]
    fn test_foldr_with_empty_heads() {
        let data = b"7";
        let cursor = SliceCursor::new(data);

        let heads = rep(seq((one().map_maybe(digit_value), one().filter(|byte: &u8| *byte == b'^'))));
        let parser = seq((heads, one().map_maybe(digit_value)))
            .map(foldr(|Row((base, _op)): Row<(i64, u8)>, accumulator: i64| base.pow(accumulator as u32)));

        let (value, _) = parser.parse(cursor).unwrap();
        assert_eq!(value, 7);
    }
}
