//! The aggregate algebra behind sequencing.
//!
//! Sequencing parsers produces an ordered, heterogeneous collection of
//! values. [`Row`] is that collection: a thin nominal wrapper over a
//! backing tuple, distinct from plain tuples so that a grammar whose own
//! values are tuples can never be confused with the engine's aggregates.
//!
//! Rows are always maximally flat. The algebra guarantees it structurally:
//! [`Concat`] joins two backing tuples into one flat tuple, and
//! [`Collapse`] packs a backing tuple into its public form, turning a
//! one-element tuple into the bare element. A one-element row therefore
//! never exists as a parse result; singleton rows appear only as transient
//! operands (see [`Row::single`]).
//!
//! Both traits are implemented over a closed grid of arities up to 8,
//! which caps the flat width of a sequence result.

/// Ordered, heterogeneous sequence of values produced by sequencing
///
/// The backing tuple of a parse-result row has arity 0 or 2..=8; arity 1
/// collapses to the bare element before it can be observed. Destructure
/// with the tuple pattern: `let Row((a, b)) = parsed;`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row<T>(pub T);

impl Row<()> {
    /// The empty row, the result of `succ()`.
    pub fn empty() -> Self {
        Row(())
    }
}

impl<T> Row<(T,)> {
    /// Lift a bare value into a one-element row.
    ///
    /// Only useful as a transient concatenation operand; any result that
    /// would be a singleton row collapses to the bare value instead.
    pub fn single(value: T) -> Self {
        Row((value,))
    }
}

impl<T> Row<T> {
    /// Concatenate two rows into one flat row, collapsing a singleton
    /// result to its bare element.
    pub fn concat<U>(self, other: Row<U>) -> <<T as Concat<U>>::Output as Collapse>::Output
    where
        T: Concat<U>,
        <T as Concat<U>>::Output: Collapse,
    {
        self.0.concat(other.0).collapse()
    }

    /// Typed access to the element at index `I`.
    pub fn get<const I: usize>(&self) -> &<Self as Pick<I>>::Elem
    where
        Self: Pick<I>,
    {
        <Self as Pick<I>>::pick(self)
    }
}

/// Concatenation of backing tuples, the primitive behind row flattening
///
/// Implemented for every pair of tuple arities with a combined width of at
/// most 8. The output is always one flat tuple.
pub trait Concat<Rhs> {
    type Output;

    fn concat(self, rhs: Rhs) -> Self::Output;
}

/// Packing a backing tuple into its public form
///
/// The empty tuple packs to the empty row, a one-element tuple collapses
/// to its bare element, and anything wider packs to a flat [`Row`].
/// Collapse is idempotent by construction: the singleton case produces a
/// different type, so there is never a nested singleton left to collapse.
pub trait Collapse {
    type Output;

    fn collapse(self) -> Self::Output;
}

/// Typed element access into a row, used by [`select!`](crate::select).
pub trait Pick<const I: usize> {
    type Elem;

    fn pick(&self) -> &Self::Elem;
}

macro_rules! impl_concat {
    ((); ()) => {
        impl Concat<()> for () {
            type Output = ();

            #[inline]
            fn concat(self, _rhs: ()) -> Self::Output {}
        }
    };
    (($($a:ident),*); ($($b:ident),*)) => {
        impl<$($a,)* $($b,)*> Concat<($($b,)*)> for ($($a,)*) {
            type Output = ($($a,)* $($b,)*);

            #[inline]
            #[allow(non_snake_case)]
            fn concat(self, rhs: ($($b,)*)) -> Self::Output {
                let ($($a,)*) = self;
                let ($($b,)*) = rhs;
                ($($a,)* $($b,)*)
            }
        }
    };
}

// One impl per right-hand arity, counting down to the empty tuple.
macro_rules! impl_concat_rhs {
    (($($a:ident),*);) => {
        impl_concat!(($($a),*); ());
    };
    (($($a:ident),*); $b0:ident $(, $b:ident)*) => {
        impl_concat!(($($a),*); ($b0 $(, $b)*));
        impl_concat_rhs!(($($a),*); $($b),*);
    };
}

impl_concat_rhs!((); B1, B2, B3, B4, B5, B6, B7, B8);
impl_concat_rhs!((A1); B1, B2, B3, B4, B5, B6, B7);
impl_concat_rhs!((A1, A2); B1, B2, B3, B4, B5, B6);
impl_concat_rhs!((A1, A2, A3); B1, B2, B3, B4, B5);
impl_concat_rhs!((A1, A2, A3, A4); B1, B2, B3, B4);
impl_concat_rhs!((A1, A2, A3, A4, A5); B1, B2, B3);
impl_concat_rhs!((A1, A2, A3, A4, A5, A6); B1, B2);
impl_concat_rhs!((A1, A2, A3, A4, A5, A6, A7); B1);
impl_concat_rhs!((A1, A2, A3, A4, A5, A6, A7, A8););

impl Collapse for () {
    type Output = Row<()>;

    #[inline]
    fn collapse(self) -> Self::Output {
        Row(())
    }
}

impl<T> Collapse for (T,) {
    type Output = T;

    #[inline]
    fn collapse(self) -> Self::Output {
        self.0
    }
}

macro_rules! impl_collapse {
    ($($t:ident),+) => {
        impl<$($t),+> Collapse for ($($t,)+) {
            type Output = Row<($($t,)+)>;

            #[inline]
            fn collapse(self) -> Self::Output {
                Row(self)
            }
        }
    };
}

impl_collapse!(A, B);
impl_collapse!(A, B, C);
impl_collapse!(A, B, C, D);
impl_collapse!(A, B, C, D, E);
impl_collapse!(A, B, C, D, E, F);
impl_collapse!(A, B, C, D, E, F, G);
impl_collapse!(A, B, C, D, E, F, G, H);

macro_rules! impl_pick {
    ($idx:tt -> $elem:ident; $($t:ident),+) => {
        impl<$($t),+> Pick<$idx> for Row<($($t,)+)> {
            type Elem = $elem;

            #[inline]
            fn pick(&self) -> &Self::Elem {
                &(self.0).$idx
            }
        }
    };
}

impl_pick!(0 -> A; A, B);
impl_pick!(1 -> B; A, B);
impl_pick!(0 -> A; A, B, C);
impl_pick!(1 -> B; A, B, C);
impl_pick!(2 -> C; A, B, C);
impl_pick!(0 -> A; A, B, C, D);
impl_pick!(1 -> B; A, B, C, D);
impl_pick!(2 -> C; A, B, C, D);
impl_pick!(3 -> D; A, B, C, D);
impl_pick!(0 -> A; A, B, C, D, E);
impl_pick!(1 -> B; A, B, C, D, E);
impl_pick!(2 -> C; A, B, C, D, E);
impl_pick!(3 -> D; A, B, C, D, E);
impl_pick!(4 -> E; A, B, C, D, E);
impl_pick!(0 -> A; A, B, C, D, E, F);
impl_pick!(1 -> B; A, B, C, D, E, F);
impl_pick!(2 -> C; A, B, C, D, E, F);
impl_pick!(3 -> D; A, B, C, D, E, F);
impl_pick!(4 -> E; A, B, C, D, E, F);
impl_pick!(5 -> F; A, B, C, D, E, F);
impl_pick!(0 -> A; A, B, C, D, E, F, G);
impl_pick!(1 -> B; A, B, C, D, E, F, G);
impl_pick!(2 -> C; A, B, C, D, E, F, G);
impl_pick!(3 -> D; A, B, C, D, E, F, G);
impl_pick!(4 -> E; A, B, C, D, E, F, G);
impl_pick!(5 -> F; A, B, C, D, E, F, G);
impl_pick!(6 -> G; A, B, C, D, E, F, G);
impl_pick!(0 -> A; A, B, C, D, E, F, G, H);
impl_pick!(1 -> B; A, B, C, D, E, F, G, H);
impl_pick!(2 -> C; A, B, C, D, E, F, G, H);
impl_pick!(3 -> D; A, B, C, D, E, F, G, H);
impl_pick!(4 -> E; A, B, C, D, E, F, G, H);
impl_pick!(5 -> F; A, B, C, D, E, F, G, H);
impl_pick!(6 -> G; A, B, C, D, E, F, G, H);
impl_pick!(7 -> H; A, B, C, D, E, F, G, H);

/// Build a row from the given values, collapsing as the algebra requires:
/// `row!()` is the empty row, `row!(v)` is the bare value, and two or more
/// values build a flat row.
#[macro_export]
macro_rules! row {
    () => {
        $crate::row::Row(())
    };
    ($value:expr $(,)?) => {
        $value
    };
    ($($value:expr),+ $(,)?) => {
        $crate::row::Row(($($value),+,))
    };
}

/// Build a mapper that selects row elements by zero-based index.
///
/// The mapper clones the elements at the given indices, in the given
/// order; duplication and reordering are permitted. A single index
/// collapses to the bare element. Applying the mapper to a non-row value
/// is a compile error.
///
/// ```
/// use flatcomb::row::Row;
/// use flatcomb::select;
///
/// let swap = select!(1, 0);
/// assert_eq!(swap(Row(('a', 'b'))), Row(('b', 'a')));
/// ```
#[macro_export]
macro_rules! select {
    ($($idx:literal),+ $(,)?) => {
        move |row| $crate::row!($(
            ::core::clone::Clone::clone(<_ as $crate::row::Pick<$idx>>::pick(&row))
        ),+)
    };
}
