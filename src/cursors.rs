use crate::cursor::Cursor;

/// Cursor over a slice of tokens
///
/// Walks any `&[T]` one element at a time, cloning tokens out on read.
/// This is the cursor to reach for when the input is already tokenized
/// (bytes, numbers, a lexer's token enum).
#[derive(Debug)]
pub struct SliceCursor<'a, T> {
    data: &'a [T],
    position: usize,
}

impl<'a, T> SliceCursor<'a, T> {
    pub fn new(data: &'a [T]) -> Self {
        SliceCursor { data, position: 0 }
    }
}

// Manual impls: a slice cursor copies regardless of whether T does.
impl<T> Clone for SliceCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceCursor<'_, T> {}

impl<T: Clone> Cursor for SliceCursor<'_, T> {
    type Token = T;

    fn value(&self) -> Option<Self::Token> {
        self.data.get(self.position).cloned()
    }

    fn next(self) -> Self {
        SliceCursor {
            data: self.data,
            position: (self.position + 1).min(self.data.len()),
        }
    }

    fn position(&self) -> usize {
        self.position
    }
}

/// Cursor over a string, yielding `char` tokens
///
/// Advances along UTF-8 boundaries; `position()` counts chars, not bytes.
#[derive(Debug, Clone, Copy)]
pub struct StrCursor<'a> {
    source: &'a str,
    byte_offset: usize,
    chars_seen: usize,
}

impl<'a> StrCursor<'a> {
    pub fn new(source: &'a str) -> Self {
        StrCursor {
            source,
            byte_offset: 0,
            chars_seen: 0,
        }
    }
}

impl Cursor for StrCursor<'_> {
    type Token = char;

    fn value(&self) -> Option<char> {
        self.source[self.byte_offset..].chars().next()
    }

    fn next(self) -> Self {
        match self.value() {
            Some(c) => StrCursor {
                source: self.source,
                byte_offset: self.byte_offset + c.len_utf8(),
                chars_seen: self.chars_seen + 1,
            },
            None => self,
        }
    }

    fn position(&self) -> usize {
        self.chars_seen
    }
}
