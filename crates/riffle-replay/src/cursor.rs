//! The monotonic byte cursor over a run's input buffer.

/// A consume-once cursor over an input byte slice.
///
/// The position only moves forward, one byte per read, and is never
/// rewound: a byte is consumed exactly once whether or not the value it
/// decoded to survives validation. One cursor is created per run and
/// owned exclusively by the driver.
///
/// # Examples
///
/// ```
/// use riffle_replay::ByteCursor;
///
/// let mut cur = ByteCursor::new(&[7, 9]);
/// assert_eq!(cur.read_u8(), Some(7));
/// assert_eq!(cur.read_u8(), Some(9));
/// assert_eq!(cur.read_u8(), None);
/// assert_eq!(cur.position(), 2);
/// ```
#[derive(Debug)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    /// Create a cursor at the start of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Bytes consumed so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes still available.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Whether every byte has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.pos == self.data.len()
    }

    /// Consume and return the next byte, or `None` on exhaustion.
    pub fn read_u8(&mut self) -> Option<u8> {
        let b = *self.data.get(self.pos)?;
        self.pos += 1;
        Some(b)
    }
}
