use crate::arena::RecordId;

/// A stable handle to a value stored in a [`Grove`](crate::Grove).
///
/// Keys stay valid for the lifetime of the grove that returned them, no matter how
/// many values are inserted afterwards. Read the value back with
/// [`Grove::get`](crate::Grove::get) or print it with
/// [`Grove::describe`](crate::Grove::describe).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Key {
    index: usize,
    record: RecordId,
}

impl Key {
    pub(crate) fn new(index: usize, record: RecordId) -> Self {
        Key { index, record }
    }

    #[inline]
    pub(crate) fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn record(&self) -> RecordId {
        self.record
    }
}
