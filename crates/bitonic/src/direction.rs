use std::cmp::Ordering;

/// Target order of a (sub-)network.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl Direction {
    #[inline]
    pub fn reverse(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Whether a pair `(a, b)` with `compare(a, b) == ord` is out of order.
    ///
    /// `Equal` never asks for an exchange.
    #[inline]
    pub fn needs_swap(self, ord: Ordering) -> bool {
        match self {
            Self::Ascending => ord == Ordering::Greater,
            Self::Descending => ord == Ordering::Less,
        }
    }

    #[inline]
    pub fn apply(self, ord: Ordering) -> Ordering {
        match self {
            Self::Ascending => ord,
            Self::Descending => ord.reverse(),
        }
    }
}
