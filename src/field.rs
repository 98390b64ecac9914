use std::fmt::Display;

/// Calendar year represented by bit 0 of the years set.
pub const YEAR_BASE: u16 = 2000;
/// The last year which fits into the years set.
pub const YEAR_MAX: u16 = YEAR_BASE + 63;

/// Fields of the cron expression in the order they appear in the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    /// Seconds, 0-59.
    Seconds,
    /// Minutes, 0-59.
    Minutes,
    /// Hours, 0-23.
    Hours,
    /// Day of month, 1-31 or `L`.
    Days,
    /// Month, 1-12 or JAN-DEC.
    Months,
    /// Day of week, 0-6 (7 is Sunday too) or SUN-SAT.
    Weekdays,
    /// Year, 2000-2063.
    Years,
}

impl Field {
    const DAYS_OF_WEEK: [&'static str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];
    const MONTHS: [&'static str; 12] = [
        "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
    ];

    /// Logical range of the field, this is what `*` means.
    pub fn min_max(&self) -> (u16, u16) {
        match self {
            Self::Seconds => (0, 59),
            Self::Minutes => (0, 59),
            Self::Hours => (0, 23),
            Self::Days => (1, 31),
            Self::Months => (1, 12),
            Self::Weekdays => (0, 6),
            Self::Years => (YEAR_BASE, YEAR_MAX),
        }
    }

    /// The largest number accepted in the text, may exceed the logical maximum.
    pub(crate) fn max_input(&self) -> u16 {
        match self {
            // 7 is an alias of Sunday
            Self::Weekdays => 7,
            _ => self.min_max().1,
        }
    }

    /// Mnemonic names and the value of the first name.
    pub(crate) fn names(&self) -> Option<(&'static [&'static str], u16)> {
        match self {
            Self::Months => Some((&Self::MONTHS, 1)),
            Self::Weekdays => Some((&Self::DAYS_OF_WEEK, 0)),
            _ => None,
        }
    }

    /// Maps an accepted field value to its bit in the [`FieldSet`].
    pub(crate) fn bit(&self, value: u16) -> u16 {
        match self {
            Self::Weekdays => value % 7,
            Self::Years => value - YEAR_BASE,
            _ => value,
        }
    }

    /// Maps a bit of the [`FieldSet`] back to the field value.
    pub(crate) fn value(&self, bit: u16) -> u16 {
        match self {
            Self::Years => bit + YEAR_BASE,
            _ => bit,
        }
    }

    /// Set with every value of the logical range.
    pub(crate) fn full(&self) -> FieldSet {
        let (min, max) = self.min_max();
        let mut set = FieldSet::EMPTY;
        set.insert_range(self.bit(min), self.bit(max), 1);
        set
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Seconds => "seconds",
            Self::Minutes => "minutes",
            Self::Hours => "hours",
            Self::Days => "day of month",
            Self::Months => "month",
            Self::Weekdays => "day of week",
            Self::Years => "year",
        };
        write!(f, "{name}")
    }
}

/// Small set of field values, one bit per value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldSet(u64);

impl FieldSet {
    /// Set without values.
    pub const EMPTY: Self = Self(0);

    /// Raw bits of the set.
    #[inline]
    pub fn bits(&self) -> u64 {
        self.0
    }

    /// Returns `true` if the bit is in the set.
    #[inline]
    pub fn contains(&self, bit: u16) -> bool {
        bit < 64 && self.0 & (1u64 << bit) != 0
    }

    /// Returns `true` if the set has no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Number of values in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterates over bits of the set in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u16> + '_ {
        (0..64u16).filter(|bit| self.contains(*bit))
    }

    #[inline]
    pub(crate) fn insert(&mut self, bit: u16) {
        self.0 |= 1u64 << bit;
    }

    /// Inserts every `step`-th bit of `from..=to`.
    pub(crate) fn insert_range(&mut self, from: u16, to: u16, step: u16) {
        let mut bit = from;
        while bit <= to {
            self.insert(bit);
            bit += step;
        }
    }
}
