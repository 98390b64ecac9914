use crate::Schedule;
use chrono::{DateTime, TimeZone};

/// Ordered list of schedules which fires at the earliest match of any of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ScheduleSet {
    schedules: Vec<Schedule>,
}

impl ScheduleSet {
    /// Constructs an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a schedule to the end of the list.
    pub fn push(&mut self, schedule: Schedule) {
        self.schedules.push(schedule);
    }

    /// Number of schedules.
    pub fn len(&self) -> usize {
        self.schedules.len()
    }

    /// Returns `true` if there are no schedules.
    pub fn is_empty(&self) -> bool {
        self.schedules.is_empty()
    }

    /// Iterates over schedules in the order they were added.
    pub fn iter(&self) -> std::slice::Iter<'_, Schedule> {
        self.schedules.iter()
    }

    /// Returns the earliest event of all schedules strictly after `after`.
    ///
    /// `None` if the set is empty or none of the schedules matches.
    pub fn next_after<Tz: TimeZone>(&self, after: &DateTime<Tz>) -> Option<DateTime<Tz>> {
        self.next_match(after).map(|(_, next)| next)
    }

    /// Same as [`ScheduleSet::next_after`] but also returns index of the matched schedule.
    ///
    /// If several schedules fire at the same time, the first of them wins.
    pub fn next_match<Tz: TimeZone>(&self, after: &DateTime<Tz>) -> Option<(usize, DateTime<Tz>)> {
        self.schedules
            .iter()
            .enumerate()
            .filter_map(|(index, schedule)| schedule.next_after(after).map(|next| (index, next)))
            .min_by(|(_, left), (_, right)| left.cmp(right))
    }
}

impl FromIterator<Schedule> for ScheduleSet {
    fn from_iter<T: IntoIterator<Item = Schedule>>(iter: T) -> Self {
        Self {
            schedules: iter.into_iter().collect(),
        }
    }
}

impl Extend<Schedule> for ScheduleSet {
    fn extend<T: IntoIterator<Item = Schedule>>(&mut self, iter: T) {
        self.schedules.extend(iter);
    }
}

impl<'a> IntoIterator for &'a ScheduleSet {
    type Item = &'a Schedule;
    type IntoIter = std::slice::Iter<'a, Schedule>;

    fn into_iter(self) -> Self::IntoIter {
        self.schedules.iter()
    }
}
