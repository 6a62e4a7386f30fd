use chrono::{
    Days,
    NaiveDate
};

/// Inclusive run of consecutive calendar days.
pub struct DateWindow {
    start_date: NaiveDate,
    end_date: NaiveDate
}

impl DateWindow {
    /// Window of `len` days starting at `start_date`, or `None` when it would
    /// run past the representable date range.
    pub fn starting_at(start_date: NaiveDate, len: u64) -> Option<DateWindow> {
        let end_date = start_date.checked_add_days(Days::new(len.saturating_sub(1)))?;
        Some(DateWindow { start_date, end_date })
    }

    /// Window of `len` days ending at `end_date`.
    pub fn ending_at(end_date: NaiveDate, len: u64) -> Option<DateWindow> {
        let start_date = end_date.checked_sub_days(Days::new(len.saturating_sub(1)))?;
        Some(DateWindow { start_date, end_date })
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn len(&self) -> usize {
        ((self.end_date - self.start_date).num_days() + 1) as usize
    }

    /// Days in ascending order.
    pub fn iter(&self) -> DateWindowIterator<'_> {
        DateWindowIterator {
            window: self,
            front: 0,
            back: self.len()
        }
    }
}

pub struct DateWindowIterator<'a> {
    window: &'a DateWindow,
    front: usize,
    back: usize
}

impl<'a> Iterator for DateWindowIterator<'a> {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            let d = self.window.start_date.checked_add_days(Days::new(self.front as u64));
            self.front += 1;
            d
        } else {
            None
        }
    }
}

impl<'a> DoubleEndedIterator for DateWindowIterator<'a> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            self.back -= 1;
            self.window.start_date.checked_add_days(Days::new(self.back as u64))
        } else {
            None
        }
    }
}
