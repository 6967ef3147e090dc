use crate::consts::RAW_PAGE_SIZE;
use crate::models::trip::{Dataset, TripRecord};

/// Position of the user while paging through raw trips of one query.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawRowPager {
    /// Index of the next trip to show.
    next: usize,
}

impl RawRowPager {
    /// Returns the next page of at most [`RAW_PAGE_SIZE`] trips and advances,
    /// or `None` once every trip has been shown.
    pub fn next_page<'a>(&mut self, dataset: &'a Dataset) -> Option<&'a [TripRecord]> {
        let start = self.next;
        if start >= dataset.len() {
            return None;
        }
        let end = (start + RAW_PAGE_SIZE).min(dataset.len());
        self.next = end;
        Some(&dataset.trips[start..end])
    }

    pub fn is_exhausted(&self, dataset: &Dataset) -> bool {
        self.next >= dataset.len()
    }
}
