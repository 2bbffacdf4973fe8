// Pagination over a user's completed entries.
//
// Boundaries
// - Pure. The caller supplies the entries, whatever their order in storage.

use crate::modules::time_entries::core::state::TimeEntry;
use crate::modules::time_entries::use_cases::list_time_entries_by_user::projection::TimeEntryView;

pub const DEFAULT_PAGE_SIZE: u64 = 20;

pub fn list_page(
    entries: &[TimeEntry],
    offset: u64,
    limit: u64,
    sort_by_start_time_desc: bool,
) -> Vec<TimeEntryView> {
    let mut sorted: Vec<&TimeEntry> = entries.iter().collect();
    sorted.sort_by_key(|entry| entry.start_time);
    if sort_by_start_time_desc {
        sorted.reverse();
    }
    sorted
        .into_iter()
        .skip(usize::try_from(offset).unwrap_or(usize::MAX))
        .take(usize::try_from(limit).unwrap_or(usize::MAX))
        .map(TimeEntryView::from)
        .collect()
}
