use crate::book::AddressBook;
use crate::commands::{BirthdayEntry, CmdMessage, CmdResult};
use crate::error::Result;
use chrono::NaiveDate;

pub const DEFAULT_WINDOW_DAYS: i64 = 7;

/// Contacts whose next birthday is at most `within_days` away, soonest first.
/// Ties keep book order.
pub fn run(book: &AddressBook, today: NaiveDate, within_days: i64) -> Result<CmdResult> {
    let mut entries: Vec<BirthdayEntry> = book
        .iter()
        .filter_map(|record| {
            record
                .days_to_birthday_from(today)
                .filter(|days| *days <= within_days)
                .map(|days| BirthdayEntry {
                    record: record.clone(),
                    days,
                })
        })
        .collect();
    entries.sort_by_key(|entry| entry.days);

    let mut result = CmdResult::default();
    if entries.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No birthdays in the next {} day(s)",
            within_days
        )));
    }
    Ok(result.with_birthdays(entries))
}
