use crate::book::AddressBook;
use crate::commands::{BirthdayEntry, CmdMessage, CmdResult};
use crate::error::Result;
use crate::field::Birthday;
use chrono::NaiveDate;

use super::helpers::{contact, contact_mut};

pub fn set(book: &mut AddressBook, name: &str, date: &str) -> Result<CmdResult> {
    let birthday: Birthday = date.parse()?;
    let record = contact_mut(book, name)?;
    let message = format!("Birthday for {} set to {}", record.name(), birthday);
    record.set_birthday(birthday);
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(message))
        .with_affected_records(vec![record.clone()]))
}

pub fn days(book: &AddressBook, name: &str, today: NaiveDate) -> Result<CmdResult> {
    let record = contact(book, name)?;
    let Some(days) = record.days_to_birthday_from(today) else {
        return Ok(CmdResult::default().with_message(CmdMessage::warning(format!(
            "{} has no birthday set",
            record.name()
        ))));
    };

    let message = if days == 0 {
        CmdMessage::success(format!("Today is {}'s birthday!", record.name()))
    } else {
        CmdMessage::info(format!("{} day(s) until {}'s birthday", days, record.name()))
    };
    Ok(CmdResult::default()
        .with_message(message)
        .with_birthdays(vec![BirthdayEntry {
            record: record.clone(),
            days,
        }]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::fixtures::BookFixture;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 10).unwrap()
    }

    #[test]
    fn set_then_count_down() {
        let mut book = BookFixture::new().with_contact("Alice", &[]).book;
        set(&mut book, "Alice", "17.05.1990").unwrap();

        let result = days(&book, "Alice", today()).unwrap();
        assert_eq!(result.birthdays[0].days, 7);
        assert_eq!(result.messages[0].content, "7 day(s) until Alice's birthday");
    }

    #[test]
    fn birthday_today_is_celebrated() {
        let book = BookFixture::new()
            .with_birthday("Alice", 1990, 5, 10)
            .book;
        let result = days(&book, "Alice", today()).unwrap();
        assert_eq!(result.birthdays[0].days, 0);
        assert_eq!(result.messages[0].level, MessageLevel::Success);
    }

    #[test]
    fn missing_birthday_is_a_warning() {
        let book = BookFixture::new().with_contact("Alice", &[]).book;
        let result = days(&book, "Alice", today()).unwrap();
        assert!(result.birthdays.is_empty());
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
    }

    #[test]
    fn invalid_date_leaves_contact_untouched() {
        let mut book = BookFixture::new().with_contact("Alice", &[]).book;
        assert!(set(&mut book, "Alice", "30.02.1990").is_err());
        assert!(book.find("Alice").unwrap().birthday.is_none());
    }
}
