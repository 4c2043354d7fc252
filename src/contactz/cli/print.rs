use colored::Colorize;
use contactz::api::{BirthdayEntry, CmdMessage, CmdResult, MessageLevel, PageInfo};
use contactz::error::ContactzError;
use contactz::record::Record;
use std::io::{self, Write};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const NAME_WIDTH: usize = 24;
const PHONE_SEPARATOR: &str = "; ";
const BIRTHDAY_FORMAT: &str = "%d.%m";

pub(super) fn render<W: Write>(out: &mut W, result: &CmdResult) -> io::Result<()> {
    if let Some(page) = &result.page {
        print_page_header(out, page)?;
    }
    print_records(out, &result.listed_records)?;
    print_birthdays(out, &result.birthdays)?;
    print_messages(out, &result.messages)
}

pub(super) fn render_error<W: Write>(out: &mut W, error: &ContactzError) -> io::Result<()> {
    writeln!(out, "{}", error.to_string().red())
}

fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

fn print_page_header<W: Write>(out: &mut W, page: &PageInfo) -> io::Result<()> {
    let header = format!("Contacts {}-{} of {}", page.first, page.last, page.total);
    writeln!(out, "{}", header.dimmed())
}

fn print_records<W: Write>(out: &mut W, records: &[Record]) -> io::Result<()> {
    for record in records {
        let name = pad_to_width(&truncate_to_width(record.name(), NAME_WIDTH), NAME_WIDTH);
        let phones: Vec<&str> = record.phones.iter().map(|p| p.as_str()).collect();
        let phones = if phones.is_empty() {
            "-".to_string()
        } else {
            phones.join(PHONE_SEPARATOR)
        };

        match &record.birthday {
            Some(birthday) => writeln!(
                out,
                "{} {}  {}",
                name.bold(),
                phones,
                birthday.to_string().dimmed()
            )?,
            None => writeln!(out, "{} {}", name.bold(), phones)?,
        }
    }
    Ok(())
}

fn print_birthdays<W: Write>(out: &mut W, entries: &[BirthdayEntry]) -> io::Result<()> {
    for entry in entries {
        let when = match entry.days {
            0 => "today".to_string(),
            1 => "tomorrow".to_string(),
            n => format!("in {} days", n),
        };
        let date = entry
            .record
            .birthday
            .as_ref()
            .map(|b| b.date().format(BIRTHDAY_FORMAT).to_string())
            .unwrap_or_default();
        let name = pad_to_width(&truncate_to_width(entry.record.name(), NAME_WIDTH), NAME_WIDTH);
        writeln!(out, "{} {} {}", name.bold(), date.yellow(), when.dimmed())?;
    }
    Ok(())
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(result: &CmdResult) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        render(&mut out, result).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn renders_records_with_padding() {
        let mut alice = Record::new("Alice", None).unwrap();
        alice.add_phone("1234567890").unwrap();
        alice.add_phone("0987654321").unwrap();

        let out = rendered(&CmdResult::default().with_listed_records(vec![alice]));
        assert_eq!(
            out,
            format!("Alice{} 1234567890; 0987654321\n", " ".repeat(NAME_WIDTH - 5))
        );
    }

    #[test]
    fn renders_page_header_and_messages() {
        let result = CmdResult::default()
            .with_page(PageInfo {
                first: 3,
                last: 4,
                total: 9,
            })
            .with_message(CmdMessage::warning("careful"));
        let out = rendered(&result);
        assert!(out.starts_with("Contacts 3-4 of 9\n"));
        assert!(out.ends_with("careful\n"));
    }

    #[test]
    fn long_names_are_truncated() {
        let long = "x".repeat(40);
        let truncated = truncate_to_width(&long, 10);
        assert_eq!(truncated.width(), 10);
        assert!(truncated.ends_with('…'));
    }
}
