use chrono::NaiveDate;
use contactz::book::AddressBook;
use contactz::field::{Birthday, Phone};
use contactz::record::Record;
use proptest::prelude::*;

fn book_of(names: &[String]) -> AddressBook {
    names
        .iter()
        .map(|name| Record::new(name.clone(), None).unwrap())
        .collect()
}

fn unique_names(max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set("[a-z]{1,8}", 0..max).prop_map(|set| set.into_iter().collect())
}

proptest! {
    #[test]
    fn ten_digit_strings_are_phones(number in "[0-9]{10}") {
        prop_assert!(Phone::new(number).is_ok());
    }

    #[test]
    fn wrong_length_digit_strings_are_rejected(number in "[0-9]{0,9}|[0-9]{11,15}") {
        prop_assert!(Phone::new(number).is_err());
    }

    #[test]
    fn any_non_digit_is_rejected(prefix in "[0-9]{0,9}", bad in "[^0-9]", suffix in "[0-9]{0,9}") {
        let number = format!("{}{}{}", prefix, bad, suffix);
        prop_assert!(Phone::new(number).is_err());
    }

    #[test]
    fn days_to_birthday_is_within_a_year(
        birth in 0i32..(365 * 120),
        offset in 0i64..(365 * 200),
    ) {
        let epoch = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap();
        let born = epoch + chrono::Duration::days(birth as i64);
        let today = epoch + chrono::Duration::days(offset);

        let birthday = Birthday::new(born).unwrap();
        let record = Record::new("Someone", Some(birthday)).unwrap();
        let days = record.days_to_birthday_from(today).unwrap();
        prop_assert!((0..366).contains(&days), "got {} days", days);
    }

    #[test]
    fn pagination_covers_the_book_in_order(names in unique_names(40), page_size in 1usize..10) {
        let book = book_of(&names);
        let pages: Vec<Vec<String>> = book
            .paginate(page_size)
            .unwrap()
            .map(|page| page.into_iter().map(|(name, _)| name.to_string()).collect())
            .collect();

        let n = names.len();
        prop_assert_eq!(pages.len(), n.div_ceil(page_size));
        prop_assert!(pages.iter().all(|p| !p.is_empty() && p.len() <= page_size));
        if let Some(last) = pages.last() {
            let expected = if n % page_size == 0 { page_size } else { n % page_size };
            prop_assert_eq!(last.len(), expected);
        }
        let flattened: Vec<String> = pages.into_iter().flatten().collect();
        prop_assert_eq!(flattened, names);
    }

    #[test]
    fn save_load_roundtrip(
        entries in prop::collection::btree_map(
            "[A-Za-z ]{1,12}",
            (prop::collection::vec("[0-9]{10}", 0..4), prop::option::of((1950i32..2010, 1u32..13, 1u32..29))),
            0..12,
        )
    ) {
        let mut book = AddressBook::new();
        for (name, (phones, birthday)) in entries {
            let birthday = birthday.map(|(y, m, d)| Birthday::from_ymd(y, m, d).unwrap());
            let mut record = Record::new(name, birthday).unwrap();
            for phone in &phones {
                record.add_phone(phone).unwrap();
            }
            book.add_record(record);
        }

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.json");
        book.save(&path).unwrap();
        let loaded = AddressBook::load(&path).unwrap();
        prop_assert_eq!(loaded, book);
    }
}

#[test]
fn loading_a_nonexistent_file_gives_an_empty_book() {
    let dir = tempfile::tempdir().unwrap();
    let book = AddressBook::load(dir.path().join("nonexistent.file")).unwrap();
    assert_eq!(book.len(), 0);
}
