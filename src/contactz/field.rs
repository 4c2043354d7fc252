//! # Validated Fields
//!
//! Every attribute of a contact is a [`Field`]: a value paired with the predicate
//! that decides whether it is acceptable. The predicate runs on construction and on
//! every reassignment, so a `Field` in hand is always valid.
//!
//! The kinds form a closed set, each a zero-sized [`FieldKind`]:
//!
//! | alias        | value         | valid when                          |
//! |--------------|---------------|-------------------------------------|
//! | [`Name`]     | `String`      | always                              |
//! | [`Phone`]    | `String`      | exactly 10 ASCII digits             |
//! | [`Birthday`] | `NaiveDate`   | always (a `NaiveDate` is a real day)|
//!
//! `Name` being permissive is deliberate at this level: rejecting empty names is a
//! policy of the command layer, not of the type.
//!
//! Fields serialize as their bare value. Deserialization goes through [`Field::new`],
//! so a hand-edited store file cannot load an invalid phone.

use crate::error::{ContactzError, Result};
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

/// The per-kind behaviour of a [`Field`].
pub trait FieldKind {
    type Value: Clone + PartialEq + fmt::Debug + fmt::Display;

    /// Used in error messages ("Invalid phone: 123").
    const LABEL: &'static str;

    fn is_valid(value: &Self::Value) -> bool;

    fn fmt_value(value: &Self::Value, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", value)
    }
}

pub struct Field<K: FieldKind> {
    value: K::Value,
    _kind: PhantomData<K>,
}

impl<K: FieldKind> Field<K> {
    pub fn new(value: impl Into<K::Value>) -> Result<Self> {
        let value = value.into();
        if !K::is_valid(&value) {
            return Err(ContactzError::invalid(K::LABEL, value.to_string()));
        }
        Ok(Self {
            value,
            _kind: PhantomData,
        })
    }

    pub fn is_valid(value: &K::Value) -> bool {
        K::is_valid(value)
    }

    pub fn value(&self) -> &K::Value {
        &self.value
    }

    /// Replace the value. On failure the field keeps its previous value.
    pub fn set(&mut self, value: impl Into<K::Value>) -> Result<()> {
        let value = value.into();
        if !K::is_valid(&value) {
            return Err(ContactzError::invalid(K::LABEL, value.to_string()));
        }
        self.value = value;
        Ok(())
    }
}

impl<K: FieldKind<Value = String>> Field<K> {
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl<K: FieldKind> Clone for Field<K> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            _kind: PhantomData,
        }
    }
}

impl<K: FieldKind> PartialEq for Field<K> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<K: FieldKind> Eq for Field<K> where K::Value: Eq {}

impl<K: FieldKind> fmt::Debug for Field<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(K::LABEL).field(&self.value).finish()
    }
}

impl<K: FieldKind> fmt::Display for Field<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        K::fmt_value(&self.value, f)
    }
}

impl<K> Serialize for Field<K>
where
    K: FieldKind,
    K::Value: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value.serialize(serializer)
    }
}

impl<'de, K> Deserialize<'de> for Field<K>
where
    K: FieldKind,
    K::Value: DeserializeOwned,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = <K::Value as Deserialize<'de>>::deserialize(deserializer)?;
        Field::new(value).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameKind;

impl FieldKind for NameKind {
    type Value = String;
    const LABEL: &'static str = "name";

    fn is_valid(_value: &String) -> bool {
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhoneKind;

pub const PHONE_LEN: usize = 10;

impl FieldKind for PhoneKind {
    type Value = String;
    const LABEL: &'static str = "phone";

    fn is_valid(value: &String) -> bool {
        value.len() == PHONE_LEN && value.bytes().all(|b| b.is_ascii_digit())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthdayKind;

const BIRTHDAY_DISPLAY_FORMAT: &str = "%d.%m.%Y";
const BIRTHDAY_INPUT_FORMATS: [&str; 2] = ["%Y-%m-%d", "%d.%m.%Y"];

impl FieldKind for BirthdayKind {
    type Value = NaiveDate;
    const LABEL: &'static str = "birthday";

    // Any NaiveDate is a real calendar day; impossible dates are rejected
    // while parsing, before a value exists.
    fn is_valid(_value: &NaiveDate) -> bool {
        true
    }

    fn fmt_value(value: &NaiveDate, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", value.format(BIRTHDAY_DISPLAY_FORMAT))
    }
}

pub type Name = Field<NameKind>;
pub type Phone = Field<PhoneKind>;
pub type Birthday = Field<BirthdayKind>;

impl Field<BirthdayKind> {
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self> {
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            ContactzError::invalid(
                BirthdayKind::LABEL,
                format!("{:04}-{:02}-{:02}", year, month, day),
            )
        })?;
        Self::new(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.value
    }
}

impl FromStr for Field<BirthdayKind> {
    type Err = ContactzError;

    /// Accepts `YYYY-MM-DD` or `DD.MM.YYYY`.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        BIRTHDAY_INPUT_FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
            .ok_or_else(|| ContactzError::invalid(BirthdayKind::LABEL, s))
            .and_then(Self::new)
    }
}
