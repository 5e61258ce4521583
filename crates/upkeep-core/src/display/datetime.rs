//! Date display utilities.

use std::fmt;

use jiff::civil::Date;

/// A preferred date as typed, shown long-form when it parses as an ISO date.
///
/// `2026-03-14` displays as `Saturday, March 14, 2026`. Anything else is shown
/// verbatim, since the field is free text.
pub struct PreferredDate<'a>(pub &'a str);

impl PreferredDate<'_> {
    pub fn date(&self) -> Option<Date> {
        self.0.trim().parse::<Date>().ok()
    }
}

impl fmt::Display for PreferredDate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.date() {
            Some(date) => write!(f, "{}", date.strftime("%A, %B %-d, %Y")),
            None => write!(f, "{}", self.0.trim()),
        }
    }
}
