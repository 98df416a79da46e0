//! Appointment value object.
//!
//! An appointment is a weekly slot: a weekday, a start and end time of day,
//! and an optional free-text description. Slots are written as
//! `DAY START-END [DESCRIPTION]`, e.g. `Friday 10-11` or
//! `mon 09:30-11:00 Algebra revision`.
//!
//! Two appointments overlap when they fall on the same weekday and their
//! closed time ranges intersect, so slots that only share an endpoint
//! (`Friday 10-11` and `Friday 11-12`) overlap too.
//!
//! A slot may end at `24` or `24:00`, the end of its day. That end is held as
//! the last representable instant of the day and written back as `24:00`.

use super::errors::ValidationError;
use super::FieldValue;
use chrono::{NaiveTime, Timelike, Weekday};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;

static APPOINTMENT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z]+)\s+(\d{1,2}(?::\d{2})?)\s*-\s*(\d{1,2}(?::\d{2})?)(?:\s+(.+))?$")
        .expect("Failed to compile appointment regex")
});

/// A validated weekly appointment slot.
///
/// # Example
///
/// ```
/// use tutorbook::domain::Appointment;
///
/// let a = Appointment::new("Friday 10-11").unwrap();
/// let b = Appointment::new("fri 10:30-12:00 Chemistry").unwrap();
/// assert!(a.overlaps(&b));
/// assert_eq!(a.to_string(), "Friday 10:00-11:00");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Appointment {
    day: Weekday,
    start: NaiveTime,
    end: NaiveTime,
    description: String,
}

impl Appointment {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Appointments should be of the form \
DAY START-END [DESCRIPTION], e.g. Friday 10-11 or Mon 09:30-11:00 Algebra. \
DAY is a weekday name, START and END are 24-hour times written as HH or HH:MM, \
END may be 24:00, and START must be before END";

    /// Parse an appointment from its textual form.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidAppointment` if the day or either
    /// time is unrecognised, or the slot does not end after it starts.
    pub fn new(appointment: impl Into<String>) -> Result<Self, ValidationError> {
        let appointment = appointment.into();
        Self::parse(appointment.trim())
            .ok_or_else(|| ValidationError::InvalidAppointment(appointment.clone()))
    }

    /// Whether `appointment` is a valid appointment as given.
    pub fn is_valid(appointment: &str) -> bool {
        Self::parse(appointment).is_some()
    }

    fn parse(text: &str) -> Option<Self> {
        let caps = APPOINTMENT_REGEX.captures(text)?;

        let day = caps[1].parse::<Weekday>().ok()?;
        let start = parse_time_of_day(&caps[2])?;
        let end = parse_end_time(&caps[3])?;
        if start >= end {
            return None;
        }

        let description = caps
            .get(4)
            .map(|m| super::collapse_whitespace(m.as_str()))
            .unwrap_or_default();

        Some(Self {
            day,
            start,
            end,
            description,
        })
    }

    /// Weekday the slot falls on.
    pub fn day(&self) -> Weekday {
        self.day
    }

    /// Start time of the slot.
    pub fn start(&self) -> NaiveTime {
        self.start
    }

    /// End time of the slot. A slot ending at `24:00` reports 23:59:59.999999999.
    pub fn end(&self) -> NaiveTime {
        self.end
    }

    /// Optional description, empty when none was given.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether this slot and `other` share any instant, endpoints included.
    pub fn overlaps(&self, other: &Appointment) -> bool {
        self.day == other.day && self.start <= other.end && other.start <= self.end
    }
}

fn parse_time_of_day(text: &str) -> Option<NaiveTime> {
    let (hour, minute) = match text.split_once(':') {
        Some((h, m)) => (h.parse().ok()?, m.parse().ok()?),
        None => (text.parse().ok()?, 0),
    };
    NaiveTime::from_hms_opt(hour, minute, 0)
}

/// Like [`parse_time_of_day`], but `24` and `24:00` mean the end of the day.
fn parse_end_time(text: &str) -> Option<NaiveTime> {
    match text {
        "24" | "24:00" => end_of_day(),
        _ => parse_time_of_day(text),
    }
}

fn end_of_day() -> Option<NaiveTime> {
    NaiveTime::from_hms_nano_opt(23, 59, 59, 999_999_999)
}

fn is_end_of_day(time: NaiveTime) -> bool {
    time.hour() == 23
        && time.minute() == 59
        && time.second() == 59
        && time.nanosecond() == 999_999_999
}

fn format_time(time: NaiveTime) -> String {
    if is_end_of_day(time) {
        "24:00".to_string()
    } else {
        time.format("%H:%M").to_string()
    }
}

fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

// Week order first, so sorted sets read like a timetable.
impl Ord for Appointment {
    fn cmp(&self, other: &Self) -> Ordering {
        self.day
            .num_days_from_monday()
            .cmp(&other.day.num_days_from_monday())
            .then_with(|| self.start.cmp(&other.start))
            .then_with(|| self.end.cmp(&other.end))
            .then_with(|| self.description.cmp(&other.description))
    }
}

impl PartialOrd for Appointment {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Appointment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}-{}",
            day_name(self.day),
            format_time(self.start),
            format_time(self.end)
        )?;
        if !self.description.is_empty() {
            write!(f, " {}", self.description)?;
        }
        Ok(())
    }
}

impl FieldValue for Appointment {
    fn to_display_string(&self) -> String {
        self.to_string()
    }
}

// Serde support - stored in its canonical textual form
impl Serialize for Appointment {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Appointment {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Appointment::new(s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn appt(s: &str) -> Appointment {
        Appointment::new(s).unwrap()
    }

    #[test]
    fn test_appointment_parses_hours() {
        let a = appt("Friday 10-11");
        assert_eq!(a.day(), Weekday::Fri);
        assert_eq!(a.start(), NaiveTime::from_hms_opt(10, 0, 0).unwrap());
        assert_eq!(a.end(), NaiveTime::from_hms_opt(11, 0, 0).unwrap());
        assert_eq!(a.description(), "");
    }

    #[test]
    fn test_appointment_parses_minutes_and_description() {
        let a = appt("  mon 09:30 - 11:15   Algebra   revision ");
        assert_eq!(a.day(), Weekday::Mon);
        assert_eq!(a.start(), NaiveTime::from_hms_opt(9, 30, 0).unwrap());
        assert_eq!(a.end(), NaiveTime::from_hms_opt(11, 15, 0).unwrap());
        assert_eq!(a.description(), "Algebra revision");
        assert_eq!(a.to_string(), "Monday 09:30-11:15 Algebra revision");
    }

    #[test]
    fn test_appointment_invalid() {
        assert!(Appointment::new("").is_err());
        assert!(Appointment::new("Friday").is_err());
        assert!(Appointment::new("Someday 10-11").is_err());
        assert!(Appointment::new("Friday 11-10").is_err());
        assert!(Appointment::new("Friday 10-10").is_err());
        assert!(Appointment::new("Friday 25-26").is_err());
        assert!(Appointment::new("Friday 10:60-11").is_err());
        assert!(Appointment::new("Friday 10 to 11").is_err());
    }

    #[test]
    fn test_appointment_may_end_at_midnight() {
        let a = appt("Friday 22-24");
        assert_eq!(a.to_string(), "Friday 22:00-24:00");
        assert!(a.end() > NaiveTime::from_hms_opt(23, 59, 0).unwrap());
        assert_eq!(appt("Friday 22:00-24:00"), a);
        assert_eq!(appt(&a.to_string()), a);

        assert!(a.overlaps(&appt("Friday 23:30-23:45")));
        assert!(!a.overlaps(&appt("Saturday 0-1")));

        let b = appt("Sunday 23:00-24 Late revision");
        assert_eq!(b.to_string(), "Sunday 23:00-24:00 Late revision");
    }

    #[test]
    fn test_appointment_cannot_start_at_or_after_midnight() {
        assert!(Appointment::new("Friday 24-24").is_err());
        assert!(Appointment::new("Friday 24:00-24:00").is_err());
        assert!(Appointment::new("Friday 22-24:30").is_err());
        assert!(Appointment::new("Friday 22-25").is_err());
    }

    #[test]
    fn test_appointment_equality_is_normalized() {
        assert_eq!(appt("Friday 10-11"), appt("fri 10:00-11:00"));
        assert_ne!(appt("Friday 10-11"), appt("Friday 10-11 Physics"));
    }

    #[test]
    fn test_overlaps_is_reflexive_and_symmetric() {
        let a = appt("Friday 10-11");
        let b = appt("Friday 10:30-12");
        assert!(a.overlaps(&a));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_overlaps_closed_interval_boundary() {
        assert!(appt("Friday 10-11").overlaps(&appt("Friday 11-12")));
        assert!(!appt("Friday 10-11").overlaps(&appt("Friday 11:01-12")));
    }

    #[test]
    fn test_overlaps_requires_same_day() {
        assert!(!appt("Friday 10-11").overlaps(&appt("Saturday 10-11")));
    }

    #[test]
    fn test_ordering_follows_week() {
        let mut slots = vec![appt("Sunday 8-9"), appt("Monday 14-15"), appt("Monday 9-10")];
        slots.sort();
        let rendered: Vec<String> = slots.iter().map(|a| a.to_string()).collect();
        assert_eq!(
            rendered,
            vec!["Monday 09:00-10:00", "Monday 14:00-15:00", "Sunday 08:00-09:00"]
        );
    }

    #[test]
    fn test_appointment_serialization() {
        let a = appt("Friday 10-11 Physics");
        let json = serde_json::to_string(&a).unwrap();
        assert_eq!(json, "\"Friday 10:00-11:00 Physics\"");

        let back: Appointment = serde_json::from_str(&json).unwrap();
        assert_eq!(back, a);
    }
}
