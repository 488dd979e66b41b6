//! Advance-warning options offered to subscribers
//!
//! The remote service understands exactly twelve lead times: every multiple
//! of five minutes from 5 to 60, sent on the wire as `"<N> minutos"`.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

const STEP_MINUTES: u8 = 5;
const MAX_MINUTES: u8 = 60;
const UNIT_SUFFIX: &str = " minutos";

/// Minutes of warning before a scheduled outage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LeadTime(u8);

impl LeadTime {
    /// Build a lead time from a number of minutes, rejecting values outside the offered set
    pub fn from_minutes(minutes: u32) -> Result<Self> {
        let step = u32::from(STEP_MINUTES);
        if minutes == 0 || minutes > u32::from(MAX_MINUTES) || minutes % step != 0 {
            return Err(Error::InvalidLeadTime(format!(
                "{minutes} is not one of 5, 10, ..., 60 minutes"
            )));
        }
        Ok(Self(minutes as u8))
    }

    /// Every selectable option, shortest first
    pub fn options() -> impl Iterator<Item = LeadTime> {
        (1..=MAX_MINUTES / STEP_MINUTES).map(|i| LeadTime(i * STEP_MINUTES))
    }

    pub fn minutes(&self) -> u8 {
        self.0
    }

    /// Value sent as `tiempo_notificacion`
    pub fn wire_value(&self) -> String {
        format!("{}{}", self.0, UNIT_SUFFIX)
    }

    /// Human-facing label; the hour mark is annotated
    pub fn label(&self) -> String {
        if self.0 == MAX_MINUTES {
            format!("{} (1 hora)", self.wire_value())
        } else {
            self.wire_value()
        }
    }
}

impl fmt::Display for LeadTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.wire_value())
    }
}

impl FromStr for LeadTime {
    type Err = Error;

    /// Accepts either a bare number (`"15"`) or the wire form (`"15 minutos"`)
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let number = trimmed.strip_suffix(UNIT_SUFFIX).unwrap_or(trimmed);
        let minutes = number
            .parse::<u32>()
            .map_err(|_| Error::InvalidLeadTime(format!("'{s}' is not a number of minutes")))?;
        Self::from_minutes(minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_are_twelve_multiples_of_five() {
        let minutes: Vec<u8> = LeadTime::options().map(|l| l.minutes()).collect();
        assert_eq!(minutes, vec![5, 10, 15, 20, 25, 30, 35, 40, 45, 50, 55, 60]);
    }

    #[test]
    fn test_only_the_hour_is_annotated() {
        let labels: Vec<String> = LeadTime::options().map(|l| l.label()).collect();
        assert_eq!(labels[0], "5 minutos");
        assert_eq!(labels[10], "55 minutos");
        assert_eq!(labels[11], "60 minutos (1 hora)");
        assert_eq!(LeadTime::from_minutes(60).unwrap().wire_value(), "60 minutos");
    }

    #[test]
    fn test_parse_accepts_number_or_wire_form() {
        assert_eq!("15".parse::<LeadTime>().unwrap().minutes(), 15);
        assert_eq!("15 minutos".parse::<LeadTime>().unwrap().minutes(), 15);
        assert_eq!(" 45 ".parse::<LeadTime>().unwrap().minutes(), 45);
    }

    #[test]
    fn test_parse_rejects_values_outside_the_set() {
        for input in ["0", "3", "65", "12", "-5", "quince", "", "15 minutes"] {
            assert!(input.parse::<LeadTime>().is_err(), "accepted {input:?}");
        }
    }
}
