use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// Unit that a phase duration or arrival rate is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum TimeUnit {
    #[display("hour")]
    Hour,
    #[display("minute")]
    Minute,
    #[display("second")]
    Second,
}

impl FromStr for TimeUnit {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hour" => Ok(Self::Hour),
            "minute" => Ok(Self::Minute),
            "second" => Ok(Self::Second),
            _ => Err(ParseError::TimeUnit(s.to_string())),
        }
    }
}

/// One step of the user-arrival ramp.
///
/// For `duration` [`Phase::duration_unit`]s, `arrival_rate` new users start every
/// [`Phase::arrival_rate_unit`].
#[derive(Debug, Clone, PartialEq)]
pub struct Phase {
    ordinal: usize,
    duration: f64,
    duration_unit: TimeUnit,
    arrival_rate: f64,
    arrival_rate_unit: TimeUnit,
}

impl Phase {
    pub(crate) fn new(
        ordinal: usize,
        duration: f64,
        duration_unit: TimeUnit,
        arrival_rate: f64,
        arrival_rate_unit: TimeUnit,
    ) -> Self {
        Self {
            ordinal,
            duration,
            duration_unit,
            arrival_rate,
            arrival_rate_unit,
        }
    }

    /// 1-based position of this phase within its document.
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn duration_unit(&self) -> TimeUnit {
        self.duration_unit
    }

    pub fn arrival_rate(&self) -> f64 {
        self.arrival_rate
    }

    pub fn arrival_rate_unit(&self) -> TimeUnit {
        self.arrival_rate_unit
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"<arrivalphase phase="{}" duration="{}" unit="{}">"#,
            self.ordinal, self.duration, self.duration_unit
        )?;
        write!(
            f,
            r#"<users arrivalrate="{}" unit="{}" />"#,
            self.arrival_rate, self.arrival_rate_unit
        )?;
        f.write_str("</arrivalphase>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_phase() {
        let phase = Phase::new(3, 5.0, TimeUnit::Minute, 4.0, TimeUnit::Second);
        assert_eq!(
            phase.to_string(),
            r#"<arrivalphase phase="3" duration="5" unit="minute"><users arrivalrate="4" unit="second" /></arrivalphase>"#
        );
    }

    #[test]
    fn fractional_rate_keeps_its_fraction() {
        let phase = Phase::new(1, 1.0, TimeUnit::Hour, 0.5, TimeUnit::Minute);
        assert!(phase.to_string().contains(r#"arrivalrate="0.5" unit="minute""#));
    }

    #[test]
    fn parse_time_unit() {
        assert_eq!("second".parse::<TimeUnit>(), Ok(TimeUnit::Second));
        assert!("fortnight".parse::<TimeUnit>().is_err());
    }
}
