use crate::{
    backend::DEFAULT_MAX_BOOKINGS,
    configuration::Configuration,
    slot_clock::{SlotClock, DEFAULT_END_TIME, DEFAULT_START_TIME},
    types::TimeSlot,
};
use anyhow::{bail, Context};
use clap::Parser;

fn parse_time(raw: &str) -> Result<TimeSlot, String> {
    SlotClock::parse(raw).map_err(|_| format!("'{raw}' is not a HH:MM time"))
}

#[derive(Debug, Parser)]
#[command(about = "Settlement booking service")]
struct Arguments {
    /// Port the HTTP server listens on
    #[arg(long, env = "PORT", default_value = "5000")]
    port: u16,

    /// First bookable time of the day (HH:MM)
    #[arg(long, env = "START_TIME", default_value = DEFAULT_START_TIME, value_parser = parse_time)]
    start_time: TimeSlot,

    /// Last bookable time of the day (HH:MM)
    #[arg(long, env = "END_TIME", default_value = DEFAULT_END_TIME, value_parser = parse_time)]
    end_time: TimeSlot,

    /// Bookings allowed per time slot
    #[arg(long, env = "MAX_BOOKINGS", default_value_t = DEFAULT_MAX_BOOKINGS)]
    max_bookings: usize,
}

/// Validated settings. Only obtainable through argument parsing.
#[derive(Debug, Clone)]
pub struct ConfigurationHandler {
    port: u16,
    business_hours: SlotClock,
    max_bookings: usize,
}

impl ConfigurationHandler {
    pub fn parse_arguments() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::try_from_arguments(Arguments::parse())
    }

    #[cfg(test)]
    pub fn try_parse_from<I, S>(args: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<std::ffi::OsString> + Clone,
    {
        Self::try_from_arguments(Arguments::try_parse_from(args)?)
    }

    fn try_from_arguments(arguments: Arguments) -> anyhow::Result<Self> {
        if arguments.max_bookings == 0 {
            bail!("At least one booking per slot must be allowed");
        }
        let business_hours = SlotClock::new(arguments.start_time, arguments.end_time)
            .map_err(anyhow::Error::msg)
            .context("Invalid business hours")?;
        Ok(Self {
            port: arguments.port,
            business_hours,
            max_bookings: arguments.max_bookings,
        })
    }
}

impl Configuration for ConfigurationHandler {
    fn port(&self) -> String {
        self.port.to_string()
    }

    fn business_hours(&self) -> SlotClock {
        self.business_hours
    }

    fn max_bookings(&self) -> usize {
        self.max_bookings
    }
}
