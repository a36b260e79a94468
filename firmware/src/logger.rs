//! Host logger
//!
//! `log` backend that writes one coloured, tick-stamped line per record to
//! the host's stderr stream. Stdout carries the link, so log text never goes
//! there.
//!
//! Line format: `<colour><tick> <L> <target>: <message>\r\n<normal>`.

use core::fmt::{self, Write};

use heapless::Vec;
use log::{Level, LevelFilter, Log, Metadata, Record};
use semislip_api::{Channel, Error, Result, TickSource};
use semislip_syscalls::{HostGateway, OutputPath, TrapGateway};

use crate::config;
use crate::time::{TickCounter, TICKS};

const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const NORMAL: &str = "\x1b[0;39m";

/// Bytes gathered per host write.
const LINE_CAPACITY: usize = 96;

/// Logger writing through a host gateway.
pub struct HostLogger<G, C> {
    output: OutputPath<G>,
    clock: C,
    level: LevelFilter,
}

impl<G, C> HostLogger<G, C> {
    pub const fn new(gateway: G, clock: C, level: LevelFilter) -> Self {
        Self { output: OutputPath::new(gateway), clock, level }
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }
}

impl<G: HostGateway, C: TickSource> HostLogger<G, C> {
    /// Clear the host terminal and announce readiness.
    pub fn banner(&self) {
        self.output.write_to(Channel::Stderr, b"\x1bc");
        self.output.write_to(Channel::Stderr, b"Ready\r\n");
    }

    fn write_record(&self, record: &Record<'_>) {
        let (colour, indicator) = match record.level() {
            Level::Error => (RED, 'E'),
            Level::Warn => (YELLOW, 'W'),
            Level::Info => (GREEN, 'I'),
            Level::Debug => (NORMAL, 'D'),
            Level::Trace => (NORMAL, 'T'),
        };
        let mut line = LineWriter::new(&self.output);
        let _ = write!(
            line,
            "{}{} {} {}: {}\r\n{}",
            colour,
            self.clock.now(),
            indicator,
            record.target(),
            record.args(),
            NORMAL
        );
        line.flush();
    }
}

impl<G, C> Log for HostLogger<G, C>
where
    G: HostGateway + Send + Sync,
    C: TickSource + Send + Sync,
{
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            self.write_record(record);
        }
    }

    fn flush(&self) {}
}

/// Collects formatted text and forwards it in `LINE_CAPACITY` chunks.
struct LineWriter<'a, G> {
    output: &'a OutputPath<G>,
    line: Vec<u8, LINE_CAPACITY>,
}

impl<'a, G: HostGateway> LineWriter<'a, G> {
    fn new(output: &'a OutputPath<G>) -> Self {
        Self { output, line: Vec::new() }
    }

    fn flush(&mut self) {
        if !self.line.is_empty() {
            self.output.write_to(Channel::Stderr, &self.line);
            self.line.clear();
        }
    }
}

impl<G: HostGateway> Write for LineWriter<'_, G> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let mut bytes = s.as_bytes();
        while !bytes.is_empty() {
            let room = LINE_CAPACITY - self.line.len();
            if room == 0 {
                self.flush();
                continue;
            }
            let n = room.min(bytes.len());
            self.line.extend_from_slice(&bytes[..n]).map_err(|_| fmt::Error)?;
            bytes = &bytes[n..];
        }
        Ok(())
    }
}

static LOGGER: HostLogger<TrapGateway, &TickCounter> =
    HostLogger::new(TrapGateway::new(), &TICKS, config::LOG_LEVEL);

/// Install the host logger as the global `log` backend.
///
/// Call once, before interrupts are enabled.
pub fn init() -> Result<()> {
    #[cfg(target_has_atomic = "ptr")]
    {
        log::set_logger(&LOGGER).map_err(|_| Error::LoggerAlreadySet)?;
        log::set_max_level(LOGGER.level());
    }
    // SAFETY: Armv6-M has no compare-and-swap; nothing else runs yet.
    #[cfg(not(target_has_atomic = "ptr"))]
    unsafe {
        log::set_logger_racy(&LOGGER).map_err(|_| Error::LoggerAlreadySet)?;
        log::set_max_level_racy(LOGGER.level());
    }
    if LOGGER.level() != LevelFilter::Off {
        LOGGER.banner();
    }
    Ok(())
}
