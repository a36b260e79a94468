//! Host logger tests

use std::sync::Mutex;

use firmware::logger::HostLogger;
use firmware::time::TickCounter;
use log::{Level, LevelFilter, Log, Metadata, Record};
use semislip_api::Channel;
use semislip_syscalls::{HostGateway, ResultCode, SyscallRequest};

/// Captures every write, one entry per host call.
#[derive(Default)]
struct CaptureHost {
    stderr: Mutex<Vec<Vec<u8>>>,
    stdout: Mutex<Vec<u8>>,
}

impl CaptureHost {
    fn stderr_text(&self) -> String {
        String::from_utf8(self.stderr.lock().unwrap().concat()).unwrap()
    }

    fn stderr_writes(&self) -> usize {
        self.stderr.lock().unwrap().len()
    }
}

impl HostGateway for CaptureHost {
    fn call(&self, request: SyscallRequest<'_>) -> ResultCode {
        match request {
            SyscallRequest::Write { channel: Channel::Stderr, bytes } => {
                self.stderr.lock().unwrap().push(bytes.to_vec());
                0
            }
            SyscallRequest::Write { bytes, .. } => {
                self.stdout.lock().unwrap().extend_from_slice(bytes);
                0
            }
            SyscallRequest::Read { buf, .. } => buf.len() as ResultCode,
            SyscallRequest::ReadChar => -1,
        }
    }
}

#[test]
fn test_record_format() {
    let host = CaptureHost::default();
    let clock = TickCounter::new();
    clock.set(42);
    let logger = HostLogger::new(&host, &clock, LevelFilter::Debug);

    logger.log(&Record::builder().level(Level::Info).target("net").args(format_args!("link up {}", 3)).build());

    assert_eq!(host.stderr_text(), "\x1b[32m42 I net: link up 3\r\n\x1b[0;39m");
    assert!(host.stdout.lock().unwrap().is_empty());
}

#[test]
fn test_level_colours_and_indicators() {
    let host = CaptureHost::default();
    let clock = TickCounter::new();
    let logger = HostLogger::new(&host, &clock, LevelFilter::Trace);

    logger.log(&Record::builder().level(Level::Error).target("a").args(format_args!("x")).build());
    assert!(host.stderr_text().starts_with("\x1b[31m0 E a: x"));

    host.stderr.lock().unwrap().clear();
    logger.log(&Record::builder().level(Level::Warn).target("a").args(format_args!("x")).build());
    assert!(host.stderr_text().starts_with("\x1b[33m0 W a: x"));

    host.stderr.lock().unwrap().clear();
    logger.log(&Record::builder().level(Level::Trace).target("a").args(format_args!("x")).build());
    assert!(host.stderr_text().starts_with("\x1b[0;39m0 T a: x"));
}

#[test]
fn test_records_above_level_dropped() {
    let host = CaptureHost::default();
    let clock = TickCounter::new();
    let logger = HostLogger::new(&host, &clock, LevelFilter::Info);

    assert!(!logger.enabled(&Metadata::builder().level(Level::Debug).build()));
    assert!(logger.enabled(&Metadata::builder().level(Level::Warn).build()));

    logger.log(&Record::builder().level(Level::Debug).target("net").args(format_args!("noise")).build());
    assert_eq!(host.stderr_writes(), 0);
}

#[test]
fn test_long_line_split_across_writes() {
    let host = CaptureHost::default();
    let clock = TickCounter::new();
    let logger = HostLogger::new(&host, &clock, LevelFilter::Info);
    let message = "x".repeat(300);

    logger.log(&Record::builder().level(Level::Info).target("net").args(format_args!("{}", message)).build());

    assert!(host.stderr_writes() > 1);
    assert!(host.stderr.lock().unwrap().iter().all(|w| w.len() <= 96));
    assert_eq!(host.stderr_text(), format!("\x1b[32m0 I net: {}\r\n\x1b[0;39m", message));
}

#[test]
fn test_banner_clears_terminal() {
    let host = CaptureHost::default();
    let clock = TickCounter::new();
    let logger = HostLogger::new(&host, &clock, LevelFilter::Info);

    logger.banner();

    assert_eq!(host.stderr_text(), "\x1bcReady\r\n");
    assert_eq!(logger.level(), LevelFilter::Info);
}
