#![no_std]
#![no_main]

// semislip firmware entry point

use core::panic::PanicInfo;

use firmware::config::{self, Cadence, FirmwareConfig, FRAME_MTU};
use firmware::net::{LoopbackEngine, PassthroughLink};
use firmware::sync::TakeOnce;
use firmware::time::{self, TickCounter};
use firmware::{arch, logger, Scheduler};
use semislip_api::Result;
use semislip_syscalls::TrapGateway;

#[cfg(not(feature = "readc-input"))]
type Transport = firmware::SemihostTransport<TrapGateway, { config::STAGING_CAPACITY }>;
#[cfg(feature = "readc-input")]
type Transport = firmware::CharTransport<TrapGateway>;

type Firmware = Scheduler<'static, PassthroughLink<Transport>, LoopbackEngine, TickCounter, FRAME_MTU>;

/// Link, engine and frame buffer, built at compile time.
static FIRMWARE: TakeOnce<Firmware> = TakeOnce::new(Scheduler::new(
    PassthroughLink::new(Transport::new(TrapGateway::new())),
    LoopbackEngine::new(),
    &time::TICKS,
    Cadence::from_build(),
));

fn bring_up(config: &FirmwareConfig) -> Result<()> {
    config.validate()?;
    logger::init()?;
    arch::init_systick(config::F_CPU, config::TICK_HZ)?;
    log::info!("semislip {} up, cadence {:?}", env!("CARGO_PKG_VERSION"), config.cadence);
    Ok(())
}

#[unsafe(no_mangle)]
pub fn main() -> ! {
    let config = FirmwareConfig::from_build();
    if let Err(err) = bring_up(&config) {
        log::error!("bring-up failed: {}", err);
        arch::halt();
    }

    let Some(scheduler) = FIRMWARE.take() else {
        log::error!("firmware state already taken");
        arch::halt()
    };
    scheduler.init();
    scheduler.run()
}

#[panic_handler]
fn panic(info: &PanicInfo) -> ! {
    log::error!("panic: {}", info);
    arch::halt()
}
