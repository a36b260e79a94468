//! Cortex-M startup, vector table and exception handlers

use core::arch::{asm, global_asm};
use core::ptr;

use semislip_api::Result;

use super::{systick_reload, SysTickCtrl};

const SYST_CSR: usize = 0xE000_E010;
const SYST_RVR: usize = 0xE000_E014;
const SYST_CVR: usize = 0xE000_E018;

/// # Safety
///
/// `addr` must be a valid, word-aligned memory-mapped register.
#[inline]
unsafe fn write_reg(addr: usize, val: u32) {
    unsafe { ptr::write_volatile(addr as *mut u32, val) }
}

/// Start SysTick firing once per `1 / tick_hz` seconds from the core clock.
pub fn init_systick(f_cpu: u32, tick_hz: u32) -> Result<()> {
    let reload = systick_reload(f_cpu, tick_hz)?;
    let ctrl = SysTickCtrl::ENABLE | SysTickCtrl::TICKINT | SysTickCtrl::CLKSOURCE;
    // SAFETY: SYST_* are the architecturally fixed SysTick registers, present
    // on every Armv6-M and Armv7-M core.
    unsafe {
        write_reg(SYST_RVR, reload);
        write_reg(SYST_CVR, 0);
        write_reg(SYST_CSR, ctrl.bits());
    }
    Ok(())
}

/// Park the core.
pub fn halt() -> ! {
    loop {
        unsafe { asm!("wfi", options(nomem, nostack)) };
    }
}

unsafe extern "C" {
    static mut _sdata: u32;
    static mut _edata: u32;
    static _sidata: u32;
    static mut _sbss: u32;
    static mut _ebss: u32;

    fn HardFault();
}

unsafe extern "Rust" {
    fn main() -> !;
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn Reset() -> ! {
    unsafe {
        init_data();
        zero_bss();
        main()
    }
}

unsafe fn init_data() {
    unsafe {
        let mut src = &raw const _sidata;
        let mut dst = &raw mut _sdata;
        let end = &raw mut _edata;
        while dst < end {
            ptr::write_volatile(dst, ptr::read(src));
            dst = dst.add(1);
            src = src.add(1);
        }
    }
}

unsafe fn zero_bss() {
    unsafe {
        let mut dst = &raw mut _sbss;
        let end = &raw mut _ebss;
        while dst < end {
            ptr::write_volatile(dst, 0);
            dst = dst.add(1);
        }
    }
}

#[unsafe(no_mangle)]
pub extern "C" fn SysTick() {
    crate::time::on_systick();
}

extern "C" fn DefaultHandler() {
    halt();
}

/// Vector table entry
#[derive(Clone, Copy)]
pub union Vector {
    reset: unsafe extern "C" fn() -> !,
    handler: unsafe extern "C" fn(),
    reserved: usize,
}

const fn handler(f: unsafe extern "C" fn()) -> Vector {
    Vector { handler: f }
}

const RESERVED: Vector = Vector { reserved: 0 };

/// Exception vectors after the initial stack pointer, which `link.x` places
/// first.
#[unsafe(link_section = ".vector_table.exceptions")]
#[unsafe(no_mangle)]
pub static EXCEPTIONS: [Vector; 15] = [
    Vector { reset: Reset },
    handler(DefaultHandler), // NMI
    handler(HardFault),
    RESERVED,
    RESERVED,
    RESERVED,
    RESERVED,
    RESERVED,
    RESERVED,
    RESERVED,
    handler(DefaultHandler), // SVCall
    RESERVED,
    RESERVED,
    handler(DefaultHandler), // PendSV
    handler(SysTick),
];

// HardFault trampoline. A `BKPT 0xAB` with no debugger attached escalates to
// HardFault; step over it and fake a result of 32 in the stacked r0 so the
// program keeps running. Any other fault halts.
global_asm!(
    ".syntax unified",
    ".section .text.HardFault,\"ax\",%progbits",
    ".global HardFault",
    ".type HardFault,%function",
    ".thumb_func",
    "HardFault:",
    "    movs r0, #4",
    "    mov r1, lr",
    "    tst r0, r1",
    "    beq 1f",
    "    mrs r0, psp",
    "    b 2f",
    "1:",
    "    mrs r0, msp",
    "2:",
    "    ldr r1, [r0, #24]",
    "    ldrh r2, [r1]",
    "    ldr r3, =0xBEAB",
    "    cmp r2, r3",
    "    bne 3f",
    "    adds r1, #2",
    "    str r1, [r0, #24]",
    "    movs r1, #32",
    "    str r1, [r0, #0]",
    "    bx lr",
    "3:",
    "    b 3b",
    ".ltorg",
);
