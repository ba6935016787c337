/// Serial debug log.
///
/// With the `serial` feature on x86_64, output goes to a UART 16550 on COM1
/// (I/O port 0x3F8). Otherwise the macros still type-check their arguments
/// but nothing is written, which keeps host builds away from I/O ports.

#[cfg(all(feature = "serial", target_arch = "x86_64"))]
use spin::Mutex;
#[cfg(all(feature = "serial", target_arch = "x86_64"))]
use uart_16550::SerialPort;

#[cfg(all(feature = "serial", target_arch = "x86_64"))]
pub static SERIAL1: Mutex<SerialPort> = Mutex::new(unsafe { SerialPort::new(0x3F8) });

pub fn init() {
    #[cfg(all(feature = "serial", target_arch = "x86_64"))]
    SERIAL1.lock().init();
}

#[macro_export]
macro_rules! serial_print {
    ($($arg:tt)*) => {
        $crate::serial::_print(::core::format_args!($($arg)*));
    };
}

#[macro_export]
macro_rules! serial_println {
    () => ($crate::serial_print!("\n"));
    ($($arg:tt)*) => ($crate::serial_print!("{}\n", ::core::format_args!($($arg)*)));
}

#[doc(hidden)]
#[cfg(all(feature = "serial", target_arch = "x86_64"))]
pub fn _print(args: core::fmt::Arguments) {
    use core::fmt::Write;
    use x86_64::instructions::interrupts;

    interrupts::without_interrupts(|| {
        SERIAL1.lock().write_fmt(args).unwrap();
    });
}

#[doc(hidden)]
#[cfg(not(all(feature = "serial", target_arch = "x86_64")))]
pub fn _print(_args: core::fmt::Arguments) {}
