use std::{
    cell::{Cell, RefCell},
    sync::Mutex,
};

use minilog::{
    sink::{CharSink, Discard, LineBuffered},
    Level, Logging, CR,
};

static UART: Mutex<Vec<u8>> = Mutex::new(Vec::new());

fn uart_tx(byte: u8) {
    UART.lock().unwrap().push(byte)
}

#[test]
fn char_sink() {
    let mut log = Logging::new(Level::Info, CharSink(uart_tx));
    minilog::error!(log, "boot failed: %s (%d)%s", "no clock", -5, CR);
    minilog::info!(log, "uptime %u s\r\n", 12u32);
    minilog::debug!(log, "filtered\r\n");

    assert_eq!(
        &*UART.lock().unwrap(),
        b"ERROR: boot failed: no clock (-5)\r\nuptime 12 s\r\n"
    );
}

#[test]
fn line_buffered() {
    let lines = RefCell::new(Vec::<String>::new());
    let mut buffer = [0u8; 32];
    let sink = LineBuffered::new(&mut buffer, |line: &[u8]| {
        lines
            .borrow_mut()
            .push(String::from_utf8(line.to_vec()).unwrap())
    });

    let mut log = Logging::new(Level::Debug, sink);
    minilog::warn!(log, "temp %d\n", 71);
    minilog::debug!(log, "regs %4m", &[0xde, 0xad, 0xbe, 0xef]);
    minilog::debug_cont!(log, " ok\n");
    minilog::info!(log, "tail");
    assert_eq!(log.sink_mut().pending(), 4);
    log.sink_mut().flush();
    drop(log);

    assert_eq!(
        *lines.borrow(),
        ["WARNING: temp 71\n", "debug: regs deadbeef ok\n", "tail"]
    );
}

#[test]
fn threshold_at_runtime() {
    let mut log = Logging::new(Level::NoOutput, Discard);
    assert!(!log.enabled(Level::Error));

    log.set_threshold(Level::clamped(2));
    assert_eq!(log.threshold(), Level::Warning);
    assert!(log.enabled(Level::Error));
    assert!(log.enabled(Level::Warning));
    assert!(!log.enabled(Level::Info));

    log.set_threshold(Level::clamped(-1));
    assert_eq!(log.threshold(), Level::NoOutput);
}

#[test]
fn filtered_statements_do_not_evaluate_arguments() {
    let evaluated = Cell::new(false);
    let expensive = || {
        evaluated.set(true);
        42
    };

    let mut log = Logging::new(Level::Info, Discard);
    minilog::verbose!(log, "%d", expensive());
    assert!(!evaluated.get());
    minilog::info!(log, "%d", expensive());
    assert!(evaluated.get());
}

#[cfg(feature = "alloc")]
#[test]
fn vec_sink() {
    let mut log = Logging::new(Level::Verbose, Vec::<u8>::new());
    minilog::verbose!(log, "%T", true);
    minilog::write!(log.sink_mut(), " %B", 2);
    assert_eq!(log.into_sink(), b"verbose: true 0b10");
}
