use crate::{
    arg::{Arg, Args},
    formatter,
    source::IntoSource,
    Level, Write,
};

/// Line terminator expected by most serial terminals
pub const CR: &str = "\r\n";

/// A logger: a sink plus the most verbose [`Level`] that still gets through to it.
///
/// Create one at startup and pass it (by `&mut`) to whoever needs to log. The level-specific
/// methods only format anything when the statement passes the threshold; the prefix
/// (`ERROR: `, `WARNING: `, `debug: `, `verbose: `) is written right before the message.
///
/// ```
/// use minilog::{sink::CharSink, Arg, Level, Logging};
///
/// fn uart_tx(_byte: u8) { /* write to the data register */ }
///
/// let mut log = Logging::new(Level::Info, CharSink(uart_tx));
/// log.error("sensor %d: timeout after %u ms\r\n", &[Arg::from(2), Arg::from(150)]);
/// log.debug("not emitted at this threshold\r\n", &[]);
/// ```
pub struct Logging<W> {
    threshold: Level,
    sink: W,
}

impl<W> Logging<W>
where
    W: Write,
{
    pub const fn new(threshold: Level, sink: W) -> Self {
        Self { threshold, sink }
    }

    pub fn threshold(&self) -> Level {
        self.threshold
    }

    pub fn set_threshold(&mut self, threshold: Level) {
        self.threshold = threshold;
    }

    /// Whether a statement at `level` would be written
    pub fn enabled(&self, level: Level) -> bool {
        level.passes(self.threshold)
    }

    pub fn sink_mut(&mut self) -> &mut W {
        &mut self.sink
    }

    pub fn into_sink(self) -> W {
        self.sink
    }

    /// Writes `ERROR: ` and the message, unless the threshold is [`Level::NoOutput`]
    pub fn error(&mut self, format: impl IntoSource, args: &[Arg<'_>]) {
        self.log(Level::Error, format, args)
    }

    /// Writes `WARNING: ` and the message
    pub fn warn(&mut self, format: impl IntoSource, args: &[Arg<'_>]) {
        self.log(Level::Warning, format, args)
    }

    /// Writes the message, without prefix
    pub fn info(&mut self, format: impl IntoSource, args: &[Arg<'_>]) {
        self.log(Level::Info, format, args)
    }

    /// Writes `debug: ` and the message
    pub fn debug(&mut self, format: impl IntoSource, args: &[Arg<'_>]) {
        self.log(Level::Debug, format, args)
    }

    /// Debug message without the `debug: ` prefix, to continue a previous `debug` line
    pub fn debug_cont(&mut self, format: impl IntoSource, args: &[Arg<'_>]) {
        if self.enabled(Level::Debug) {
            self.write(format, args)
        }
    }

    /// Writes `verbose: ` and the message
    pub fn verbose(&mut self, format: impl IntoSource, args: &[Arg<'_>]) {
        self.log(Level::Verbose, format, args)
    }

    /// Writes the prefix of `level` and the message if `level` passes the threshold
    pub fn log(&mut self, level: Level, format: impl IntoSource, args: &[Arg<'_>]) {
        if self.enabled(level) {
            formatter::emit(&mut self.sink, level.prefix(), &mut Args::empty());
            self.write(format, args)
        }
    }

    /// Like [`Logging::log`] but the arguments are only built if the statement is written
    pub fn log_with<'a, const N: usize>(
        &mut self,
        level: Level,
        format: impl IntoSource,
        args: impl FnOnce() -> [Arg<'a>; N],
    ) {
        if self.enabled(level) {
            self.log(level, format, &args())
        }
    }

    /// Like [`Logging::debug_cont`] but the arguments are only built if the statement is written
    pub fn debug_cont_with<'a, const N: usize>(
        &mut self,
        format: impl IntoSource,
        args: impl FnOnce() -> [Arg<'a>; N],
    ) {
        if self.enabled(Level::Debug) {
            self.write(format, &args())
        }
    }

    /// Writes the message regardless of the threshold, without prefix
    pub fn write(&mut self, format: impl IntoSource, args: &[Arg<'_>]) {
        formatter::emit(&mut self.sink, format, &mut Args::new(args))
    }
}
