fn main() {
    let mut log = minilog::Logging::new(minilog::Level::Verbose, minilog::sink::Discard);
    minilog::debug!(log, "%s", "a", 2);
    log.set_threshold(minilog::Level::Info);
}
