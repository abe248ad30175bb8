fn main() {
    let mut log = minilog::Logging::new(minilog::Level::Verbose, minilog::sink::Discard);
    minilog::warn!(log, "50%");
    log.set_threshold(minilog::Level::Info);
}
