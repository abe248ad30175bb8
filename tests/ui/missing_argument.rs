fn main() {
    let mut log = minilog::Logging::new(minilog::Level::Verbose, minilog::sink::Discard);
    minilog::info!(log, "%d %d", 1);
    log.set_threshold(minilog::Level::Info);
}
