fn main() {
    let mut log = minilog::Logging::new(minilog::Level::Verbose, minilog::sink::Discard);
    minilog::info!(log, "%q");
    log.set_threshold(minilog::Level::Info);
}
