use std::io;
use std::sync::Arc;

use console_logger::{Logger, LoggerConfig, NoopInspector, Palette, Stream};

fn load_schema(logger: &Logger) {
    logger.progress_info(["loading", "schema"]);
    logger.progress_ok();
}

fn fail_hard(logger: &Logger) {
    logger.fatal(["unrecoverable", "state"]);
}

fn main() {
    let logger = Logger::new(LoggerConfig {
        show_debug: true,
        show_caller: true,
        show_trace: true,
        show_time: true,
        ..LoggerConfig::new("demo")
    });

    load_schema(&logger);
    logger.info(["server", "listening", "on", ":8080"]);
    logger.warn(["cache", "is", "cold"]);
    logger.debug(["42", "entries", "evicted"]);
    logger.error(["request", "failed"]);
    fail_hard(&logger);

    let err = io::Error::other("disk full");
    logger.error_with_detail("could not write snapshot", &err);
    logger.fatal_with_detail("could not recover", &err);

    // Same messages without colors or stack introspection
    let plain = Logger::new(LoggerConfig::new("plain"))
        .with_palette(Palette::detect(Stream::Stdout))
        .with_inspector(Arc::new(NoopInspector));
    plain.info(["no", "escapes", "when", "piped"]);
}
