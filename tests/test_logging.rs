use std::error::Error as StdError;
use std::sync::Arc;

use console_logger::logging::{self, LevelFilter, debug, error, info, trace, warn};
use console_logger::{Logger, LoggerConfig, MemorySink, Palette};

/// Test that a logger installed behind the `log` facade renders records
#[test]
fn test_logging_works() {
    let sink = Arc::new(MemorySink::new());
    let logger = Logger::new(LoggerConfig {
        module_name: Some("facade".to_string()),
        show_debug: true,
        palette: Palette::Plain,
        ..LoggerConfig::default()
    })
    .with_sink(sink.clone());

    logging::init(logger).unwrap();
    assert_eq!(log::max_level(), LevelFilter::Debug);

    // Log messages at different levels
    trace!("This is a trace message");
    debug!("This is a debug message");
    info!("This is an info message");
    warn!("This is a warning message");
    error!("This is an error message");

    // Trace is below the installed max level and never reaches the sink
    let out = sink.stdout();
    assert!(!out.contains("This is a trace message"));
    assert!(out.contains(" facade  ⚙ DEBUG: This is a debug message\n"));
    assert!(out.contains(" facade  ℹ INFO: This is an info message\n"));
    assert!(out.contains(" facade  ⚠ WARNING: This is a warning message\n"));

    assert_eq!(sink.stderr(), " facade  ✘ ERROR: This is an error message\n");

    // A second install is refused
    let again = logging::init(Logger::default()).unwrap_err();
    assert!(matches!(again, console_logger::Error::Install(_)));
    assert!(again.to_string().starts_with("Logger installation failed: "));
    assert!(again.source().is_some());
}
