use colored::Colorize;
use env_logger::{Builder, Env};
use log::{Level, LevelFilter};
use std::io::Write;

const FILTER_ENV: &str = "RUST_LOG";
const WRITE_STYLE_ENV: &str = "RUST_LOG_STYLE";

/// Builder with our format. `rust_log`, when set, replaces the default filters entirely
/// (and `verbose` is then ignored).
fn logger_builder(verbose: bool, rust_log: Option<&str>) -> Builder {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = Builder::new();
    builder.parse_env(Env::new().write_style(WRITE_STYLE_ENV));
    match rust_log {
        Some(spec) => {
            builder.parse_filters(spec);
        }
        None => {
            builder
                .filter_level(LevelFilter::Warn) // Default: only warnings from dependencies
                .filter_module(env!("CARGO_PKG_NAME"), level); // Our crate: use requested level
        }
    }
    builder.format(|buf, record| {
        let name = env!("CARGO_PKG_NAME");
        let ts = buf.timestamp_millis();
        let line = match record.level() {
            Level::Error | Level::Warn => {
                let level_str = match record.level() {
                    Level::Warn => "WARN".yellow(),
                    Level::Error => "ERROR".red(),
                    _ => unreachable!(),
                };
                let path = record.target().to_string().white();
                format!(
                    "[{} {} {} {}] {}",
                    name.cyan(),
                    ts,
                    level_str,
                    path,
                    record.args()
                )
            }
            Level::Debug | Level::Trace => {
                format!("[{} {}] {}", name.cyan(), ts, record.args().to_string().dimmed())
            }
            _ => format!("[{} {}] {}", name.cyan(), ts, record.args()),
        };
        writeln!(buf, "{}", line)
    });
    builder
}

pub fn setup_logging(verbose: bool) {
    let rust_log = std::env::var(FILTER_ENV)
        .ok()
        .filter(|s| !s.trim().is_empty());
    // try_init: the lib may be driven more than once in a process (tests).
    let _ = logger_builder(verbose, rust_log.as_deref()).try_init();
}
