use std::io::stdout;
use std::path::Path;

use tracing::dispatcher::Dispatch;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::Layer as TraceLayer;
use tracing_subscriber::prelude::__tracing_subscriber_SubscriberExt;
use tracing_subscriber::{Layer as LayerIntf, Registry};

use crate::config::AppLoggingCfg;
use crate::constant::logging::{Destination as DstOption, Level as AppLogLevelInner};

pub type AppLogLevel = AppLogLevelInner;

pub struct AppLogContext {
    _io_guard: WorkerGuard,
    logger: Dispatch,
}

// exposed since the binary executable invokes this macro indirectly
#[macro_export]
macro_rules! to_3rdparty_level {
    ($lvlin:expr) => {
        match $lvlin {
            $crate::logging::AppLogLevel::FATAL | $crate::logging::AppLogLevel::ERROR => {
                tracing::Level::ERROR
            }
            $crate::logging::AppLogLevel::WARNING => tracing::Level::WARN,
            $crate::logging::AppLogLevel::INFO => tracing::Level::INFO,
            $crate::logging::AppLogLevel::DEBUG => tracing::Level::DEBUG,
            $crate::logging::AppLogLevel::TRACE => tracing::Level::TRACE,
        } // in `tracing` ecosystem, level comparison is like
          // TRACE > DEBUG > INFO > WARN > ERROR
    };
}

fn _gen_localfile_writer(fullpath: &str) -> (NonBlocking, WorkerGuard) {
    let p = Path::new(fullpath);
    let dir = match p.parent() {
        Some(d) if !d.as_os_str().is_empty() => d,
        _others => Path::new("."),
    };
    // the path has been checked by the config layer, a file name is always present
    let fname_prefix = p.file_name().unwrap_or(p.as_os_str());
    let wr_dst = RollingFileAppender::new(Rotation::NEVER, dir, fname_prefix);
    tracing_appender::non_blocking(wr_dst)
}

fn _gen_console_writer() -> (NonBlocking, WorkerGuard) {
    let wr_dst = stdout();
    tracing_appender::non_blocking(wr_dst)
} // Note tracing spawns new thread dedicating to each non-blocking writer

impl AppLogContext {
    pub fn new(cfg: &AppLoggingCfg) -> Self {
        let (io_writer, guard) = match &cfg.destination {
            DstOption::CONSOLE => _gen_console_writer(),
            DstOption::LOCALFS(path) => _gen_localfile_writer(path.as_str()),
        }; // the guard has to be kept along with the writer, for successfully
           // flushing log messages to I/O
        let lvl = to_3rdparty_level!(cfg.min_level);
        let layer = TraceLayer::new()
            .with_writer(io_writer)
            .with_file(false) // to prevent full path exposed
            .with_line_number(true)
            .with_thread_ids(true)
            .with_level(true)
            .with_filter(LevelFilter::from_level(lvl));
        let subscriber = Registry::default().with(layer);
        Self {
            _io_guard: guard,
            logger: Dispatch::new(subscriber),
        }
    }

    pub fn dispatcher(&self) -> &Dispatch {
        &self.logger
    }
} // end of impl AppLogContext

#[macro_export]
macro_rules! app_log_event {
    ( $ctx:ident, $lvl:expr, $($arg:tt)+ ) => {{
        const LVL_INNER: tracing::Level = $crate::logging::to_3rdparty_level!($lvl);
        tracing::dispatcher::with_default($ctx.dispatcher(), || {
            tracing::event!(LVL_INNER, $($arg)+);
        });
    }};
}

pub use app_log_event;
pub use to_3rdparty_level;
