//! Process-wide logging for the calculator front-end.
//!
//! Records go to stdout and, once [`enable_file_logging`] is called, to a
//! file. The terminal UI owns stdout while it runs, so the binary switches
//! the stdout layer off for that time and relies on the file.

use anyhow::{Context, Result, anyhow};
use chrono::Local;
use std::{
    fmt,
    fs::File,
    io::{self, IsTerminal, Write},
    path::Path,
    sync::{Arc, Mutex, MutexGuard, Once, OnceLock, PoisonError},
};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{
        FmtContext, MakeWriter,
        format::{FormatEvent, FormatFields, Writer},
    },
    layer::SubscriberExt,
    registry::LookupSpan,
    reload,
    util::SubscriberInitExt,
};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

const DIM: &str = "2";
const CYAN: &str = "36";

fn level_color(level: &Level) -> &'static str {
    match *level {
        Level::ERROR => "1;31",
        Level::WARN => "1;33",
        Level::INFO => "1;32",
        Level::DEBUG => "1;34",
        Level::TRACE => "1;35",
    }
}

/// Writes `text` wrapped in an SGR sequence when `ansi` is set.
fn paint(
    writer: &mut Writer<'_>,
    ansi: bool,
    sgr: &str,
    text: impl fmt::Display,
) -> fmt::Result {
    if ansi {
        write!(writer, "\x1b[{sgr}m{text}\x1b[0m")
    } else {
        write!(writer, "{text}")
    }
}

/// `<local time> <LEVEL> <target>: <fields>`, one record per line.
struct CalculatorFormat;

impl<S, N> FormatEvent<S, N> for CalculatorFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();
        let ansi = writer.has_ansi_escapes();

        paint(&mut writer, ansi, DIM, Local::now().format(TIMESTAMP_FORMAT))?;
        write!(writer, " ")?;
        paint(&mut writer, ansi, level_color(meta.level()), format_args!("{:>5}", meta.level()))?;
        write!(writer, " ")?;
        paint(&mut writer, ansi, CYAN, meta.target())?;
        write!(writer, ": ")?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Log file shared between the file layer and [`enable_file_logging`].
type LogFile = Arc<Mutex<Option<File>>>;

fn lock_file(file: &LogFile) -> MutexGuard<'_, Option<File>> {
    file.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Writer target for the file layer; output is dropped while no file is open.
#[derive(Clone)]
struct LogFileWriter(LogFile);

struct LockedLogFile<'a>(MutexGuard<'a, Option<File>>);

impl Write for LockedLogFile<'_> {
    fn write(
        &mut self,
        buf: &[u8],
    ) -> io::Result<usize> {
        self.0.as_mut().map_or(Ok(buf.len()), |file| file.write(buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.as_mut().map_or(Ok(()), File::flush)
    }
}

impl<'a> MakeWriter<'a> for LogFileWriter {
    type Writer = LockedLogFile<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        LockedLogFile(lock_file(&self.0))
    }
}

/// Runtime knobs captured when the subscriber is installed.
struct LogControls {
    reload_level: Box<dyn Fn(EnvFilter) -> Result<()> + Send + Sync>,
    reload_stdout: Box<dyn Fn(EnvFilter) -> Result<()> + Send + Sync>,
    file: LogFile,
}

static INIT: Once = Once::new();
static APP_NAME: OnceLock<String> = OnceLock::new();
static CONTROLS: OnceLock<LogControls> = OnceLock::new();

fn controls() -> Result<&'static LogControls> {
    CONTROLS
        .get()
        .ok_or_else(|| anyhow!("logging not yet initialized"))
}

fn reloader<S>(
    handle: reload::Handle<EnvFilter, S>,
    what: &'static str,
) -> Box<dyn Fn(EnvFilter) -> Result<()> + Send + Sync>
where
    S: Subscriber + Send + Sync + 'static,
{
    Box::new(move |filter| {
        handle
            .reload(filter)
            .with_context(|| format!("{what} filter reload failed"))
    })
}

/// Returns `true` when `RUST_LOG` is set and therefore owns the log level.
pub fn env_filter_active() -> bool {
    std::env::var_os(EnvFilter::DEFAULT_ENV).is_some()
}

/// Changes the active log filter. Accepts a bare level ("warn", "debug")
/// or any full `EnvFilter` directive.
pub fn set_log_level(level: &str) -> Result<()> {
    let controls = controls()?;
    let filter =
        EnvFilter::try_new(level).with_context(|| format!("invalid log level '{level}'"))?;
    (controls.reload_level)(filter)
}

/// Shows or hides stdout log output without affecting file logging.
pub fn set_stdout_enabled(enabled: bool) -> Result<()> {
    // The level filter still caps what "trace" lets through.
    let gate = EnvFilter::new(if enabled { "trace" } else { "off" });
    (controls()?.reload_stdout)(gate)
}

/// Starts appending log output to `path`, replacing any open log file.
/// The directory must already exist.
pub fn enable_file_logging(path: &Path) -> Result<()> {
    let controls = controls()?;
    let file = File::options()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file '{}'", path.display()))?;

    *lock_file(&controls.file) = Some(file);
    Ok(())
}

/// Closes the current log file.
pub fn disable_file_logging() {
    if let Ok(controls) = controls() {
        *lock_file(&controls.file) = None;
    }
}

/// Process name derived from the executable path, or "app" if unknown.
pub fn app_name() -> &'static str {
    APP_NAME.get_or_init(|| {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.file_stem().map(|s| s.to_string_lossy().into_owned()))
            .unwrap_or_else(|| "app".to_string())
    })
}

/// Initializes logging. Call once at startup; later calls are no-ops.
///
/// The level comes from `RUST_LOG` when set, otherwise INFO until
/// [`set_log_level`] changes it.
pub fn init_default_logging() {
    INIT.call_once(install_subscriber);
}

fn install_subscriber() {
    let _ = app_name();

    let file: LogFile = Arc::new(Mutex::new(None));
    let level = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let (level_filter, level_handle) = reload::Layer::new(level);
    let (stdout_gate, stdout_handle) = reload::Layer::new(EnvFilter::new("trace"));

    let stdout_layer = tracing_subscriber::fmt::layer()
        .event_format(CalculatorFormat)
        .with_ansi(io::stdout().is_terminal())
        .with_filter(stdout_gate);
    let file_layer = tracing_subscriber::fmt::layer()
        .event_format(CalculatorFormat)
        .with_ansi(false)
        .with_writer(LogFileWriter(file.clone()));

    let installed = tracing_subscriber::registry()
        .with(level_filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init();

    if installed.is_ok() {
        let _ = CONTROLS.set(LogControls {
            reload_level: reloader(level_handle, "level"),
            reload_stdout: reloader(stdout_handle, "stdout"),
            file,
        });
    }
}
