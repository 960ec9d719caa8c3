use tracing_appender::{non_blocking, non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{fmt, registry::LookupSpan, Layer};

use crate::logging::config::{LogFormat, LoggingConfig};

/// Файловый layer с ежедневной ротацией.
///
/// Запись идёт через non-blocking writer; возвращаемый `WorkerGuard` должен
/// жить до завершения программы, иначе хвост логов будет потерян.
pub fn layer_with_config<S>(
    config: &LoggingConfig
) -> std::io::Result<(Box<dyn Layer<S> + Send + Sync>, WorkerGuard)>
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    config.ensure_log_dir()?;

    let appender = rolling::daily(&config.log_dir, &config.file_name);
    let (writer, guard) = non_blocking(appender);

    let layer: Box<dyn Layer<S> + Send + Sync> = match config.format {
        LogFormat::Json => Box::new(fmt::layer().json().with_ansi(false).with_writer(writer)),
        LogFormat::Compact | LogFormat::Pretty => {
            Box::new(fmt::layer().with_ansi(false).with_writer(writer))
        }
    };

    Ok((layer, guard))
}
