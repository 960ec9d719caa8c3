use tracing_appender::non_blocking::WorkerGuard;

/// Handle для управления lifecycle логирования.
///
/// Держит guard файлового writer'а: пока handle жив, фоновый поток
/// дописывает буфер в файл. При drop буфер сбрасывается.
#[derive(Default)]
pub struct LoggingHandle {
    _file_guard: Option<WorkerGuard>,
}

impl LoggingHandle {
    pub fn new(file_guard: Option<WorkerGuard>) -> Self {
        Self {
            _file_guard: file_guard,
        }
    }

    /// Пишет ли логирование в файл.
    pub fn has_file_sink(&self) -> bool {
        self._file_guard.is_some()
    }

    /// Явное завершение: сбрасывает файловый буфер.
    pub fn shutdown(self) {
        if self.has_file_sink() {
            tracing::debug!("flushing file log sink");
        }
        drop(self);
    }
}

impl std::fmt::Debug for LoggingHandle {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.debug_struct("LoggingHandle")
            .field("file_sink", &self.has_file_sink())
            .finish()
    }
}
