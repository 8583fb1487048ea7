use crate::errors::CoreError;

/// Sink for user-facing failure notices (the toast layer in a UI).
///
/// Every failing operation reports one fixed, generic message here and
/// then rethrows the original error: the user sees a consistent notice,
/// the caller still gets the real failure to react to. Messages are
/// deliberately not derived from server error bodies.
pub trait Notifier: Send + Sync {
    fn error(&self, message: &str);
}

/// Default notifier: routes messages to the `log` facade at error
/// level. Embedders with a real toast system implement [`Notifier`]
/// themselves and pass it in at construction.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn error(&self, message: &str) {
        log::error!("{message}");
    }
}

/// Notifier that swallows everything. Useful when embedding the library
/// in batch tooling where there is no user to notify.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn error(&self, _message: &str) {}
}

/// Notify-then-rethrow in one step: report the fixed message, keep the
/// original error moving.
pub(crate) fn notify_err<T>(
    notifier: &dyn Notifier,
    message: &str,
    result: Result<T, CoreError>,
) -> Result<T, CoreError> {
    if result.is_err() {
        notifier.error(message);
    }
    result
}
