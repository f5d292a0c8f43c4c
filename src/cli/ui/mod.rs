pub mod spinner;

pub use spinner::{Spinner, with_spinner};

use is_terminal::IsTerminal;

/// Run a future with a spinner when stderr is a terminal, plainly otherwise
pub async fn with_progress<F, T>(message: impl Into<String>, future: F) -> T
where
    F: std::future::Future<Output = T>,
{
    if std::io::stderr().is_terminal() {
        with_spinner(message, future).await
    } else {
        future.await
    }
}
