use crate::domain::shared::notice::{Notice, NoticeSink};

/// Prints notices to stderr so they never mix with command output.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNoticeSink;

impl NoticeSink for ConsoleNoticeSink {
    fn notify(&self, notice: Notice) {
        if notice.is_error() {
            tracing::warn!(%notice, "user notice");
            eprintln!("! {}", notice);
        } else {
            tracing::info!(%notice, "user notice");
            eprintln!("{}", notice);
        }
    }
}
