pub mod clipboard;
pub mod export;
pub mod format;

pub use clipboard::{COPY_CONFIRMATION, ClipboardSink, CopyFeedback, CopyState, SystemClipboard};
pub use export::export_csv;
pub use format::format_table;
