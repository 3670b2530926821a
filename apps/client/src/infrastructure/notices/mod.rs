pub mod console_sink;
pub mod recording_sink;
