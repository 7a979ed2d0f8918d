pub(crate) mod log_sanitizer;
