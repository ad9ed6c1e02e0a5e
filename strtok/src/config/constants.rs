pub mod compile_time {
    pub mod tokenizer {
        /// Delimiters used when none are supplied: space, tab, newline,
        /// carriage return and form feed
        pub const DEFAULT_DELIMITERS: &str = " \t\n\r\u{000C}";

        /// Number of leading characters of a token echoed into debug events
        pub const MAX_LOGGED_TOKEN_PREVIEW: usize = 32;
    }

    pub mod logging {
        /// Maximum number of events retained by the in-memory logger
        /// RESOURCE: Controls memory usage for captured events
        pub const LOG_BUFFER_SIZE: usize = 10_000;

        /// Messages longer than this are truncated before emission
        pub const MAX_LOG_MESSAGE_LENGTH: usize = 4096;
    }
}
