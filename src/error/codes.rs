/// Error code registry for seqkit
///
/// Error codes are organized by category:
/// - 1000-1999: Invalid argument errors
/// - 2000-2999: Configuration errors
pub struct ErrorCode;

impl ErrorCode {
    // Invalid argument errors (1000-1999)
    pub const INVALID_ARGUMENT: u16 = 1000;
    pub const NOT_A_SEQUENCE: u16 = 1001;
    pub const NOT_A_POSITIVE_INTEGER: u16 = 1002;
    pub const INVALID_KEY: u16 = 1003;
    pub const INVALID_JSON: u16 = 1004;

    // Configuration errors (2000-2999)
    pub const CONFIG_GENERIC: u16 = 2000;
    pub const CONFIG_NOT_FOUND: u16 = 2001;
    pub const CONFIG_PARSE_ERROR: u16 = 2002;
    pub const CONFIG_INVALID_VALUE: u16 = 2003;
}

/// Get a human-readable description for an error code
pub fn describe_error_code(code: u16) -> &'static str {
    match code {
        1000 => "Generic invalid argument",
        1001 => "Argument is not a sequence",
        1002 => "Argument is not a positive integer",
        1003 => "Key path is empty or malformed",
        1004 => "Argument is not valid JSON",

        2000 => "Generic configuration error",
        2001 => "Configuration file not found",
        2002 => "Failed to parse configuration",
        2003 => "Invalid value in configuration",

        _ => "Unknown error code",
    }
}
