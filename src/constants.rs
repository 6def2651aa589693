//! Global constants for rs-mactime.
//!
//! Centralizes the fixed strings and widths of the mactime output formats so
//! the emitter, the summarizer and the tests agree on them.

// Body file layout
/// Field separator used by body files
pub const BODYFILE_DELIMITER: u8 = b'|';

/// Minimum number of fields in a body file line
pub const BODYFILE_MIN_FIELDS: usize = 11;

/// Lines starting with this byte are comments
pub const BODYFILE_COMMENT: u8 = b'#';

// Name lookup files (passwd / group)
/// Separator for passwd and group records
pub const NAME_FILE_DELIMITER: char = ':';

/// NIS continuation marker, such lines are ignored
pub const NAME_FILE_CONTINUATION: char = '+';

/// Replacement for spaces inside resolved display names
pub const NAME_SPACE_REPLACEMENT: &str = "/";

// Timeline output
/// Placeholder for a MACB role that is not set
pub const MACB_PLACEHOLDER: char = '.';

/// Header row for comma delimited output
pub const DELIMITED_HEADER: &str = "Date,Size,Type,Mode,UID,GID,Meta,File Name";

/// Date shown for a zero timestamp in word and numeric-month styles
pub const ZERO_DATE: &str = "Xxx Xxx 00 0000 00:00:00";

/// Date shown for a zero timestamp in ISO-8601 style
pub const ZERO_DATE_ISO8601: &str = "0000-00-00T00:00:00Z";

/// Width of a blanked (repeated) date in word and numeric-month styles
pub const BLANK_DATE_WIDTH: usize = 24;

/// Width of a blanked (repeated) date in ISO-8601 style
pub const BLANK_DATE_WIDTH_ISO8601: usize = 20;

/// Source label used when the body file is read from standard input
pub const STDIN_SOURCE: &str = "STDIN";

/// First line of the session header
pub const SESSION_HEADER_TITLE: &str = "The Sleuth Kit mactime Timeline";

/// Environment variable consulted for the header zone when `-z` is not given
pub const TZ_ENV_VAR: &str = "TZ";

/// Title and rule printed by `-z list`
pub const ZONE_LIST_TITLE: &str = "        TIMEZONE LIST";
pub const ZONE_LIST_RULE: &str = "-----------------------------------";

pub const WEEKDAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

// Index (period summary) output
/// Separator between the bucket label and its count for columnar runs
pub const INDEX_DELIMITER_COLUMNS: char = ':';

/// Separator between the bucket label and its count for delimited runs
pub const INDEX_DELIMITER_DELIMITED: char = ',';

// Error messages
pub const ERROR_INVALID_DATE: &str = "Invalid Date";
pub const ERROR_CANNOT_OPEN: &str = "Can't open";
pub const ERROR_INVALID_INDEX_TYPE: &str = "-i requires type 'day' or 'hour'";
