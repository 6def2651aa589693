// Re-export all items from the submodules
mod timeline_config;
mod window;
mod zone;

// Re-export run options and settings
pub use timeline_config::{
    DateStyle,
    OutputFormat,
    SummaryGranularity,
    TimelineOptions,
    TimelineSettings,
    load_options,
};

// Re-export time window parsing
pub use window::{
    TimeWindow,
    parse_window_date,
};

// Re-export zone handling
pub use zone::{
    DisplayZone,
    civil_time_utc,
    write_zone_list,
    zone_names,
};
