/// Number of raw rows shown per page when the user asks to see trip data.
pub const RAW_PAGE_SIZE: usize = 5;

/// Width of the dashed rule printed between report sections.
pub const RULE_WIDTH: usize = 40;

/// Timestamp layouts accepted for `Start Time` and `End Time`, tried in order.
pub const TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Columns every city file must carry.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "Start Time",
    "End Time",
    "Trip Duration",
    "Start Station",
    "End Station",
    "User Type",
];

/// Columns only present in cities that publish rider demographics.
pub const DEMOGRAPHIC_COLUMNS: [&str; 2] = ["Gender", "Birth Year"];
