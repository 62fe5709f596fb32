/// Edge weight type, used for both ticket cost and travel time
pub type Weight = u64;
/// Default file name a route report is written to
pub const DEFAULT_REPORT_FILE: &str = "route_details.txt";
