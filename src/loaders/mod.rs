pub mod scan;

pub use scan::{LidarScan, ScanPoint, load_scan, parse_samples};
