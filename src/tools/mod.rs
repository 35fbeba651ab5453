pub mod scan;

pub use scan::{remote_url, SnykClient};
