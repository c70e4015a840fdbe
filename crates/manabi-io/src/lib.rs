pub mod fs;
pub mod http;

pub use fs::FsSource;
pub use http::HttpSource;
