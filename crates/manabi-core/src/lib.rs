pub mod error;
pub mod index;
pub mod lesson;
pub mod line;
pub mod loader;
pub mod source;
pub mod stats;

pub use error::{LoadError, ParseError};
pub use index::{parse_index, parse_index_strict};
pub use lesson::{parse, parse_strict};
pub use loader::{LessonLoader, ParseMode};
pub use source::LessonSource;
pub use stats::compute_stats;
