pub mod progress_parser;
pub mod progress_serializer;

pub use progress_parser::parse_region;
pub use progress_serializer::serialize_region;
