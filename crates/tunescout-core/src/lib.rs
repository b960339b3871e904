pub mod error;
pub mod normalize;
pub mod sanitize;
pub mod types;

// Re-export commonly used types
pub use error::CoreError;
pub use normalize::normalize_artist_name;
pub use sanitize::sanitize_identifier;
pub use types::{AlbumMatch, ArtistQuery, LyricsRequest, LyricsResult};
