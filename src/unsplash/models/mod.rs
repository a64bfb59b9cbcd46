pub mod exif;
pub mod photo;
pub mod search;
pub mod user;

pub use exif::PhotoExif;
pub use photo::Photo;
pub use search::SearchResults;
pub use user::User;
