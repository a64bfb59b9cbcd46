pub mod unsplash;

pub use unsplash::{
    Error, Photo, PhotoExif, Result, SearchResults, User, color::Rgb, decode_photos,
    models::{photo, user},
};
