pub type Result<T> = core::result::Result<T, super::Error>;
