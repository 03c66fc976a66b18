use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum OgError {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsingError(#[from] owned_ttf_parser::FaceParsingError),

    #[error(transparent)]
    /// [image] failed to encode the rendered card
    Image(#[from] image::ImageError),
}
