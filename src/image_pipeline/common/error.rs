use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("Failed to open HDR container: {0}")]
    OpenError(String),

    #[error("Failed to read HDR image data: {0}")]
    ReadError(String),

    #[error("HDR pixel layout inconsistent with declared dimensions: {0}")]
    LayoutError(String),

    #[error("HDR image has {0} channels, at least 3 required")]
    ChannelError(usize),

    #[error("Failed to create HDR output: {0}")]
    CreateError(String),

    #[error("Failed to write HDR image: {0}")]
    WriteError(String),

    #[error("Failed to decode image: {0}")]
    GenericDecodeError(String),

    #[error("Failed to save image: {0}")]
    GenericSaveError(String),

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConversionError>;
