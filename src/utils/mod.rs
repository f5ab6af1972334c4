pub mod error;
pub mod formats;
pub mod fs;

pub use error::{ConverterError, ConverterResult};
pub use formats::SourceFormat;
pub use fs::{
    WEBP_EXTENSION,
    webp_destination,
    file_size,
    ensure_root_dir,
    extract_filename,
};
