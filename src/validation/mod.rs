pub mod checksum;
pub mod format;
pub mod isin;

pub use checksum::ChecksumValidator;
pub use format::FormatValidator;
pub use isin::IsinValidator;
