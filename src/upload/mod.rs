pub mod validate;
pub mod widget;

pub use validate::UploadError;
pub use widget::{AcquisitionMethod, ImageAcquisitionPanel};
