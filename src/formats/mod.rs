mod gray;
mod rgb;
mod to_rgb;

pub use gray::render_grayscale;
pub use rgb::{RgbFormat, RgbImage};
pub use to_rgb::{ConvertOptions, convert_to_rgb};

#[cfg(feature = "multi-thread")]
pub(crate) use to_rgb::{convert_rows, verify_input};
