pub mod number;
pub mod text;

pub use number::{format_growth, format_signed, format_thousands};
pub use text::{fit, truncate_with_ellipsis};
