pub mod bridge;
pub mod buffer;
pub mod factory;
pub mod json_layout;
pub mod layout;
pub mod line_layout;
pub mod sink;
pub mod types;

pub use bridge::*;
pub use buffer::*;
pub use factory::*;
pub use json_layout::*;
pub use layout::*;
pub use line_layout::*;
pub use sink::*;
pub use types::*;
