mod status_bar;
mod wheel;

pub use status_bar::{render_help, render_status};
pub use wheel::render_wheel;
