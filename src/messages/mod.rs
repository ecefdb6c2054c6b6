mod render;

pub use render::{escape_html, format_timestamp, render, render_in};
