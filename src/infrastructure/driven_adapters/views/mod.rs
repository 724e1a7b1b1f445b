//! View Renderer Adapters

mod html;

pub use html::HtmlViewRenderer;
