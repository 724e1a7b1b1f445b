//! View Renderer Gateway
//!
//! Turns a view name and a mapping of named values into markup.

use serde_json::Value;

use crate::shared::errors::RenderError;

/// Port for producing page markup
pub trait ViewRenderer: Send + Sync {
    /// Render `view` with `context`, which is a JSON object
    ///
    /// # Errors
    ///
    /// Returns `RenderError` if the view is unknown or the context lacks a
    /// value the view requires.
    fn render(&self, view: &str, context: &Value) -> Result<String, RenderError>;
}
