//! Page templates for the HTML front end

mod template;

pub use template::{escape_html, PageTemplate, TemplateError};
