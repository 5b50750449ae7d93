mod document;

pub use document::render_document;
