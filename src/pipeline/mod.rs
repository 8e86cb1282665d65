//! Pipeline stages for Markdown-to-PDF conversion.
//!
//! Each submodule implements exactly one transformation step. Keeping the
//! stages separate makes each independently testable and lets the two
//! render paths share everything up to the HTML fragment.
//!
//! ## Data Flow
//!
//! ```text
//!                        ┌─▶ template ──▶ engine   (Pipeline A: HTML engine)
//! input ──▶ markdown ────┤
//! (path)   (pulldown)    └─▶ flow ──▶ layout       (Pipeline B: flow renderer)
//! ```
//!
//! 1. [`input`]    — validate the path and read the Markdown source
//! 2. [`markdown`] — convert Markdown to an HTML fragment
//! 3. [`template`] — wrap the fragment in a document shell with embedded CSS
//! 4. [`engine`]   — hand the document to weasyprint/wkhtmltopdf
//! 5. [`flow`]     — classify HTML lines into flow elements (the transducer)
//! 6. [`layout`]   — lay the element sequence out into A4 pages via genpdf

pub mod engine;
pub mod flow;
pub mod input;
pub mod layout;
pub mod markdown;
pub mod template;
