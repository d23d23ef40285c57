// Resume parsing: document text in, structured record out.
// Extraction lives in `extraction`; remote calls go through `llm_client`.

pub mod handlers;
pub mod prompts;
pub mod sanitizer;
