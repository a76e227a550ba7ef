//! Lexsift - legal document analysis using hosted LLM completion.
//!
//! Extracts plain text from PDF, Word (DOCX), and text documents, then runs
//! one of several canned contract analyses against a chat-completion backend.

pub mod analysis;
pub mod cli;
pub mod document;
pub mod extract;
pub mod llm;
