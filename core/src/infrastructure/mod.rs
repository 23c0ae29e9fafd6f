pub mod llm;
pub mod preferences;
pub mod screen;
