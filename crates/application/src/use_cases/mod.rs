//! Use cases

mod generate_grammar_files;

pub use generate_grammar_files::GenerateGrammarFiles;
