pub mod abbrev;
pub mod annotate;
pub mod dict;
pub mod features;
pub mod function_words;
pub mod gloss;
pub mod pipeline;
pub mod pos;
pub mod resolver;
pub mod segmenter;
pub mod settings;

#[cfg(test)]
mod tests;
