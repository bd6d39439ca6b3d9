// Resume tailoring pipeline.
// Flow: load inputs → assemble prompt → one completion call → split → write.
// The completion call goes through llm_client; nothing here talks HTTP.

pub mod loader;
pub mod output;
pub mod pipeline;
pub mod prompt_builder;
pub mod splitter;
