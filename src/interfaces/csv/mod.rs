pub mod processor_reader;
pub mod recommendation_writer;
