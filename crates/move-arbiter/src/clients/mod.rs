pub mod completion;

pub use completion::CompletionClient;
