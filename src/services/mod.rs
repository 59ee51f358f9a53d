pub mod completion;

pub use completion::{CompletionBackend, CompletionError, CompletionPrompt, OpenAiClient};
