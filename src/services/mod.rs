// Shelfmark services
// Services drive the external record store: submission, deletion, settings.

pub mod deleter;
pub mod settings;
pub mod submitter;
