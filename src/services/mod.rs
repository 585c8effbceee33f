// CozyTab services
// Services provide stateless or single-record functionality: settings, URL resolution,
// persistence, the clock, quick links.

pub mod clock;
pub mod persistence;
pub mod quick_links;
pub mod settings_engine;
pub mod url_resolver;
