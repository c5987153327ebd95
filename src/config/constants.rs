//! Configuration constants.
//!
//! Endpoints, model parameters and the fixed console strings used by the
//! interactive session.

/// Base endpoint of the geolocation service. The address is appended as the
/// final path segment.
pub const GEO_API_BASE_URL: &str = "http://ip-api.com/json";

/// Base endpoint of the chat-completion service.
pub const OPENAI_API_BASE_URL: &str = "https://api.openai.com/v1";

/// Path of the chat-completion endpoint, relative to the API base.
pub const CHAT_COMPLETIONS_PATH: &str = "chat/completions";

pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

pub const DEFAULT_USER_AGENT: &str = concat!("cyber_scan_x/", env!("CARGO_PKG_VERSION"));

/// Map link template. `{lat}` and `{lon}` are substituted verbatim.
pub const MAPS_URL_TEMPLATE: &str = "https://www.google.com/maps?q={lat},{lon}";

/// Value shown for any field the geolocation service did not return.
pub const MISSING_MARKER: &str = "N/A";

/// Answer to the continue prompt that starts another analysis.
pub const AFFIRMATIVE_TOKEN: &str = "o";

/// Status value the geolocation service uses for a successful lookup.
pub const GEO_STATUS_SUCCESS: &str = "success";

// Console layout
pub const RULE_WIDTH: usize = 60;

pub const PROMPT_ADDRESS: &str = "🔍 Entrez une adresse IP à analyser : ";
pub const PROMPT_CONTINUE: &str = "🔁 Voulez-vous analyser une autre adresse IP ? (o/n) : ";
pub const MSG_INVALID_ADDRESS: &str = "❌ Adresse IP invalide. Réessaie avec une adresse correcte.";
pub const MSG_FAREWELL: &str = "🙏 Merci d’avoir utilisé CYBER SCAN X. À bientôt !";
