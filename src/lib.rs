pub mod context;
pub mod identifier;
pub mod locale;
pub mod options;
pub mod pipeline;
pub mod repair;
pub mod stage;
pub mod testing;

pub use context::Context;
pub use identifier::{Identifier, SlugError};
pub use locale::{ApproxMap, LocaleError, add_approximations};
pub use options::{DEFAULT_MAX_LENGTH, DEFAULT_SEPARATOR, NormalizeOptions, Transliterations};
pub use stage::clean::Clean;
pub use stage::transliterate::Transliterate;
pub use stage::truncate::{Truncate, TruncateBytes};
pub use stage::word_chars::WordChars;
