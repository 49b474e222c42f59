mod error;
mod health;
mod location;
mod records;

pub use error::AppError;
#[cfg(test)]
pub use error::FAILURE_MESSAGE;
pub use health::livez;
pub use location::get_location;
pub use records::{get_businesses, get_events, get_movies, get_weather};
