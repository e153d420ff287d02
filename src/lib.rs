const VALUE_DELIMITER: char = ':';
const PARAM_DELIMITER: char = ';';
const PARAM_NAME_DELIMITER: char = '=';

mod error;
pub use error::LinkError;

mod link;
pub use link::Link;

pub mod generator;
pub use generator::{Generator, Ics, IcsOptions, IcsPresentation, Reminder};

pub mod types;
