//! Output formats for a [`Link`].
//!
//! Every format implements [`Generator`]. The URL based ones are stateless unit
//! structs, [`Ics`] carries its options.

use crate::Link;

pub mod ics;
pub use ics::{
    Ics, IcsFormat, IcsOption, IcsOptions, IcsPresentation, LineEnding, Reminder, Trigger,
};

mod deeplink;
pub use deeplink::{Google, WebOffice, WebOutlook, Yahoo};

/// Renders a [`Link`] as text.
///
/// Implementations never modify the link. Rendering the same link twice gives the
/// same output, except for values an implementation generates on purpose.
pub trait Generator {
    fn generate(&self, link: &Link) -> String;
}
