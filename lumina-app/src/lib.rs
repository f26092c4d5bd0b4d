//! Application core of the Lumina marketplace front-end.
//!
//! Two stateful pieces live here, wrapped around every page: the locale
//! gate (resolves the URL's locale segment against the active translation
//! language before any child content mounts) and the access gate (keeps
//! private routes behind a live session subscription). Listing pages mount
//! the listing engine, a message/update state machine driven by an async
//! controller against the documents port.
//!
//! Update functions return [`effects::Effect`] values instead of performing
//! I/O; the surrounding shell executes navigations and language changes,
//! and [`domains::listing::ListingController`] executes page fetches.

pub mod domains;
pub mod effects;
pub mod routing;
pub mod shell;

pub use effects::Effect;
pub use shell::Shell;
