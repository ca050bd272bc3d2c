//! Terminal front end for the scripture art gallery.

pub mod logging;
pub mod session;
pub mod summary;
