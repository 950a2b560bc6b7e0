mod all;
mod confirm;
mod footer;
mod header;
mod log;
mod modal;
mod records;
mod search;

use self::log::log;
use super::*;
use confirm::confirm_delete;
use footer::footer;
use header::header;
use modal::modal;
use records::records;
use search::search;

pub use all::all as render;
