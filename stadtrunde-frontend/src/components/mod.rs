mod location_list;
mod map;
mod toolbar;

pub use self::{location_list::*, map::*, toolbar::*};
