#[macro_use]
mod util;

mod attr;
mod color;
mod descriptors;
mod timer;
mod widgets;
