#[macro_use]
mod util;

mod pipeline;
