mod common;
mod dimensions;
