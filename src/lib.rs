pub mod canvas;
pub mod font;
pub mod icon_gen;
pub mod manifest;
pub mod options;
