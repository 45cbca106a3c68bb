pub mod app;
pub mod theme;
pub mod view;

pub use view::draw;
