mod line;
mod rect;

pub use line::ImplicitLine;
pub use rect::Rect;
