pub mod grid;
pub mod renderer;

pub use grid::CellGrid;
pub use renderer::Renderer;
