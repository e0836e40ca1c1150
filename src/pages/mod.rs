// Landing page routes

mod home;
mod visualizer;

pub use home::HomePage;
pub use visualizer::VisualizerPage;
