pub mod render;
pub mod resolver;

pub use render::{RecordingRenderer, RenderStrategy};
pub use resolver::{DetailContent, ItemList, SettingsPanel, resolve};
