//! CLI command implementations.

pub(crate) mod options;
pub(crate) mod render;

pub(crate) use options::OptionsArgs;
pub(crate) use render::RenderArgs;
