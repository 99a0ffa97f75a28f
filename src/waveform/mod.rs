//! Zoom-dependent waveform rendering.

pub(crate) mod gradient;
pub(crate) mod layers;
pub(crate) mod layout;
pub(crate) mod renderer;
pub(crate) mod view;
