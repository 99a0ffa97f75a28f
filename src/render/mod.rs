//! Drawing surfaces the waveform renderer paints onto.

pub(crate) mod cpu;
pub(crate) mod mask;
pub(crate) mod record;
pub(crate) mod surface;
