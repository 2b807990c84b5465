pub(crate) mod camera;
pub(crate) mod context;
pub(crate) mod frame;
pub(crate) mod settings;
pub(crate) mod state;
