use bevy::prelude::States;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub(crate) enum FrameLoopState {
    /// Startup assets are still loading; nothing is drawn by the frame sets.
    #[default]
    Idle,
    Running,
}
