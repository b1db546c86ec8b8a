/// Tags an entity as driven by local player input
#[derive(Clone, Copy, Default)]
pub struct PlayerInput {
}
