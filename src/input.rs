/// Turns a held button into a press pulse that is true only on the frame it goes down
#[derive(Clone, Copy, Default)]
pub struct ButtonEdge {
    prev_down: bool,
}

impl ButtonEdge {
    pub fn new() -> ButtonEdge {
        ButtonEdge::default()
    }

    /// Feeds this frame's button level, returns whether it was pressed this frame
    pub fn update(&mut self, down: bool) -> bool {
        let pressed = down && !self.prev_down;
        self.prev_down = down;
        pressed
    }
}
