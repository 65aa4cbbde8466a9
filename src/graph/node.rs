/// Core trait for audio processing graph nodes
///
/// Nodes render mono blocks on the audio thread. Control values reach them
/// through shared parameters, never through `&mut` calls from the UI side.
pub trait GraphNode: Send {
    fn render_block(&mut self, out: &mut [f32]);

    /// Check if this node is still producing sound
    fn is_active(&self) -> bool {
        true
    }
}

/// Allow boxed graph nodes to be used as graph nodes (for dynamic dispatch)
impl GraphNode for Box<dyn GraphNode> {
    fn render_block(&mut self, out: &mut [f32]) {
        (**self).render_block(out)
    }

    fn is_active(&self) -> bool {
        (**self).is_active()
    }
}
