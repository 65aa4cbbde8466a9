use crate::graph::{
    gain::{GainParam, GainStage},
    node::GraphNode,
};

pub trait NodeExt: GraphNode + Sized {
    fn gain(self, param: GainParam) -> GainStage<Self> {
        GainStage::new(self, param)
    }
}

impl<T: GraphNode> NodeExt for T {}
