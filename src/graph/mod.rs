pub mod builder;
pub mod inspect;
pub mod store;

pub use inspect::{EdgeKind, EdgeView, GraphSnapshot, NodeView};
pub use store::{Edge, InteractionGraph, UserNode, VideoNode};
