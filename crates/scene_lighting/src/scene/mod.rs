//! Scene-side building blocks lights are composed from
//!
//! Scene graph traversal lives outside this crate. Objects carry a
//! `TransformComponent` and the graph pushes parent world transforms into it.

mod transform;

pub use transform::{rotation_towards, TransformComponent};
