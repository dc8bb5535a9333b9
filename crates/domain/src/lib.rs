pub mod block;
pub mod content;
pub mod model;
pub mod setting;
