//! Bodygraph diagram rendering.
//!
//! [`render`] lays a classified chart out on a fixed canvas and returns a
//! [`Diagram`] of drawing primitives; [`Diagram::to_svg`] serializes it.
//! Layout depends only on static tables; chart data only picks colors.

pub mod anchor;
pub mod diagram;
pub mod geometry;
pub mod hub;
pub mod render;
pub mod style;

pub use anchor::{ANCHORS, GateAnchor, LABEL_INSET_PX, anchor, anchor_point};
pub use diagram::{Diagram, Primitive};
pub use geometry::{CANVAS_HEIGHT, CANVAS_WIDTH, CenterShape, Point, SHAPES, ShapeKind, shape};
pub use hub::{HUB_GATES, HubLayout, is_hub_channel};
pub use render::render;
pub use style::DiagramStyle;
