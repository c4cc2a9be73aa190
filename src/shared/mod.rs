//! Layer-übergreifende Typen und reine Funktionen.

pub mod corridor_geometry;
pub mod options;
pub mod render_scene;

pub use corridor_geometry::{
    build_corridor_polygon, distance_point_to_polyline, distance_point_to_segment,
};
pub use hit_test::{hit_test_corridor, hit_test_rect, CorridorHandle, RectHandle};
pub use options::EditorOptions;
pub use render_scene::{MarkerShape, PolygonShape, PolylineShape, RectShape, RenderScene};
