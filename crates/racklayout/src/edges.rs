use glam::Vec3;

/// Line-list vertices for the 12 edges of an axis-aligned box centered on
/// the origin. Every consecutive pair of points is one edge.
pub fn box_edges(size: Vec3) -> Vec<[f32; 3]> {
    let h = size / 2.0;
    let corner = |x: f32, y: f32, z: f32| [x * h.x, y * h.y, z * h.z];

    let mut lines = Vec::with_capacity(24);
    for y in [-1.0, 1.0] {
        // bottom and top rings
        lines.extend_from_slice(&[
            corner(-1.0, y, -1.0),
            corner(1.0, y, -1.0),
            corner(1.0, y, -1.0),
            corner(1.0, y, 1.0),
            corner(1.0, y, 1.0),
            corner(-1.0, y, 1.0),
            corner(-1.0, y, 1.0),
            corner(-1.0, y, -1.0),
        ]);
    }
    for (x, z) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
        lines.push(corner(x, -1.0, z));
        lines.push(corner(x, 1.0, z));
    }
    lines
}
