use bevy::asset::RenderAssetUsages;
use bevy::math::Vec3;
use bevy::mesh::{Mesh, PrimitiveTopology};
use racklayout::edges::box_edges;

/// Line-list mesh tracing the edges of a box, used as a rack outline.
pub fn outline_mesh(size: Vec3) -> Mesh {
    let mut mesh = Mesh::new(PrimitiveTopology::LineList, RenderAssetUsages::default());
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, box_edges(size));
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outline_mesh_has_one_vertex_pair_per_edge() {
        let mesh = outline_mesh(Vec3::new(1.0, 2.0, 1.0));
        assert_eq!(mesh.primitive_topology(), PrimitiveTopology::LineList);
        assert_eq!(mesh.count_vertices(), 24);
        assert!(mesh.indices().is_none());
    }
}
