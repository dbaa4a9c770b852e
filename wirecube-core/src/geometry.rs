/// Line geometry for wireframe rendering
use nalgebra::Point3;

/// Components per vertex in the uploaded position array (x, y, z)
pub const POSITION_COMPONENTS: usize = 3;

/// A line segment between two endpoints
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub endpoints: [Point3<f32>; 2],
}

impl Segment {
    pub fn new(a: [f32; 3], b: [f32; 3]) -> Self {
        Self {
            endpoints: [Point3::from(a), Point3::from(b)],
        }
    }
}

/// A wireframe mesh drawn as a line list
#[derive(Debug, Clone, Default)]
pub struct LineMesh {
    pub segments: Vec<Segment>,
}

impl LineMesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            segments: Vec::with_capacity(capacity),
        }
    }

    pub fn add_segment(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    /// The 12 edges of an axis-aligned cube centred on the origin.
    ///
    /// Front loop, back loop, then the four edges joining them.
    pub fn cube(size: f32) -> Self {
        let h = size / 2.0;
        let mut mesh = Self::with_capacity(12);

        // Front face
        mesh.add_segment(Segment::new([-h, -h, h], [h, -h, h]));
        mesh.add_segment(Segment::new([h, -h, h], [h, h, h]));
        mesh.add_segment(Segment::new([h, h, h], [-h, h, h]));
        mesh.add_segment(Segment::new([-h, h, h], [-h, -h, h]));

        // Back face
        mesh.add_segment(Segment::new([-h, -h, -h], [-h, h, -h]));
        mesh.add_segment(Segment::new([-h, h, -h], [h, h, -h]));
        mesh.add_segment(Segment::new([h, h, -h], [h, -h, -h]));
        mesh.add_segment(Segment::new([h, -h, -h], [-h, -h, -h]));

        // Sides
        mesh.add_segment(Segment::new([-h, h, -h], [-h, h, h]));
        mesh.add_segment(Segment::new([h, h, h], [h, h, -h]));
        mesh.add_segment(Segment::new([h, -h, -h], [h, -h, h]));
        mesh.add_segment(Segment::new([-h, -h, h], [-h, -h, -h]));

        mesh
    }

    /// Flatten the segments into the `x, y, z` array handed to the GPU
    pub fn positions(&self) -> Vec<f32> {
        self.segments
            .iter()
            .flat_map(|segment| segment.endpoints.iter())
            .flat_map(|point| [point.x, point.y, point.z])
            .collect()
    }

    pub fn vertex_count(&self) -> usize {
        self.segments.len() * 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_positions_layout() {
        let mesh = LineMesh::cube(2.0);
        let positions = mesh.positions();
        assert_eq!(positions.len(), mesh.vertex_count() * POSITION_COMPONENTS);
        assert_eq!(&positions[..6], &[-1.0, -1.0, 1.0, 1.0, -1.0, 1.0]);
        assert_eq!(&positions[positions.len() - 3..], &[-1.0, -1.0, -1.0]);
    }

    #[test]
    fn test_cube_covers_all_twelve_edges() {
        let mesh = LineMesh::cube(2.0);
        let mut edges: Vec<[[i32; 3]; 2]> = mesh
            .segments
            .iter()
            .map(|s| {
                let mut e = s.endpoints.map(|p| [p.x as i32, p.y as i32, p.z as i32]);
                e.sort();
                e
            })
            .collect();
        edges.sort();
        edges.dedup();
        assert_eq!(edges.len(), 12);
        assert_eq!(mesh.segments.len(), 12);
        for [a, b] in edges {
            let differing = (0..3).filter(|&i| a[i] != b[i]).count();
            assert_eq!(differing, 1, "edge {a:?}-{b:?} is not axis aligned");
        }
    }

    #[test]
    fn test_cube_vertex_count() {
        let mesh = LineMesh::cube(2.0);
        assert_eq!(mesh.vertex_count(), 24);
        assert_eq!(mesh.positions().len(), 72);
    }

    #[test]
    fn test_cube_scales_with_size() {
        let mesh = LineMesh::cube(4.0);
        assert!(mesh.positions().iter().all(|c| c.abs() == 2.0));
    }
}
