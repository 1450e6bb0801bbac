//! # BSP Tree
//!
//! Binary Space Partitioning tree for CSG boolean operations.
//! Based on the csg.js algorithm by Evan Wallace.
//!
//! ## Algorithm
//!
//! Each BSP node contains:
//! - A dividing plane
//! - Polygons coplanar with the plane
//! - Front subtree (polygons in front of plane)
//! - Back subtree (polygons behind plane)
//!
//! ## Stack Safety
//!
//! A tessellated sphere is convex, so every polygon lands behind every
//! other polygon's plane and the tree degenerates into a chain as deep as
//! the polygon count. Nodes therefore live in an arena (`Vec<Node>`) and all
//! traversals use explicit work stacks.

use super::plane::Plane;
use super::polygon::{Polygon, Split};
use super::tolerance::Tolerance;

type NodeId = usize;

const ROOT: NodeId = 0;

#[derive(Debug, Clone, Default)]
struct Node {
    plane: Option<Plane>,
    polygons: Vec<Polygon>,
    front: Option<NodeId>,
    back: Option<NodeId>,
}

/// A BSP tree over a closed polygon soup.
///
/// # Example
///
/// ```rust,ignore
/// let tolerance = Tolerance::for_extent(2.0);
/// let mut tree = BspTree::new(mesh_to_polygons(&mesh, &tolerance), tolerance);
/// tree.invert();
/// let inside_out = tree.into_polygons();
/// ```
#[derive(Debug, Clone)]
pub struct BspTree {
    nodes: Vec<Node>,
    /// Plane slab half-width used for every split.
    epsilon: f64,
}

#[derive(Clone, Copy)]
enum Branch {
    Front,
    Back,
}

impl BspTree {
    /// Creates a new BSP tree from polygons.
    pub fn new(polygons: Vec<Polygon>, tolerance: Tolerance) -> Self {
        let mut tree = Self {
            nodes: vec![Node::default()],
            epsilon: tolerance.plane,
        };
        tree.build(polygons);
        tree
    }

    /// Inserts polygons into the tree, splitting them where needed.
    fn build(&mut self, polygons: Vec<Polygon>) {
        let mut stack: Vec<(NodeId, Vec<Polygon>)> = vec![(ROOT, polygons)];

        while let Some((id, polys)) = stack.pop() {
            let Some(first) = polys.first() else {
                continue;
            };
            let plane = *self.nodes[id].plane.get_or_insert(*first.plane());

            let estimated_size = polys.len() / 2 + 1;
            let mut front_polys = Vec::with_capacity(estimated_size);
            let mut back_polys = Vec::with_capacity(estimated_size);

            for poly in polys {
                match poly.split(&plane, self.epsilon) {
                    Split::CoplanarFront(p) | Split::CoplanarBack(p) => {
                        self.nodes[id].polygons.push(p);
                    }
                    Split::Front(p) => front_polys.push(p),
                    Split::Back(p) => back_polys.push(p),
                    Split::Spanning { front, back } => {
                        front_polys.extend(front);
                        back_polys.extend(back);
                    }
                }
            }

            if !front_polys.is_empty() {
                let child = self.child(id, Branch::Front);
                stack.push((child, front_polys));
            }
            if !back_polys.is_empty() {
                let child = self.child(id, Branch::Back);
                stack.push((child, back_polys));
            }
        }
    }

    /// Returns the child on `branch`, creating an empty node if missing.
    fn child(&mut self, id: NodeId, branch: Branch) -> NodeId {
        let existing = match branch {
            Branch::Front => self.nodes[id].front,
            Branch::Back => self.nodes[id].back,
        };
        if let Some(child) = existing {
            return child;
        }

        let child = self.nodes.len();
        self.nodes.push(Node::default());
        match branch {
            Branch::Front => self.nodes[id].front = Some(child),
            Branch::Back => self.nodes[id].back = Some(child),
        }
        child
    }

    /// Converts solid space to empty space and vice versa.
    pub fn invert(&mut self) {
        for node in &mut self.nodes {
            for poly in &mut node.polygons {
                poly.flip();
            }
            if let Some(plane) = &mut node.plane {
                *plane = plane.flipped();
            }
            std::mem::swap(&mut node.front, &mut node.back);
        }
    }

    /// Removes the parts of `polygons` that are inside the solid this tree
    /// represents.
    pub fn clip_polygons(&self, polygons: Vec<Polygon>) -> Vec<Polygon> {
        let mut result = Vec::new();
        let mut stack: Vec<(NodeId, Vec<Polygon>)> = vec![(ROOT, polygons)];

        while let Some((id, polys)) = stack.pop() {
            if polys.is_empty() {
                continue;
            }

            let node = &self.nodes[id];
            let Some(plane) = node.plane else {
                result.extend(polys);
                continue;
            };

            let mut front_polys = Vec::new();
            let mut back_polys = Vec::new();

            for poly in polys {
                match poly.split(&plane, self.epsilon) {
                    Split::CoplanarFront(p) | Split::Front(p) => front_polys.push(p),
                    Split::CoplanarBack(p) | Split::Back(p) => back_polys.push(p),
                    Split::Spanning { front, back } => {
                        front_polys.extend(front);
                        back_polys.extend(back);
                    }
                }
            }

            match node.front {
                Some(child) => stack.push((child, front_polys)),
                None => result.extend(front_polys),
            }

            // Without a back subtree the back side is solid: discard
            if let Some(child) = node.back {
                stack.push((child, back_polys));
            }
        }

        result
    }

    /// Removes everything in this tree that lies inside `other`.
    pub fn clip_to(&mut self, other: &BspTree) {
        for node in &mut self.nodes {
            let polygons = std::mem::take(&mut node.polygons);
            node.polygons = other.clip_polygons(polygons);
        }
    }

    /// Consumes the tree, returning its polygons.
    pub fn into_polygons(self) -> Vec<Polygon> {
        self.nodes
            .into_iter()
            .flat_map(|node| node.polygons)
            .collect()
    }

    /// Returns the number of polygons in this tree.
    #[cfg(test)]
    pub fn polygon_count(&self) -> usize {
        self.nodes.iter().map(|node| node.polygons.len()).sum()
    }

    /// Returns the depth of this tree.
    #[cfg(test)]
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut stack: Vec<(NodeId, usize)> = vec![(ROOT, 1)];

        while let Some((id, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            let node = &self.nodes[id];
            stack.extend(node.front.map(|child| (child, depth + 1)));
            stack.extend(node.back.map(|child| (child, depth + 1)));
        }

        max_depth
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    fn unit() -> Tolerance {
        Tolerance::for_extent(1.0)
    }

    fn triangle_at_z(z: f64) -> Polygon {
        Polygon::from_vertices(
            vec![
                DVec3::new(0.0, 0.0, z),
                DVec3::new(1.0, 0.0, z),
                DVec3::new(0.0, 1.0, z),
            ],
            &unit(),
        )
        .unwrap()
    }

    #[test]
    fn test_bsp_new_empty() {
        let tree = BspTree::new(vec![], unit());
        assert_eq!(tree.polygon_count(), 0);
        assert_eq!(tree.depth(), 1);
    }

    #[test]
    fn test_bsp_new_multiple() {
        let tree = BspTree::new(
            vec![triangle_at_z(0.0), triangle_at_z(1.0), triangle_at_z(-1.0)],
            unit(),
        );
        assert_eq!(tree.polygon_count(), 3);
        assert_eq!(tree.depth(), 2);
    }

    #[test]
    fn test_bsp_coplanar_polygons_share_node() {
        let tree = BspTree::new(vec![triangle_at_z(0.0), triangle_at_z(0.0)], unit());
        assert_eq!(tree.depth(), 1);
        assert_eq!(tree.polygon_count(), 2);
    }

    #[test]
    fn test_bsp_invert() {
        let mut tree = BspTree::new(vec![triangle_at_z(0.0)], unit());
        tree.invert();
        let normal = tree.into_polygons()[0].plane().normal();
        assert!((normal + DVec3::Z).length() < 1e-12);
    }

    #[test]
    fn test_bsp_clip_polygons_front_survives() {
        let tree = BspTree::new(vec![triangle_at_z(0.0)], unit());
        let result = tree.clip_polygons(vec![triangle_at_z(1.0)]);
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_bsp_clip_polygons_back_removed() {
        let tree = BspTree::new(vec![triangle_at_z(0.0)], unit());
        let result = tree.clip_polygons(vec![triangle_at_z(-1.0)]);
        assert!(result.is_empty());
    }

    #[test]
    fn test_bsp_empty_tree_keeps_everything() {
        let tree = BspTree::new(vec![], unit());
        let result = tree.clip_polygons(vec![triangle_at_z(-1.0), triangle_at_z(1.0)]);
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_bsp_deep_chain_does_not_overflow() {
        // Many parallel planes stacked behind each other form a chain
        let polys: Vec<Polygon> = (0..2_000).map(|i| triangle_at_z(-f64::from(i))).collect();
        let tree = BspTree::new(polys, Tolerance::for_extent(2_000.0));
        assert_eq!(tree.depth(), 2_000);
        assert_eq!(tree.into_polygons().len(), 2_000);
    }
}
