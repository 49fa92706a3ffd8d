use glam::Vec3;
use serde::Serialize;
use std::collections::BTreeMap;

/// One corner of a face: zero-based offsets into the model's arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct VertexRef {
    pub position: usize,
    pub tex_coord: Option<usize>,
    pub normal: Option<usize>,
}

impl VertexRef {
    pub fn new(position: usize, tex_coord: Option<usize>, normal: Option<usize>) -> Self {
        Self {
            position,
            tex_coord,
            normal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Triangle {
    pub a: VertexRef,
    pub b: VertexRef,
    pub c: VertexRef,
    pub material: Option<usize>,
}

impl Triangle {
    pub fn new(a: VertexRef, b: VertexRef, c: VertexRef, material: Option<usize>) -> Self {
        Self { a, b, c, material }
    }

    pub fn corners(&self) -> [VertexRef; 3] {
        [self.a, self.b, self.c]
    }

    pub fn position_indices(&self) -> [usize; 3] {
        [self.a.position, self.b.position, self.c.position]
    }
}

/// A parsed mesh. Only the parser populates it; consumers get read access.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Model {
    pub(crate) positions: Vec<Vec3>,
    pub(crate) tex_coords: Vec<Vec3>,
    pub(crate) normals: Vec<Vec3>,
    pub(crate) triangles: Vec<Triangle>,
    pub(crate) groups: BTreeMap<String, Vec<Triangle>>,
    pub(crate) materials: Vec<String>,
    pub(crate) mtllibs: Vec<String>,
}

impl Model {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn tex_coords(&self) -> &[Vec3] {
        &self.tex_coords
    }

    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn groups(&self) -> &BTreeMap<String, Vec<Triangle>> {
        &self.groups
    }

    /// Triangles of a single group, `None` when the group was never declared.
    pub fn group(&self, name: &str) -> Option<&[Triangle]> {
        self.groups.get(name).map(Vec::as_slice)
    }

    pub fn materials(&self) -> &[String] {
        &self.materials
    }

    pub fn mtllibs(&self) -> &[String] {
        &self.mtllibs
    }

    pub fn material_name(&self, triangle: &Triangle) -> Option<&str> {
        triangle
            .material
            .and_then(|index| self.materials.get(index))
            .map(String::as_str)
    }

    pub fn summary(&self) -> ModelSummary {
        ModelSummary {
            positions: self.positions.len(),
            tex_coords: self.tex_coords.len(),
            normals: self.normals.len(),
            triangles: self.triangles.len(),
            groups: self.groups.len(),
            materials: self.materials.len(),
            mtllibs: self.mtllibs.len(),
        }
    }
}

/// Element counts of a model, for logging and reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModelSummary {
    pub positions: usize,
    pub tex_coords: usize,
    pub normals: usize,
    pub triangles: usize,
    pub groups: usize,
    pub materials: usize,
    pub mtllibs: usize,
}

impl std::fmt::Display for ModelSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} positions, {} tex coords, {} normals, {} triangles, {} groups, {} materials, {} mtllibs",
            self.positions,
            self.tex_coords,
            self.normals,
            self.triangles,
            self.groups,
            self.materials,
            self.mtllibs
        )
    }
}
