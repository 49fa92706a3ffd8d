use glam::Vec3;
use log::trace;

use crate::assets::models::{Model, Triangle, VertexRef};
use crate::assets::tokenizer::{Directive, Line};
use crate::utils::error::{ParseError, Result};

/// Group a bare `g` line switches to.
pub const DEFAULT_GROUP: &str = "default";

/// Parse state carried from one line to the next.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseState {
    /// Groups named by the latest `g` line, `None` before the first one
    pub active_groups: Option<Vec<String>>,
    /// Material index set by the latest `usemtl`
    pub active_material: Option<usize>,
}

/// Converts a raw 1-based or negative index into a zero-based offset
/// into an array currently holding `len` elements.
///
/// Positive values count from the start, zero and negative values count
/// back from the end. Returns `None` unless the result lands inside `0..len`.
pub fn resolve_index(raw: i64, len: usize) -> Option<usize> {
    let resolved = if raw > 0 { raw - 1 } else { len as i64 + raw };
    usize::try_from(resolved).ok().filter(|&index| index < len)
}

fn parse_index(token: &str, len: usize, line: usize) -> Result<usize> {
    let raw: i64 = token.parse().map_err(|_| ParseError::NumericFormat {
        line,
        token: token.to_string(),
    })?;
    resolve_index(raw, len).ok_or(ParseError::IndexOutOfRange { line, raw, len })
}

fn parse_float(token: &str, line: usize) -> Result<f32> {
    match token.parse::<f32>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ParseError::NumericFormat {
            line,
            token: token.to_string(),
        }),
    }
}

/// Reads up to three floats, requiring at least `required`. Missing trailing
/// components are zero and anything past the third is ignored.
fn parse_vec3(args: &[&str], required: usize, directive: &'static str, line: usize) -> Result<Vec3> {
    if args.len() < required {
        return Err(ParseError::MissingValue {
            line,
            directive,
            expected: required,
            found: args.len(),
        });
    }

    let mut components = [0.0f32; 3];
    for (slot, token) in components.iter_mut().zip(args) {
        *slot = parse_float(token, line)?;
    }
    Ok(Vec3::from_array(components))
}

/// Parses one `v`, `v/vt`, `v//vn` or `v/vt/vn` face corner against the
/// array lengths of `model` at this point of the stream.
pub fn parse_vertex_ref(spec: &str, model: &Model, line: usize) -> Result<VertexRef> {
    let mut parts = spec.split('/');
    let position = parse_index(parts.next().unwrap_or(""), model.positions.len(), line)?;

    let tex_coord = match parts.next() {
        Some(token) if !token.is_empty() => {
            Some(parse_index(token, model.tex_coords.len(), line)?)
        }
        _ => None,
    };

    let normal = match parts.next() {
        Some(token) if !token.is_empty() => Some(parse_index(token, model.normals.len(), line)?),
        _ => None,
    };

    Ok(VertexRef::new(position, tex_coord, normal))
}

/// Splits a convex polygon into triangles fanning out from its first corner.
///
/// A polygon `v0..vn` produces `(v[i-1], v[i], v0)` for `i` in `2..n`. Concave
/// or non-planar polygons still produce `n - 2` triangles, they just won't
/// cover the original shape.
pub fn triangulate(vertices: &[VertexRef], material: Option<usize>) -> Result<Vec<Triangle>> {
    match vertices {
        [] | [_] | [_, _] => Err(ParseError::Triangulation {
            count: vertices.len(),
        }),
        [a, b, c] => Ok(vec![Triangle::new(*a, *b, *c, material)]),
        [pivot, ..] => Ok(vertices
            .windows(2)
            .skip(1)
            .map(|pair| Triangle::new(pair[0], pair[1], *pivot, material))
            .collect()),
    }
}

/// Builds a [`Model`] one line at a time.
///
/// Every handler validates its whole line before touching the model, so a
/// failed [`apply`](ModelBuilder::apply) leaves both model and state as they
/// were before the line.
#[derive(Debug, Default)]
pub struct ModelBuilder {
    model: Model,
    state: ParseState,
}

impl ModelBuilder {
    pub fn new() -> Self {
        Self {
            model: Model::new(),
            state: ParseState::default(),
        }
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn state(&self) -> &ParseState {
        &self.state
    }

    pub fn finish(self) -> Model {
        self.model
    }

    pub fn apply(&mut self, line: &Line<'_>) -> Result<()> {
        match line.directive {
            Directive::Position => {
                let position = parse_vec3(&line.args, 3, "v", line.number)?;
                self.model.positions.push(position);
            }
            Directive::TexCoord => {
                let tex_coord = parse_vec3(&line.args, 2, "vt", line.number)?;
                self.model.tex_coords.push(tex_coord);
            }
            Directive::Normal => {
                let normal = parse_vec3(&line.args, 3, "vn", line.number)?;
                self.model.normals.push(normal);
            }
            Directive::Group => {
                self.state = self.declare_groups(&line.args);
            }
            Directive::UseMaterial => {
                let name = Self::single_name(line, "usemtl")?;
                let index = self.material_index(name);
                self.state.active_material = Some(index);
            }
            Directive::MaterialLibrary => {
                let name = Self::single_name(line, "mtllib")?;
                self.model.mtllibs.push(name.to_string());
            }
            Directive::Face => {
                let triangles = self.face(line)?;
                self.commit(triangles);
            }
            Directive::Ignored(token) => {
                trace!("line {}: skipping '{}'", line.number, token);
            }
        }
        Ok(())
    }

    fn single_name<'a>(line: &Line<'a>, directive: &'static str) -> Result<&'a str> {
        line.args.first().copied().ok_or(ParseError::MissingValue {
            line: line.number,
            directive,
            expected: 1,
            found: 0,
        })
    }

    /// Registers the groups of a `g` line and returns the state that makes
    /// them active. Redeclared groups keep their triangles.
    fn declare_groups(&mut self, names: &[&str]) -> ParseState {
        let mut active: Vec<String> = Vec::with_capacity(names.len().max(1));
        let names = if names.is_empty() { &[DEFAULT_GROUP][..] } else { names };

        for name in names {
            if active.iter().any(|n| n == name) {
                continue;
            }
            self.model.groups.entry(name.to_string()).or_default();
            active.push(name.to_string());
        }

        ParseState {
            active_groups: Some(active),
            active_material: self.state.active_material,
        }
    }

    fn material_index(&mut self, name: &str) -> usize {
        match self.model.materials.iter().position(|m| m == name) {
            Some(index) => index,
            None => {
                self.model.materials.push(name.to_string());
                self.model.materials.len() - 1
            }
        }
    }

    fn face(&self, line: &Line<'_>) -> Result<Vec<Triangle>> {
        if line.args.len() < 3 {
            return Err(ParseError::MalformedFace {
                line: line.number,
                found: line.args.len(),
            });
        }

        let vertices = line
            .args
            .iter()
            .map(|spec| parse_vertex_ref(spec, &self.model, line.number))
            .collect::<Result<Vec<_>>>()?;

        triangulate(&vertices, self.state.active_material)
    }

    fn commit(&mut self, triangles: Vec<Triangle>) {
        if let Some(groups) = &self.state.active_groups {
            for name in groups {
                self.model
                    .groups
                    .entry(name.clone())
                    .or_default()
                    .extend_from_slice(&triangles);
            }
        }
        self.model.triangles.extend(triangles);
    }
}
