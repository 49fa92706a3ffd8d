use log::debug;

use crate::assets::builder::ModelBuilder;
use crate::assets::models::Model;
use crate::assets::tokenizer::tokenize;
use crate::utils::error::Result;

/// Parses OBJ source text into a triangulated [`Model`].
///
/// The first error aborts the parse; no partial model is returned.
pub fn parse_obj(text: &str) -> Result<Model> {
    let builder = tokenize(text).try_fold(ModelBuilder::new(), |mut builder, line| {
        builder.apply(&line)?;
        Ok(builder)
    })?;

    let model = builder.finish();
    debug!("Parsed model: {}", model.summary());
    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::models::VertexRef;
    use crate::utils::error::ParseError;
    use glam::Vec3;

    const TRIANGLE: &str = "v 0 0 0\nv 1 0 0\nv 0 1 0\n";

    #[test]
    fn test_single_triangle() {
        let model = parse_obj(&format!("{TRIANGLE}f 1 2 3\n")).unwrap();

        assert_eq!(model.triangles().len(), 1);
        let tri = model.triangles()[0];
        assert_eq!(tri.position_indices(), [0, 1, 2]);
        for corner in tri.corners() {
            assert_eq!(corner.tex_coord, None);
            assert_eq!(corner.normal, None);
        }
        assert_eq!(tri.material, None);
        assert!(model.groups().is_empty());
    }

    #[test]
    fn test_face_order_is_kept() {
        let model = parse_obj(&format!("{TRIANGLE}f 3 1 2\n")).unwrap();
        assert_eq!(model.triangles()[0].position_indices(), [2, 0, 1]);
    }

    #[test]
    fn test_normals_without_tex_coords() {
        let text = format!("{TRIANGLE}vn 0 0 1\nvn 0 0 1\nvn 0 0 1\nf 1//1 2//2 3//3\n");
        let model = parse_obj(&text).unwrap();
        let tri = model.triangles()[0];

        assert_eq!(tri.a, VertexRef::new(0, None, Some(0)));
        assert_eq!(tri.b, VertexRef::new(1, None, Some(1)));
        assert_eq!(tri.c, VertexRef::new(2, None, Some(2)));
    }

    #[test]
    fn test_polygon_fans() {
        for n in 4..=6usize {
            let mut text = String::new();
            for i in 0..n {
                text.push_str(&format!("v {} {} 0\n", i, i * i));
            }
            let spec: Vec<String> = (1..=n).map(|i| i.to_string()).collect();
            text.push_str(&format!("f {}\n", spec.join(" ")));

            let model = parse_obj(&text).unwrap();
            assert_eq!(model.triangles().len(), n - 2);
            for (tri, i) in model.triangles().iter().zip(2..n) {
                assert_eq!(tri.position_indices(), [i - 1, i, 0]);
            }
        }
    }

    #[test]
    fn test_group_membership() {
        let text = format!("{TRIANGLE}g A B\nf 1 2 3\nf 3 2 1\ng C\nf 1 3 2\n");
        let model = parse_obj(&text).unwrap();
        let tris = model.triangles();

        assert_eq!(tris.len(), 3);
        assert_eq!(model.group("A").unwrap(), &tris[..2]);
        assert_eq!(model.group("B").unwrap(), &tris[..2]);
        assert_eq!(model.group("C").unwrap(), &tris[2..]);
        assert_eq!(model.group("D"), None);
    }

    #[test]
    fn test_faces_before_any_group_belong_to_none() {
        let text = format!("{TRIANGLE}f 1 2 3\ng\nf 1 2 3\n");
        let model = parse_obj(&text).unwrap();

        assert_eq!(model.triangles().len(), 2);
        assert_eq!(model.groups().len(), 1);
        assert_eq!(model.group("default").map(|g| g.len()), Some(1));
    }

    #[test]
    fn test_material_indices() {
        let text = format!(
            "{TRIANGLE}usemtl wood\nf 1 2 3\nusemtl glass\nf 1 2 3\nusemtl wood\nf 1 2 3\nusemtl Wood\n"
        );
        let model = parse_obj(&text).unwrap();

        assert_eq!(model.materials(), &["wood", "glass", "Wood"]);
        let used: Vec<_> = model.triangles().iter().map(|t| t.material).collect();
        assert_eq!(used, vec![Some(0), Some(1), Some(0)]);
        assert_eq!(model.material_name(&model.triangles()[2]), Some("wood"));
    }

    #[test]
    fn test_fan_triangles_share_material() {
        let text = "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nusemtl stone\nf 1 2 3 4\n";
        let model = parse_obj(text).unwrap();
        assert!(model.triangles().iter().all(|t| t.material == Some(0)));
    }

    #[test]
    fn test_mtllibs_are_kept_verbatim() {
        let model = parse_obj("mtllib a.mtl\nmtllib b.mtl\nmtllib a.mtl\n").unwrap();
        assert_eq!(model.mtllibs(), &["a.mtl", "b.mtl", "a.mtl"]);
    }

    #[test]
    fn test_unknown_directives_are_ignored() {
        let text = format!(
            "# comment\no thing\ns 1\n{TRIANGLE}l 1 2\ncurv 0 1 1 2\nf 1 2 3\n"
        );
        let model = parse_obj(&text).unwrap();

        assert_eq!(model.positions().len(), 3);
        assert_eq!(model.triangles().len(), 1);
    }

    #[test]
    fn test_arrays_are_populated() {
        let text = "v 1 2 3\nvt 0.5 0.5\nvn 0 1 0\n";
        let model = parse_obj(text).unwrap();

        assert_eq!(model.positions(), &[Vec3::new(1.0, 2.0, 3.0)]);
        assert_eq!(model.tex_coords(), &[Vec3::new(0.5, 0.5, 0.0)]);
        assert_eq!(model.normals(), &[Vec3::Y]);
    }

    #[test]
    fn test_two_vertex_face_is_malformed() {
        let text = format!("{TRIANGLE}f 1 2 3\nf 1 2\n");
        assert_eq!(
            parse_obj(&text),
            Err(ParseError::MalformedFace { line: 5, found: 2 })
        );
    }

    #[test]
    fn test_first_error_aborts() {
        let text = format!("{TRIANGLE}v 1 oops 0\nf 1 2\n");
        assert!(matches!(
            parse_obj(&text),
            Err(ParseError::NumericFormat { line: 4, ref token }) if token == "oops"
        ));
    }

    #[test]
    fn test_empty_input() {
        let model = parse_obj("").unwrap();
        assert_eq!(model, Model::default());
    }
}
