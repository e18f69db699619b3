/// Wavefront OBJ loader for vertex and face records
use log::{debug, warn};
use nom::{
    character::complete::{char, i64 as index},
    combinator::{all_consuming, opt, rest},
    number::complete::double,
    sequence::{preceded, terminated},
    IResult,
};
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::geometry::{Face, Mesh, Point3};

/// Load an OBJ file from disk
pub fn load_obj(path: impl AsRef<Path>) -> Result<Mesh> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_obj(&text)
}

/// Parse OBJ text into a mesh.
///
/// Only `v` and `f` records are read; every other tag is skipped so newer
/// files still load. Face indices are checked against the vertex count once
/// the whole file is read, which allows faces to reference vertices declared
/// further down.
pub fn parse_obj(input: &str) -> Result<Mesh> {
    let mut mesh = Mesh::new();
    let mut face_lines = Vec::new();
    let mut truncated = 0usize;

    for (n, raw) in input.lines().enumerate() {
        let line = n + 1;
        let content = match raw.find('#') {
            Some(pos) => &raw[..pos],
            None => raw,
        };
        let mut tokens = content.split_whitespace();

        match tokens.next() {
            Some("v") => {
                mesh.add_vertex(parse_vertex(tokens, line)?);
            }
            Some("f") => {
                let (face, extra) = parse_face(tokens, mesh.vertices.len(), line)?;
                if extra > 0 {
                    truncated += 1;
                }
                mesh.add_face(face);
                face_lines.push(line);
            }
            _ => {}
        }
    }

    let count = mesh.vertices.len();
    for (face, &line) in mesh.faces.iter().zip(&face_lines) {
        if let Some(&bad) = face.indices.iter().find(|&&i| i >= count) {
            return Err(Error::parse(
                line,
                format!(
                    "face references vertex {} but only {} vertices are defined",
                    bad + 1,
                    count
                ),
            ));
        }
    }

    if truncated > 0 {
        warn!(
            "{} faces have more than three vertices; only the first triangle of each is drawn",
            truncated
        );
    }
    debug!(
        "Loaded {} vertices and {} faces",
        mesh.vertices.len(),
        mesh.faces.len()
    );

    Ok(mesh)
}

fn parse_vertex<'a>(mut tokens: impl Iterator<Item = &'a str>, line: usize) -> Result<Point3> {
    let mut coords = [0.0f64; 3];
    for (axis, slot) in coords.iter_mut().enumerate() {
        let token = tokens.next().ok_or_else(|| {
            Error::parse(line, format!("vertex has {} coordinates, expected 3", axis))
        })?;
        *slot = coordinate(token)
            .ok()
            .map(|(_, value)| value)
            .filter(|value| value.is_finite())
            .ok_or_else(|| Error::parse(line, format!("invalid vertex coordinate {:?}", token)))?;
    }
    // Any w or color values that follow are ignored
    Ok(Point3::new(coords[0], coords[1], coords[2]))
}

/// Returns the face and how many indices past the third were dropped.
fn parse_face<'a>(
    tokens: impl Iterator<Item = &'a str>,
    vertex_count: usize,
    line: usize,
) -> Result<(Face, usize)> {
    let mut indices = [0usize; 3];
    let mut seen = 0usize;

    for token in tokens {
        let (_, raw) = face_index(token)
            .map_err(|_| Error::parse(line, format!("invalid face index {:?}", token)))?;
        let resolved = resolve_index(raw, vertex_count)
            .ok_or_else(|| Error::parse(line, format!("face index {} is out of range", raw)))?;
        if seen < 3 {
            indices[seen] = resolved;
        }
        seen += 1;
    }

    if seen < 3 {
        return Err(Error::parse(
            line,
            format!("face has {} vertices, expected at least 3", seen),
        ));
    }

    Ok((Face { indices }, seen - 3))
}

/// Map a 1-based (or negative, relative) OBJ index to a 0-based one.
fn resolve_index(raw: i64, vertex_count: usize) -> Option<usize> {
    if raw > 0 {
        usize::try_from(raw - 1).ok()
    } else if raw < 0 {
        let back = usize::try_from(raw.unsigned_abs()).ok()?;
        vertex_count.checked_sub(back)
    } else {
        None
    }
}

fn coordinate(input: &str) -> IResult<&str, f64> {
    all_consuming(double)(input)
}

/// `idx`, `idx/vt`, `idx//vn` or `idx/vt/vn`; only `idx` is kept.
fn face_index(input: &str) -> IResult<&str, i64> {
    all_consuming(terminated(index, opt(preceded(char('/'), rest))))(input)
}
