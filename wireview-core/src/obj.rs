/// Wavefront OBJ loader producing wireframes.
///
/// Reads `v` records as vertices, `l` polylines as consecutive edges and `f`
/// polygons as closed edge loops. Texture and normal references on face
/// indices are ignored, as is every other record type.
use nom::{
    bytes::complete::{take_till, take_till1},
    character::complete::{char, i64, space0, space1},
    combinator::{eof, opt},
    multi::separated_list1,
    number::complete::float,
    sequence::{preceded, terminated},
    IResult,
};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{Error, Result};
use crate::geometry::{Edge, Vertex3D, Wireframe};

/// Read and parse an OBJ file
pub fn load_obj_wireframe(path: impl AsRef<Path>) -> Result<Wireframe> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let wireframe = parse_obj_wireframe(&text)?;
    debug!(
        path = %path.display(),
        vertices = wireframe.vertices.len(),
        edges = wireframe.edges.len(),
        "loaded OBJ wireframe"
    );
    Ok(wireframe)
}

/// Parse OBJ text. Edges are deduplicated ignoring direction, first
/// occurrence wins.
pub fn parse_obj_wireframe(input: &str) -> Result<Wireframe> {
    let mut wireframe = Wireframe::default();
    let mut seen = HashSet::new();

    for (number, raw) in input.lines().enumerate() {
        let line_no = number + 1;
        let line = raw.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }

        let (args, kw) = keyword(line).map_err(|_| parse_error(line_no, "missing keyword"))?;
        match kw {
            "v" => {
                let (_, vertex) = vertex_args(args)
                    .map_err(|_| parse_error(line_no, "expected `v x y z [w]`"))?;
                wireframe.vertices.push(vertex);
            }
            "l" | "f" => {
                let (_, refs) = index_args(args)
                    .map_err(|_| parse_error(line_no, &format!("malformed `{kw}` indices")))?;
                let minimum = if kw == "l" { 2 } else { 3 };
                if refs.len() < minimum {
                    return Err(parse_error(
                        line_no,
                        &format!("`{kw}` needs at least {minimum} indices"),
                    ));
                }

                let count = wireframe.vertices.len();
                let indices = refs
                    .into_iter()
                    .map(|r| resolve_index(r, count).ok_or_else(|| bad_index(line_no, r)))
                    .collect::<Result<Vec<_>>>()?;

                let mut pairs: Vec<(usize, usize)> =
                    indices.windows(2).map(|w| (w[0], w[1])).collect();
                if kw == "f" {
                    pairs.push((indices[indices.len() - 1], indices[0]));
                }

                for (a, b) in pairs {
                    let edge = Edge::new(a, b);
                    if seen.insert(edge.undirected()) {
                        wireframe.edges.push(edge);
                    }
                }
            }
            _ => {}
        }
    }

    Ok(wireframe)
}

fn parse_error(line: usize, message: &str) -> Error {
    Error::Parse {
        line,
        message: message.to_string(),
    }
}

fn bad_index(line: usize, index: i64) -> Error {
    parse_error(line, &format!("index {index} does not refer to a vertex"))
}

/// OBJ indices are 1-based; negatives count back from the last vertex read.
fn resolve_index(index: i64, vertex_count: usize) -> Option<usize> {
    match index {
        0 => None,
        i if i > 0 => usize::try_from(i - 1).ok(),
        i => {
            let back = usize::try_from(i.unsigned_abs()).ok()?;
            vertex_count.checked_sub(back)
        }
    }
}

fn keyword(input: &str) -> IResult<&str, &str> {
    take_till1(|c: char| c.is_whitespace())(input)
}

fn vertex_args(input: &str) -> IResult<&str, Vertex3D> {
    let (input, x) = preceded(space1, float)(input)?;
    let (input, y) = preceded(space1, float)(input)?;
    let (input, z) = preceded(space1, float)(input)?;
    let (input, _w) = opt(preceded(space1, float))(input)?;
    let (input, _) = space0(input)?;
    let (input, _) = eof(input)?;
    Ok((input, Vertex3D::new(x, y, z)))
}

fn index_ref(input: &str) -> IResult<&str, i64> {
    terminated(
        i64,
        opt(preceded(char('/'), take_till(|c: char| c.is_whitespace()))),
    )(input)
}

fn index_args(input: &str) -> IResult<&str, Vec<i64>> {
    let (input, refs) = preceded(space1, separated_list1(space1, index_ref))(input)?;
    let (input, _) = space0(input)?;
    let (input, _) = eof(input)?;
    Ok((input, refs))
}
