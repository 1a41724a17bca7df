//! Minimal reader and writer for the `ENTITIES` section of ASCII DXF documents.

use crate::geometry::primitives::Point;
use log::debug;
use std::path::{Path, PathBuf};

/// Layer assigned to entities that do not specify one
pub const DEFAULT_LAYER: &str = "0";

#[derive(Debug, thiserror::Error)]
pub enum DxfError {
    #[error("DXF I/O error for {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("DXF parse error: expected an even number of lines (code/value pairs)")]
    OddNumberOfLines,
    #[error("DXF parse error: invalid group code {raw:?} at line {line}")]
    InvalidGroupCode { raw: String, line: usize },
    #[error("DXF parse error: missing ENTITIES section")]
    MissingEntitiesSection,
    #[error("DXF parse error: unexpected end of file while parsing {context}")]
    UnexpectedEof { context: &'static str },
    #[error("DXF parse error: missing required group code {code} for entity {entity}")]
    MissingRequiredGroup { entity: &'static str, code: i32 },
    #[error("DXF parse error: invalid float {raw:?} for group code {code} in entity {entity}")]
    InvalidFloat {
        entity: &'static str,
        code: i32,
        raw: String,
    },
    #[error("DXF parse error: invalid integer {raw:?} for group code {code} in entity {entity}")]
    InvalidInteger {
        entity: &'static str,
        code: i32,
        raw: String,
    },
    #[error("DXF parse error: {entity} declares {declared} vertices (group code 90) but lists {found}")]
    VertexCountMismatch {
        entity: &'static str,
        declared: usize,
        found: usize,
    },
    #[error("DXF parse error: non-finite value {raw:?} for group code {code} in entity {entity}")]
    NonFinite {
        entity: &'static str,
        code: i32,
        raw: String,
    },
}

/// Entities of a DXF document, in document order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dxf {
    pub entities: Vec<Entity>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
    Line(Line),
    LwPolyline(LwPolyline),
    Unsupported(Unsupported),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Unsupported {
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub layer: String,
    pub start: Point,
    pub end: Point,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LwPolyline {
    pub layer: String,
    pub vertices: Vec<Point>,
    /// Value of group code 70, bit 1 marks a closed polyline
    pub flags: i32,
}

#[derive(Debug, Clone, Copy)]
struct Group<'a> {
    code: i32,
    value: &'a str,
}

impl Dxf {
    pub fn parse_str(input: &str) -> Result<Self, DxfError> {
        let groups = parse_groups(input)?;
        let entities = parse_entities(&groups)?;
        Ok(Self { entities })
    }

    pub fn parse_file(path: impl AsRef<Path>) -> Result<Self, DxfError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| DxfError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse_str(&raw)
    }

    /// Writes the entities as a document consisting of a single `ENTITIES` section.
    /// Unsupported entities are not written.
    pub fn to_dxf_string(&self) -> String {
        let mut out = String::new();
        push_pair(&mut out, 0, "SECTION");
        push_pair(&mut out, 2, "ENTITIES");
        for entity in &self.entities {
            match entity {
                Entity::Line(line) => {
                    push_pair(&mut out, 0, "LINE");
                    push_pair(&mut out, 8, &line.layer);
                    push_pair_f64(&mut out, 10, line.start.0);
                    push_pair_f64(&mut out, 20, line.start.1);
                    push_pair_f64(&mut out, 11, line.end.0);
                    push_pair_f64(&mut out, 21, line.end.1);
                }
                Entity::LwPolyline(pl) => {
                    push_pair(&mut out, 0, "LWPOLYLINE");
                    push_pair(&mut out, 8, &pl.layer);
                    push_pair(&mut out, 90, pl.vertices.len().to_string());
                    push_pair(&mut out, 70, pl.flags.to_string());
                    for v in &pl.vertices {
                        push_pair_f64(&mut out, 10, v.0);
                        push_pair_f64(&mut out, 20, v.1);
                    }
                }
                Entity::Unsupported(u) => {
                    debug!("[DXF] not writing unsupported entity {}", u.kind);
                }
            }
        }
        push_pair(&mut out, 0, "ENDSEC");
        push_pair(&mut out, 0, "EOF");
        out
    }
}

fn push_pair(out: &mut String, code: i32, value: impl AsRef<str>) {
    out.push_str(&code.to_string());
    out.push('\n');
    out.push_str(value.as_ref());
    out.push('\n');
}

/// Shortest representation that parses back to the identical value
fn push_pair_f64(out: &mut String, code: i32, value: f64) {
    let mut buf = ryu::Buffer::new();
    push_pair(out, code, buf.format(value));
}

/// Splits the document into code/value pairs, up to and including the `0/EOF` group.
/// Anything after `EOF` is ignored, as is a single blank line left over at the end.
fn parse_groups(input: &str) -> Result<Vec<Group<'_>>, DxfError> {
    let lines: Vec<&str> = input.lines().collect();
    let mut groups = Vec::with_capacity(lines.len() / 2);

    for (i, pair) in lines.chunks(2).enumerate() {
        let [code_line, value_line] = pair else {
            match pair[0].trim().is_empty() {
                true => break,
                false => return Err(DxfError::OddNumberOfLines),
            }
        };
        let code_raw = code_line.trim();
        let code = code_raw.parse().map_err(|_| DxfError::InvalidGroupCode {
            raw: code_raw.to_string(),
            line: 2 * i + 1,
        })?;
        let group = Group {
            code,
            value: value_line.trim(),
        };
        groups.push(group);
        if group.code == 0 && group.value == "EOF" {
            break;
        }
    }
    Ok(groups)
}

fn parse_entities(groups: &[Group<'_>]) -> Result<Vec<Entity>, DxfError> {
    let mut i = 0usize;
    let mut in_entities = false;
    let mut saw_entities_section = false;
    let mut entities: Vec<Entity> = Vec::new();

    while i < groups.len() {
        let g = groups[i];
        if g.code == 0 && g.value == "SECTION" {
            i += 1;
            let Some(name_g) = groups.get(i) else {
                return Err(DxfError::UnexpectedEof {
                    context: "SECTION name",
                });
            };
            if name_g.code == 2 && name_g.value == "ENTITIES" {
                in_entities = true;
                saw_entities_section = true;
            }
            i += 1;
            continue;
        }

        if in_entities && g.code == 0 {
            if g.value == "ENDSEC" {
                in_entities = false;
                i += 1;
                continue;
            }
            let kind = g.value;
            i += 1;
            let start = i;
            //every entity runs until the next 0-group
            while i < groups.len() && groups[i].code != 0 {
                i += 1;
            }
            entities.push(parse_entity(kind, &groups[start..i])?);
            continue;
        }

        i += 1;
    }

    match saw_entities_section {
        true => Ok(entities),
        false => Err(DxfError::MissingEntitiesSection),
    }
}

fn parse_entity(kind: &str, groups: &[Group<'_>]) -> Result<Entity, DxfError> {
    match kind {
        "LINE" => Ok(Entity::Line(parse_line(groups)?)),
        "LWPOLYLINE" => Ok(Entity::LwPolyline(parse_lwpolyline(groups)?)),
        other => Ok(Entity::Unsupported(Unsupported {
            kind: other.to_string(),
        })),
    }
}

fn parse_layer(groups: &[Group<'_>]) -> String {
    groups
        .iter()
        .find(|g| g.code == 8)
        .map_or(DEFAULT_LAYER, |g| g.value)
        .to_string()
}

fn parse_line(groups: &[Group<'_>]) -> Result<Line, DxfError> {
    let entity = "LINE";
    let x1 = get_f64(entity, groups, 10)?;
    let y1 = get_f64(entity, groups, 20)?;
    let x2 = get_f64(entity, groups, 11)?;
    let y2 = get_f64(entity, groups, 21)?;
    Ok(Line {
        layer: parse_layer(groups),
        start: Point(x1, y1),
        end: Point(x2, y2),
    })
}

fn parse_lwpolyline(groups: &[Group<'_>]) -> Result<LwPolyline, DxfError> {
    let entity = "LWPOLYLINE";
    let mut flags = 0;
    let mut declared: Option<usize> = None;
    let mut vertices: Vec<Point> = Vec::new();
    let mut last_x: Option<f64> = None;

    for g in groups {
        match g.code {
            70 => flags = parse_int(entity, 70, g.value)?,
            90 => declared = Some(parse_int(entity, 90, g.value)?),
            10 => {
                if last_x.is_some() {
                    return Err(DxfError::MissingRequiredGroup { entity, code: 20 });
                }
                last_x = Some(parse_f64(entity, 10, g.value)?);
            }
            20 => {
                let Some(x) = last_x.take() else {
                    return Err(DxfError::MissingRequiredGroup { entity, code: 10 });
                };
                let y = parse_f64(entity, 20, g.value)?;
                vertices.push(Point(x, y));
            }
            _ => {}
        }
    }
    if last_x.is_some() {
        return Err(DxfError::MissingRequiredGroup { entity, code: 20 });
    }
    match declared {
        Some(declared) if declared != vertices.len() => {
            return Err(DxfError::VertexCountMismatch {
                entity,
                declared,
                found: vertices.len(),
            });
        }
        _ => {}
    }

    Ok(LwPolyline {
        layer: parse_layer(groups),
        vertices,
        flags,
    })
}

fn get_f64(entity: &'static str, groups: &[Group<'_>], code: i32) -> Result<f64, DxfError> {
    let Some(g) = groups.iter().find(|g| g.code == code) else {
        return Err(DxfError::MissingRequiredGroup { entity, code });
    };
    parse_f64(entity, code, g.value)
}

fn parse_int<T: std::str::FromStr>(
    entity: &'static str,
    code: i32,
    raw: &str,
) -> Result<T, DxfError> {
    raw.trim().parse().map_err(|_| DxfError::InvalidInteger {
        entity,
        code,
        raw: raw.to_string(),
    })
}

fn parse_f64(entity: &'static str, code: i32, raw: &str) -> Result<f64, DxfError> {
    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| DxfError::InvalidFloat {
            entity,
            code,
            raw: raw.to_string(),
        })?;
    match value.is_finite() {
        true => Ok(value),
        false => Err(DxfError::NonFinite {
            entity,
            code,
            raw: raw.to_string(),
        }),
    }
}
