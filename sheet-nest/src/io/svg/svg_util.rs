use crate::geometry::primitives::{Outline, Point, Rect};
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use svg::node::element::Path;
use svg::node::element::path::Data;

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgDrawOptions {
    ///The theme to use for the svg
    #[serde(default)]
    pub theme: SvgLayoutTheme,
    ///Draw the bounding box of every placed outline
    #[serde(default)]
    pub bounding_boxes: bool,
    ///Write the item id next to every placed outline
    #[serde(default)]
    pub item_ids: bool,
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgLayoutTheme::default(),
            bounding_boxes: false,
            item_ids: true,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgLayoutTheme {
    pub stroke_width_multiplier: f64,
    pub sheet_fill: Color,
    pub item_fill: Color,
    pub segment_stroke: Color,
    pub bbox_stroke: Color,
}

impl Default for SvgLayoutTheme {
    fn default() -> Self {
        SvgLayoutTheme::EARTH_TONES
    }
}

impl SvgLayoutTheme {
    pub const EARTH_TONES: SvgLayoutTheme = SvgLayoutTheme {
        stroke_width_multiplier: 2.0,
        sheet_fill: Color(0xCC, 0x82, 0x4A),
        item_fill: Color(0xFF, 0xC8, 0x79),
        segment_stroke: Color(0x2D, 0x2D, 0x2D),
        bbox_stroke: Color(0x00, 0x00, 0xFF),
    };
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Color(pub u8, pub u8, pub u8);

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl FromStr for Color {
    type Err = std::num::ParseIntError;

    /// Parses `#RRGGBB` (the `#` is optional)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix('#').unwrap_or(s);
        let channel = |i: usize| u8::from_str_radix(s.get(i..i + 2).unwrap_or(""), 16);
        Ok(Color(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<<S as Serializer>::Ok, <S as Serializer>::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{self}"))
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, <D as Deserializer<'de>>::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Color::from_str(&s).map_err(|e| D::Error::custom(format!("invalid color {s:?}: {e}")))
    }
}

/// Connects the points of the outline in order. Closed polylines get a closing segment.
pub fn outline_data(outline: &Outline) -> Data {
    let points = outline.points();
    let data = points[1..]
        .iter()
        .fold(Data::new().move_to(to_f32(points[0])), |d, p| {
            d.line_to(to_f32(*p))
        });
    match outline.is_closed() {
        true => data.close(),
        false => data,
    }
}

pub fn aa_rect_data(rect: Rect) -> Data {
    let [a, b, c, d] = rect.corners();
    Data::new()
        .move_to(to_f32(a))
        .line_to(to_f32(b))
        .line_to(to_f32(c))
        .line_to(to_f32(d))
        .close()
}

fn to_f32(Point(x, y): Point) -> (f32, f32) {
    (x as f32, y as f32)
}

pub fn data_to_path(data: Data, params: &[(&str, &str)]) -> Path {
    let mut path = Path::new();
    for param in params {
        path = path.set(param.0, param.1)
    }
    path.set("d", data)
}
