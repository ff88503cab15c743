//! A `nom`-based decoder for the version 5 `.lines` body.

use super::{DecodeError, SceneDecoder};
use inkpress_types::{DEVICE_WIDTH, Layer, Line, Point, Scene};
use nom::error::{ErrorKind, ParseError};
use nom::multi::count;
use nom::number::complete::{le_f32, le_i32};
use nom::{IResult, Needed, Parser};

const LAYER_MIN_LEN: usize = 4;
const LINE_HEADER_LEN: usize = 24;
const POINT_LEN: usize = 24;

/// Decoder for the fixed-layout `.lines` body used by format version 5.
///
/// The body is little-endian: a layer count, then per layer a line count,
/// then per line `tool, color, reserved, base size, reserved, point count`
/// followed by `x, y, speed, direction, width, pressure` per point.
///
/// Version 5 stores x relative to the left page edge; decoded points are
/// shifted by half the page width so that x is relative to the page's
/// horizontal midpoint, like every other scene.
#[derive(Debug, Clone, Copy)]
pub struct LinesDecoder {
    page_width: f32,
}

impl Default for LinesDecoder {
    fn default() -> Self {
        Self {
            page_width: DEVICE_WIDTH,
        }
    }
}

impl LinesDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page_width(page_width: f32) -> Self {
        Self { page_width }
    }
}

impl SceneDecoder for LinesDecoder {
    fn decode(&self, body: &[u8]) -> Result<Scene, DecodeError> {
        match scene(body, self.page_width / 2.0) {
            Ok((_trailing, scene)) => Ok(scene),
            Err(nom::Err::Error(e) | nom::Err::Failure(e)) => Err(e.into_decode_error(body)),
            Err(nom::Err::Incomplete(needed)) => Err(DecodeError::UnexpectedEof {
                offset: body.len(),
                needed: match needed {
                    Needed::Size(n) => n.get(),
                    Needed::Unknown => 1,
                },
            }),
        }
    }
}

/// Parser error that keeps the input remaining at the failure point, so the
/// body offset can be recovered afterwards.
#[derive(Debug)]
enum BodyError<'a> {
    Eof { input: &'a [u8] },
    Implausible {
        input: &'a [u8],
        what: &'static str,
        count: i32,
    },
}

impl<'a> ParseError<&'a [u8]> for BodyError<'a> {
    fn from_error_kind(input: &'a [u8], _kind: ErrorKind) -> Self {
        BodyError::Eof { input }
    }

    fn append(_input: &'a [u8], _kind: ErrorKind, other: Self) -> Self {
        other
    }
}

impl BodyError<'_> {
    fn into_decode_error(self, body: &[u8]) -> DecodeError {
        match self {
            BodyError::Eof { input } => DecodeError::UnexpectedEof {
                offset: body.len() - input.len(),
                needed: 4usize.saturating_sub(input.len()).max(1),
            },
            BodyError::Implausible { input, what, count } => DecodeError::ImplausibleCount {
                what,
                count: count as i64,
                offset: body.len() - input.len(),
            },
        }
    }
}

type BodyResult<'a, T> = IResult<&'a [u8], T, BodyError<'a>>;

fn word_i32(input: &[u8]) -> BodyResult<'_, i32> {
    le_i32(input)
}

fn word_f32(input: &[u8]) -> BodyResult<'_, f32> {
    le_f32(input)
}

/// An element count, rejected before anything is allocated when the rest of
/// the body could not hold that many elements of at least `min_len` bytes.
fn element_count<'a>(input: &'a [u8], what: &'static str, min_len: usize) -> BodyResult<'a, usize> {
    let (rest, raw) = word_i32(input)?;
    match usize::try_from(raw) {
        Ok(n) if n.saturating_mul(min_len) <= rest.len() => Ok((rest, n)),
        _ => Err(nom::Err::Failure(BodyError::Implausible {
            input,
            what,
            count: raw,
        })),
    }
}

fn scene(input: &[u8], origin_x: f32) -> BodyResult<'_, Scene> {
    let (input, layers) = element_count(input, "layer", LAYER_MIN_LEN)?;
    let (input, layers) = count(layer(origin_x), layers).parse(input)?;
    Ok((input, Scene::new(layers)))
}

fn layer<'a>(origin_x: f32) -> impl FnMut(&'a [u8]) -> BodyResult<'a, Layer> {
    move |input| {
        let (input, lines) = element_count(input, "line", LINE_HEADER_LEN)?;
        let (input, lines) = count(line(origin_x), lines).parse(input)?;
        Ok((input, Layer::new(lines)))
    }
}

fn line<'a>(origin_x: f32) -> impl FnMut(&'a [u8]) -> BodyResult<'a, Line> {
    move |input| {
        let (input, (tool, color, _reserved, _base_size, _reserved2)) =
            (word_i32, word_i32, word_i32, word_f32, word_i32).parse(input)?;
        let (input, points) = element_count(input, "point", POINT_LEN)?;
        let (input, points) = count(point(origin_x), points).parse(input)?;
        Ok((
            input,
            Line {
                tool: tool as u32,
                color: color as u32,
                points,
            },
        ))
    }
}

fn point<'a>(origin_x: f32) -> impl FnMut(&'a [u8]) -> BodyResult<'a, Point> {
    move |input| {
        let (input, (x, y, _speed, _direction, width, pressure)) =
            (word_f32, word_f32, word_f32, word_f32, word_f32, word_f32).parse(input)?;
        Ok((input, Point::new(x - origin_x, y, width, pressure)))
    }
}
