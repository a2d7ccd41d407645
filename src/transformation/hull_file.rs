//! Loaders for the plain-text `.hull` formats.
//!
//! A single convex segment is stored as:
//!
//! ```text
//! vertex_count triangle_count
//! x y z          (vertex_count lines)
//! i j k          (triangle_count lines, 0-based, counter-clock-wise)
//! ```
//!
//! The multi-segment variant is the `.obj`-like export of a convex decomposition tool. It
//! always holds [`SEGMENTS_PER_FILE`] segments and looks like:
//!
//! ```text
//! (10 header lines)
//! (per segment:)
//! (1 ignored line)
//! # convex hull 0 with 4 vertices and 4 triangles
//! (1 ignored line)
//! v x y z        (vertex_count lines)
//! f i j k        (triangle_count lines, indices counted from the first vertex of the file)
//! ```

use crate::math::{Point, Real};
use crate::shape::{ConvexSegment, ConvexSegmentError};
use core::str::FromStr;
use std::io::BufRead;

/// The number of segments in a multi-segment hull file.
pub const SEGMENTS_PER_FILE: usize = 32;

const MULTI_SEGMENT_HEADER_LINES: usize = 10;
const VERTEX_COUNT_TOKEN: usize = 5;
const TRIANGLE_COUNT_TOKEN: usize = 8;

/// Errors raised while reading a hull file.
///
/// Line numbers start at 1.
#[derive(thiserror::Error, Debug)]
pub enum HullFileError {
    /// The underlying reader failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// The file ended before the expected data was read.
    #[error("unexpected end of file at line {line}")]
    UnexpectedEof {
        /// The line that could not be read.
        line: usize,
    },
    /// A line has fewer fields than expected.
    #[error("line {line}: expected at least {expected} fields")]
    MissingField {
        /// The offending line.
        line: usize,
        /// The minimum number of whitespace-separated fields.
        expected: usize,
    },
    /// A field could not be parsed as a number.
    #[error("line {line}: invalid number `{token}`")]
    InvalidNumber {
        /// The offending line.
        line: usize,
        /// The field that failed to parse.
        token: String,
    },
    /// A face index, once made relative to its segment, is negative.
    #[error("line {line}: vertex index {index} lies before the first vertex of its segment")]
    IndexOutOfBounds {
        /// The offending line.
        line: usize,
        /// The index as written in the file.
        index: i64,
    },
    /// The segment read is inconsistent.
    #[error(transparent)]
    InvalidSegment(#[from] ConvexSegmentError),
}

struct LineReader<R> {
    lines: std::io::Lines<R>,
    line: usize,
}

impl<R: BufRead> LineReader<R> {
    fn new(reader: R) -> Self {
        LineReader {
            lines: reader.lines(),
            line: 0,
        }
    }

    fn next_line(&mut self) -> Result<String, HullFileError> {
        self.line += 1;
        match self.lines.next() {
            Some(line) => Ok(line?),
            None => Err(HullFileError::UnexpectedEof { line: self.line }),
        }
    }

    fn skip(&mut self, count: usize) -> Result<(), HullFileError> {
        for _ in 0..count {
            let _ = self.next_line()?;
        }
        Ok(())
    }

    // Reads a line and parses `N` numbers from its whitespace-separated fields, skipping the
    // first `offset` fields.
    fn next_numbers<T: FromStr + Copy + Default, const N: usize>(
        &mut self,
        offset: usize,
    ) -> Result<[T; N], HullFileError> {
        let line = self.next_line()?;
        parse_fields(&line, self.line, offset)
    }
}

fn parse_field<T: FromStr>(token: &str, line: usize) -> Result<T, HullFileError> {
    token.parse().map_err(|_| HullFileError::InvalidNumber {
        line,
        token: token.to_string(),
    })
}

fn parse_fields<T: FromStr + Copy + Default, const N: usize>(
    text: &str,
    line: usize,
    offset: usize,
) -> Result<[T; N], HullFileError> {
    let mut tokens = text.split_whitespace().skip(offset);
    let mut result = [T::default(); N];

    for value in &mut result {
        let token = tokens.next().ok_or(HullFileError::MissingField {
            line,
            expected: offset + N,
        })?;
        *value = parse_field(token, line)?;
    }

    Ok(result)
}

fn read_vertices<R: BufRead>(
    reader: &mut LineReader<R>,
    count: usize,
    offset: usize,
) -> Result<Vec<Point<Real>>, HullFileError> {
    (0..count)
        .map(|_| reader.next_numbers::<Real, 3>(offset).map(Point::from))
        .collect()
}

// Face indices are made relative to the segment by subtracting `first_vertex`.
fn read_faces<R: BufRead>(
    reader: &mut LineReader<R>,
    count: usize,
    offset: usize,
    first_vertex: usize,
) -> Result<Vec<[u32; 3]>, HullFileError> {
    (0..count)
        .map(|_| {
            let idx = reader.next_numbers::<i64, 3>(offset)?;
            let mut face = [0; 3];
            for (rebased, index) in face.iter_mut().zip(idx) {
                *rebased = u32::try_from(index - first_vertex as i64).map_err(|_| {
                    HullFileError::IndexOutOfBounds {
                        line: reader.line,
                        index,
                    }
                })?;
            }
            Ok(face)
        })
        .collect()
}

/// Reads a single convex segment.
///
/// The first line holds the vertex and triangle counts. Lines past the last triangle are
/// ignored.
pub fn load_convex_segment(reader: impl BufRead) -> Result<ConvexSegment, HullFileError> {
    let mut reader = LineReader::new(reader);
    let [vertex_count, triangle_count] = reader.next_numbers::<usize, 2>(0)?;
    let vertices = read_vertices(&mut reader, vertex_count, 0)?;
    let faces = read_faces(&mut reader, triangle_count, 0, 0)?;
    Ok(ConvexSegment::new(vertices, faces)?)
}

/// Reads the [`SEGMENTS_PER_FILE`] convex segments of a convex decomposition export.
pub fn load_convex_segments(reader: impl BufRead) -> Result<Vec<ConvexSegment>, HullFileError> {
    let mut reader = LineReader::new(reader);
    let mut vertices_so_far = 0;
    let mut segments = Vec::with_capacity(SEGMENTS_PER_FILE);

    reader.skip(MULTI_SEGMENT_HEADER_LINES)?;

    for _ in 0..SEGMENTS_PER_FILE {
        reader.skip(1)?;

        let header = reader.next_line()?;
        let tokens: Vec<_> = header.split_whitespace().collect();
        let count = |i: usize| -> Result<usize, HullFileError> {
            let token = tokens.get(i).ok_or(HullFileError::MissingField {
                line: reader.line,
                expected: i + 1,
            })?;
            parse_field(token, reader.line)
        };
        let vertex_count = count(VERTEX_COUNT_TOKEN)?;
        let triangle_count = count(TRIANGLE_COUNT_TOKEN)?;

        reader.skip(1)?;

        let vertices = read_vertices(&mut reader, vertex_count, 1)?;
        let faces = read_faces(&mut reader, triangle_count, 1, vertices_so_far)?;
        vertices_so_far += vertices.len();

        segments.push(ConvexSegment::new(vertices, faces)?);
    }

    log::debug!(
        "loaded {} convex segments with {} vertices",
        segments.len(),
        vertices_so_far
    );

    Ok(segments)
}
