use std::{io::Read, path::Path};

use anyhow::Context;
use nalgebra::Point2;

use crate::{misc::ConfigurationError, point_set::PointSet};

/// Reads points from delimited text, one point per record.
/// The first two fields of each record are the x and y coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DelimitedPointReader {
    delimiter: u8,
    has_headers: bool,
}

impl Default for DelimitedPointReader {
    fn default() -> Self {
        Self {
            delimiter: b' ',
            has_headers: false,
        }
    }
}

impl DelimitedPointReader {
    pub fn new(delimiter: u8) -> Self {
        Self {
            delimiter,
            ..Default::default()
        }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_headers(mut self, has_headers: bool) -> Self {
        self.has_headers = has_headers;
        self
    }

    pub fn read_path<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<PointSet<f64>> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .with_context(|| format!("Failed to open {}", path.display()))?;
        self.read(file)
            .with_context(|| format!("Failed to read points from {}", path.display()))
    }

    /// Parse points from any reader.
    ///
    /// # Example
    /// ```
    /// use darbellay::prelude::DelimitedPointReader;
    ///
    /// let text = "0.5 1.0\n\n2.0 3.5\n";
    /// let points = DelimitedPointReader::default().read(text.as_bytes()).unwrap();
    /// assert_eq!(points.len(), 2);
    /// assert_eq!(points.point(1).y, 3.5);
    /// ```
    pub fn read<R: Read>(&self, reader: R) -> anyhow::Result<PointSet<f64>> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(self.has_headers)
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let mut points = vec![];
        for (row, record) in reader.records().enumerate() {
            let record = record.with_context(|| format!("Malformed record {}", row + 1))?;
            let fields = record
                .iter()
                .filter(|f| !f.is_empty())
                .map(|f| {
                    f.parse::<f64>()
                        .with_context(|| format!("Invalid number {:?} in record {}", f, row + 1))
                })
                .collect::<anyhow::Result<Vec<_>>>()?;
            match fields.as_slice() {
                [] => continue,
                [x, y] => points.push(Point2::new(*x, *y)),
                other => return Err(ConfigurationError::InvalidDimension(other.len()).into()),
            }
        }

        PointSet::try_new(points)
    }
}
