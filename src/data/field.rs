//! Decoded log fields with their display scaling

use crate::constants::field::{DEFAULT_OFFSET, DEFAULT_ZOOM, NAME_SEPARATOR};
use crate::error::{EngineError, Result};
use crate::series::{Sample, Series, first_unsorted};

/// One decoded field: parallel time/value arrays plus the user's scaling
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSeries {
    name: String,
    times: Vec<f64>,
    values: Vec<f64>,
    zoom: f64,
    offset: f64,
}

impl FieldSeries {
    /// Arrays must have equal length and ascending times
    pub fn new(name: impl Into<String>, times: Vec<f64>, values: Vec<f64>) -> Result<Self> {
        if times.len() != values.len() {
            return Err(EngineError::LengthMismatch {
                times: times.len(),
                values: values.len(),
            });
        }
        if let Some(index) = first_unsorted(times.iter().copied()) {
            return Err(EngineError::UnsortedInput { index });
        }

        Ok(Self {
            name: name.into(),
            times,
            values,
            zoom: DEFAULT_ZOOM,
            offset: DEFAULT_OFFSET,
        })
    }

    /// `"<topic>.<field>"`
    pub fn qualified_name(topic: &str, field: &str) -> String {
        format!("{topic}{NAME_SEPARATOR}{field}")
    }

    pub fn with_scale(mut self, zoom: f64, offset: f64) -> Self {
        self.set_scale(zoom, offset);
        self
    }

    pub fn set_scale(&mut self, zoom: f64, offset: f64) {
        self.zoom = zoom;
        self.offset = offset;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn times(&self) -> &[f64] {
        &self.times
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// First and last timestamp
    pub fn time_range(&self) -> Option<(f64, f64)> {
        Some((*self.times.first()?, *self.times.last()?))
    }

    /// Samples with `v * zoom + offset` applied
    pub fn effective_series(&self) -> Series {
        let (zoom, offset) = (self.zoom, self.offset);
        self.times
            .iter()
            .zip(&self.values)
            .map(|(&t, &v)| Sample::new(t, v * zoom + offset))
            .collect()
    }
}

/// Ordered collection of fields from one opened log
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldSet {
    fields: Vec<FieldSeries>,
}

impl FieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field, replacing any existing field with the same name
    pub fn insert(&mut self, field: FieldSeries) {
        match self.fields.iter_mut().find(|f| f.name == field.name) {
            Some(existing) => *existing = field,
            None => self.fields.push(field),
        }
    }

    pub fn get(&self, name: &str) -> Option<&FieldSeries> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field(&self, name: &str) -> Result<&FieldSeries> {
        self.get(name)
            .ok_or_else(|| EngineError::FieldNotFound(name.to_string()))
    }

    /// Update a field's zoom and offset
    pub fn set_scale(&mut self, name: &str, zoom: f64, offset: f64) -> Result<()> {
        let field = self
            .fields
            .iter_mut()
            .find(|f| f.name == name)
            .ok_or_else(|| EngineError::FieldNotFound(name.to_string()))?;
        field.set_scale(zoom, offset);
        Ok(())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldSeries> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Overall time span across all non-empty fields
    pub fn time_range(&self) -> Option<(f64, f64)> {
        self.fields
            .iter()
            .filter_map(FieldSeries::time_range)
            .reduce(|(lo, hi), (start, end)| (lo.min(start), hi.max(end)))
    }
}

impl FromIterator<FieldSeries> for FieldSet {
    fn from_iter<I: IntoIterator<Item = FieldSeries>>(iter: I) -> Self {
        let mut set = FieldSet::new();
        for field in iter {
            set.insert(field);
        }
        set
    }
}

impl<'a> IntoIterator for &'a FieldSet {
    type Item = &'a FieldSeries;
    type IntoIter = std::slice::Iter<'a, FieldSeries>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
