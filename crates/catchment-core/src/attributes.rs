//! Descriptive attributes of catchments or years

use std::collections::HashMap;

use crate::{is_missing, normalize_identifier, Axis, Error, Result};

/// Values of one attribute, typed on construction
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValues {
    /// Real-valued attribute (area, mean discharge, ...)
    Continuous(Vec<Option<f64>>),
    /// Categorical attribute (land use class, geology, ...)
    Categorical(Vec<Option<String>>),
}

impl AttributeValues {
    /// Type raw text cells: continuous when every present cell is numeric
    pub fn infer<S: AsRef<str>>(cells: &[S]) -> Self {
        let numeric: Option<Vec<Option<f64>>> = cells
            .iter()
            .map(|cell| {
                let cell = cell.as_ref();
                if is_missing(cell) {
                    Some(None)
                } else {
                    cell.trim().parse::<f64>().ok().map(Some)
                }
            })
            .collect();

        match numeric {
            Some(values) => Self::Continuous(values),
            None => Self::Categorical(
                cells
                    .iter()
                    .map(|cell| {
                        let cell = cell.as_ref();
                        (!is_missing(cell)).then(|| cell.trim().to_string())
                    })
                    .collect(),
            ),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Continuous(values) => values.len(),
            Self::Categorical(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_continuous(&self) -> bool {
        matches!(self, Self::Continuous(_))
    }
}

/// A named attribute column
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub name: String,
    pub values: AttributeValues,
}

/// Attributes indexed by catchment or year identifier
#[derive(Debug, Clone)]
pub struct AttributesTable {
    axis: Axis,
    ids: Vec<String>,
    positions: HashMap<String, usize>,
    attributes: Vec<Attribute>,
}

impl AttributesTable {
    /// Create a table; identifiers are normalised and must be unique
    pub fn new(axis: Axis, ids: Vec<String>, attributes: Vec<Attribute>) -> Result<Self> {
        let ids: Vec<String> = ids.iter().map(|id| normalize_identifier(id)).collect();
        let mut positions = HashMap::with_capacity(ids.len());
        for (i, id) in ids.iter().enumerate() {
            if positions.insert(id.clone(), i).is_some() {
                return Err(Error::InvalidInput(format!(
                    "duplicate identifier '{id}' in attributes"
                )));
            }
        }
        for attribute in &attributes {
            if attribute.values.len() != ids.len() {
                return Err(Error::size_mismatch(
                    ids.len(),
                    attribute.values.len(),
                    &format!("attribute '{}'", attribute.name),
                ));
            }
        }

        Ok(Self {
            axis,
            ids,
            positions,
            attributes,
        })
    }

    /// Axis the identifiers belong to
    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Attribute by name
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    /// Row position of an identifier (normalised before lookup)
    pub fn position(&self, id: &str) -> Option<usize> {
        self.positions.get(&normalize_identifier(id)).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inference() {
        let continuous = AttributeValues::infer(&["1.5", "nan", " 3 "]);
        assert_eq!(continuous, AttributeValues::Continuous(vec![Some(1.5), None, Some(3.0)]));

        let categorical = AttributeValues::infer(&["forest", "", "7"]);
        assert_eq!(
            categorical,
            AttributeValues::Categorical(vec![Some("forest".into()), None, Some("7".into())])
        );

        // an all-missing column is numeric
        assert!(AttributeValues::infer(&["", "NaN"]).is_continuous());
    }

    #[test]
    fn test_lookup_normalises_identifiers() {
        let table = AttributesTable::new(
            Axis::Catchment,
            vec!["1".into(), "2.0".into()],
            vec![Attribute {
                name: "area".into(),
                values: AttributeValues::Continuous(vec![Some(10.0), Some(20.0)]),
            }],
        )
        .unwrap();

        assert_eq!(table.position("1.0"), Some(0));
        assert_eq!(table.position("2"), Some(1));
        assert_eq!(table.position("3"), None);
        assert!(table.attribute("area").is_some());
        assert!(table.attribute("slope").is_none());
    }

    #[test]
    fn test_rejects_inconsistent_tables() {
        let too_short = AttributesTable::new(
            Axis::Year,
            vec!["1990".into(), "1991".into()],
            vec![Attribute {
                name: "precipitation".into(),
                values: AttributeValues::Continuous(vec![Some(1.0)]),
            }],
        );
        assert!(too_short.is_err());

        let duplicated = AttributesTable::new(Axis::Year, vec!["1990".into(), "1990.0".into()], vec![]);
        assert!(duplicated.is_err());
    }
}
