use std::collections::HashMap;

/// Attribute taking one of a fixed, ordered set of labels.
#[derive(Debug, Clone, PartialEq)]
pub struct NominalAttribute {
    pub name: String,
    pub values: Vec<String>,
    pub label_to_index: HashMap<String, usize>,
}

impl NominalAttribute {
    pub fn new<N, I, V>(name: N, values: I) -> NominalAttribute
    where
        N: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        let label_to_index = values
            .iter()
            .enumerate()
            .map(|(i, v)| (v.clone(), i))
            .collect();
        NominalAttribute {
            name: name.into(),
            values,
            label_to_index,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn num_values(&self) -> usize {
        self.values.len()
    }

    pub fn index_of_value(&self, value: &str) -> Option<usize> {
        self.label_to_index.get(value).copied()
    }

    pub fn value(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexes_follow_declaration_order() {
        let att = NominalAttribute::new("outlook", ["sunny", "overcast", "rain"]);
        assert_eq!(att.name(), "outlook");
        assert_eq!(att.num_values(), 3);
        assert_eq!(att.index_of_value("overcast"), Some(1));
        assert_eq!(att.index_of_value("snow"), None);
        assert_eq!(att.value(2), Some("rain"));
        assert_eq!(att.value(3), None);
    }
}
