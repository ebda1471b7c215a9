use common_enums::FieldValueType;
use serde::{Deserialize, Serialize};

/// One configurable checkout field as declared by a connector.
///
/// The field set of a connector is fixed at construction; only
/// `default_value` changes, and only while a schema is being prepared for
/// rendering.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Public identifier, unique within a connector's schema.
    pub code: String,
    /// Gateway-specific wire name.
    pub internal_code: String,
    /// Human-readable display text.
    pub label: String,
    pub value_type: FieldValueType,
    pub internal_type: FieldValueType,
    /// Pre-fill value, set during form preparation.
    pub default_value: String,
    pub required: bool,
    /// Collected but not rendered to the shopper when `false`.
    pub public: bool,
}

impl FieldSpec {
    pub fn new(
        code: impl Into<String>,
        internal_code: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            internal_code: internal_code.into(),
            label: label.into(),
            value_type: FieldValueType::Text,
            internal_type: FieldValueType::Text,
            default_value: String::new(),
            required: false,
            public: true,
        }
    }

    pub fn value_types(mut self, value_type: FieldValueType, internal_type: FieldValueType) -> Self {
        self.value_type = value_type;
        self.internal_type = internal_type;
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Marks the field as collected but not rendered.
    pub fn hidden(mut self) -> Self {
        self.public = false;
        self
    }
}

/// Ordered set of [`FieldSpec`]s keyed by their public code.
///
/// Variants compose by laying their entries over a base schema with
/// [`FieldSchema::extend`]; an entry with an already-present code replaces
/// the original in place, keeping the original position.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldSchema {
    fields: Vec<FieldSpec>,
}

impl FieldSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, spec: FieldSpec) -> &mut Self {
        match self.fields.iter_mut().find(|field| field.code == spec.code) {
            Some(existing) => *existing = spec,
            None => self.fields.push(spec),
        }
        self
    }

    pub fn extend(&mut self, specs: impl IntoIterator<Item = FieldSpec>) -> &mut Self {
        for spec in specs {
            self.set(spec);
        }
        self
    }

    pub fn get(&self, code: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|field| field.code == code)
    }

    pub fn get_mut(&mut self, code: &str) -> Option<&mut FieldSpec> {
        self.fields.iter_mut().find(|field| field.code == code)
    }

    pub fn set_default(&mut self, code: &str, value: impl Into<String>) -> &mut Self {
        if let Some(field) = self.get_mut(code) {
            field.default_value = value.into();
        }
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter()
    }

    pub fn into_fields(self) -> Vec<FieldSpec> {
        self.fields
    }
}

impl FromIterator<FieldSpec> for FieldSchema {
    fn from_iter<I: IntoIterator<Item = FieldSpec>>(iter: I) -> Self {
        let mut schema = Self::new();
        schema.extend(iter);
        schema
    }
}

/// The frozen output handed to the checkout page for rendering.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentForm {
    values: Vec<FieldSpec>,
}

impl PaymentForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_value(&mut self, code: impl Into<String>, mut spec: FieldSpec) -> &mut Self {
        spec.code = code.into();
        match self.values.iter_mut().find(|field| field.code == spec.code) {
            Some(existing) => *existing = spec,
            None => self.values.push(spec),
        }
        self
    }

    pub fn value(&self, code: &str) -> Option<&FieldSpec> {
        self.values.iter().find(|field| field.code == code)
    }

    pub fn values(&self) -> impl Iterator<Item = &FieldSpec> {
        self.values.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
