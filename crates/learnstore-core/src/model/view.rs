use crate::model::value::ValueType;

///
/// ViewModel
/// Named, parameterizable projection exposed by the store.
///

#[derive(Debug)]
pub struct ViewModel {
    pub name: &'static str,
    pub columns: &'static [ColumnModel],
    pub parameters: &'static [ParameterModel],
}

impl ViewModel {
    #[must_use]
    pub const fn new(
        name: &'static str,
        columns: &'static [ColumnModel],
        parameters: &'static [ParameterModel],
    ) -> Self {
        Self {
            name,
            columns,
            parameters,
        }
    }

    #[must_use]
    pub fn column(&self, name: &str) -> Option<&'static ColumnModel> {
        self.columns.iter().find(|c| c.name == name)
    }

    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<&'static ParameterModel> {
        self.parameters.iter().find(|p| p.name == name)
    }
}

///
/// ColumnModel
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ColumnModel {
    pub name: &'static str,
    pub value_type: ValueType,
}

impl ColumnModel {
    #[must_use]
    pub const fn new(name: &'static str, value_type: ValueType) -> Self {
        Self { name, value_type }
    }
}

///
/// ParameterModel
/// Input to a view or right check.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ParameterModel {
    pub name: &'static str,
    pub value_type: ValueType,
}

impl ParameterModel {
    #[must_use]
    pub const fn new(name: &'static str, value_type: ValueType) -> Self {
        Self { name, value_type }
    }
}
