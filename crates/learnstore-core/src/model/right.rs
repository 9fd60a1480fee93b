use crate::model::view::ParameterModel;

///
/// RightModel
/// Named security right checked by the store before an operation.
///

#[derive(Debug)]
pub struct RightModel {
    pub name: &'static str,
    pub parameters: &'static [ParameterModel],
}

impl RightModel {
    #[must_use]
    pub const fn new(name: &'static str, parameters: &'static [ParameterModel]) -> Self {
        Self { name, parameters }
    }

    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<&'static ParameterModel> {
        self.parameters.iter().find(|p| p.name == name)
    }
}
