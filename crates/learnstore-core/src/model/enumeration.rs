///
/// EnumModel
/// Named set of integer-valued members stored in `Enumeration` columns.
///

#[derive(Debug)]
pub struct EnumModel {
    pub name: &'static str,
    pub values: &'static [EnumValueModel],
}

impl EnumModel {
    #[must_use]
    pub const fn new(name: &'static str, values: &'static [EnumValueModel]) -> Self {
        Self { name, values }
    }

    #[must_use]
    pub fn value_of(&self, member: &str) -> Option<i32> {
        self.values.iter().find(|v| v.name == member).map(|v| v.value)
    }

    #[must_use]
    pub fn name_of(&self, value: i32) -> Option<&'static str> {
        self.values.iter().find(|v| v.value == value).map(|v| v.name)
    }
}

///
/// EnumValueModel
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EnumValueModel {
    pub name: &'static str,
    pub value: i32,
}

impl EnumValueModel {
    #[must_use]
    pub const fn new(name: &'static str, value: i32) -> Self {
        Self { name, value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static VALUES: [EnumValueModel; 3] = [
        EnumValueModel::new("Unknown", 0),
        EnumValueModel::new("Failed", 1),
        EnumValueModel::new("Passed", 2),
    ];

    static SUCCESS: EnumModel = EnumModel::new("SuccessStatus", &VALUES);

    #[test]
    fn members_map_both_ways() {
        assert_eq!(SUCCESS.value_of("Passed"), Some(2));
        assert_eq!(SUCCESS.name_of(1), Some("Failed"));
        assert_eq!(SUCCESS.value_of("passed"), None);
        assert_eq!(SUCCESS.name_of(9), None);
    }
}
