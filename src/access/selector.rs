/// Identifies one column of a [`crate::Table`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColumnSelector {
    /// 1-based column position.
    Ordinal(usize),
    /// Column name; case-insensitive matching folds ASCII letters only.
    Name { name: String, case_sensitive: bool },
}

impl ColumnSelector {
    /// Name selector with explicit case sensitivity.
    pub fn name(name: impl Into<String>, case_sensitive: bool) -> Self {
        Self::Name {
            name: name.into(),
            case_sensitive,
        }
    }
}

impl From<usize> for ColumnSelector {
    fn from(ordinal: usize) -> Self {
        Self::Ordinal(ordinal)
    }
}

/// Plain names match case-insensitively.
impl From<&str> for ColumnSelector {
    fn from(name: &str) -> Self {
        Self::name(name, false)
    }
}

impl From<String> for ColumnSelector {
    fn from(name: String) -> Self {
        Self::name(name, false)
    }
}

impl From<&String> for ColumnSelector {
    fn from(name: &String) -> Self {
        Self::name(name.as_str(), false)
    }
}

#[cfg(test)]
mod tests {
    use super::ColumnSelector;

    #[test]
    fn conversions() {
        assert_eq!(ColumnSelector::from(2_usize), ColumnSelector::Ordinal(2));
        assert_eq!(
            ColumnSelector::from("Note"),
            ColumnSelector::Name {
                name: "Note".into(),
                case_sensitive: false
            }
        );
        let owned = String::from("x");
        assert_eq!(ColumnSelector::from(&owned), ColumnSelector::from(owned));
    }
}
