use crate::encoding::escape;

/// Value of a single OAuth parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParamValue {
    Single(String),
    /// Repeated key, e.g. `a=1&a=2`.
    List(Vec<String>),
}

impl ParamValue {
    /// Percent-encoded scalar value. Lists have no scalar form and yield `""`.
    pub fn escaped_scalar(&self) -> String {
        match self {
            ParamValue::Single(s) => escape(s),
            ParamValue::List(_) => String::new(),
        }
    }

    /// Raw values in their original order, one element for a scalar.
    pub fn values(&self) -> Vec<&str> {
        match self {
            ParamValue::Single(s) => vec![s.as_str()],
            ParamValue::List(v) => v.iter().map(String::as_str).collect(),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::Single(s.into())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        ParamValue::Single(s)
    }
}

impl From<i64> for ParamValue {
    fn from(n: i64) -> Self {
        ParamValue::Single(n.to_string())
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(v: Vec<String>) -> Self {
        ParamValue::List(v)
    }
}

impl From<Vec<&str>> for ParamValue {
    fn from(v: Vec<&str>) -> Self {
        ParamValue::List(v.into_iter().map(String::from).collect())
    }
}

/// Parameters keyed by name, iterated in insertion order.
///
/// Names are unique: inserting an existing name replaces its value and
/// keeps its original position.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParameterSet {
    entries: Vec<(String, ParamValue)>,
}

impl ParameterSet {
    pub fn new() -> Self {
        ParameterSet {
            entries: Vec::new(),
        }
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some((_, v)) => *v = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Append a value under `name`, turning an existing scalar into a list.
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some((_, v)) => {
                let prev = std::mem::replace(v, ParamValue::List(Vec::new()));
                *v = match prev {
                    ParamValue::Single(s) => ParamValue::List(vec![s, value]),
                    ParamValue::List(mut list) => {
                        list.push(value);
                        ParamValue::List(list)
                    }
                };
            }
            None => self.entries.push((name, ParamValue::Single(value))),
        }
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.entries.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    pub fn remove(&mut self, name: &str) -> Option<ParamValue> {
        let index = self.entries.iter().position(|(k, _)| k == name)?;
        Some(self.entries.remove(index).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K, V> FromIterator<(K, V)> for ParameterSet
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = ParameterSet::new();
        for (k, v) in iter {
            set.insert(k, v);
        }
        set
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_insert_keeps_position() {
        let mut set = ParameterSet::new();
        set.insert("b", "1");
        set.insert("a", "2");
        set.insert("b", "3");
        let names: Vec<&str> = set.iter().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["b", "a"]);
        assert_eq!(set.get("b"), Some(&ParamValue::from("3")));
        assert_eq!(set.iter().count(), 2);
    }

    #[test]
    fn test_append_promotes_to_list() {
        let mut set = ParameterSet::new();
        set.append("tag", "x");
        assert_eq!(set.get("tag"), Some(&ParamValue::Single("x".into())));
        set.append("tag", "y");
        set.append("tag", "z");
        assert_eq!(set.get("tag"), Some(&ParamValue::from(vec!["x", "y", "z"])));
    }

    #[test]
    fn test_remove() {
        let mut set: ParameterSet = vec![("a", "1"), ("b", "2")].into_iter().collect();
        assert_eq!(set.remove("a"), Some(ParamValue::from("1")));
        assert_eq!(set.remove("a"), None);
        assert!(set.get("a").is_none());
        assert!(set.get("b").is_some());
    }

    #[test]
    fn test_escaped_scalar() {
        assert_eq!(ParamValue::from("a b").escaped_scalar(), "a%20b");
        assert_eq!(ParamValue::from(0i64).escaped_scalar(), "0");
        assert_eq!(ParamValue::from("").escaped_scalar(), "");
        assert_eq!(ParamValue::from(vec!["a", "b"]).escaped_scalar(), "");
    }
}
