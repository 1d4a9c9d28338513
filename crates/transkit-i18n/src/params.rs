//! Message parameters
//!
//! Placeholders are matched literally. A catalog that writes `Hello, %name%!`
//! is filled with a `%name%` parameter; one that writes `Hello, {name}!` with
//! a `{name}` parameter.

/// Ordered placeholder substitutions applied to a translated message
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parameters {
    entries: Vec<(String, String)>,
}

impl Parameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a substitution, builder style
    pub fn with(mut self, placeholder: impl Into<String>, value: impl ToString) -> Self {
        self.insert(placeholder, value);
        self
    }

    /// Add a substitution; a repeated placeholder replaces the earlier value
    pub fn insert(&mut self, placeholder: impl Into<String>, value: impl ToString) {
        let placeholder = placeholder.into();
        let value = value.to_string();

        match self.entries.iter_mut().find(|(p, _)| *p == placeholder) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((placeholder, value)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(p, v)| (p.as_str(), v.as_str()))
    }

    /// Replace every occurrence of each placeholder, in insertion order
    pub fn apply(&self, text: &str) -> String {
        self.entries
            .iter()
            .filter(|(placeholder, _)| !placeholder.is_empty())
            .fold(text.to_string(), |acc, (placeholder, value)| {
                acc.replace(placeholder.as_str(), value)
            })
    }
}

impl<K, V> FromIterator<(K, V)> for Parameters
where
    K: Into<String>,
    V: ToString,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (placeholder, value) in iter {
            params.insert(placeholder, value);
        }
        params
    }
}

/// Macro to create [`Parameters`] more easily
#[macro_export]
macro_rules! params {
    () => {
        $crate::Parameters::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut params = $crate::Parameters::new();
        $(
            params.insert($key, $value);
        )+
        params
    }};
}
